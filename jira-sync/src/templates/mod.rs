//! Jira description rendering using Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{
    create_handlebars_registry, DescriptionRenderer, DESCRIPTION_TEMPLATE_SOURCE, SECTION_HEADERS,
};
