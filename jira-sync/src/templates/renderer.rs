//! Jira description renderer.

use crate::config::DescriptionMode;
use crate::gitlab::SourceIssue;
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// Name the description template is registered under.
const DESCRIPTION_TEMPLATE: &str = "description";

/// Jira wiki-markup body wrapped around every synced GitLab description.
pub const DESCRIPTION_TEMPLATE_SOURCE: &str = include_str!("description.hbs");

/// Section headers of the rendered description, in order.
pub const SECTION_HEADERS: [&str; 5] = [
    "h3. Story",
    "h3. Full description",
    "h3. Completion criteria",
    "h3. Documentation updates & improvements criteria",
    "h3. Review timeline",
];

/// Creates a Handlebars registry configured for Jira markup.
///
/// - No HTML escaping (GitLab markdown passes through verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping, Jira markup is not HTML
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders Jira ticket descriptions from GitLab issues.
pub struct DescriptionRenderer {
    handlebars: Handlebars<'static>,
}

impl DescriptionRenderer {
    /// Creates a renderer with the description template registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to parse.
    pub fn new() -> Result<Self, super::TemplateError> {
        Self::from_template(DESCRIPTION_TEMPLATE_SOURCE)
    }

    /// Creates a renderer around a different description template.
    pub(crate) fn from_template(source: &str) -> Result<Self, super::TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(DESCRIPTION_TEMPLATE, source)?;
        Ok(Self { handlebars })
    }

    /// Produces the description for the Jira ticket of `issue`.
    ///
    /// In [`DescriptionMode::Link`] this is the issue URL verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error only if the template itself is broken.
    pub fn render(
        &self,
        issue: &SourceIssue,
        mode: DescriptionMode,
    ) -> Result<String, super::TemplateError> {
        match mode {
            DescriptionMode::Link => Ok(issue.web_url.clone()),
            DescriptionMode::Rendered => {
                let data = json!({
                    "description": issue.description,
                    "gitlab_url": issue.web_url,
                });
                Ok(self.handlebars.render(DESCRIPTION_TEMPLATE, &data)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> SourceIssue {
        SourceIssue {
            iid: 3,
            title: "Fix bug".to_string(),
            description: "Crash on load".to_string(),
            web_url: "https://x/y/3".to_string(),
            labels: vec![],
        }
    }

    #[test]
    fn link_mode_returns_url_verbatim() {
        let renderer = DescriptionRenderer::new().unwrap();
        let body = renderer
            .render(&sample_issue(), DescriptionMode::Link)
            .unwrap();
        assert_eq!(body, "https://x/y/3");
    }

    #[test]
    fn rendered_mode_embeds_description_and_url_once() {
        let renderer = DescriptionRenderer::new().unwrap();
        let body = renderer
            .render(&sample_issue(), DescriptionMode::Rendered)
            .unwrap();

        assert_eq!(body.matches("Crash on load").count(), 1);
        assert_eq!(body.matches("https://x/y/3").count(), 1);
        assert!(body.contains("[description from GitLab|https://x/y/3]"));
        assert!(body.contains("For newcomers"));
    }

    #[test]
    fn rendered_mode_keeps_headers_in_order() {
        let renderer = DescriptionRenderer::new().unwrap();
        let body = renderer
            .render(&sample_issue(), DescriptionMode::Rendered)
            .unwrap();

        let positions: Vec<usize> = SECTION_HEADERS
            .iter()
            .map(|header| body.find(header).expect("header present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn no_html_escaping() {
        let renderer = DescriptionRenderer::new().unwrap();
        let mut issue = sample_issue();
        issue.description = "<b>Tom & Jerry</b> {{not a tag}}".to_string();

        let body = renderer.render(&issue, DescriptionMode::Rendered).unwrap();

        assert!(body.contains("<b>Tom & Jerry</b> {{not a tag}}"));
    }

    #[test]
    fn strict_mode_rejects_unknown_variables() {
        let renderer = DescriptionRenderer::from_template("{{assignee}}").unwrap();
        let result = renderer.render(&sample_issue(), DescriptionMode::Rendered);
        assert!(matches!(result, Err(super::super::TemplateError::RenderError(_))));
    }

    #[test]
    fn empty_description_still_renders() {
        let renderer = DescriptionRenderer::new().unwrap();
        let mut issue = sample_issue();
        issue.description = String::new();

        let body = renderer.render(&issue, DescriptionMode::Rendered).unwrap();

        assert!(body.contains("h3. Review timeline"));
    }
}
