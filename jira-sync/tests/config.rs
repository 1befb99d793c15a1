use std::path::PathBuf;

use jira_sync::{load_settings, read_settings, ConfigError};

const ENV_VARS: [&str; 5] = [
    "GITLAB_URL",
    "GITLAB_TOKEN",
    "JIRA_URL",
    "JIRA_USERNAME",
    "JIRA_PASSWORD",
];

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/settings")
        .join(name)
}

#[test]
fn read_complete_settings_fixture() {
    let settings = read_settings(&fixture("complete.toml")).unwrap();

    assert_eq!(settings.gitlab_url, "https://gitlab.example.com");
    assert_eq!(settings.gitlab_token, "glpat-fixture");
    assert_eq!(settings.jira_url, "https://jira.example.com");
    assert_eq!(settings.jira_username, "sync-bot");
    assert_eq!(settings.custom_fields.epic, "customfield_20001");
    assert_eq!(settings.custom_fields.account, "customfield_20002");
    assert!(settings.validate().is_ok());
}

#[test]
fn minimal_settings_fall_back_to_defaults() {
    let settings = read_settings(&fixture("minimal.toml")).unwrap();

    assert_eq!(settings.gitlab_url, "https://gitlab.com");
    assert_eq!(settings.custom_fields.epic, "customfield_10006");
    assert_eq!(settings.custom_fields.account, "customfield_10011");
    assert!(settings.validate().is_ok());
}

#[test]
fn broken_settings_fixture_is_a_toml_error() {
    let result = read_settings(&fixture("broken.toml"));

    assert!(matches!(result, Err(ConfigError::TomlError { .. })));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let result = load_settings(Some(&fixture("does-not-exist.toml")));

    assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
}

#[test]
fn environment_overrides_file() {
    temp_env::with_vars_unset(ENV_VARS, || {
        temp_env::with_vars(
            [
                ("JIRA_URL", Some("https://jira.internal.example.com")),
                ("JIRA_PASSWORD", Some("from-env")),
            ],
            || {
                let settings = load_settings(Some(&fixture("complete.toml"))).unwrap();

                assert_eq!(settings.jira_url, "https://jira.internal.example.com");
                assert_eq!(settings.jira_password, "from-env");
                assert_eq!(settings.gitlab_token, "glpat-fixture");
            },
        );
    });
}

#[test]
fn settings_from_environment_only() {
    let home = tempfile::tempdir().unwrap();
    temp_env::with_vars_unset(ENV_VARS, || {
        temp_env::with_vars(
            [
                ("HOME", Some(home.path().to_str().unwrap())),
                ("GITLAB_TOKEN", Some("glpat-env")),
                ("JIRA_URL", Some("https://jira.example.com")),
            ],
            || {
                let settings = load_settings(None).unwrap();

                assert_eq!(settings.gitlab_token, "glpat-env");
                assert_eq!(settings.gitlab_url, "https://gitlab.com");
                assert!(settings.validate().is_ok());
            },
        );
    });
}

#[test]
fn missing_token_is_a_validation_error() {
    let home = tempfile::tempdir().unwrap();
    temp_env::with_vars_unset(ENV_VARS, || {
        temp_env::with_var("HOME", Some(home.path()), || {
            let settings = load_settings(None).unwrap();

            assert!(matches!(
                settings.validate(),
                Err(ConfigError::ValidationError { .. })
            ));
        });
    });
}
