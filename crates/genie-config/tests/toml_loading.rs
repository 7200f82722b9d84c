//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use genie_config::{ConfigError, GenieConfig};

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080
open_browser = true
max_body_bytes = 1024
max_sessions = 16
"#,
        )?;

        let config: GenieConfig = Figment::from(Serialized::defaults(GenieConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.open_browser);
        assert_eq!(config.server.max_body_bytes, 1024);
        assert_eq!(config.server.max_sessions, 16);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
format = "text"
"#,
        )?;

        let config: GenieConfig = Figment::from(Serialized::defaults(GenieConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.export.format, "text");
        assert_eq!(config.export.file_name, "specgenie_user_stories.pdf");
        assert_eq!(config.server.port, 5000);
        assert!(config.general.persist_session);
        Ok(())
    });
}

#[test]
fn project_config_is_read_from_project_dir() {
    Jail::expect_with(|jail| {
        jail.create_dir(".specgenie")?;
        jail.create_file(
            ".specgenie/config.toml",
            r#"
[general]
persist_session = false

[export]
file_name = "stories.pdf"
"#,
        )?;

        let config = GenieConfig::load().expect("config loads");
        assert!(!config.general.persist_session);
        assert_eq!(config.export.file_name, "stories.pdf");
        Ok(())
    });
}

#[test]
fn load_for_uses_explicit_project_root() {
    Jail::expect_with(|jail| {
        jail.create_dir("nested/.specgenie")?;
        jail.create_file(
            "nested/.specgenie/config.toml",
            r#"
[server]
port = 7000
"#,
        )?;

        let root = jail.directory().join("nested");
        let config = GenieConfig::load_for(Some(&root)).expect("config loads");
        assert_eq!(config.server.port, 7000);

        let default = GenieConfig::load().expect("config loads");
        assert_eq!(default.server.port, 5000);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".specgenie")?;
        jail.create_file(
            ".specgenie/config.toml",
            r#"
[export]
format = "docx"
"#,
        )?;

        let err = GenieConfig::load().expect_err("docx is not a valid format");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "export.format"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".specgenie")?;
        jail.create_file(".specgenie/config.toml", "[server\nport = ")?;

        let err = GenieConfig::load().expect_err("malformed toml should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
