use genie_config::ENV_PREFIX;

const SECTIONS: &[(&str, &str)] = &[
    ("GENERAL", "PERSIST_SESSION"),
    ("SERVER", "PORT"),
    ("EXPORT", "FORMAT"),
];

/// Emit warnings for env var keys figment will silently ignore.
pub fn warn_misnamed_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for (section, example) in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        if env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{single}* env vars are ignored. Use double underscores (example: {double}{example})."
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_env_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_sections() {
        let warnings = collect_env_warnings(env(&[
            "SPECGENIE_SERVER_PORT",
            "SPECGENIE_EXPORT_FORMAT",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("SPECGENIE_SERVER__PORT"));
        assert!(warnings[1].contains("SPECGENIE_EXPORT__FORMAT"));
    }

    #[test]
    fn does_not_warn_for_correct_or_unrelated_keys() {
        let warnings = collect_env_warnings(env(&[
            "SPECGENIE_SERVER__PORT",
            "SPECGENIE_GENERAL__PERSIST_SESSION",
            "SPECGENIE_LOG",
            "PATH",
        ]));

        assert!(warnings.is_empty());
    }
}
