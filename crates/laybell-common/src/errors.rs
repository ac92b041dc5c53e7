use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("Unknown profile '{name}'. Available: {}", format_available(.available))]
    UnknownProfile { name: String, available: Vec<String> },

    #[error("{}", .0.join("\n"))]
    InvalidConfig(Vec<String>),

    #[error("derived keys form a cycle: {}", .0.join(" -> "))]
    DerivationCycle(Vec<String>),

    #[error("config write error: {0}")]
    WriteError(String),
}

impl ConfigError {
    /// Individual issues carried by an `InvalidConfig`, in the order found.
    ///
    /// Every other variant yields an empty slice.
    pub fn issues(&self) -> &[String] {
        match self {
            ConfigError::InvalidConfig(issues) => issues,
            _ => &[],
        }
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaybellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::WriteError("disk full".into());
        assert_eq!(err.to_string(), "config write error: disk full");
    }

    #[test]
    fn unknown_profile_lists_available_names() {
        let err = ConfigError::UnknownProfile {
            name: "30mm".into(),
            available: vec!["12mm".into(), "22mm".into()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown profile '30mm'. Available: 12mm, 22mm"
        );
    }

    #[test]
    fn unknown_profile_without_profiles_says_none() {
        let err = ConfigError::UnknownProfile {
            name: "22mm".into(),
            available: Vec::new(),
        };
        assert_eq!(err.to_string(), "Unknown profile '22mm'. Available: (none)");
    }

    #[test]
    fn invalid_config_joins_issues_by_line() {
        let err = ConfigError::InvalidConfig(vec![
            "Missing required key: vial_diameter".into(),
            "Missing required key: vial_height".into(),
        ]);
        assert_eq!(err.issues().len(), 2);
        assert_eq!(
            err.to_string(),
            "Missing required key: vial_diameter\nMissing required key: vial_height"
        );
    }

    #[test]
    fn issues_is_empty_for_other_variants() {
        let err = ConfigError::ParseError("bad".into());
        assert!(err.issues().is_empty());
    }

    #[test]
    fn derivation_cycle_display() {
        let err = ConfigError::DerivationCycle(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "derived keys form a cycle: a -> b");
    }

    #[test]
    fn laybell_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: LaybellError = config_err.into();
        assert!(matches!(err, LaybellError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }
}
