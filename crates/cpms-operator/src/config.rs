//! Operator configuration
//!
//! Settings for the `cpms-operator` binary with environment variable
//! overrides. The library itself takes no configuration.

/// Namespace the control plane machines live in.
pub const DEFAULT_NAMESPACE: &str = "openshift-machine-api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Namespace machines must be in to be considered (env: CPMS_NAMESPACE)
    pub namespace: String,

    /// Log output format, `text` or `json` (env: LOG_FORMAT)
    pub log_format: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl OperatorConfig {
    /// Create configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(namespace) = lookup("CPMS_NAMESPACE").filter(|ns| !ns.is_empty()) {
            config.namespace = namespace;
        }

        if let Some(log_format) = lookup("LOG_FORMAT") {
            config.log_format = log_format;
        }

        config
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
