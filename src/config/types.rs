use std::path::PathBuf;

/// Run configuration, built once from the parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaConfig {
    /// Namespaces to report on, trimmed, in the order given
    pub namespaces: Vec<String>,
    /// Explicit kubeconfig path; `None` defers to kube-rs discovery
    pub kubeconfig: Option<PathBuf>,
}

impl QuotaConfig {
    pub fn new(namespaces: &str, kubeconfig: Option<PathBuf>) -> Self {
        Self {
            namespaces: super::parse_namespaces(namespaces),
            kubeconfig,
        }
    }
}
