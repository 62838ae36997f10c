//! Error types for quota reporting.
//!
//! Setup failures abort the run; namespace query failures are reported inline
//! and the run continues with the next namespace.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while resolving configuration or building the Kubernetes client.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The explicitly given kubeconfig could not be read, parsed or resolved
    #[error("error on load kubeconfig file {}: {source}", .path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: kube::config::KubeconfigError,
    },

    /// Neither a kubeconfig nor an in-cluster environment could be used
    #[error("error on load kubeconfig: {0}")]
    Infer(#[from] kube::config::InferConfigError),

    #[error("error on create Kubernetes client: {0}")]
    ClientCreation(#[from] kube::Error),
}

/// A failed quota list request for a single namespace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR getting quotas for {namespace}: {reason}")]
pub struct NamespaceQueryError {
    pub namespace: String,
    pub reason: String,
}

impl NamespaceQueryError {
    pub fn new(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that terminate a run.
#[derive(Debug, Error)]
pub enum QuotaError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuotaError>;
