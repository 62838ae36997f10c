//! # kubectl-resource-quota
//!
//! A kubectl plugin that lists `ResourceQuota` objects across one or more namespaces and
//! prints their hard limits, current usage and utilization percentage as a table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kubectl_resource_quota::{QuotaConfig, run};
//!
//! # async fn example() -> kubectl_resource_quota::Result<()> {
//! let config = QuotaConfig::new("team-a,team-b", None);
//! let summary = run(&config).await?;
//! println!("{} namespaces without quotas", summary.empty.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod quota;
pub mod report;

// Re-export commonly used types and functions
pub use cluster::{KubeQuotaSource, QuotaSource};
pub use config::QuotaConfig;
pub use error::{NamespaceQueryError, QuotaError, Result, SetupError};
pub use quota::{QuotaSnapshot, ResourceUsage};
pub use report::{ReportSummary, report_namespaces};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connect to the cluster and print the quota report for every configured namespace.
///
/// Setup failures abort the run. Per-namespace failures are printed inline and
/// counted in the returned summary.
pub async fn run(config: &QuotaConfig) -> Result<ReportSummary> {
    if config.namespaces.is_empty() {
        log::warn!("No namespaces given after trimming empty entries");
    }

    let client = cluster::connect(config.kubeconfig.as_deref()).await?;
    let source = KubeQuotaSource::new(client);

    let mut stdout = std::io::stdout();
    let summary = report_namespaces(&source, &config.namespaces, &mut stdout).await?;

    log::debug!(
        "Checked {} namespaces: {} quotas rendered, {} failed, {} empty",
        summary.checked.len(),
        summary.quotas,
        summary.failed.len(),
        summary.empty.len()
    );

    Ok(summary)
}
