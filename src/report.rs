//! Namespace-by-namespace quota report.

use crate::cluster::QuotaSource;
use crate::quota::QuotaSnapshot;
use std::io::{self, Write};

const SEPARATOR: &str = "==========================================";

/// What happened during a report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Namespaces queried, in input order
    pub checked: Vec<String>,
    /// Namespaces whose list request failed
    pub failed: Vec<String>,
    /// Namespaces without any quota
    pub empty: Vec<String>,
    /// Number of quota blocks rendered
    pub quotas: usize,
}

/// List and print the quotas of each namespace.
///
/// A failed list request is printed inline and the next namespace is processed.
/// Only write errors abort the report.
pub async fn report_namespaces<S, W>(
    source: &S,
    namespaces: &[String],
    out: &mut W,
) -> io::Result<ReportSummary>
where
    S: QuotaSource,
    W: Write,
{
    let mut summary = ReportSummary::default();

    for namespace in namespaces {
        writeln!(out, "Checking namespace: {}", namespace)?;
        summary.checked.push(namespace.clone());

        let quotas = match source.list_quotas(namespace).await {
            Ok(quotas) => quotas,
            Err(e) => {
                log::debug!("Skipping {}: {}", namespace, e.reason);
                writeln!(out, "{}", e)?;
                summary.failed.push(namespace.clone());
                continue;
            }
        };

        if quotas.is_empty() {
            writeln!(out, "No quotas found in {}", namespace)?;
            summary.empty.push(namespace.clone());
            continue;
        }

        for quota in &quotas {
            write_quota(out, quota)?;
            summary.quotas += 1;
        }
    }

    if !summary.empty.is_empty() {
        writeln!(out, "Namespaces with no quotas: {}", summary.empty.join(", "))?;
    }

    out.flush()?;
    Ok(summary)
}

/// Print the header block and usage table of one quota.
pub fn write_quota<W: Write>(out: &mut W, quota: &QuotaSnapshot) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Name:\t\t{}", quota.name)?;
    writeln!(out, "Namespace:\t{}", quota.namespace)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Resource\t\tUsed\t\tHard\t\tPercentage")?;
    writeln!(out, "--------\t\t----\t\t----\t\t----------")?;

    for usage in quota.usage() {
        writeln!(out, "{}", usage.row())?;
    }

    writeln!(out)
}
