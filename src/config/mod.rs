pub mod types;

pub use types::QuotaConfig;

/// Split a comma-separated namespace list.
///
/// Entries are trimmed and empty ones dropped. Order and duplicates are kept.
pub fn parse_namespaces(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .map(String::from)
        .collect()
}
