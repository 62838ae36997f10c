//! ResourceQuota snapshots and per-resource usage rows.

pub mod quantity;

pub use quantity::{display_quantity, parse_quantity, usage_percentage};

use k8s_openapi::api::core::v1::ResourceQuota;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

/// Usage shown for resources that have a hard limit but no reported usage
const ZERO_USAGE: &str = "0";

/// Read-only view of one ResourceQuota.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotaSnapshot {
    pub name: String,
    pub namespace: String,
    /// Configured ceilings by resource type
    pub hard: BTreeMap<String, String>,
    /// Current consumption by resource type
    pub used: BTreeMap<String, String>,
}

/// One table row: a resource type with its usage against the hard limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUsage {
    pub resource: String,
    pub used: String,
    pub hard: String,
    pub percentage: f64,
}

impl QuotaSnapshot {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_hard(mut self, resource: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.hard.insert(resource.into(), quantity.into());
        self
    }

    pub fn with_used(mut self, resource: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.used.insert(resource.into(), quantity.into());
        self
    }

    /// Usage rows for every resource type that has a hard limit.
    pub fn usage(&self) -> Vec<ResourceUsage> {
        self.hard
            .iter()
            .map(|(resource, hard)| {
                let used = self
                    .used
                    .get(resource)
                    .map(String::as_str)
                    .unwrap_or(ZERO_USAGE);

                ResourceUsage {
                    resource: resource.clone(),
                    used: used.to_string(),
                    hard: hard.clone(),
                    percentage: usage_percentage(used, hard),
                }
            })
            .collect()
    }
}

impl From<ResourceQuota> for QuotaSnapshot {
    fn from(quota: ResourceQuota) -> Self {
        let name = quota.metadata.name.unwrap_or_default();
        let namespace = quota.metadata.namespace.unwrap_or_default();

        // Quotas not yet reconciled by the controller only carry spec.hard
        let (hard, used) = match quota.status {
            Some(status) => (status.hard, status.used),
            None => (quota.spec.and_then(|spec| spec.hard), None),
        };

        Self {
            name,
            namespace,
            hard: quantities_to_strings(hard),
            used: quantities_to_strings(used),
        }
    }
}

fn quantities_to_strings(quantities: Option<BTreeMap<String, Quantity>>) -> BTreeMap<String, String> {
    quantities
        .unwrap_or_default()
        .into_iter()
        .map(|(resource, quantity)| (resource, quantity.0))
        .collect()
}

impl ResourceUsage {
    /// Tab separated table row with display-normalized quantities.
    pub fn row(&self) -> String {
        format!(
            "{}\t\t{}\t\t{}\t\t{:.1}%",
            self.resource,
            display_quantity(&self.used),
            display_quantity(&self.hard),
            self.percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{ResourceQuotaSpec, ResourceQuotaStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn quantities(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, Quantity>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Quantity(v.to_string())))
                .collect(),
        )
    }

    fn compute_quota() -> QuotaSnapshot {
        QuotaSnapshot::new("compute-quota", "team-a")
            .with_hard("cpu", "4")
            .with_hard("memory", "4Gi")
            .with_used("cpu", "2")
            .with_used("memory", "2147483648")
    }

    #[test]
    fn test_usage_rows() {
        let rows: Vec<String> = compute_quota().usage().iter().map(ResourceUsage::row).collect();

        assert_eq!(
            rows,
            vec![
                "cpu\t\t2\t\t4\t\t50.0%".to_string(),
                "memory\t\t2.00Gi\t\t4Gi\t\t50.0%".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_usage_counts_as_zero() {
        let quota = QuotaSnapshot::new("object-counts", "team-a").with_hard("pods", "10");
        let usage = quota.usage();

        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].used, "0");
        assert_eq!(usage[0].percentage, 0.0);
        assert_eq!(usage[0].row(), "pods\t\t0\t\t10\t\t0.0%");
    }

    #[test]
    fn test_usage_ignores_resources_without_hard_limit() {
        let quota = QuotaSnapshot::new("q", "ns")
            .with_hard("pods", "10")
            .with_used("pods", "3")
            .with_used("services", "2");

        let usage = quota.usage();
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].resource, "pods");
    }

    #[test]
    fn test_over_quota_is_not_clamped() {
        let quota = QuotaSnapshot::new("q", "ns")
            .with_hard("requests.cpu", "1")
            .with_used("requests.cpu", "1500m");

        assert_eq!(quota.usage()[0].row(), "requests.cpu\t\t1500m\t\t1\t\t150.0%");
    }

    #[test]
    fn test_zero_hard_limit_row() {
        let quota = QuotaSnapshot::new("q", "ns")
            .with_hard("services.loadbalancers", "0")
            .with_used("services.loadbalancers", "1");

        assert_eq!(quota.usage()[0].row(), "services.loadbalancers\t\t1\t\t0\t\t0.0%");
    }

    #[test]
    fn test_from_resource_quota_uses_status() {
        let quota = ResourceQuota {
            metadata: ObjectMeta {
                name: Some("compute-quota".to_string()),
                namespace: Some("team-a".to_string()),
                ..Default::default()
            },
            spec: Some(ResourceQuotaSpec {
                hard: quantities(&[("cpu", "8")]),
                ..Default::default()
            }),
            status: Some(ResourceQuotaStatus {
                hard: quantities(&[("cpu", "4"), ("memory", "4Gi")]),
                used: quantities(&[("cpu", "2")]),
            }),
        };

        let snapshot = QuotaSnapshot::from(quota);
        assert_eq!(snapshot.name, "compute-quota");
        assert_eq!(snapshot.namespace, "team-a");
        assert_eq!(snapshot.hard.get("cpu").map(String::as_str), Some("4"));
        assert_eq!(snapshot.hard.get("memory").map(String::as_str), Some("4Gi"));
        assert_eq!(snapshot.used.get("cpu").map(String::as_str), Some("2"));
        assert!(!snapshot.used.contains_key("memory"));
    }

    #[test]
    fn test_from_resource_quota_without_status_falls_back_to_spec() {
        let quota = ResourceQuota {
            metadata: ObjectMeta {
                name: Some("fresh".to_string()),
                namespace: Some("team-b".to_string()),
                ..Default::default()
            },
            spec: Some(ResourceQuotaSpec {
                hard: quantities(&[("pods", "20")]),
                ..Default::default()
            }),
            status: None,
        };

        let snapshot = QuotaSnapshot::from(quota);
        assert_eq!(snapshot.hard.get("pods").map(String::as_str), Some("20"));
        assert!(snapshot.used.is_empty());
        assert_eq!(snapshot.usage()[0].row(), "pods\t\t0\t\t20\t\t0.0%");
    }
}
