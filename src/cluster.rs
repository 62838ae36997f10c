//! Kubernetes connection setup and quota listing.
//!
//! Configuration is resolved in this order:
//!
//! 1. an explicit kubeconfig path given on the command line
//! 2. the default user kubeconfig (`$KUBECONFIG`, then `~/.kube/config`)
//! 3. the in-cluster service account environment
//!
//! # Example
//!
//! ```rust,ignore
//! use kubectl_resource_quota::cluster::{self, KubeQuotaSource, QuotaSource};
//!
//! let client = cluster::connect(None).await?;
//! let quotas = KubeQuotaSource::new(client).list_quotas("default").await?;
//! ```

use crate::error::{NamespaceQueryError, SetupError};
use crate::quota::QuotaSnapshot;
use k8s_openapi::api::core::v1::ResourceQuota;
use kube::{
    Client, Config,
    api::{Api, ListParams},
    config::{KubeConfigOptions, Kubeconfig},
};
use std::path::Path;

/// Anything that can list the quotas of a namespace.
pub trait QuotaSource {
    fn list_quotas(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<QuotaSnapshot>, NamespaceQueryError>>;
}

/// Quota source backed by the Kubernetes API.
pub struct KubeQuotaSource {
    client: Client,
}

impl KubeQuotaSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl QuotaSource for KubeQuotaSource {
    async fn list_quotas(&self, namespace: &str) -> Result<Vec<QuotaSnapshot>, NamespaceQueryError> {
        let quotas: Api<ResourceQuota> = Api::namespaced(self.client.clone(), namespace);

        let quota_list = quotas
            .list(&ListParams::default())
            .await
            .map_err(|e| NamespaceQueryError::new(namespace, e.to_string()))?;

        log::debug!("Found {} quotas in {}", quota_list.items.len(), namespace);

        Ok(quota_list.items.into_iter().map(QuotaSnapshot::from).collect())
    }
}

/// Build a client from the resolved configuration.
pub async fn connect(kubeconfig: Option<&Path>) -> Result<Client, SetupError> {
    // Install rustls crypto provider (required for TLS connections to K8s API)
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = load_config(kubeconfig).await?;
    log::info!("Connecting to {}", config.cluster_url);

    Ok(Client::try_from(config)?)
}

/// Resolve the client configuration without connecting.
pub async fn load_config(kubeconfig: Option<&Path>) -> Result<Config, SetupError> {
    let Some(path) = kubeconfig else {
        log::debug!("No kubeconfig given, inferring configuration");
        return Ok(Config::infer().await?);
    };

    log::debug!("Loading kubeconfig from {}", path.display());
    let to_setup_error = |source| SetupError::Kubeconfig {
        path: path.to_path_buf(),
        source,
    };

    let kubeconfig = Kubeconfig::read_from(path).map_err(to_setup_error)?;
    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(to_setup_error)
}
