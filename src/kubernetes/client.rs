// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation for a derived endpoint

use crate::config::Config;
use crate::endpoint::ClusterEndpoint;
use crate::error::SubmitError;
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client talking to the given cluster endpoint.
///
/// Credentials come from the local kubeconfig when one can be inferred; the
/// cluster URL is always replaced with the endpoint.
#[instrument(skip(endpoint, config), fields(endpoint = %endpoint))]
pub async fn create_cluster_client(endpoint: &ClusterEndpoint, config: &Config) -> Result<Client, SubmitError> {
    let inferred = match KConfig::infer().await {
        Ok(inferred) => Some(inferred),
        Err(e) => {
            debug!("No kubeconfig could be inferred ({}), connecting without credentials", e);
            None
        }
    };

    let c = cluster_config(inferred, endpoint, config)?;
    Client::try_from(c).map_err(|e| SubmitError::ClientError(format!("Failed to create client: {}", e)))
}

/// Build the client config for an endpoint from optional inferred credentials
fn cluster_config(
    inferred: Option<KConfig>,
    endpoint: &ClusterEndpoint,
    config: &Config,
) -> Result<KConfig, SubmitError> {
    let cluster_url = endpoint
        .to_uri()
        .map_err(|e| SubmitError::ClientError(format!("Invalid URL: {}", e)))?;

    let mut c = match inferred {
        Some(mut inferred) => {
            debug!(
                "Using inferred credentials, modifying cluster URL from {} to {}",
                inferred.cluster_url, cluster_url
            );
            inferred.cluster_url = cluster_url;
            inferred
        }
        None => KConfig::new(cluster_url),
    };

    if config.insecure_skip_tls_verify {
        c.accept_invalid_certs = true;
    }

    Ok(c)
}
