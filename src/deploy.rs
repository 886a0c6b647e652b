// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The deploy command: push one add-on manifest to the cluster on a host.

use crate::endpoint::ClusterEndpoint;
use crate::error::{DeployError, Result};
use crate::host::{HostHandle, HostResolver};
use crate::kubernetes::Submitter;
use crate::manifests;
use tracing::{debug, info, instrument};

/// Deploys manifests using a host resolver and a submitter
pub struct Deployer<R, S> {
    resolver: R,
    submitter: S,
}

impl<R, S> Deployer<R, S>
where
    R: HostResolver,
    S: Submitter,
{
    pub fn new(resolver: R, submitter: S) -> Self {
        Self { resolver, submitter }
    }

    /// Run the deploy command with its positional arguments:
    /// `<host-reference> <manifest-kind>`.
    ///
    /// Every check runs before submission, so a failure never leaves a
    /// partial deployment behind.
    #[instrument(skip(self))]
    pub async fn deploy(&self, args: &[String]) -> Result<()> {
        let [reference, kind] = args else {
            return Err(DeployError::Arity { got: args.len() });
        };

        let host = self
            .resolver
            .resolve(reference)
            .await
            .map_err(|source| DeployError::HostResolution {
                reference: reference.clone(),
                source,
            })?;

        let payload = manifests::lookup(kind)?;
        debug!("Selected manifest {} ({} bytes)", payload.kind(), payload.len());

        let url = host.connection_url().map_err(|source| DeployError::HostUrl {
            reference: reference.clone(),
            source,
        })?;
        let endpoint = ClusterEndpoint::derive(&url)?;

        info!("using host: {}", endpoint);

        self.submitter
            .create(&endpoint, &payload)
            .await
            .map_err(|source| DeployError::Submission {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(())
    }
}
