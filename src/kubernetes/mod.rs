// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and manifest submission.

pub mod client;
pub mod submit;

use crate::endpoint::ClusterEndpoint;
use crate::error::BoxError;
use crate::manifests::ManifestPayload;
use async_trait::async_trait;

pub use client::create_cluster_client;
pub use submit::{create_manifest, KubeSubmitter};

/// Submits manifest payloads to a cluster endpoint
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn create(&self, endpoint: &ClusterEndpoint, payload: &ManifestPayload) -> Result<(), BoxError>;
}
