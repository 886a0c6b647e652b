// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creates the objects of a manifest through the Kubernetes API

use crate::config::Config;
use crate::constants::FIELD_MANAGER;
use crate::endpoint::ClusterEndpoint;
use crate::error::{BoxError, SubmitError};
use crate::kubernetes::client::create_cluster_client;
use crate::kubernetes::Submitter;
use crate::manifests::ManifestPayload;
use async_trait::async_trait;
use kube::{
    api::PostParams,
    core::{ApiResource, DynamicObject, GroupVersionKind},
    discovery::{pinned_kind, ApiCapabilities, Scope},
    Api, Client, ResourceExt,
};
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Outcome of creating one manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateSummary {
    pub created: usize,
    pub skipped: usize,
}

/// Submitter creating manifest objects on the cluster behind an endpoint
#[derive(Debug, Clone)]
pub struct KubeSubmitter {
    config: Config,
}

impl KubeSubmitter {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl Submitter for KubeSubmitter {
    async fn create(&self, endpoint: &ClusterEndpoint, payload: &ManifestPayload) -> Result<(), BoxError> {
        let client = create_cluster_client(endpoint, &self.config).await?;
        let summary = create_manifest(&client, payload).await?;

        info!(
            "Manifest {} submitted to {}: {} created, {} already present",
            payload.kind(),
            endpoint,
            summary.created,
            summary.skipped
        );
        Ok(())
    }
}

/// Split a multi-document YAML payload into objects, skipping empty documents
pub fn parse_documents(data: &[u8]) -> Result<Vec<DynamicObject>, SubmitError> {
    let mut objects = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_slice(data).enumerate() {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }

        let obj: DynamicObject = serde_yaml::from_value(value)?;

        let Some(types) = obj.types.as_ref() else {
            return Err(SubmitError::InvalidDocument {
                index,
                reason: "missing apiVersion or kind".to_string(),
            });
        };
        if types.api_version.is_empty() || types.kind.is_empty() {
            return Err(SubmitError::InvalidDocument {
                index,
                reason: "empty apiVersion or kind".to_string(),
            });
        }
        if obj.metadata.name.as_deref().unwrap_or_default().is_empty() {
            return Err(SubmitError::InvalidDocument {
                index,
                reason: format!("{} has no metadata.name", types.kind),
            });
        }

        objects.push(obj);
    }

    Ok(objects)
}

fn group_version_kind(obj: &DynamicObject) -> GroupVersionKind {
    let (api_version, kind) = obj
        .types
        .as_ref()
        .map(|t| (t.api_version.as_str(), t.kind.as_str()))
        .unwrap_or_default();
    let (group, version) = api_version.split_once('/').unwrap_or(("", api_version));
    GroupVersionKind::gvk(group, version, kind)
}

/// Create every object of a manifest in document order.
///
/// Objects that already exist are skipped, any other API error aborts.
#[instrument(skip(client, payload), fields(kind = %payload.kind()))]
pub async fn create_manifest(client: &Client, payload: &ManifestPayload) -> Result<CreateSummary, SubmitError> {
    let objects = parse_documents(payload.bytes())?;
    debug!("Manifest contains {} objects", objects.len());

    let mut resources: HashMap<(String, String, String), (ApiResource, ApiCapabilities)> = HashMap::new();
    let mut summary = CreateSummary::default();

    for obj in objects {
        let gvk = group_version_kind(&obj);
        let key = (gvk.group.clone(), gvk.version.clone(), gvk.kind.clone());
        let (ar, caps) = match resources.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(pinned_kind(client, &gvk).await?),
        };

        let api: Api<DynamicObject> = match (&caps.scope, obj.namespace()) {
            (Scope::Cluster, _) => Api::all_with(client.clone(), &*ar),
            (Scope::Namespaced, Some(namespace)) => Api::namespaced_with(client.clone(), &namespace, &*ar),
            (Scope::Namespaced, None) => Api::default_namespaced_with(client.clone(), &*ar),
        };

        let name = obj.name_any();
        let pp = PostParams {
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..Default::default()
        };

        match api.create(&pp, &obj).await {
            Ok(_) => {
                info!("Created {} {}", gvk.kind, name);
                summary.created += 1;
            }
            Err(kube::Error::Api(err)) if err.code == 409 => {
                warn!("{} {} already exists, skipping", gvk.kind, name);
                summary.skipped += 1;
            }
            Err(e) => {
                return Err(SubmitError::CreateError {
                    kind: gvk.kind.clone(),
                    name,
                    source: e,
                });
            }
        }
    }

    Ok(summary)
}
