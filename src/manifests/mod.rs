// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry of the add-on manifests embedded in the binary.

use crate::error::{DeployError, Result};
use bytes::Bytes;
use std::fmt;
use std::str::FromStr;

const DNS: &[u8] = include_bytes!("dns.yaml");
const HELM: &[u8] = include_bytes!("helm.yaml");
const DASHBOARD: &[u8] = include_bytes!("dashboard.yaml");

/// Add-on manifests that can be deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Dns,
    Helm,
    Dashboard,
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 3] = [ManifestKind::Dns, ManifestKind::Helm, ManifestKind::Dashboard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::Dns => "dns",
            ManifestKind::Helm => "helm",
            ManifestKind::Dashboard => "dashboard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ManifestKind::Dns => "Cluster DNS service (kube-dns) in kube-system",
            ManifestKind::Helm => "Helm deployment manager control plane in the helm namespace",
            ManifestKind::Dashboard => "Kubernetes dashboard in kube-system",
        }
    }

    pub fn payload(&self) -> ManifestPayload {
        let data = match self {
            ManifestKind::Dns => DNS,
            ManifestKind::Helm => HELM,
            ManifestKind::Dashboard => DASHBOARD,
        };

        ManifestPayload {
            kind: *self,
            data: Bytes::from_static(data),
        }
    }
}

impl FromStr for ManifestKind {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        ManifestKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DeployError::UnknownManifestKind(s.to_string()))
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable manifest content, never interpreted by the deploy core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPayload {
    kind: ManifestKind,
    data: Bytes,
}

impl ManifestPayload {
    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Look up the manifest payload for a kind name. Matching is exact and case-sensitive.
pub fn lookup(kind: &str) -> Result<ManifestPayload> {
    Ok(kind.parse::<ManifestKind>()?.payload())
}
