// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Machine store backed host resolver

use crate::constants::store::{CONFIG_FILE, ENGINE_PORT, MACHINES_DIR};
use crate::error::{BoxError, StoreError};
use crate::host::{HostHandle, HostResolver};
use async_trait::async_trait;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Subset of a machine's `config.json` needed to reach it
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MachineRecord {
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub driver: DriverRecord,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DriverRecord {
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,
}

/// A machine loaded from the store
#[derive(Clone, Debug)]
pub struct MachineHost {
    name: String,
    record: MachineRecord,
}

impl HostHandle for MachineHost {
    fn connection_url(&self) -> Result<String, BoxError> {
        let ip = self.record.driver.ip_address.trim();
        if ip.is_empty() {
            return Err(StoreError::NoIpAddress(self.name.clone()).into());
        }
        // IPv6 addresses are bracketed like a socket address
        match ip.parse::<IpAddr>() {
            Ok(addr) => Ok(format!("tcp://{}", SocketAddr::new(addr, ENGINE_PORT))),
            Err(_) => Ok(format!("tcp://{}:{}", ip, ENGINE_PORT)),
        }
    }
}

/// On-disk store laid out as `<root>/machines/<name>/config.json`
#[derive(Clone, Debug)]
pub struct MachineStore {
    root: PathBuf,
}

impl MachineStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn config_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(MACHINES_DIR).join(name).join(CONFIG_FILE))
    }

    /// Load a machine by name
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn load(&self, name: &str) -> Result<MachineHost, StoreError> {
        let path = self.config_path(name)?;
        debug!("Loading machine config {}", path.display());

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        let record: MachineRecord = serde_json::from_slice(&raw).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!("Machine {} uses driver '{}'", name, record.driver_name);

        Ok(MachineHost {
            name: name.to_string(),
            record,
        })
    }
}

#[async_trait]
impl HostResolver for MachineStore {
    type Host = MachineHost;

    async fn resolve(&self, reference: &str) -> Result<MachineHost, BoxError> {
        Ok(self.load(reference).await?)
    }
}
