// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Host lookup capabilities used by the deploy command.

pub mod store;

use crate::error::BoxError;
use async_trait::async_trait;

pub use store::{MachineHost, MachineStore};

/// A resolved host that can report where it is reachable
pub trait HostHandle: Send + Sync {
    /// Current connection URL of the host, `scheme://host:port`
    fn connection_url(&self) -> Result<String, BoxError>;
}

/// Resolves a host reference to a connectable host
#[async_trait]
pub trait HostResolver: Send + Sync {
    type Host: HostHandle;

    async fn resolve(&self, reference: &str) -> Result<Self::Host, BoxError>;
}
