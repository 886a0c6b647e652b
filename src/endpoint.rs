// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster control-plane endpoint derivation

use crate::constants::endpoint::{PORT, SCHEME};
use crate::error::{DeployError, Result};
use std::fmt;

/// The management API URL of a cluster, always `https://<host>:6443`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEndpoint {
    host: String,
}

impl ClusterEndpoint {
    /// Derive the cluster endpoint from a host connection URL of the form
    /// `scheme://host:port`. Only the host is kept.
    pub fn derive(connection_url: &str) -> Result<Self> {
        let malformed = |reason| DeployError::MalformedUrl {
            url: connection_url.to_string(),
            reason,
        };

        let Some((_scheme, rest)) = connection_url.split_once("://") else {
            return Err(malformed("missing '://' separator"));
        };

        let host = if let Some(bracketed) = rest.strip_prefix('[') {
            let Some((address, after)) = bracketed.split_once(']') else {
                return Err(malformed("unterminated '[' in host"));
            };
            if !after.starts_with(':') {
                return Err(malformed("missing ':' between host and port"));
            }
            &rest[..address.len() + 2]
        } else {
            if !rest.contains(':') {
                return Err(malformed("missing ':' between host and port"));
            }
            let first = rest.split(',').next().unwrap_or_default();
            if first.matches(':').count() > 1 {
                return Err(malformed("unbracketed IPv6 address"));
            }
            first.split(':').next().unwrap_or_default()
        };

        if host.is_empty() || host == "[]" {
            return Err(malformed("empty host"));
        }

        url::Host::parse(host).map_err(|_| malformed("invalid host"))?;

        Ok(ClusterEndpoint {
            host: host.to_string(),
        })
    }

    /// The endpoint as an `http::Uri` for API clients
    pub fn to_uri(&self) -> std::result::Result<http::Uri, http::uri::InvalidUri> {
        self.to_string().parse()
    }
}

impl fmt::Display for ClusterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", SCHEME, self.host, PORT)
    }
}
