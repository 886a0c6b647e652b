// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Error type returned by the host and submission collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Requires a host and a manifest kind, got {got} argument(s)")]
    Arity { got: usize },

    #[error("Failed to resolve host '{reference}': {source}")]
    HostResolution {
        reference: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid manifest kind: {0}")]
    UnknownManifestKind(String),

    #[error("Failed to get URL of host '{reference}': {source}")]
    HostUrl {
        reference: String,
        #[source]
        source: BoxError,
    },

    #[error("Malformed host URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: &'static str },

    #[error("Failed to submit manifest to {endpoint}: {source}")]
    Submission {
        endpoint: String,
        #[source]
        source: BoxError,
    },
}

/// Errors raised by the on-disk machine store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Host does not exist: {0}")]
    NotFound(String),

    #[error("Invalid host name: {0}")]
    InvalidName(String),

    #[error("Failed to read machine config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse machine config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IP address is not set for host {0}")]
    NoIpAddress(String),
}

/// Errors raised while creating manifest objects on a cluster
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to build client: {0}")]
    ClientError(String),

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid manifest document #{index}: {reason}")]
    InvalidDocument { index: usize, reason: String },

    #[error("Failed to create {kind} {name}: {source}")]
    CreateError {
        kind: String,
        name: String,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeployError>;
