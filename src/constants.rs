// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Cluster control-plane endpoint derived from a host URL
pub mod endpoint {
    /// Scheme of the cluster management API
    pub const SCHEME: &str = "https";
    /// Port the cluster management API listens on
    pub const PORT: u16 = 6443;
}

/// Machine store layout and defaults
pub mod store {
    /// Directory under the store root holding one directory per machine
    pub const MACHINES_DIR: &str = "machines";
    /// Per-machine config file name
    pub const CONFIG_FILE: &str = "config.json";
    /// Port of the engine endpoint advertised by a machine
    pub const ENGINE_PORT: u16 = 2376;
}

/// Field manager name used when creating objects
pub const FIELD_MANAGER: &str = "addonctl";
