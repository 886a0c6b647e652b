// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, Subcommand};

/// Deploy cluster add-on manifests onto provisioned hosts.
#[derive(Debug, Parser)]
#[command(name = "addonctl", version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Deploy an add-on manifest to the cluster on a host
    #[command(override_usage = "addonctl deploy <HOST> <KIND>")]
    Deploy {
        /// Host reference followed by the manifest kind (dns, helm or dashboard)
        #[arg(num_args = 0.., value_name = "ARGS")]
        args: Vec<String>,
    },

    /// List the manifest kinds that can be deployed
    Kinds,

    /// Print an embedded manifest
    Show {
        /// Manifest kind (dns, helm or dashboard)
        kind: String,
    },
}
