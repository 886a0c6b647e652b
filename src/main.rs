// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use addonctl::cli::{Cli, Command};
use addonctl::config::Config;
use addonctl::deploy::Deployer;
use addonctl::host::MachineStore;
use addonctl::kubernetes::KubeSubmitter;
use addonctl::manifests::{self, ManifestKind};

#[tokio::main]
async fn main() {
    // Logs go to stderr so manifest output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Deploy { args } => {
            let config = Config::from_env()?;
            debug!("Configuration loaded: storage_path={}", config.storage_path.display());

            let deployer = Deployer::new(MachineStore::new(config.storage_path.clone()), KubeSubmitter::new(&config));
            deployer.deploy(&args).await?;
        }
        Command::Kinds => {
            for kind in ManifestKind::ALL {
                println!("{:<10} {}", kind, kind.description());
            }
        }
        Command::Show { kind } => {
            let payload = manifests::lookup(&kind)?;
            std::io::stdout().write_all(payload.bytes())?;
        }
    }

    Ok(())
}
