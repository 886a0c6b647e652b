// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cli;
pub mod config;
pub mod constants;
pub mod deploy;
pub mod endpoint;
pub mod error;
pub mod host;
pub mod kubernetes;
pub mod manifests;

#[cfg(test)]
mod test_utils;
