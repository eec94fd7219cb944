// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod crds;
pub mod error;
pub mod helm;
pub mod manifest;
pub mod types;

pub use config::InstallOptions;
pub use error::{ManifestError, Result};
pub use helm::HelmRelease;
pub use manifest::{build, Manifest};
