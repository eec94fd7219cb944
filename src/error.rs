// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("clusterName is required and must not be empty")]
    MissingClusterName,

    #[error("Embedded CRD asset {asset} is invalid: {reason}")]
    InvalidAsset { asset: &'static str, reason: String },

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to write manifests: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
