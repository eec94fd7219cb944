// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::constants::{defaults, env as env_vars};
use crate::error::ManifestError;

/// Options controlling how the load balancer controller is installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallOptions {
    /// Kubernetes cluster name passed to the controller
    pub cluster_name: String,
    /// Namespace the Helm release is installed into
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Helm chart version, empty for the latest chart
    #[serde(default)]
    pub chart_version: String,
    /// Whether the chart creates the service account
    #[serde(default = "default_create_service_account")]
    pub create_service_account: bool,
}

fn default_namespace() -> String {
    defaults::NAMESPACE.to_string()
}

fn default_create_service_account() -> bool {
    defaults::CREATE_SERVICE_ACCOUNT
}

impl InstallOptions {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            namespace: default_namespace(),
            chart_version: defaults::CHART_VERSION.to_string(),
            create_service_account: defaults::CREATE_SERVICE_ACCOUNT,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_chart_version(mut self, chart_version: impl Into<String>) -> Self {
        self.chart_version = chart_version.into();
        self
    }

    pub fn with_create_service_account(mut self, create: bool) -> Self {
        self.create_service_account = create;
        self
    }

    /// Load options from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load options through an arbitrary key lookup, applying defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster_name = lookup(env_vars::CLUSTER_NAME)
            .context("CLUSTER_NAME environment variable not set")?;
        let namespace = lookup(env_vars::NAMESPACE).unwrap_or_else(default_namespace);
        let chart_version = lookup(env_vars::CHART_VERSION)
            .unwrap_or_else(|| defaults::CHART_VERSION.to_string());
        // Unparseable values fall back to the default rather than failing
        let create_service_account = lookup(env_vars::CREATE_SERVICE_ACCOUNT)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults::CREATE_SERVICE_ACCOUNT);

        Ok(InstallOptions {
            cluster_name,
            namespace,
            chart_version,
            create_service_account,
        })
    }

    /// Load options from a YAML (or JSON) file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse options file {}", path.display()))
    }

    /// Check the options are complete enough to build manifests from
    pub fn validate(&self) -> std::result::Result<(), ManifestError> {
        if self.cluster_name.trim().is_empty() {
            return Err(ManifestError::MissingClusterName);
        }
        Ok(())
    }
}
