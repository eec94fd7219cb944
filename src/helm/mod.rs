// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm release descriptor for the load balancer controller chart.

use crate::config::InstallOptions;
use crate::constants::{helm, CONTROLLER_NAME};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A Helm chart installation, parameterized by the install options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HelmRelease {
    pub chart: String,
    pub release_name: String,
    /// `--namespace <ns> --version <ver>`; an empty version selects the latest chart
    pub flags: Vec<String>,
    pub values: HelmValues,
}

/// Chart values passed to the release
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HelmValues {
    pub cluster_name: String,
    pub service_account: ServiceAccountValues,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServiceAccountValues {
    pub create: bool,
    pub name: String,
}

impl HelmRelease {
    pub fn new(options: &InstallOptions) -> Self {
        Self {
            chart: helm::CHART.to_string(),
            release_name: helm::RELEASE_NAME.to_string(),
            flags: vec![
                "--namespace".to_string(),
                options.namespace.clone(),
                "--version".to_string(),
                options.chart_version.clone(),
            ],
            values: HelmValues {
                cluster_name: options.cluster_name.clone(),
                service_account: ServiceAccountValues {
                    create: options.create_service_account,
                    name: CONTROLLER_NAME.to_string(),
                },
            },
        }
    }

    /// Render the values document
    pub fn values_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.values)?)
    }

    /// Arguments for `helm template` rendering this release with the values at `values_path`
    pub fn template_args(&self, values_path: &Path) -> Vec<String> {
        let mut args = vec![
            "template".to_string(),
            self.release_name.clone(),
            self.chart.clone(),
        ];
        args.extend(self.flags.iter().cloned());
        args.push("--values".to_string());
        args.push(values_path.display().to_string());
        args
    }

    /// Shell-quoted `helm template` command line, safe to copy into a terminal
    pub fn template_command(&self, values_path: &Path) -> String {
        let mut args = vec!["helm".to_string()];
        args.extend(self.template_args(values_path));
        shell_words::join(args)
    }
}
