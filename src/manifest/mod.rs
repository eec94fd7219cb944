// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builds the full set of documents needed to install the controller.

use crate::config::InstallOptions;
use crate::constants::{files, CONTROLLER_NAME};
use crate::crds;
use crate::error::Result;
use crate::helm::HelmRelease;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The documents produced for one install of the controller
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    pub options: InstallOptions,
    /// `IngressClassParams` followed by `TargetGroupBinding`
    pub crds: [CustomResourceDefinition; 2],
    pub release: HelmRelease,
    pub service_account_name: String,
    pub deployment_name: String,
}

/// Build the manifest for the given options.
///
/// Fails only when the cluster name is blank.
pub fn build(options: &InstallOptions) -> Result<Manifest> {
    options.validate()?;

    let crds = crds::all()?;
    let release = HelmRelease::new(options);
    debug!(
        "Built release {} for cluster {} in namespace {}",
        release.release_name, options.cluster_name, options.namespace
    );

    Ok(Manifest {
        options: options.clone(),
        crds,
        release,
        service_account_name: CONTROLLER_NAME.to_string(),
        deployment_name: CONTROLLER_NAME.to_string(),
    })
}

impl Manifest {
    /// Render the CRDs as a multi-document YAML stream
    pub fn crds_yaml(&self) -> Result<String> {
        let docs = self
            .crds
            .iter()
            .map(serde_yaml::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(docs.join("---\n"))
    }

    /// Write the CRD stream and the Helm values into `dir`, returning the written paths
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let crds_path = dir.join(files::CRDS);
        fs::write(&crds_path, self.crds_yaml()?)?;

        let values_path = dir.join(files::VALUES);
        fs::write(&values_path, self.release.values_yaml()?)?;

        info!(
            "Wrote {} and {}",
            crds_path.display(),
            values_path.display()
        );
        Ok(vec![crds_path, values_path])
    }
}
