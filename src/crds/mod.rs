// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Embedded CustomResourceDefinition assets for the `elbv2.k8s.aws` group.
//!
//! The schema trees are shipped verbatim as YAML and decoded on demand, so
//! their content is fixed at build time and independent of install options.

use crate::constants::GROUP;
use crate::error::{ManifestError, Result};
use crate::types::{IngressClassParams, TargetGroupBinding};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{CustomResourceExt, Resource};
use tracing::debug;

const INGRESS_CLASS_PARAMS_ASSET: &str = "ingressclassparams.yaml";
const INGRESS_CLASS_PARAMS_YAML: &str = include_str!("../../assets/crds/ingressclassparams.yaml");

const TARGET_GROUP_BINDING_ASSET: &str = "targetgroupbindings.yaml";
const TARGET_GROUP_BINDING_YAML: &str = include_str!("../../assets/crds/targetgroupbindings.yaml");

/// CRD for the cluster-scoped `IngressClassParams` kind
pub fn ingress_class_params_crd() -> Result<CustomResourceDefinition> {
    decode::<IngressClassParams>(INGRESS_CLASS_PARAMS_ASSET, INGRESS_CLASS_PARAMS_YAML)
}

/// CRD for the namespaced `TargetGroupBinding` kind
pub fn target_group_binding_crd() -> Result<CustomResourceDefinition> {
    decode::<TargetGroupBinding>(TARGET_GROUP_BINDING_ASSET, TARGET_GROUP_BINDING_YAML)
}

/// Both CRDs, in installation order
pub fn all() -> Result<[CustomResourceDefinition; 2]> {
    Ok([ingress_class_params_crd()?, target_group_binding_crd()?])
}

/// Decode an embedded asset and check it describes the resource `K`.
fn decode<K>(asset: &'static str, source: &str) -> Result<CustomResourceDefinition>
where
    K: CustomResourceExt + Resource<DynamicType = ()>,
{
    let crd: CustomResourceDefinition =
        serde_yaml::from_str(source).map_err(|e| ManifestError::InvalidAsset {
            asset,
            reason: e.to_string(),
        })?;

    let invalid = |reason: String| ManifestError::InvalidAsset { asset, reason };

    let name = crd.metadata.name.as_deref().unwrap_or_default();
    if name != K::crd_name() {
        return Err(invalid(format!(
            "expected name {}, found {:?}",
            K::crd_name(),
            name
        )));
    }
    if crd.spec.group != GROUP {
        return Err(invalid(format!("expected group {}, found {}", GROUP, crd.spec.group)));
    }
    if crd.spec.names.kind != K::kind(&()) {
        return Err(invalid(format!(
            "expected kind {}, found {}",
            K::kind(&()),
            crd.spec.names.kind
        )));
    }

    debug!(
        "Decoded CRD {} with {} version(s)",
        name,
        crd.spec.versions.len()
    );
    Ok(crd)
}
