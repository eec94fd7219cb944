// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group served by the load balancer controller CRDs
pub const GROUP: &str = "elbv2.k8s.aws";

/// Name shared by the controller's service account and deployment
pub const CONTROLLER_NAME: &str = "aws-load-balancer-controller";

/// Annotation stamped on the CRDs by the generator that produced them
pub const CONTROLLER_GEN_ANNOTATION: &str = "controller-gen.kubebuilder.io/version";

/// Helm release coordinates
pub mod helm {
    pub const CHART: &str = "eks/aws-load-balancer-controller";
    pub const RELEASE_NAME: &str = super::CONTROLLER_NAME;
}

/// Defaults applied to omitted install options
pub mod defaults {
    pub const NAMESPACE: &str = "default";
    /// An empty version lets Helm pick the latest chart
    pub const CHART_VERSION: &str = "";
    pub const CREATE_SERVICE_ACCOUNT: bool = true;
}

/// Environment variables read by `InstallOptions::from_env`
pub mod env {
    pub const CLUSTER_NAME: &str = "CLUSTER_NAME";
    pub const NAMESPACE: &str = "NAMESPACE";
    pub const CHART_VERSION: &str = "CHART_VERSION";
    pub const CREATE_SERVICE_ACCOUNT: &str = "CREATE_SERVICE_ACCOUNT";
}

/// File names used when writing manifests to a directory
pub mod files {
    pub const CRDS: &str = "crds.yaml";
    pub const VALUES: &str = "values.yaml";
}
