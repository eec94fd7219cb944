// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "elbv2.k8s.aws",
    version = "v1beta1",
    kind = "IngressClassParams",
    plural = "ingressclassparams"
)]
#[kube(printcolumn = r#"{"name":"GROUP-NAME","type":"string","description":"The Ingress Group name","jsonPath":".spec.group.name"}"#)]
#[kube(printcolumn = r#"{"name":"SCHEME","type":"string","description":"The AWS Load Balancer scheme","jsonPath":".spec.scheme"}"#)]
#[kube(printcolumn = r#"{"name":"IP-ADDRESS-TYPE","type":"string","description":"The AWS Load Balancer ipAddressType","jsonPath":".spec.ipAddressType"}"#)]
#[kube(printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#)]
#[serde(rename_all = "camelCase")]
pub struct IngressClassParamsSpec {
    /// Restricts which namespaces may use the IngressClass; absent or empty selects all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_selector: Option<LabelSelector>,
    /// IngressGroup shared by every Ingress of the IngressClass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<IngressGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<LoadBalancerScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<IpAddressType>,
    /// Tags applied to the AWS resources provisioned for the Ingresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct IngressGroup {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum LoadBalancerScheme {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "internet-facing")]
    InternetFacing,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IpAddressType {
    Ipv4,
    Dualstack,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl IngressClassParams {
    /// Name of the IngressGroup, if one is configured
    pub fn group_name(&self) -> Option<&str> {
        self.spec.group.as_ref().map(|g| g.name.as_str())
    }

    /// True when the namespace selector is absent or has no requirements
    pub fn selects_all_namespaces(&self) -> bool {
        self.spec
            .namespace_selector
            .as_ref()
            .map_or(true, |selector| {
                selector.match_labels.as_ref().map_or(true, |l| l.is_empty())
                    && selector
                        .match_expressions
                        .as_ref()
                        .map_or(true, |e| e.is_empty())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelectorRequirement;
    use kube::CustomResourceExt;
    use std::collections::BTreeMap;

    fn make_params(spec: IngressClassParamsSpec) -> IngressClassParams {
        IngressClassParams::new("alb", spec)
    }

    #[test]
    fn test_group_name_present() {
        let params = make_params(IngressClassParamsSpec {
            group: Some(IngressGroup {
                name: "shared".to_string(),
            }),
            ..Default::default()
        });

        assert_eq!(params.group_name(), Some("shared"));
    }

    #[test]
    fn test_group_name_absent() {
        let params = make_params(IngressClassParamsSpec::default());
        assert_eq!(params.group_name(), None);
    }

    #[test]
    fn test_selects_all_namespaces_without_selector() {
        let params = make_params(IngressClassParamsSpec::default());
        assert!(params.selects_all_namespaces());
    }

    #[test]
    fn test_selects_all_namespaces_with_empty_selector() {
        let params = make_params(IngressClassParamsSpec {
            namespace_selector: Some(LabelSelector {
                match_labels: Some(BTreeMap::new()),
                match_expressions: None,
            }),
            ..Default::default()
        });

        assert!(params.selects_all_namespaces());
    }

    #[test]
    fn test_selects_all_namespaces_with_labels() {
        let params = make_params(IngressClassParamsSpec {
            namespace_selector: Some(LabelSelector {
                match_labels: Some(BTreeMap::from([("team".to_string(), "web".to_string())])),
                match_expressions: None,
            }),
            ..Default::default()
        });

        assert!(!params.selects_all_namespaces());
    }

    #[test]
    fn test_selects_all_namespaces_with_expressions() {
        let params = make_params(IngressClassParamsSpec {
            namespace_selector: Some(LabelSelector {
                match_labels: None,
                match_expressions: Some(vec![LabelSelectorRequirement {
                    key: "team".to_string(),
                    operator: "Exists".to_string(),
                    values: None,
                }]),
            }),
            ..Default::default()
        });

        assert!(!params.selects_all_namespaces());
    }

    #[test]
    fn test_spec_serializes_wire_names() {
        let spec = IngressClassParamsSpec {
            scheme: Some(LoadBalancerScheme::InternetFacing),
            ip_address_type: Some(IpAddressType::Dualstack),
            ..Default::default()
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"scheme": "internet-facing", "ipAddressType": "dualstack"})
        );
    }

    #[test]
    fn test_crd_is_cluster_scoped() {
        let crd = IngressClassParams::crd();

        assert_eq!(IngressClassParams::crd_name(), "ingressclassparams.elbv2.k8s.aws");
        assert_eq!(crd.spec.scope, "Cluster");
        assert_eq!(crd.spec.names.plural, "ingressclassparams");
    }
}
