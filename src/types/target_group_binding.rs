// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "elbv2.k8s.aws", version = "v1beta1", kind = "TargetGroupBinding")]
#[kube(namespaced)]
#[kube(status = "TargetGroupBindingStatus")]
#[kube(printcolumn = r#"{"name":"SERVICE-NAME","type":"string","description":"The Kubernetes Service's name","jsonPath":".spec.serviceRef.name"}"#)]
#[kube(printcolumn = r#"{"name":"SERVICE-PORT","type":"string","description":"The Kubernetes Service's port","jsonPath":".spec.serviceRef.port"}"#)]
#[kube(printcolumn = r#"{"name":"TARGET-TYPE","type":"string","description":"The AWS TargetGroup's TargetType","jsonPath":".spec.targetType"}"#)]
#[kube(printcolumn = r#"{"name":"ARN","type":"string","description":"The AWS TargetGroup's Amazon Resource Name","jsonPath":".spec.targetGroupARN","priority":1}"#)]
#[kube(printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroupBindingSpec {
    #[serde(rename = "targetGroupARN")]
    pub target_group_arn: String,
    /// Inferred by the controller when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    pub service_ref: ServiceReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<TargetGroupBindingNetworking>,
    /// Restricts which nodes are registered for instance targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<LabelSelector>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Instance,
    Ip,
}

/// Reference to a Kubernetes Service and one of its ports
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct ServiceReference {
    pub name: String,
    pub port: IntOrString,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct TargetGroupBindingNetworking {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingress: Vec<NetworkingIngressRule>,
}

/// Traffic allowed to reach the TargetGroup's targets
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct NetworkingIngressRule {
    pub from: Vec<NetworkingPeer>,
    /// Empty means all ports over TCP
    pub ports: Vec<NetworkingPort>,
}

/// Exactly one of the peer kinds is expected to be set
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkingPeer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_block: Option<IpBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group: Option<SecurityGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct IpBlock {
    /// IPv4 or IPv6 CIDR
    pub cidr: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct SecurityGroup {
    #[serde(rename = "groupID")]
    pub group_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct NetworkingPort {
    /// All ports when unset; must be numeric for instance targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<IntOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkingProtocol>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum NetworkingProtocol {
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroupBindingStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl NetworkingPeer {
    /// A peer is valid when exactly one kind is set
    pub fn is_valid(&self) -> bool {
        self.ip_block.is_some() != self.security_group.is_some()
    }
}

impl TargetGroupBinding {
    /// Generation last observed by the controller
    pub fn observed_generation(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.observed_generation)
    }

    /// Check if the controller has caught up with the latest spec
    pub fn is_observed(&self) -> bool {
        match (self.metadata.generation, self.observed_generation()) {
            (Some(generation), Some(observed)) => observed >= generation,
            _ => false,
        }
    }

    /// True when every configured networking peer sets exactly one peer kind
    pub fn has_valid_peers(&self) -> bool {
        self.spec.networking.as_ref().map_or(true, |networking| {
            networking
                .ingress
                .iter()
                .flat_map(|rule| rule.from.iter())
                .all(NetworkingPeer::is_valid)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::CustomResourceExt;

    fn make_binding(generation: Option<i64>, status: Option<TargetGroupBindingStatus>) -> TargetGroupBinding {
        let mut binding = TargetGroupBinding::new(
            "web",
            TargetGroupBindingSpec {
                target_group_arn: "arn:aws:elasticloadbalancing:eu-west-1:123456789012:targetgroup/web/abc".to_string(),
                target_type: Some(TargetType::Ip),
                service_ref: ServiceReference {
                    name: "web".to_string(),
                    port: IntOrString::Int(80),
                },
                networking: None,
                node_selector: None,
            },
        );
        binding.metadata.namespace = Some("default".to_string());
        binding.metadata.generation = generation;
        binding.status = status;
        binding
    }

    fn make_status(observed: i64) -> TargetGroupBindingStatus {
        TargetGroupBindingStatus {
            observed_generation: Some(observed),
        }
    }

    #[test]
    fn test_is_observed_when_caught_up() {
        let binding = make_binding(Some(3), Some(make_status(3)));
        assert!(binding.is_observed());
    }

    #[test]
    fn test_is_observed_when_behind() {
        let binding = make_binding(Some(4), Some(make_status(3)));
        assert!(!binding.is_observed());
    }

    #[test]
    fn test_is_observed_without_status() {
        let binding = make_binding(Some(1), None);
        assert!(!binding.is_observed());
        assert_eq!(binding.observed_generation(), None);
    }

    #[test]
    fn test_has_valid_peers_without_networking() {
        let binding = make_binding(None, None);
        assert!(binding.has_valid_peers());
    }

    #[test]
    fn test_has_valid_peers_rejects_ambiguous_peer() {
        let mut binding = make_binding(None, None);
        binding.spec.networking = Some(TargetGroupBindingNetworking {
            ingress: vec![NetworkingIngressRule {
                from: vec![
                    NetworkingPeer {
                        ip_block: Some(IpBlock {
                            cidr: "10.0.0.0/16".to_string(),
                        }),
                        security_group: None,
                    },
                    NetworkingPeer {
                        ip_block: Some(IpBlock {
                            cidr: "10.1.0.0/16".to_string(),
                        }),
                        security_group: Some(SecurityGroup {
                            group_id: "sg-123".to_string(),
                        }),
                    },
                ],
                ports: vec![],
            }],
        });

        assert!(!binding.has_valid_peers());
    }

    #[test]
    fn test_spec_serializes_wire_names() {
        let mut binding = make_binding(None, None);
        binding.spec.networking = Some(TargetGroupBindingNetworking {
            ingress: vec![NetworkingIngressRule {
                from: vec![NetworkingPeer {
                    ip_block: None,
                    security_group: Some(SecurityGroup {
                        group_id: "sg-123".to_string(),
                    }),
                }],
                ports: vec![NetworkingPort {
                    port: Some(IntOrString::String("http".to_string())),
                    protocol: Some(NetworkingProtocol::Tcp),
                }],
            }],
        });

        let value = serde_json::to_value(&binding.spec).unwrap();
        assert_eq!(
            value["targetGroupARN"],
            "arn:aws:elasticloadbalancing:eu-west-1:123456789012:targetgroup/web/abc"
        );
        assert_eq!(value["targetType"], "ip");
        assert_eq!(value["serviceRef"]["port"], 80);
        assert_eq!(value["networking"]["ingress"][0]["from"][0]["securityGroup"]["groupID"], "sg-123");
        assert_eq!(value["networking"]["ingress"][0]["ports"][0]["port"], "http");
        assert_eq!(value["networking"]["ingress"][0]["ports"][0]["protocol"], "TCP");
    }

    #[test]
    fn test_crd_is_namespaced_with_status() {
        let crd = TargetGroupBinding::crd();

        assert_eq!(TargetGroupBinding::crd_name(), "targetgroupbindings.elbv2.k8s.aws");
        assert_eq!(crd.spec.scope, "Namespaced");
        let version = &crd.spec.versions[0];
        assert!(version
            .subresources
            .as_ref()
            .and_then(|s| s.status.as_ref())
            .is_some());
    }
}
