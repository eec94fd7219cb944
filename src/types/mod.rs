// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed models of the `elbv2.k8s.aws` custom resources.

pub mod ingress_class_params;
pub mod target_group_binding;

pub use ingress_class_params::{IngressClassParams, IngressClassParamsSpec};
pub use target_group_binding::{TargetGroupBinding, TargetGroupBindingSpec, TargetGroupBindingStatus};
