//! Control Plane Machine Set API types
//!
//! Versioned serialization shapes consumed by the control plane machine set
//! operator. These mirror the `config.openshift.io` and
//! `machine.openshift.io` API groups closely enough to round-trip the
//! objects the operator reads and writes.
//!
//! - [`config::v1`]: cluster platform identification.
//! - [`machine::v1`]: the stable failure domain schema and the
//!   `ControlPlaneMachineSet` custom resource.
//! - [`machine::v1beta1`]: the `Machine` custom resource and the opaque,
//!   per-platform provider specs it carries.

pub mod config;
pub mod machine;

pub use config::v1::PlatformType;
