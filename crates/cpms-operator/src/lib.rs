//! Control Plane Machine Set Operator Library
//!
//! Failure domain model and provider config translation for the control
//! plane machine set operator. Everything here is synchronous and side
//! effect free: callers hand in declarations and machines, and get back
//! failure domains to compare or provider specs to create machines from.
//!
//! - [`failure_domain`]: platform neutral failure domains and the AWS subnet
//!   reference conversion between API versions.
//! - [`provider_config`]: per-platform provider spec codecs.

pub mod config;
pub mod error;
pub mod failure_domain;
pub mod provider_config;
pub mod telemetry;

pub use error::{Error, Result};
pub use failure_domain::FailureDomain;
pub use provider_config::{decode_machine_provider_spec, ProviderConfig};
