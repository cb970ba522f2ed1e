//! Provider configs
//!
//! Typed views over the opaque provider spec of a machine. A provider config
//! is decoded per platform, can report the failure domain it is placed in,
//! and can produce a copy of itself placed in a different failure domain.
//! Nothing outside this module reaches into provider spec internals.

mod aws;
mod azure;
mod gcp;
mod openstack;

pub use aws::AwsProviderConfig;
pub use azure::AzureProviderConfig;
pub use gcp::GcpProviderConfig;
pub use openstack::OpenStackProviderConfig;

use crate::error::{Error, Result};
use crate::failure_domain::FailureDomain;
use cpms_api::machine::v1beta1::MachineSpec;
use cpms_api::PlatformType;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{instrument, trace};

/// Decodes a machine provider spec and returns the failure domain it
/// describes.
#[instrument(level = "trace", skip(raw))]
pub fn decode_machine_provider_spec(
    raw: Option<&RawExtension>,
    platform: &PlatformType,
) -> Result<FailureDomain> {
    let raw = raw.ok_or(Error::MissingProviderSpec)?;
    let config = ProviderConfig::from_raw(raw, platform)?;
    let failure_domain = config.extract_failure_domain();

    trace!(failure_domain = %failure_domain, "Decoded provider spec");
    Ok(failure_domain)
}

/// Provider config of a machine on one of the supported platforms.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderConfig {
    Aws(AwsProviderConfig),
    Azure(AzureProviderConfig),
    Gcp(GcpProviderConfig),
    OpenStack(OpenStackProviderConfig),
}

impl ProviderConfig {
    /// Decodes a raw provider spec using the schema of `platform`.
    pub fn from_raw(raw: &RawExtension, platform: &PlatformType) -> Result<Self> {
        match platform {
            PlatformType::Aws => AwsProviderConfig::from_raw(raw).map(Self::Aws),
            PlatformType::Azure => AzureProviderConfig::from_raw(raw).map(Self::Azure),
            PlatformType::Gcp => GcpProviderConfig::from_raw(raw).map(Self::Gcp),
            PlatformType::OpenStack => OpenStackProviderConfig::from_raw(raw).map(Self::OpenStack),
            other => Err(Error::UnsupportedPlatformType(other.clone())),
        }
    }

    /// Decodes the provider spec held in a machine spec.
    pub fn from_machine_spec(spec: &MachineSpec, platform: &PlatformType) -> Result<Self> {
        let raw = spec
            .provider_spec
            .value
            .as_ref()
            .ok_or(Error::MissingProviderSpec)?;
        Self::from_raw(raw, platform)
    }

    pub fn platform_type(&self) -> PlatformType {
        match self {
            ProviderConfig::Aws(_) => PlatformType::Aws,
            ProviderConfig::Azure(_) => PlatformType::Azure,
            ProviderConfig::Gcp(_) => PlatformType::Gcp,
            ProviderConfig::OpenStack(_) => PlatformType::OpenStack,
        }
    }

    /// The failure domain this config places its machine in.
    pub fn extract_failure_domain(&self) -> FailureDomain {
        match self {
            ProviderConfig::Aws(config) => config.extract_failure_domain().into(),
            ProviderConfig::Azure(config) => config.extract_failure_domain().into(),
            ProviderConfig::Gcp(config) => config.extract_failure_domain().into(),
            ProviderConfig::OpenStack(config) => config.extract_failure_domain().into(),
        }
    }

    /// Returns a copy of this config placed in `failure_domain`.
    ///
    /// The failure domain must be for the same platform as the config.
    pub fn inject_failure_domain(&self, failure_domain: &FailureDomain) -> Result<Self> {
        match (self, failure_domain) {
            (ProviderConfig::Aws(config), FailureDomain::Aws(fd)) => {
                Ok(ProviderConfig::Aws(config.inject_failure_domain(fd)))
            }
            (ProviderConfig::Azure(config), FailureDomain::Azure(fd)) => {
                Ok(ProviderConfig::Azure(config.inject_failure_domain(fd)))
            }
            (ProviderConfig::Gcp(config), FailureDomain::Gcp(fd)) => {
                Ok(ProviderConfig::Gcp(config.inject_failure_domain(fd)))
            }
            (ProviderConfig::OpenStack(config), FailureDomain::OpenStack(fd)) => {
                Ok(ProviderConfig::OpenStack(config.inject_failure_domain(fd)))
            }
            _ => Err(Error::PlatformMismatch {
                expected: self.platform_type(),
                found: failure_domain.platform_type(),
            }),
        }
    }

    /// Serialises the config back into a raw provider spec.
    pub fn raw_config(&self) -> Result<RawExtension> {
        match self {
            ProviderConfig::Aws(config) => config.raw_config(),
            ProviderConfig::Azure(config) => config.raw_config(),
            ProviderConfig::Gcp(config) => config.raw_config(),
            ProviderConfig::OpenStack(config) => config.raw_config(),
        }
    }

    pub fn aws(&self) -> Option<&AwsProviderConfig> {
        match self {
            ProviderConfig::Aws(config) => Some(config),
            _ => None,
        }
    }

    pub fn azure(&self) -> Option<&AzureProviderConfig> {
        match self {
            ProviderConfig::Azure(config) => Some(config),
            _ => None,
        }
    }

    pub fn gcp(&self) -> Option<&GcpProviderConfig> {
        match self {
            ProviderConfig::Gcp(config) => Some(config),
            _ => None,
        }
    }

    pub fn openstack(&self) -> Option<&OpenStackProviderConfig> {
        match self {
            ProviderConfig::OpenStack(config) => Some(config),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(raw: &RawExtension, platform: PlatformType) -> Result<T> {
    T::deserialize(&raw.0).map_err(|source| Error::MalformedProviderSpec { platform, source })
}

fn encode<T: Serialize>(config: &T, platform: PlatformType) -> Result<RawExtension> {
    serde_json::to_value(config)
        .map(RawExtension)
        .map_err(|source| Error::EncodeProviderSpec { platform, source })
}
