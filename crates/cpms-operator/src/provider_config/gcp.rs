//! GCP provider config

use super::{decode, encode};
use crate::error::Result;
use cpms_api::machine::v1::GcpFailureDomain;
use cpms_api::machine::v1beta1::GcpMachineProviderSpec;
use cpms_api::PlatformType;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;

/// Provider spec of a GCP machine. Placement is the zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GcpProviderConfig {
    provider_config: GcpMachineProviderSpec,
}

impl GcpProviderConfig {
    pub(super) fn from_raw(raw: &RawExtension) -> Result<Self> {
        decode(raw, PlatformType::Gcp).map(Self::new)
    }

    pub fn new(provider_config: GcpMachineProviderSpec) -> Self {
        Self { provider_config }
    }

    pub fn inject_failure_domain(&self, fd: &GcpFailureDomain) -> Self {
        let mut config = self.clone();
        config.provider_config.zone = fd.zone.clone();
        config
    }

    pub fn extract_failure_domain(&self) -> GcpFailureDomain {
        GcpFailureDomain {
            zone: self.provider_config.zone.clone(),
        }
    }

    pub fn config(&self) -> &GcpMachineProviderSpec {
        &self.provider_config
    }

    pub fn raw_config(&self) -> Result<RawExtension> {
        encode(&self.provider_config, PlatformType::Gcp)
    }
}
