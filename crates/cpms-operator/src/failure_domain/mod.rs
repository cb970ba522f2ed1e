//! Failure domains
//!
//! A [`FailureDomain`] is a platform neutral handle on where a control plane
//! machine is placed. Failure domains are built either from the declaration
//! in a `ControlPlaneMachineSet` or from the provider specs of existing
//! machines, and compared with `==` to work out which declared domains are
//! in use.

mod aws;

pub use aws::{aws_resource_reference_to_v1, aws_resource_reference_to_v1beta1};

use crate::error::{Error, Result};
use crate::provider_config::decode_machine_provider_spec;
use cpms_api::machine::v1::{
    AwsFailureDomain, AzureFailureDomain, FailureDomains, GcpFailureDomain,
    OpenStackFailureDomain,
};
use cpms_api::machine::v1beta1::Machine;
use cpms_api::PlatformType;
use kube::ResourceExt;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Placement of a machine on one of the supported platforms.
///
/// Two failure domains are equal only when they are on the same platform and
/// their payloads match field by field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureDomain {
    Aws(AwsFailureDomain),
    Azure(AzureFailureDomain),
    Gcp(GcpFailureDomain),
    OpenStack(OpenStackFailureDomain),
}

impl FailureDomain {
    /// Builds the failure domains declared for the selected platform, in
    /// declaration order.
    ///
    /// An unset platform declares no failure domains and yields an empty list.
    #[instrument(level = "debug", skip_all, fields(platform = %failure_domains.platform))]
    pub fn from_declaration(failure_domains: &FailureDomains) -> Result<Vec<FailureDomain>> {
        let platform = &failure_domains.platform;
        let domains = match platform {
            PlatformType::Aws => from_list(platform, failure_domains.aws.as_deref(), Self::Aws)?,
            PlatformType::Azure => {
                from_list(platform, failure_domains.azure.as_deref(), Self::Azure)?
            }
            PlatformType::Gcp => from_list(platform, failure_domains.gcp.as_deref(), Self::Gcp)?,
            PlatformType::OpenStack => from_list(
                platform,
                failure_domains.openstack.as_deref(),
                Self::OpenStack,
            )?,
            PlatformType::Unset => {
                trace!("No failure domain platform set");
                Vec::new()
            }
            PlatformType::Other(_) => return Err(Error::UnsupportedPlatformType(platform.clone())),
        };

        debug!(count = domains.len(), "Built declared failure domains");
        Ok(domains)
    }

    /// Builds the failure domain of every machine, in machine order.
    ///
    /// Fails on the first machine whose provider spec is missing or cannot be
    /// decoded; the error names that machine.
    #[instrument(level = "debug", skip(machines), fields(machines = machines.len()))]
    pub fn from_machines(machines: &[Machine], platform: &PlatformType) -> Result<Vec<FailureDomain>> {
        machines
            .iter()
            .map(|machine| {
                let raw = machine.spec.provider_spec.value.as_ref();
                decode_machine_provider_spec(raw, platform).map_err(|source| Error::Machine {
                    name: machine.name_any(),
                    source: Box::new(source),
                })
            })
            .collect()
    }

    pub fn platform_type(&self) -> PlatformType {
        match self {
            FailureDomain::Aws(_) => PlatformType::Aws,
            FailureDomain::Azure(_) => PlatformType::Azure,
            FailureDomain::Gcp(_) => PlatformType::Gcp,
            FailureDomain::OpenStack(_) => PlatformType::OpenStack,
        }
    }

    pub fn as_aws(&self) -> Option<&AwsFailureDomain> {
        match self {
            FailureDomain::Aws(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_azure(&self) -> Option<&AzureFailureDomain> {
        match self {
            FailureDomain::Azure(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_gcp(&self) -> Option<&GcpFailureDomain> {
        match self {
            FailureDomain::Gcp(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_openstack(&self) -> Option<&OpenStackFailureDomain> {
        match self {
            FailureDomain::OpenStack(fd) => Some(fd),
            _ => None,
        }
    }
}

fn from_list<T: Clone>(
    platform: &PlatformType,
    list: Option<&[T]>,
    build: fn(T) -> FailureDomain,
) -> Result<Vec<FailureDomain>> {
    let list = list.ok_or_else(|| Error::MissingFailureDomainConfig(platform.clone()))?;
    Ok(list.iter().cloned().map(build).collect())
}

impl fmt::Display for FailureDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureDomain::Aws(fd) => f.write_str(&aws::render(fd)),
            FailureDomain::Azure(fd) => write!(f, "AzureFailureDomain{{Zone:{}}}", fd.zone),
            FailureDomain::Gcp(fd) => write!(f, "GCPFailureDomain{{Zone:{}}}", fd.zone),
            FailureDomain::OpenStack(fd) => write!(
                f,
                "OpenStackFailureDomain{{AvailabilityZone:{}}}",
                fd.availability_zone
            ),
        }
    }
}

impl From<AwsFailureDomain> for FailureDomain {
    fn from(fd: AwsFailureDomain) -> Self {
        FailureDomain::Aws(fd)
    }
}

impl From<AzureFailureDomain> for FailureDomain {
    fn from(fd: AzureFailureDomain) -> Self {
        FailureDomain::Azure(fd)
    }
}

impl From<GcpFailureDomain> for FailureDomain {
    fn from(fd: GcpFailureDomain) -> Self {
        FailureDomain::Gcp(fd)
    }
}

impl From<OpenStackFailureDomain> for FailureDomain {
    fn from(fd: OpenStackFailureDomain) -> Self {
        FailureDomain::OpenStack(fd)
    }
}
