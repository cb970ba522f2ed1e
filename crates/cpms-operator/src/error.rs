//! Error types for failure domain and provider config handling

use cpms_api::PlatformType;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure is permanent: nothing in this crate retries or recovers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported platform type: {0}")]
    UnsupportedPlatformType(PlatformType),

    #[error("missing failure domain configuration for platform {0}")]
    MissingFailureDomainConfig(PlatformType),

    #[error("machine is missing provider spec")]
    MissingProviderSpec,

    #[error("could not unmarshal {platform} provider spec: {source}")]
    MalformedProviderSpec {
        platform: PlatformType,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot inject {found} failure domain into {expected} provider config")]
    PlatformMismatch {
        expected: PlatformType,
        found: PlatformType,
    },

    #[error("could not marshal {platform} provider spec: {source}")]
    EncodeProviderSpec {
        platform: PlatformType,
        #[source]
        source: serde_json::Error,
    },

    #[error("error getting failure domain from machine {name}: {source}")]
    Machine {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The underlying error with any machine context stripped.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Machine { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Name of the machine this error was raised for, if any.
    pub fn machine_name(&self) -> Option<&str> {
        match self {
            Error::Machine { name, .. } => Some(name),
            _ => None,
        }
    }
}
