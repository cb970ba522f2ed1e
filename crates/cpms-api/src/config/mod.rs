//! `config.openshift.io` API group

pub mod v1;
