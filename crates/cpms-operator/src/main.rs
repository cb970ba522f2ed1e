//! Control Plane Machine Set Operator
//!
//! Offline tooling around the failure domain model: prints the CRDs, and
//! resolves failure domains from ControlPlaneMachineSet and Machine manifests
//! on disk.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use cpms_api::machine::v1::{ControlPlaneMachineSet, OpenShiftMachineV1Beta1MachineTemplate};
use cpms_api::machine::v1beta1::Machine;
use cpms_api::PlatformType;
use cpms_operator::{config::OperatorConfig, telemetry, FailureDomain, ProviderConfig};
use kube::{CustomResourceExt, ResourceExt};
use serde::Deserialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "cpms-operator")]
#[command(about = "Failure domain tooling for control plane machine sets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print CRD manifests to stdout
    Crds,
    /// Print the failure domains declared by a ControlPlaneMachineSet
    FailureDomains {
        /// ControlPlaneMachineSet manifest
        #[arg(long)]
        file: PathBuf,
    },
    /// Print the failure domain of each machine in a manifest stream
    Machines {
        /// Multi-document YAML of Machines
        #[arg(long)]
        file: PathBuf,
        /// Platform the machines run on (AWS, Azure, GCP, OpenStack)
        #[arg(long, env = "CPMS_PLATFORM")]
        platform: PlatformType,
    },
    /// Place a machine in one of the declared failure domains
    Inject {
        /// Machine manifest whose provider spec is used as the template
        #[arg(long)]
        machine: PathBuf,
        /// ControlPlaneMachineSet manifest declaring the failure domains
        #[arg(long)]
        cpms: PathBuf,
        /// Index of the declared failure domain to inject
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = OperatorConfig::from_env();
    telemetry::init_tracing(&config);

    let output = match cli.command {
        Commands::Crds => print_crds()?,
        Commands::FailureDomains { file } => {
            let cpms = parse_cpms(&read(&file)?)?;
            failure_domains(&cpms)?
        }
        Commands::Machines { file, platform } => {
            let machines = parse_machines(&read(&file)?)?;
            machine_failure_domains(&config, &machines, &platform)?
        }
        Commands::Inject {
            machine,
            cpms,
            index,
        } => {
            let cpms = parse_cpms(&read(&cpms)?)?;
            let machine: Machine = serde_yaml::from_str(&read(&machine)?)
                .context("Failed to parse Machine manifest")?;
            inject(&cpms, machine, index)?
        }
    };

    print!("{output}");
    Ok(())
}

fn print_crds() -> anyhow::Result<String> {
    let mut out = String::new();
    for crd in [ControlPlaneMachineSet::crd(), Machine::crd()] {
        writeln!(out, "---")?;
        out.push_str(&serde_yaml::to_string(&crd).context("Failed to serialize CRD")?);
    }
    Ok(out)
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_cpms(contents: &str) -> anyhow::Result<ControlPlaneMachineSet> {
    serde_yaml::from_str(contents).context("Failed to parse ControlPlaneMachineSet manifest")
}

/// Parses a `---` separated stream of Machines, skipping empty documents.
fn parse_machines(contents: &str) -> anyhow::Result<Vec<Machine>> {
    let mut machines = Vec::new();
    for (i, document) in serde_yaml::Deserializer::from_str(contents).enumerate() {
        let value = serde_yaml::Value::deserialize(document)
            .with_context(|| format!("Failed to parse document {i}"))?;
        if value.is_null() {
            continue;
        }
        let machine: Machine = serde_yaml::from_value(value)
            .with_context(|| format!("Document {i} is not a Machine"))?;
        machines.push(machine);
    }
    Ok(machines)
}

fn machine_template(
    cpms: &ControlPlaneMachineSet,
) -> anyhow::Result<&OpenShiftMachineV1Beta1MachineTemplate> {
    cpms.spec
        .template
        .openshift_machine_v1beta1_machine
        .as_ref()
        .with_context(|| format!("ControlPlaneMachineSet {} has no machine template", cpms.name_any()))
}

fn failure_domains(cpms: &ControlPlaneMachineSet) -> anyhow::Result<String> {
    let template = machine_template(cpms)?;
    let domains = FailureDomain::from_declaration(&template.failure_domains)?;
    info!(
        name = %cpms.name_any(),
        platform = %template.failure_domains.platform,
        count = domains.len(),
        "Resolved declared failure domains"
    );

    let mut out = String::new();
    for domain in &domains {
        writeln!(out, "{domain}")?;
    }
    Ok(out)
}

fn machine_failure_domains(
    config: &OperatorConfig,
    machines: &[Machine],
    platform: &PlatformType,
) -> anyhow::Result<String> {
    let machines: Vec<Machine> = machines
        .iter()
        .filter(|machine| {
            let in_namespace = machine
                .namespace()
                .map_or(true, |ns| ns == config.namespace);
            if !in_namespace {
                debug!(name = %machine.name_any(), "Skipping machine outside namespace");
            }
            in_namespace
        })
        .cloned()
        .collect();

    let domains = FailureDomain::from_machines(&machines, platform)?;
    info!(count = domains.len(), %platform, "Resolved machine failure domains");

    let mut out = String::new();
    for (machine, domain) in machines.iter().zip(&domains) {
        writeln!(out, "{}: {domain}", machine.name_any())?;
    }
    Ok(out)
}

fn inject(
    cpms: &ControlPlaneMachineSet,
    mut machine: Machine,
    index: usize,
) -> anyhow::Result<String> {
    let template = machine_template(cpms)?;
    let platform = &template.failure_domains.platform;
    let domains = FailureDomain::from_declaration(&template.failure_domains)?;
    let Some(domain) = domains.get(index) else {
        bail!(
            "failure domain index {index} out of range, {} declared",
            domains.len()
        );
    };

    let provider_config = ProviderConfig::from_machine_spec(&machine.spec, platform)
        .with_context(|| format!("Failed to decode provider spec of {}", machine.name_any()))?;
    let injected = provider_config.inject_failure_domain(domain)?;
    machine.spec.provider_spec.value = Some(injected.raw_config()?);

    info!(name = %machine.name_any(), failure_domain = %domain, "Injected failure domain");
    serde_yaml::to_string(&machine).context("Failed to serialize Machine")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPMS_YAML: &str = r#"
apiVersion: machine.openshift.io/v1
kind: ControlPlaneMachineSet
metadata:
  name: cluster
  namespace: openshift-machine-api
spec:
  replicas: 3
  state: Active
  selector:
    matchLabels:
      machine.openshift.io/cluster-api-machine-role: master
  template:
    machineType: machines_v1beta1_machine_openshift_io
    machines_v1beta1_machine_openshift_io:
      failureDomains:
        platform: AWS
        aws:
          - placement:
              availabilityZone: us-east-1a
            subnet:
              type: ID
              id: subnet-a
          - placement:
              availabilityZone: us-east-1b
            subnet:
              type: Filters
              filters:
                - name: tag:Name
                  values:
                    - private-b
          - placement:
              availabilityZone: us-east-1c
      metadata:
        labels:
          machine.openshift.io/cluster-api-machine-role: master
      spec:
        providerSpec:
          value:
            kind: AWSMachineProviderConfig
            instanceType: m6i.xlarge
            subnet:
              id: subnet-a
            placement:
              region: us-east-1
              availabilityZone: us-east-1a
"#;

    const MACHINES_YAML: &str = r#"
---
apiVersion: machine.openshift.io/v1beta1
kind: Machine
metadata:
  name: master-0
  namespace: openshift-machine-api
spec:
  providerSpec:
    value:
      subnet:
        id: subnet-a
      placement:
        availabilityZone: us-east-1a
---
apiVersion: machine.openshift.io/v1beta1
kind: Machine
metadata:
  name: worker-0
  namespace: other
spec:
  providerSpec:
    value:
      placement:
        availabilityZone: us-east-1b
---
apiVersion: machine.openshift.io/v1beta1
kind: Machine
metadata:
  name: master-1
  namespace: openshift-machine-api
spec:
  providerSpec:
    value:
      placement:
        availabilityZone: us-east-1c
---
"#;

    #[test]
    fn test_print_crds() {
        let out = print_crds().unwrap();
        assert!(out.contains("controlplanemachinesets.machine.openshift.io"));
        assert!(out.contains("machines.machine.openshift.io"));
    }

    #[test]
    fn test_failure_domains_command() {
        let cpms = parse_cpms(CPMS_YAML).unwrap();
        let out = failure_domains(&cpms).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "AWSFailureDomain{AvailabilityZone:us-east-1a, Subnet:{Type:ID, Value:subnet-a}}",
                "AWSFailureDomain{AvailabilityZone:us-east-1b, Subnet:{Type:Filters, Value:&[{Name:tag:Name Values:[private-b]}]}}",
                "AWSFailureDomain{AvailabilityZone:us-east-1c}",
            ]
        );
    }

    #[test]
    fn test_machines_command_filters_namespace() {
        let machines = parse_machines(MACHINES_YAML).unwrap();
        assert_eq!(machines.len(), 3);

        let out =
            machine_failure_domains(&OperatorConfig::default(), &machines, &PlatformType::Aws)
                .unwrap();
        assert_eq!(
            out,
            "master-0: AWSFailureDomain{AvailabilityZone:us-east-1a, Subnet:{Type:ID, Value:subnet-a}}\n\
             master-1: AWSFailureDomain{AvailabilityZone:us-east-1c}\n"
        );
    }

    #[test]
    fn test_inject_command() {
        let cpms = parse_cpms(CPMS_YAML).unwrap();
        let machine = parse_machines(MACHINES_YAML).unwrap().remove(0);

        let out = inject(&cpms, machine, 1).unwrap();
        let machine: Machine = serde_yaml::from_str(&out).unwrap();
        let domain = cpms_operator::decode_machine_provider_spec(
            machine.spec.provider_spec.value.as_ref(),
            &PlatformType::Aws,
        )
        .unwrap();
        assert_eq!(
            domain.to_string(),
            "AWSFailureDomain{AvailabilityZone:us-east-1b, Subnet:{Type:Filters, Value:&[{Name:tag:Name Values:[private-b]}]}}"
        );
    }

    #[test]
    fn test_inject_index_out_of_range() {
        let cpms = parse_cpms(CPMS_YAML).unwrap();
        let machine = parse_machines(MACHINES_YAML).unwrap().remove(0);
        let err = inject(&cpms, machine, 7).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
