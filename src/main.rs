// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lbc_manifests::constants::files;
use lbc_manifests::{build, InstallOptions};

/// Generate the CRDs and Helm release for the AWS Load Balancer Controller
#[derive(Parser, Debug)]
#[command(name = "lbc-manifests", version)]
struct Cli {
    /// Kubernetes cluster name; falls back to CLUSTER_NAME and friends when omitted
    #[arg(long)]
    cluster_name: Option<String>,

    /// Namespace to install the release into
    #[arg(long)]
    namespace: Option<String>,

    /// Helm chart version, latest when empty
    #[arg(long)]
    chart_version: Option<String>,

    /// Do not let the chart create the service account
    #[arg(long)]
    no_service_account: bool,

    /// Read options from a YAML file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Write crds.yaml and values.yaml into this directory instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the Helm values document instead of the CRDs
    #[arg(long, conflicts_with = "output")]
    print_values: bool,
}

impl Cli {
    fn install_options(&self) -> Result<InstallOptions> {
        self.install_options_with(|key| std::env::var(key).ok())
    }

    /// Resolve options from the file, flags or `lookup` (the environment in production)
    fn install_options_with<F>(&self, lookup: F) -> Result<InstallOptions>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = if let Some(path) = &self.config {
            InstallOptions::from_file(path)?
        } else if let Some(name) = &self.cluster_name {
            InstallOptions::new(name.clone())
        } else {
            InstallOptions::from_lookup(lookup)?
        };

        // Flags override file and environment values
        if let Some(name) = &self.cluster_name {
            options.cluster_name = name.clone();
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = namespace.clone();
        }
        if let Some(version) = &self.chart_version {
            options.chart_version = version.clone();
        }
        if self.no_service_account {
            options.create_service_account = false;
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean YAML stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.install_options()?;
    info!(
        "Generating manifests: cluster_name={}, namespace={}, chart_version={:?}",
        options.cluster_name, options.namespace, options.chart_version
    );

    let manifest = build(&options).context("Failed to build manifests")?;

    match &cli.output {
        Some(dir) => {
            manifest
                .write_to(dir)
                .with_context(|| format!("Failed to write manifests to {}", dir.display()))?;
            let command = manifest.release.template_command(&dir.join(files::VALUES));
            info!("Render the release with: {}", command);
        }
        None => {
            let document = if cli.print_values {
                manifest.release.values_yaml()?
            } else {
                manifest.crds_yaml()?
            };
            std::io::stdout()
                .write_all(document.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
