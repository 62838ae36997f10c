use crate::config::QuotaConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kubectl-resource-quota")]
#[command(version = crate::VERSION)]
#[command(about = "View resource quotas for Kubernetes namespaces")]
#[command(long_about = "A kubectl plugin to display resource quota information in a formatted table with usage percentages.")]
pub struct Cli {
    /// Namespace(s) to check quotas for. Use comma-separated for multiple: ns1,ns2,ns3
    #[arg(short, long, value_name = "NAMESPACES")]
    pub namespaces: String,

    /// Path to kubeconfig file
    #[arg(long, value_name = "FILE")]
    pub kubeconfig: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        env_logger::Builder::from_default_env()
            .filter_level(self.log_level())
            .filter_module("kube_client", self.kube_client_level())
            .init();
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// kube-rs logs failed requests itself; at default verbosity the inline
    /// namespace error is the only report.
    fn kube_client_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Off,
            _ => self.log_level(),
        }
    }

    /// Fold the parsed arguments into the run configuration.
    pub fn into_config(self) -> QuotaConfig {
        QuotaConfig::new(&self.namespaces, self.kubeconfig)
    }
}
