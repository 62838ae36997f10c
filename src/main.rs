use clap::Parser;
use kubectl_resource_quota::cli::Cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let config = cli.into_config();
    if let Err(e) = kubectl_resource_quota::run(&config).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
