use clap::Parser;
use compose_status::cli::status;
use compose_status::infra::config::default_home_dir;
use compose_status::{DockerAdapter, LocatorConfig, StatusService};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "compose-status",
    version,
    about = "Colorful status of the services declared in a Docker Compose file"
)]
struct Cli {
    /// Compose file to inspect (default: ~/compose.yaml, then ~/docker-compose.yaml)
    #[arg(long, env = "COMPOSE_FILE", value_name = "PATH")]
    compose_file: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = LocatorConfig::new(cli.compose_file, default_home_dir());
    let service = StatusService::new(Arc::new(DockerAdapter::new()));
    let mut stdout = std::io::stdout().lock();

    let result = status::run(&config, &service, &mut stdout);
    ExitCode::from(status::exit_status(result, &mut std::io::stderr()))
}
