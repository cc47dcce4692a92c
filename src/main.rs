use clap::Parser;

use clipshelf_lib::bootstrap::{self, run::resolve_app_paths};
use clipshelf_lib::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let paths = resolve_app_paths()?;

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(Some(paths.logs_dir.as_path())) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    bootstrap::run(cli, &paths).await
}
