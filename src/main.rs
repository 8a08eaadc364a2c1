use clap::Parser;
use svnfleet::presentation::cli::{init_tracing, Cli, CliApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Run the CLI application
    let app = CliApp::new(cli);
    app.run().await
}
