//! Veritas TUI entry point.

use clap::Parser;
use veritas_tui::runtime::Runtime;

/// Veritas terminal fact-check client
#[derive(Parser, Debug)]
#[command(name = "veritas-tui")]
#[command(about = "Terminal UI for checking claims against a fact-check backend")]
#[command(version)]
struct Args {
    /// Base URL of the fact-check backend
    #[arg(short, long, default_value = veritas_client::DEFAULT_SERVER_URL)]
    server: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let runtime = Runtime::new(args.server)?;
    Ok(runtime.run().await?)
}
