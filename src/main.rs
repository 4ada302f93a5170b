use anyhow::Result;
use clap::Parser;

use update_mcp_client::commands;

#[derive(Parser)]
#[clap(name = "update-mcp-client")]
#[clap(about = "Update mcp-client.min.mjs from the CDN")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let result = commands::update::run().map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
