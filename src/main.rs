//! Bananas - manual benchmarking client for the Bananas framework servers
//!
//! This is the binary entry point. All logic lives in the library.

use bananas_core::prelude::*;
use bananas_tester::Args;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !bananas_tester::run(args).await? {
        // `--once` finished with an error result
        std::process::exit(1);
    }
    Ok(())
}
