// src/main.rs
use anyhow::Result;
use clap::Parser;
use smartnote::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    args.logging.configure_logging()?;
    run(args)
}
