//! Sequoia checker CLI
//!
//! Host driver around the `sequoia` rule: loads IR modules from JSON files,
//! runs the rule, and writes one diagnostic line per finding to stderr.
//! Findings never fail the run; the exit code reflects load errors only.
//!
//! # Usage
//!
//! ```bash
//! sequoia-check module.json [more.json ...]
//! sequoia-check --describe
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use sequoia_check::{CheckSequoiaUseCase, Module, Result, StderrSink, RULE_DESCRIPTION, RULE_ID};

#[derive(Parser)]
#[command(name = "sequoia-check")]
#[command(about = "Detects unsigned-to-signed call arguments flowing into pointer arithmetic", long_about = None)]
struct Cli {
    /// IR module files (JSON) to analyze
    #[arg(required_unless_present = "describe")]
    modules: Vec<PathBuf>,

    /// Print the rule identifier and description, then exit
    #[arg(long)]
    describe: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.describe {
        println!("{}: {}", RULE_ID, RULE_DESCRIPTION);
        return Ok(());
    }

    let usecase = CheckSequoiaUseCase::new();
    let mut sink = StderrSink::new();
    for path in &cli.modules {
        let json = fs::read_to_string(path)?;
        let module = Module::from_json_str(&json)?;
        usecase.execute(&module, &mut sink);
    }
    Ok(())
}
