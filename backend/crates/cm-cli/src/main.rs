//! clinic - clinic management demo CLI
//!
//! Runs the sign-in flow and the role-based views against in-memory
//! services seeded with the demo accounts, printing JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the admin-medical demo account
//! clinic sign-in --email adminmedico@clinica.com --password demo123 --pretty
//!
//! # Menu entries a physician sees
//! clinic menu --role medico
//! ```

use cm_cli::{App, Cli, Result as CliErrorResult, logger};
use cm_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: cm_cli::Commands) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config).await?;
    app.run(command).await
}
