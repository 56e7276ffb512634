//! att - attendance gateway CLI
//!
//! # Examples
//!
//! ```bash
//! # Enroll someone
//! att enroll --name alice alice1.jpg alice2.jpg
//!
//! # Act as a door camera, one frame every 3 seconds until Ctrl+C
//! att capture --image door.jpg --interval 3 --count 0
//!
//! # Follow attendance live
//! att watch
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use att_cli::{CaptureOptions, CliClientResult, Client, ImageFile, run_capture, watch};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    // Commands that print as they go return None
    let result: CliClientResult<Option<Value>> = match cli.command {
        Commands::Capture {
            images,
            interval,
            count,
        } => {
            let options = CaptureOptions {
                images,
                interval: Duration::from_secs(interval),
                count,
            };
            run_capture(&client, &options).await.map(|summary| {
                println!(
                    "{} capture(s): {} granted, {} denied, {} failed",
                    summary.total(),
                    summary.granted,
                    summary.denied,
                    summary.failed
                );
                None
            })
        }
        Commands::Enroll { name, images } => match ImageFile::load_all(&images) {
            Ok(images) => client.enroll(&name, images).await.map(Some),
            Err(e) => Err(e),
        },
        Commands::Faces => client.list_faces().await.map(Some),
        Commands::Recent { limit } => client.recent(limit).await.map(Some),
        Commands::Person { name, limit } => client.person(&name, limit).await.map(Some),
        Commands::Stats => client.stats().await.map(Some),
        Commands::StreamStats => client.stream_stats().await.map(Some),
        Commands::Watch => watch(&client.stream_url(), cli.pretty).await.map(|_| None),
    };

    match result {
        Ok(Some(value)) => {
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
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
