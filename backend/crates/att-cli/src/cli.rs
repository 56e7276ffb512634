use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "att")]
#[command(about = "Attendance gateway CLI and door device simulator")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Gateway URL
    #[arg(
        long,
        global = true,
        env = "ATT_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    pub(crate) server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
