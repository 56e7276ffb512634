use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Simulate a door camera posting frames for recognition
    Capture {
        /// Image file to send (repeat to cycle through several)
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,

        /// Seconds between captures
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Number of captures, 0 runs until Ctrl+C
        #[arg(long, default_value_t = 1)]
        count: u64,
    },

    /// Enroll a person with one or more images
    Enroll {
        #[arg(long)]
        name: String,

        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// List enrolled faces
    Faces,

    /// Most recent attendance records
    Recent {
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Attendance records of one person
    Person {
        name: String,

        #[arg(long)]
        limit: Option<i64>,
    },

    /// Attendance totals
    Stats,

    /// Connected stream subscribers
    StreamStats,

    /// Print attendance records live as they are recorded
    Watch,
}
