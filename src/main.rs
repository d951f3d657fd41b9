//! # Bikeshare Explorer Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Resolve settings (JSON file + flags)
//!   ├─> Initialize logging (tracing)
//!   │
//!   ├─> If `report` was given:
//!   │   └─> Print statistics for that city and exit
//!   │
//!   └─> Otherwise:
//!       └─> Run the interactive session until the user declines to restart
//! ```
//!
//! Any error that reaches `main` (for example a missing dataset) ends the
//! program with a non-zero exit code.

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let settings = cli.settings()?;

    bikeshare::logging::init(settings.log_dir.as_deref())?;
    tracing::debug!(?settings, "settings resolved");

    cli::run(cli.command, &settings)
}
