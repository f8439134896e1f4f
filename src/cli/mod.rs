//! VM-006: CLI subcommands — run, items, scale.

use crate::core::render::{self, OutputFormat};
use crate::core::transform;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the incremented sequence and the widened sequence (default)
    Run {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::default())]
        format: OutputFormat,
    },

    /// Describe each item of a mixed sequence, one per line
    Items,

    /// Multiply NUMS[INDEX] by 5, falling back to INDEX when out of bounds
    Scale {
        /// Position to read
        index: usize,

        /// Input sequence
        #[arg(default_values_t = transform::SOURCE, allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            format: OutputFormat::default(),
        }
    }
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Run { format } => cmd_run(format),
        Commands::Items => cmd_items(),
        Commands::Scale { index, nums } => cmd_scale(&nums, index),
    }
}

fn cmd_run(format: OutputFormat) -> Result<(), String> {
    info!(?format, "running demonstration");
    for line in render::demo_lines(format)? {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_items() -> Result<(), String> {
    for line in render::item_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_scale(nums: &[i64], index: usize) -> Result<(), String> {
    info!(index, len = nums.len(), "scaling");
    let result = transform::scale_at(nums, index)?;
    println!("{}", result);
    Ok(())
}
