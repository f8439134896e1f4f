//! vecmix CLI — sequence mapping and widening demonstration.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vecmix",
    version,
    about = "Map over an integer sequence and append a string to a widened one"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<vecmix::cli::Commands>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = vecmix::logging::init(cli.verbose) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = vecmix::cli::dispatch(cli.command.unwrap_or_default()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
