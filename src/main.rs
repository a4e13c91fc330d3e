//! ANNOBATCH CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch
//! loop, and exit with appropriate status. For programmatic use, prefer the
//! library API (`annobatch::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::parse_or_exit();
    cli::run(args)
}
