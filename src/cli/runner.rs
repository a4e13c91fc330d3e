use std::io::Write;

use clap::CommandFactory;
use tracing::info;

use annobatch::api;
use annobatch::core::params::RunParams;
use annobatch::core::{Corpus, Pipeline};
use annobatch::io::encoding::resolve_encoding;

use super::args::{CliArgs, Config};

/// The batch loop: engine init, pipeline load, then every file strictly in
/// order. Nothing is caught; the first failure aborts the run with a
/// non-zero status, leaving later files unprocessed.
pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config: Config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            // Usage errors print the message and help, then exit 1, the same
            // way the argument parser itself does.
            eprintln!("{e}");
            eprintln!("{}", CliArgs::command().render_long_help());
            std::process::exit(1);
        }
    };

    if config.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Engine startup must precede any other engine call.
    annobatch::init()?;
    // Reject a bad encoding label before touching any file.
    resolve_encoding(config.encoding.as_deref())?;

    let pipeline = Pipeline::load(&config.gapp)?;
    info!(
        "pipeline `{}`, steps: {:?}",
        pipeline.name(),
        pipeline.step_names()
    );

    // One corpus for the whole run; process_file drains it after each file.
    let mut corpus = Corpus::new("annobatch corpus");
    let params = RunParams {
        encoding: config.encoding.clone(),
        annotation_kinds: config.annotation_kinds.clone(),
    };

    for input in &config.files {
        print!("Processing document {}...", input.display());
        std::io::stdout().flush()?;
        api::process_file(&pipeline, &mut corpus, input, &params)?;
        println!("done");
    }

    println!("All done");
    Ok(())
}
