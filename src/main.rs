use clap::Parser;
use std::path::PathBuf;

use lgtmize::pipeline::{self, Options};

/// Stamp LGTM onto an image, writing `<name>-lgtm.<ext>` next to it.
#[derive(Parser, Debug)]
#[command(name = "lgtmize", version, about = "LGTMize image")]
struct Cli {
    /// Image to stamp
    source: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // usage errors go to stdout like every other failure
            println!("{}", e.render());
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = pipeline::run(&cli.source, &Options::default()) {
        log::error!("{e:?}");
        println!("{e}");
        std::process::exit(1);
    }
}
