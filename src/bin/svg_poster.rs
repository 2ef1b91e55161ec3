use std::path::PathBuf;
use std::process;

use clap::Parser;

use cast_polish::poster::{PosterOutcome, wrap_in_place};
use cast_polish::util::parse_f64_or;

/// Wrap a rendered terminal SVG in window chrome with a fading caption
#[derive(Parser, Debug)]
#[command(
    name = "svg-poster",
    about = "Wrap a rendered terminal SVG in window chrome with a fading caption"
)]
struct Cli {
    /// SVG file to rewrite in place
    #[arg(short = 'i', long = "in")]
    in_path: PathBuf,

    /// Seconds before the caption overlay fades out; garbage falls back to 0
    #[arg(long, env = "POSTER_DELAY", default_value = "1.5")]
    delay: String,
}

fn main() {
    let cli = Cli::parse();
    let delay = parse_f64_or(&cli.delay, 0.0).max(0.0);

    match wrap_in_place(&cli.in_path, delay) {
        Ok(PosterOutcome::Wrapped) => {
            let name = cli
                .in_path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("[svg-poster] Successfully generated {}", name);
        }
        Ok(PosterOutcome::Skipped) => {
            let topic = cli
                .in_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            eprintln!("[svg-poster] no known heading for {}", topic);
        }
        Err(err) => {
            eprintln!("[svg-poster] {}", err);
            process::exit(1);
        }
    }
}
