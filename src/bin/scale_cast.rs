use std::path::PathBuf;
use std::process;

use clap::Parser;

use cast_polish::cast::rescale::{ScaleOptions, rescale_file};

/// Scale the timing in an asciinema v2 cast file
#[derive(Parser, Debug)]
#[command(
    name = "scale-cast",
    about = "Scale the timing in an asciinema v2 cast file"
)]
struct Cli {
    /// Input cast file
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output cast file (missing parent directories are created)
    #[arg(long = "out")]
    out_path: PathBuf,

    /// Time scale factor; values below 0.01 are clamped, garbage falls back
    /// to the default
    #[arg(long, env = "SLOW", default_value = "2")]
    factor: String,

    /// Offset added to every timestamp, in seconds
    #[arg(long, env = "PREROLL", default_value = "0")]
    preroll: String,
}

fn main() {
    let cli = Cli::parse();
    let opts = ScaleOptions::from_raw(&cli.factor, &cli.preroll);

    if let Err(err) = rescale_file(&cli.in_path, &cli.out_path, opts) {
        eprintln!("[scale-cast] {}", err);
        process::exit(1);
    }

    eprintln!(
        "[scale-cast] factor={} preroll={} in={} out={}",
        opts.factor,
        opts.preroll,
        cli.in_path.display(),
        cli.out_path.display()
    );
}
