use std::path::PathBuf;
use std::process;

use clap::Parser;

use cast_polish::cast::height::{DEFAULT_ROWS, patch_height_file};

/// Overwrite the header row count of an asciinema v2 cast file
#[derive(Parser, Debug)]
#[command(
    name = "set-height",
    about = "Overwrite the header row count of an asciinema v2 cast file"
)]
struct Cli {
    /// Input cast file
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output cast file
    #[arg(long = "out")]
    out_path: PathBuf,

    /// Terminal height in rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,
}

fn main() {
    // Usage errors exit 1 here; help and version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = patch_height_file(&cli.in_path, &cli.out_path, cli.rows) {
        eprintln!("[set-height] {}", err);
        process::exit(1);
    }

    eprintln!(
        "[set-height] Wrote cast with height={} to {}",
        cli.rows,
        cli.out_path.display()
    );
}
