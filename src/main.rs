mod error;
mod fret;
mod note;

use clap::Parser;
use error::FretError;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "find-the-fret",
    about = "Find the fret that sounds a note on one or more open strings"
)]
#[command(version)]
struct Cli {
    /// Note to find (e.g. C, F#, Bb)
    target: String,

    /// Open-string notes, in the order to report them
    #[arg(required = true, num_args = 1..)]
    strings: Vec<String>,

    /// Report each string name once; a repeated name keeps its last result
    #[arg(long)]
    unique: bool,

    /// Log each lookup to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve every string before rendering, so an unknown note yields no output.
fn run(cli: &Cli) -> Result<String, FretError> {
    if cli.unique {
        let frets = fret::frets_by_string(&cli.target, &cli.strings)?;
        Ok(render(&cli.target, frets.iter().map(|(s, f)| (s.as_str(), *f))))
    } else {
        let frets = fret::frets_for_strings(&cli.target, &cli.strings)?;
        Ok(render(&cli.target, frets.iter().map(|(s, f)| (s.as_str(), *f))))
    }
}

/// `RUST_LOG` wins over the default level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn render<'a>(target: &str, frets: impl IntoIterator<Item = (&'a str, u8)>) -> String {
    let mut out = format!("{} is\n", target);
    for (string, position) in frets {
        out.push_str(&format!("  fret {} of the {} string\n", position, string));
    }
    out
}
