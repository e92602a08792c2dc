use clap::Parser;
use datastore::Catalog;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// In-memory data store driven by SQL-like commands, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text printed before reading each command.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Do not print the prompt (for piped scripts).
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match repl(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to read command: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Reads commands until the end of input, printing each result.
fn repl(args: &Args) -> io::Result<()> {
    let mut catalog = Catalog::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        if !args.quiet {
            write!(stdout, "{}", args.prompt)?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            return Ok(());
        };
        writeln!(stdout, "{}", datastore::process(&mut catalog, &line?))?;
    }
}
