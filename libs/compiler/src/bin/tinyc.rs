//! tinyc - Command-line front end for the tiny compiler
//!
//! Reads source from a file, an inline expression or stdin, and prints the
//! generated code or any intermediate stage.

use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tiny_compiler::{emit, CompileOptions, Stage};

#[derive(Parser)]
#[command(name = "tinyc")]
#[command(about = "Compile parenthesized prefix calls into C-like call syntax", long_about = None)]
struct Cli {
    /// Source file (reads stdin when neither FILE nor --expr is given)
    file: Option<PathBuf>,

    /// Compile this source text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Pipeline stage to print
    #[arg(long, value_enum, default_value_t = Stage::Code)]
    emit: Stage,

    /// Accept string literals that run to end of input
    #[arg(long)]
    lenient_strings: bool,

    /// Escape backslashes and quotes in generated strings
    #[arg(long)]
    escape_strings: bool,
}

impl Cli {
    /// Source text and the name used for it in messages.
    fn read_source(&self) -> io::Result<(String, String)> {
        if let Some(expr) = &self.expr {
            return Ok((expr.clone(), "<expr>".to_string()));
        }
        match &self.file {
            Some(path) => Ok((std::fs::read_to_string(path)?, path.display().to_string())),
            None => {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source)?;
                Ok((source, "<stdin>".to_string()))
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let (source, name) = match cli.read_source() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("tinyc: cannot read input: {err}");
            return ExitCode::from(1);
        }
    };

    let options = CompileOptions::default()
        .lenient_strings(cli.lenient_strings)
        .escape_strings(cli.escape_strings);

    match emit(&source, cli.emit, &options) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(stage = err.stage(), "compilation failed");
            eprintln!("{name}: {}", err.diagnostic());
            ExitCode::from(if err.is_internal() { 2 } else { 1 })
        }
    }
}
