use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use interpreter::{parser::parser::parse, render_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a source file and prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "interpreter", about = "Parse a source file into a syntax tree")]
struct Cli {
    /// Source file to parse; reads stdin when omitted
    path: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "interpreter=warn",
        1 => "interpreter=info",
        2 => "interpreter=debug",
        _ => "interpreter=trace",
    }
}

fn read_source(path: Option<&PathBuf>) -> io::Result<(String, String)> {
    match path {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            Ok((read_to_string(path)?, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("shell")))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = match read_source(cli.path.as_ref()) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("Failed to read source: {}", error);
            return ExitCode::from(2);
        }
    };

    let (program, errors) = parse(source.clone(), Some(file_name.clone()));
    info!(
        file = %file_name,
        statements = program.len(),
        errors = errors.len(),
        "parsed"
    );

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, &source, &file_name));
        }
        return ExitCode::FAILURE;
    }

    for stmt in &program {
        println!("{}", stmt);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "interpreter=warn");
        assert_eq!(directive_for_verbosity(1), "interpreter=info");
        assert_eq!(directive_for_verbosity(2), "interpreter=debug");
        assert_eq!(directive_for_verbosity(5), "interpreter=trace");
    }

    #[test]
    fn cli_parses_path_and_verbosity() {
        let cli = Cli::try_parse_from(["interpreter", "-vv", "main.lang"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.path, Some(PathBuf::from("main.lang")));
    }
}
