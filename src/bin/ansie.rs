//! Command-line interface for ansie
//!
//! Compiles ansie markup to ANSI terminal text (or canonical markup), or dumps the validated AST.
//!
//! Usage:
//!   ansie '<h1>Hello</h1>'                    - Compile markup given as an argument
//!   ansie -i page.ansie -o page.txt           - Compile a file into another file
//!   echo '<bold>x</bold>' | ansie --ast       - Print the validated AST as JSON
//!   ansie -t theme.yaml -f markup '<p>x</p>'  - Pick a theme and the output format

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use ansie::markup::{parse_ast, AnsieError, Compiler, Format, Theme};
use clap::{Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
enum CliError {
    #[error("input file `{}` not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read standard input: {0}")]
    Stdin(io::Error),

    #[error("failed to write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Stdout(io::Error),

    #[error("{0}")]
    Format(String),

    #[error("failed to serialize AST: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ansie(#[from] AnsieError),

    #[error("output is empty")]
    EmptyOutput,
}

fn cli() -> Command {
    Command::new("ansie")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile ansie markup to styled terminal output")
        .arg(
            Arg::new("markup")
                .value_name("MARKUP")
                .help("Markup to compile; read from --input or stdin when omitted")
                .index(1)
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read markup from FILE"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the result to FILE instead of stdout"),
        )
        .arg(
            Arg::new("ast")
                .long("ast")
                .action(ArgAction::SetTrue)
                .help("Print the validated AST as JSON instead of compiling"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["ansi", "markup"])
                .default_value("ansi")
                .help("Output format"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .short('t')
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("YAML theme file; unset entries fall back to the built-in theme"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("LEVEL")
                .default_value("warn")
                .help("Log filter, e.g. `debug` or `ansie=trace`"),
        )
}

fn main() {
    let matches = cli().get_matches();
    let level = matches
        .get_one::<String>("log")
        .map(String::as_str)
        .unwrap_or("warn");
    install_tracing(level);

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn install_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let ast = parse_ast(&source)?;

    let output = if matches.get_flag("ast") {
        let mut json = serde_json::to_string_pretty(&ast.to_raw())?;
        json.push('\n');
        json
    } else {
        let format = matches
            .get_one::<String>("format")
            .map_or(Ok(Format::Ansi), |name| name.parse::<Format>())
            .map_err(CliError::Format)?;
        let theme = match matches.get_one::<PathBuf>("theme") {
            Some(path) => Theme::from_yaml_file(path).map_err(AnsieError::from)?,
            None => Theme::default(),
        };
        Compiler::with_theme(theme)
            .compile(&ast, format)
            .map_err(AnsieError::from)?
    };

    if output.is_empty() {
        return Err(CliError::EmptyOutput);
    }
    write_output(matches, &output)
}

fn read_source(matches: &ArgMatches) -> Result<String, CliError> {
    if let Some(markup) = matches.get_one::<String>("markup") {
        return Ok(markup.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("input") {
        if !path.exists() {
            return Err(CliError::InputNotFound(path.clone()));
        }
        tracing::debug!(path = %path.display(), "reading markup");
        return fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        });
    }
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(CliError::Stdin)?;
    Ok(source)
}

fn write_output(matches: &ArgMatches, output: &str) -> Result<(), CliError> {
    match matches.get_one::<PathBuf>("output") {
        Some(path) => fs::write(path, output).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_markup_conflicts_with_input() {
        let result = cli().try_get_matches_from(["ansie", "<p>x</p>", "--input", "page.ansie"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let matches = cli().try_get_matches_from(["ansie", "x"]).unwrap();
        assert_eq!(matches.get_one::<String>("format").unwrap(), "ansi");
        assert_eq!(matches.get_one::<String>("log").unwrap(), "warn");
        assert!(!matches.get_flag("ast"));
    }
}
