//! `pynight` command-line entry point

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pynight_core::{
    compose, duplicate, entry_point, logging, plus_one, read_file, square, DemoConfig, ExecutionContext, Stage,
    UnaryFunction,
};
use std::io::{self, Write};
use std::path::PathBuf;

/// Smallest `compose` argument both compositions handle without overflow
const COMPOSE_MIN: i64 = -3_037_000_499;
/// Largest `compose` argument; `square(plus_one(x))` overflows one above
const COMPOSE_MAX: i64 = 3_037_000_498;

fn cli() -> Command {
    Command::new("pynight")
        .version(pynight_core::VERSION)
        .about("Intro-programming demo: functions, wrappers, scoped reads and container protocols")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("run")
                .about("Run the demonstration routine")
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .action(ArgAction::SetTrue)
                        .help("Print the debug marker and log at debug level"),
                )
                .arg(
                    Arg::new("stage")
                        .long("stage")
                        .value_parser(value_parser!(Stage))
                        .help("Which demo to run: basics, decorators or full"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Text file to read in the scoped-read section"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML configuration file"),
                ),
        )
        .subcommand(
            Command::new("compose")
                .about("Show both compositions of square and plus_one")
                .arg(
                    Arg::new("x")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64).range(COMPOSE_MIN..=COMPOSE_MAX))
                        .help("Argument to apply the compositions to"),
                ),
        )
        .subcommand(
            Command::new("duplicate")
                .about("Repeat an item n times")
                .arg(Arg::new("item").required(true).help("Item to repeat"))
                .arg(
                    Arg::new("n")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Number of copies"),
                ),
        )
        .subcommand(
            Command::new("read")
                .about("Print a file through the scoped read")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("File to read"),
                ),
        )
}

fn run_config(args: Option<&ArgMatches>) -> anyhow::Result<DemoConfig> {
    let Some(args) = args else {
        return Ok(DemoConfig::default());
    };

    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => DemoConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if args.get_flag("debug") {
        config.debug = true;
    }
    if let Some(stage) = args.get_one::<Stage>("stage") {
        config.stage = *stage;
    }
    if let Some(path) = args.get_one::<PathBuf>("file") {
        config.input_file = Some(path.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("compose", args)) => {
            logging::init(false);
            let x = *args.get_one::<i64>("x").context("missing x")?;
            writeln!(out, "square(plus_one({x})) = {}", compose(square, plus_one).call(x))?;
            writeln!(out, "plus_one(square({x})) = {}", compose(plus_one, square).call(x))?;
        }
        Some(("duplicate", args)) => {
            logging::init(false);
            let item = args.get_one::<String>("item").context("missing item")?;
            let n = *args.get_one::<i64>("n").context("missing n")?;
            writeln!(out, "{:?}", duplicate(item, n))?;
        }
        Some(("read", args)) => {
            logging::init(false);
            let path = args.get_one::<PathBuf>("path").context("missing path")?;
            let contents = read_file(path).with_context(|| format!("reading {}", path.display()))?;
            write!(out, "{contents}")?;
        }
        other => {
            let config = run_config(other.map(|(_, args)| args))?;
            logging::init(config.debug);
            tracing::debug!(?config, "running demo");
            entry_point(ExecutionContext::Direct, &config, &mut out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn run_flags_override_defaults() {
        let matches = cli().get_matches_from(["pynight", "run", "--debug", "--stage", "basics", "--file", "in.txt"]);
        let config = run_config(matches.subcommand_matches("run")).unwrap();

        assert!(config.debug);
        assert_eq!(config.stage, Stage::Basics);
        assert_eq!(config.input_file, Some(PathBuf::from("in.txt")));
    }

    #[test]
    fn no_subcommand_uses_defaults() {
        let config = run_config(None).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn negative_duplicate_count_parses() {
        let matches = cli().get_matches_from(["pynight", "duplicate", "cat", "-2"]);
        let args = matches.subcommand_matches("duplicate").unwrap();
        assert_eq!(args.get_one::<i64>("n"), Some(&-2));
    }

    #[test]
    fn compose_rejects_overflowing_argument() {
        let err = cli().try_get_matches_from(["pynight", "compose", "4000000000"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let below = (COMPOSE_MIN - 1).to_string();
        assert!(cli().try_get_matches_from(["pynight", "compose", below.as_str()]).is_err());
    }

    #[test]
    fn compose_bounds_are_safe() {
        for bound in [COMPOSE_MIN, COMPOSE_MAX] {
            let text = bound.to_string();
            let matches = cli().get_matches_from(["pynight", "compose", text.as_str()]);
            let x = *matches.subcommand_matches("compose").unwrap().get_one::<i64>("x").unwrap();
            assert_eq!(x, bound);

            let lhs = (x + 1).checked_mul(x + 1);
            let rhs = x.checked_mul(x).and_then(|sq| sq.checked_add(1));
            assert_eq!(lhs, Some(compose(square, plus_one).call(x)));
            assert_eq!(rhs, Some(compose(plus_one, square).call(x)));
        }
    }
}
