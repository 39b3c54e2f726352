//! Vertex 360 command-line driver
//!
//! - `report`: record an answers document, finish, print the report
//! - `questions`: list the questions visible for an answers document
//! - `validate`: run the catalog validation pass

mod input;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use input::AnswersDocument;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vertex_catalog::{Catalog, CatalogValidator, EngineConfig};
use vertex_core::{render_text, Session};

fn catalog_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("catalog")
            .long("catalog")
            .value_parser(value_parser!(PathBuf))
            .help("Catalog document (TOML, YAML or JSON); the built-in catalog otherwise"),
    )
    .arg(
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("Engine configuration overriding the catalog's constants"),
    )
}

fn cli() -> Command {
    Command::new("vertex")
        .version(vertex_core::VERSION)
        .about("Vertex 360 business maturity diagnostic")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            catalog_args(Command::new("report").about("Score an answers document and print the report"))
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .short('a')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Answers document with optional profile"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            catalog_args(Command::new("questions").about("List visible questions"))
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .short('a')
                        .value_parser(value_parser!(PathBuf))
                        .help("Answers recorded so far"),
                ),
        )
        .subcommand(catalog_args(Command::new("validate").about("Validate a catalog and configuration")))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Catalog from `--catalog`, constants replaced by `--config` when given
fn load_catalog(args: &ArgMatches) -> Result<Catalog> {
    let catalog = match args.get_one::<PathBuf>("catalog") {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let Some(path) = args.get_one::<PathBuf>("config") else {
        return Ok(catalog);
    };

    let config = EngineConfig::from_path(path)
        .with_context(|| format!("loading configuration {}", path.display()))?;
    Ok(Catalog::new(config, catalog.questions().to_vec())?)
}

fn session_for(args: &ArgMatches) -> Result<Session> {
    let mut session = Session::new(Arc::new(load_catalog(args)?));
    if let Some(path) = args.get_one::<PathBuf>("answers") {
        AnswersDocument::from_path(path)?.apply(&mut session)?;
    }
    Ok(session)
}

fn run_report(args: &ArgMatches) -> Result<()> {
    let mut session = session_for(args)?;
    session
        .finish()
        .context("cannot produce a report for an incomplete questionnaire")?;
    let report = session
        .report()
        .context("session finished without a frozen question set")?;

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn run_questions(args: &ArgMatches) -> Result<()> {
    let session = session_for(args)?;
    let shown = session.visible_questions();
    if shown.is_empty() {
        println!("Nothing to display.");
        return Ok(());
    }

    for question in shown {
        let mark = if session.answers().is_answered(&question.id) { "x" } else { " " };
        println!("[{mark}] {} ({}) {}", question.id, question.title, session_prompt(&session, &question.id));
        for option in &question.options {
            println!("      {} · {}", option.score, option.label);
        }
    }
    let progress = session.progress();
    println!("\n{}/{} answered", progress.answered, progress.visible);
    Ok(())
}

fn session_prompt(session: &Session, id: &str) -> String {
    session.render_prompt(id).unwrap_or_default()
}

/// Every defect of the catalog and configuration, not just the first
fn run_validate(args: &ArgMatches) -> Result<()> {
    let (mut config, questions) = match args.get_one::<PathBuf>("catalog") {
        Some(path) => Catalog::read_parts(path)
            .with_context(|| format!("reading catalog {}", path.display()))?,
        None => {
            let builtin = Catalog::builtin();
            (builtin.config().clone(), builtin.questions().to_vec())
        }
    };
    if let Some(path) = args.get_one::<PathBuf>("config") {
        config = EngineConfig::from_path(path)
            .with_context(|| format!("loading configuration {}", path.display()))?;
    }

    let problems = CatalogValidator::new().validate_all(&config, &questions);
    if problems.is_empty() {
        println!("OK: {} questions, {} dimensions", questions.len(), config.dimensions.len());
        return Ok(());
    }
    for problem in &problems {
        println!("error: {problem}");
    }
    anyhow::bail!("{} catalog problem(s)", problems.len())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("report", args)) => run_report(args),
        Some(("questions", args)) => run_questions(args),
        Some(("validate", args)) => run_validate(args),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn report_requires_answers() {
        let err = cli().try_get_matches_from(["vertex", "report"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn config_override_applies_to_builtin_catalog() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"advancement_threshold = 3.0\n").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let matches = cli()
            .try_get_matches_from(["vertex", "validate", "--config", path.as_str()])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let catalog = load_catalog(args).unwrap();
        assert_eq!(catalog.config().advancement_threshold, 3.0);
        assert_eq!(catalog.questions().len(), Catalog::builtin().questions().len());
    }

    #[test]
    fn demo_answers_produce_a_report() {
        let path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/answers.toml"));
        let mut session = Session::builtin();
        AnswersDocument::from_path(&path).unwrap().apply(&mut session).unwrap();
        session.finish().unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.company.as_deref(), Some("Northwind Bakery"));
        assert!(!report.can_advance);
        assert!(render_text(&report).contains("Northwind Bakery"));
    }
}
