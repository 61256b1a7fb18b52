//! `raci-enrich` command-line front end

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use raci_enrich::{EnrichConfig, Enricher};
use raci_model::{EnrichedDataset, Metrics};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .help("Path to the RACI YAML document")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(clap::value_parser!(PathBuf))
        .help("Path to a TOML enrichment config")
}

fn cli() -> Command {
    Command::new("raci-enrich")
        .version(raci_enrich::VERSION)
        .about("Canonicalize and cross-reference RACI matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("enrich")
                .about("Enrich a document and write JSON and CSV outputs")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .default_value("build")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Directory for output files"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Enrich a document and list every warning")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Exit with status 1 if any warning is recorded"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Print role, group and dependency metrics")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the metrics block as JSON"),
                ),
        )
        .subcommand(Command::new("schema").about("Print the JSON schema of the enriched dataset"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_pipeline(args: &ArgMatches) -> Result<EnrichedDataset> {
    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => raci_io::load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EnrichConfig::default(),
    };

    let input = args
        .get_one::<PathBuf>("input")
        .context("--input is required")?;
    let doc = raci_io::load_document(input)
        .with_context(|| format!("failed to load {}", input.display()))?;

    Enricher::new(config)
        .run(&doc)
        .with_context(|| format!("failed to enrich {}", input.display()))
}

fn cmd_enrich(args: &ArgMatches) -> Result<ExitCode> {
    let dataset = run_pipeline(args)?;
    let out_dir = args
        .get_one::<PathBuf>("out-dir")
        .context("--out-dir has a default")?;
    let paths = raci_io::write_outputs(out_dir, &dataset)
        .with_context(|| format!("failed to write outputs to {}", out_dir.display()))?;

    println!(
        "Enriched {} actions, {} roles, {} relationships, {} dependencies",
        dataset.actions.len(),
        dataset.roles.len(),
        dataset.relationships.len(),
        dataset.activity_dependencies.len(),
    );
    println!("Warnings: {}", dataset.metrics.warning_count());
    for path in paths.all() {
        println!("  wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: &ArgMatches) -> Result<ExitCode> {
    let dataset = run_pipeline(args)?;
    let metrics = &dataset.metrics;

    for warning in &metrics.action_warnings {
        println!("action: {warning}");
    }
    for warning in &metrics.dependency_warnings {
        println!("dependency: {warning}");
    }

    let count = metrics.warning_count();
    if count == 0 {
        println!("No warnings");
        return Ok(ExitCode::SUCCESS);
    }
    println!("{count} warning(s)");

    if args.get_flag("strict") {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn cmd_report(args: &ArgMatches) -> Result<ExitCode> {
    let dataset = run_pipeline(args)?;
    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&dataset.metrics)?);
    } else {
        print!("{}", render_report(&dataset.metrics)?);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_schema() -> Result<ExitCode> {
    let schema = schemars::schema_for!(EnrichedDataset);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(ExitCode::SUCCESS)
}

fn render_report(metrics: &Metrics) -> Result<String, std::fmt::Error> {
    use std::fmt::Write;

    let mut out = String::new();
    writeln!(out, "RACI Report")?;
    writeln!(out, "===========")?;
    writeln!(out)?;

    writeln!(out, "Roles:")?;
    for role in &metrics.role_summary {
        let c = &role.counts;
        writeln!(
            out,
            "  {:<24} total {:>3}  R {} A {} C {} I {}",
            role.role_name, role.total_assignments, c.responsible, c.accountable, c.consulted, c.informed
        )?;
    }
    writeln!(out)?;

    let overloaded: Vec<&str> = metrics
        .overloaded_roles
        .iter()
        .map(|r| r.role_name.as_str())
        .collect();
    writeln!(out, "Overloaded: {}", overloaded.join(", "))?;
    writeln!(out)?;

    writeln!(out, "Groups:")?;
    for (id, group) in &metrics.group_summary {
        write!(out, "  {} ({id}): {} actions", group.title, group.action_count)?;
        for (letter, count) in group.edge_distribution.iter() {
            write!(out, " {letter} {count}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    let deps = &metrics.dependency_summary;
    writeln!(out, "Dependencies: {}", deps.total)?;
    for (relation, count) in &deps.counts_by_type {
        writeln!(out, "  {relation}: {count}")?;
    }
    writeln!(
        out,
        "Warnings: {} action, {} dependency",
        metrics.action_warnings.len(),
        metrics.dependency_warnings.len()
    )?;
    Ok(out)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("enrich", args)) => cmd_enrich(args),
        Some(("check", args)) => cmd_check(args),
        Some(("report", args)) => cmd_report(args),
        Some(("schema", _)) => cmd_schema(),
        _ => Ok(ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
