//! Command-line interface for agentdesk
//! Runs the narrated planning demo, and exposes the list extractor and the scripted
//! assistant stages on their own.
//!
//! Usage:
//!   agentdesk demo [--no-pause] [--fast]                               - Run the narrated demo
//!   agentdesk extract `<path>` --style `<style>` [--strip `<keyword>`] [--format `<format>`]
//!                                                                       - Extract list items from a file or stdin
//!   agentdesk ask `<stage>` [input...]                                  - Run one scripted assistant stage
//!
//! `--config <file>` layers a TOML file over the built-in defaults for every command.
mod demo;
mod narration;

use agentdesk_config::{AgentdeskConfig, ConfigError, Loader};
use agentdesk_core::assistant::{self, Stage};
use agentdesk_core::extraction::{extract, AnnotationStrip, ListStyle};
use agentdesk_core::workspace::Workspace;
use clap::{Arg, ArgAction, ArgMatches, Command};
use narration::ConsoleNarrator;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("agentdesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A scripted assistant that helps plan a product feature")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("demo")
                .about("Run the narrated three-stage planning demo")
                .arg(
                    Arg::new("no-pause")
                        .long("no-pause")
                        .help("Do not wait for Enter between stages")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fast")
                        .long("fast")
                        .help("Skip all narration delays")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract list items from a text file ('-' reads stdin)")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .short('s')
                        .help("List marker style")
                        .value_parser(["numbered", "bulleted"])
                        .default_value("numbered"),
                )
                .arg(
                    Arg::new("strip")
                        .long("strip")
                        .help("Remove a trailing parenthetical starting with this keyword (e.g. 'Tasks:')"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["plain", "json"])
                        .default_value("plain"),
                ),
        )
        .subcommand(
            Command::new("ask")
                .about("Run one scripted assistant stage and print its items")
                .arg(
                    Arg::new("stage")
                        .help("Stage to run")
                        .required(true)
                        .value_parser(["feature-ideas", "tasks", "sub-tasks", "outline"])
                        .index(1),
                )
                .arg(
                    Arg::new("input")
                        .help("Text passed to the stage (shapes the prompt only)")
                        .num_args(0..)
                        .index(2),
                ),
        )
        .get_matches();

    let config = load_config(&matches);
    init_logging(&config.logging.level);

    // Handle subcommands
    match matches.subcommand() {
        Some(("demo", _)) => handle_demo_command(config),
        Some(("extract", extract_matches)) => handle_extract_command(extract_matches),
        Some(("ask", ask_matches)) => handle_ask_command(ask_matches),
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> AgentdeskConfig {
    build_config(matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Demo switches are applied last so they beat anything in `--config`.
fn build_config(matches: &ArgMatches) -> Result<AgentdeskConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(("demo", demo_matches)) = matches.subcommand() {
        if demo_matches.get_flag("no-pause") {
            loader = loader.without_pauses()?;
        }
        if demo_matches.get_flag("fast") {
            loader = loader.without_delays()?;
        }
    }
    loader.build()
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Handle the demo command
fn handle_demo_command(config: AgentdeskConfig) {
    let stdin = io::stdin();
    let mut narrator = ConsoleNarrator::new(
        io::stdout(),
        stdin.lock(),
        &config.narration,
        config.pacing,
    );
    let mut workspace = Workspace::new();
    match demo::run_demo(&mut narrator, &mut workspace) {
        Ok(report) => {
            info!(
                selected = %report.selected_idea,
                ideas = report.feature_ideas.len(),
                tasks = report.tasks.len(),
                sub_tasks = report.sub_tasks.len(),
                slides = report.outline.len(),
                chosen = report.chosen_task.as_deref().unwrap_or("none"),
                "demo finished"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the extract command
fn handle_extract_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let style: ListStyle = matches
        .get_one::<String>("style")
        .unwrap()
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    let strip = matches
        .get_one::<String>("strip")
        .map(|keyword| AnnotationStrip::owned(keyword.as_str()));
    let format = matches.get_one::<String>("format").unwrap();

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let items = extract(&source, style, strip.as_ref());
    print_items(&items, format);
}

/// Handle the ask command
fn handle_ask_command(matches: &ArgMatches) {
    let stage: Stage = matches
        .get_one::<String>("stage")
        .unwrap()
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    let input = matches
        .get_many::<String>("input")
        .map(|values| values.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    let items = match stage {
        Stage::FeatureIdeas => assistant::extract_feature_ideas(&input),
        Stage::TaskBreakdown => assistant::breakdown_feature_into_tasks(&input),
        Stage::SubTasks => assistant::suggest_sub_tasks(&input),
        Stage::PresentationOutline => {
            let tasks = assistant::breakdown_feature_into_tasks(&input);
            assistant::generate_presentation_outline(&input, &tasks)
        }
    };

    for (idx, item) in items.iter().enumerate() {
        println!("{}. {}", idx + 1, item);
    }
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_items(items: &[String], format: &str) {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|e| {
                eprintln!("Error formatting items: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        _ => {
            for item in items {
                println!("{}", item);
            }
        }
    }
}
