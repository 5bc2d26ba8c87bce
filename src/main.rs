//! Domain Scout - find a domain for your project
//!
//! Describe a project to get AI-generated domain suggestions, or check a
//! single domain's availability and price.

use anyhow::{bail, Context};
use domain_scout::display::{self, SearchMode};
use domain_scout::{ClientConfig, DomainScoutError, DomainService, DomainSuggestion, Suggestions};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use std::env;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// What the user asked for on the command line
enum Command {
    Help,
    Generate(String),
    Search(String),
    Interactive,
}

#[tokio::main]
async fn main() {
    // .env first, so RUST_LOG set there reaches the subscriber
    let loaded = domain_scout::init();
    init_tracing();

    if let Err(e) = loaded {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!();
            print_help();
            process::exit(1);
        }
    };

    let result = run(command).await;

    if let Err(e) = result {
        match e.downcast_ref::<DomainScoutError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Interactive),
        Some("--help") | Some("-h") => Ok(Command::Help),
        Some("--check") | Some("-c") => match args.get(1) {
            Some(domain) if args.len() == 2 => Ok(Command::Search(domain.clone())),
            Some(_) => bail!("--check takes exactly one domain"),
            None => bail!("Missing domain after --check (e.g. --check example.com)"),
        },
        Some(_) => match args.iter().find(|a| a.starts_with('-')) {
            Some(flag) => bail!("Unknown option '{}'", flag),
            None => Ok(Command::Generate(args.join(" "))),
        },
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let (mode, input) = match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Generate(description) => (SearchMode::Ai, description),
        Command::Search(domain) => (SearchMode::Search, domain),
        Command::Interactive => prompt()?,
    };

    let config = ClientConfig::from_env()?;
    let service = DomainService::from_config(&config)?;

    match mode {
        SearchMode::Ai => {
            println!("🎯 Generating domains for: \"{}\"", input.trim());
            let progress = spinner("Asking the AI for ideas and checking availability...");
            let result = service.suggest_with_language(&input).await;
            progress.finish_and_clear();

            let Suggestions { suggestions, language } = result?;
            if let Some(info) = &language {
                println!("{}", display::language_badge(info));
            }
            print_results(mode, &suggestions);
        }
        SearchMode::Search => {
            let progress = spinner("Checking availability...");
            let result = service.search(&input).await;
            progress.finish_and_clear();

            let found: Vec<DomainSuggestion> = result?.into_iter().collect();
            print_results(mode, &found);
        }
    }

    Ok(())
}

/// Ask for the flow and its input, like the two tabs of the web page
fn prompt() -> anyhow::Result<(SearchMode, String)> {
    let mode = Select::new("What would you like to do?", vec![SearchMode::Ai, SearchMode::Search])
        .prompt()
        .context("No mode selected")?;

    let (message, placeholder) = match mode {
        SearchMode::Ai => ("Describe your project:", "e.g. an online bakery in Lisbon"),
        SearchMode::Search => ("Domain to check:", "e.g. mydomain.com"),
    };

    let input = Text::new(message)
        .with_placeholder(placeholder)
        .prompt()
        .context("No input given")?;

    Ok((mode, input))
}

fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn print_results(mode: SearchMode, suggestions: &[DomainSuggestion]) {
    println!();
    if suggestions.is_empty() {
        println!("😔 {}", display::no_results_message(mode));
        return;
    }

    if mode == SearchMode::Ai {
        println!("🎨 Suggested Domains ({}):", suggestions.len());
        println!("═══════════════════════════");
    }

    for suggestion in suggestions {
        println!("{}", display::render_card(suggestion));
        println!();
    }

    let available = suggestions.iter().filter(|s| s.status.is_purchasable()).count();
    if available > 0 {
        println!("🎉 {} domain(s) ready to register", available);
    }
}

fn print_help() {
    println!("🔎 Domain Scout - find a domain for your project");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-scout                      # Interactive mode");
    println!("    domain-scout [DESCRIPTION]        # AI suggestions for a description");
    println!("    domain-scout --check <DOMAIN>     # Check a single domain");
    println!();
    println!("EXAMPLES:");
    println!("    domain-scout \"organic coffee roastery\"");
    println!("    domain-scout --check mydomain.com");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAIN_SCOUT_API_URL       Backend base URL (default: http://localhost:3001)");
    println!("    DOMAIN_SCOUT_TIMEOUT_SECS  Request timeout in seconds (default: none)");
    println!("    RUST_LOG                   Log filter (default: warn)");
}
