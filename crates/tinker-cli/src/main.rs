#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tinker_core::config::{UserConfig, load_user_config};
use tinker_core::store::Store;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tinker: browse and track DIY project tutorials",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Catalog",
        about = "List projects",
        long_about = "List catalog projects with optional filters and sort order.",
        after_help = "EXAMPLES:\n    # All projects in catalog order\n    tk list\n\n    # Easy crafts, best rated first\n    tk list --category \"Arts & Crafts\" --difficulty easy --sort rating\n\n    # Machine-readable output\n    tk list --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Catalog",
        about = "Show one project",
        long_about = "Show full detail for a project. Viewing bumps its view counter.",
        after_help = "EXAMPLES:\n    tk show 1\n    tk show 1 --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Catalog",
        about = "Search projects",
        long_about = "Case-insensitive substring search over titles and descriptions.",
        after_help = "EXAMPLES:\n    tk search macrame\n    tk search garden --json"
    )]
    Search(cmd::search::SearchArgs),

    #[command(
        next_help_heading = "Catalog",
        about = "List categories",
        long_about = "List distinct categories with project counts."
    )]
    Categories(cmd::categories::CategoriesArgs),

    #[command(
        next_help_heading = "Tracking",
        about = "Toggle save-for-later",
        long_about = "Save a project for later, or remove it if already saved.",
        after_help = "EXAMPLES:\n    tk save 2"
    )]
    Save(cmd::save::SaveArgs),

    #[command(
        next_help_heading = "Tracking",
        about = "Like a project",
        after_help = "EXAMPLES:\n    tk like 1"
    )]
    Like(cmd::like::LikeArgs),

    #[command(
        next_help_heading = "Tracking",
        about = "Show step completion",
        long_about = "Show how far through a project's steps the user is.",
        after_help = "EXAMPLES:\n    tk progress 1\n    tk progress 1 --json"
    )]
    Progress(cmd::progress::ProgressArgs),

    #[command(
        next_help_heading = "Authoring",
        about = "Add a new project",
        long_about = "Add a project to the catalog. Steps take the form \"Title: description\".",
        after_help = "EXAMPLES:\n    tk add --title \"Concrete Planter\" \\\n        --description \"Cast a minimalist planter.\" \\\n        --category \"Arts & Crafts\" \\\n        --step \"Build the mold: Tape two boxes together.\" \\\n        --step \"Pour: Mix and pour the concrete.\""
    )]
    Add(cmd::add::AddArgs),

    #[command(
        next_help_heading = "Session",
        about = "Interactive session",
        long_about = "Start an interactive session. State accumulates for the \
                      lifetime of the shell and is discarded on exit.",
        after_help = "EXAMPLES:\n    tk shell\n    printf 'save 2\\nsaved\\nquit\\n' | tk shell --quiet"
    )]
    Shell(cmd::shell::ShellArgs),
}

fn init_tracing(verbose: bool) {
    // TINKER_LOG wins over --verbose so an operator can still narrow the filter.
    let filter = EnvFilter::try_from_env("TINKER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "tinker_core=debug,tinker_cli=debug,info"
        } else {
            "tinker_core=info,tinker_cli=info,warn"
        })
    });

    let format = env::var("TINKER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_user_config().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring unreadable user config");
        UserConfig::default()
    });
    let output = output::resolve_output_mode(cli.format, cli.json, config.output.as_deref());

    let mut store = Store::seeded();

    match cli.command {
        Commands::List(ref args) => {
            cmd::list::run_list(args, config.sort.as_deref(), output, &store)
        }
        Commands::Show(ref args) => cmd::show::run_show(args, output, &mut store),
        Commands::Search(ref args) => cmd::search::run_search(args, output, &store),
        Commands::Categories(ref args) => cmd::categories::run_categories(args, output, &store),
        Commands::Save(ref args) => cmd::save::run_save(args, output, &mut store),
        Commands::Like(ref args) => cmd::like::run_like(args, output, &mut store),
        Commands::Progress(ref args) => cmd::progress::run_progress(args, output, &store),
        Commands::Add(ref args) => cmd::add::run_add(args, output, &mut store),
        Commands::Shell(ref args) => cmd::shell::run_shell(args, output, cli.quiet, &mut store),
    }
}
