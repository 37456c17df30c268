//! qdash CLI - Software quality metrics in the terminal.

use std::process;

use clap::Parser;
use qdash::cli::{Cli, Commands, ConfigCommands};
use qdash::commands::{self, CommandResult};
use qdash::config::{
    ConfigOverrides, LoadedConfig, MAX_TOP_N, OutputFormat, ResolvedConfig, default_config_path,
    resolve_config,
};
use qdash::models::{AggregateMode, Catalog, ProjectId};
use qdash::state::Tab;
use qdash::{Error, Result, format, logging};

fn main() {
    let cli = Cli::parse();
    let mut human = cli.human_readable;

    if let Err(e) = run(cli, &mut human) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Runs the command. `human` is set once the config file is read, so later
/// errors follow its `output-format`.
fn run(cli: Cli, human: &mut bool) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let loaded = LoadedConfig::load(&config_path)?;
    *human |= loaded.config.output_format == Some(OutputFormat::Human);
    let overrides = overrides_from_cli(&cli)?;
    let resolved = resolve_config(&loaded, &overrides);

    // Logging is best-effort: an unwritable log directory must not block the dashboard
    let _guard = logging::init_logging(&resolved.log_level.value, &logging::default_log_dir()).ok();
    tracing::debug!(config = %config_path.display(), "resolved configuration");

    let human = resolved.output_format() == OutputFormat::Human;
    let catalog = Catalog::builtin();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_dashboard(&resolved, catalog),
        Commands::Snapshot => {
            let view = commands::snapshot(
                &resolved.initial_state(),
                &catalog,
                &resolved.projection_options(),
                format::clock(),
            )?;
            output(&view, human);
            Ok(())
        }
        Commands::Projects => {
            output(&commands::projects(&catalog), human);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                output(&resolved, human);
                Ok(())
            }
            ConfigCommands::Init { force } => {
                output(&commands::config_init(&resolved, &loaded.config, force)?, human);
                Ok(())
            }
        },
    }
}

/// Translate CLI flags into overrides, rejecting unknown values.
fn overrides_from_cli(cli: &Cli) -> Result<ConfigOverrides> {
    let mut overrides = ConfigOverrides::new();
    if let Some(project) = &cli.project {
        overrides = overrides.with_project(project.parse::<ProjectId>()?);
    }
    if let Some(tab) = &cli.tab {
        overrides = overrides.with_tab(tab.parse::<Tab>()?);
    }
    if let Some(top_n) = cli.top_n {
        if top_n == 0 || top_n > MAX_TOP_N {
            return Err(Error::Config(format!(
                "--top-n must be between 1 and {}, got {}",
                MAX_TOP_N, top_n
            )));
        }
        overrides = overrides.with_top_n(top_n);
    }
    if let Some(mode) = &cli.aggregate {
        let mode = AggregateMode::parse(mode).ok_or_else(|| {
            Error::Config(format!(
                "Invalid aggregate mode '{}' (expected supplied or computed)",
                mode
            ))
        })?;
        overrides = overrides.with_aggregate(mode);
    }
    if cli.human_readable {
        overrides = overrides.with_output_format(OutputFormat::Human);
    }
    Ok(overrides)
}

#[cfg(feature = "tui")]
fn run_dashboard(resolved: &ResolvedConfig, catalog: Catalog) -> Result<()> {
    qdash::tui::run_tui(
        resolved.initial_state(),
        catalog,
        resolved.projection_options(),
    )
}

#[cfg(not(feature = "tui"))]
fn run_dashboard(_resolved: &ResolvedConfig, _catalog: Catalog) -> Result<()> {
    Err(Error::Other(
        "qdash was built without the tui feature; use `qdash snapshot`".to_string(),
    ))
}

fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
