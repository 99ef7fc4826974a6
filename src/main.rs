//! Skill Roadmap - Main entry point
//!
//! Dispatches the CLI: the interactive form by default, or one of the
//! non-interactive commands.

use anyhow::{Context, Result, anyhow};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use skill_roadmap::app::App;
use skill_roadmap::catalog::{CatalogField, ReferenceCatalog};
use skill_roadmap::cli::{Cli, Commands, GenerateArgs};
use skill_roadmap::config::{DATASET_ENV, Settings};
use skill_roadmap::error::RoadmapError;
use skill_roadmap::profile::StudentForm;
use skill_roadmap::report::{self, OutputFormat};
use skill_roadmap::roadmap::build_roadmap;
use strum::IntoEnumIterator;

/// Initialize tracing; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    info!("Skill roadmap starting up");

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    let env_dataset = std::env::var(DATASET_ENV).ok();
    let dataset = settings.resolve_dataset(cli.dataset.as_deref(), env_dataset.as_deref());
    debug!("Using dataset {:?}", dataset);

    match cli.command {
        Some(Commands::Form {
            profile,
            save_profile,
        }) => run_form(&dataset, profile.as_deref(), save_profile),
        Some(Commands::Generate(args)) => run_generate(&dataset, &args),
        Some(Commands::Validate { profile }) => run_validate(&dataset, &profile),
        Some(Commands::Catalog { field }) => run_catalog(&dataset, field.as_deref()),
        Some(Commands::Dataset { limit }) => run_dataset(&dataset, limit),
        None => {
            info!("No command specified, launching the form");
            run_form(&dataset, None, None)
        }
    }
}

fn load_catalog(dataset: &Path) -> Result<ReferenceCatalog> {
    ReferenceCatalog::load(dataset)
        .with_context(|| format!("Failed to load reference dataset {:?}", dataset))
}

/// Run the interactive form
fn run_form(dataset: &Path, profile: Option<&Path>, save_profile: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(dataset)?;
    let mut app = match profile {
        Some(path) => {
            let form = StudentForm::load_from_file(path)
                .with_context(|| format!("Failed to load form from {:?}", path))?;
            App::with_form(catalog, &form, save_profile)
        }
        None => App::new(catalog, save_profile),
    };

    debug!("Initializing terminal for interactive mode");
    enable_raw_mode()
        .map_err(|e| RoadmapError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .map_err(|e| RoadmapError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(RoadmapError::from)
        .and_then(|mut terminal| app.run(&mut terminal));

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    if let Some(roadmap) = &app.state().roadmap {
        info!("Session ended with a {}-step roadmap", roadmap.len());
    }
    result.map_err(Into::into)
}

/// Generate a roadmap from a saved form and/or flags
fn run_generate(dataset: &Path, args: &GenerateArgs) -> Result<()> {
    let catalog = load_catalog(dataset)?;
    let format = OutputFormat::from_str(&args.format)
        .map_err(|_| anyhow!("Unknown output format '{}' (use text or json)", args.format))?;

    let base = match &args.profile {
        Some(path) => StudentForm::load_from_file(path)
            .with_context(|| format!("Failed to load form from {:?}", path))?,
        None => StudentForm::with_catalog_defaults(&catalog),
    };
    let form = args.apply_to(base);

    let submission = form.validate(&catalog).map_err(|e| {
        error!("Form validation failed: {}", e);
        e
    })?;
    let roadmap = build_roadmap(&submission.profile);
    info!("Generated roadmap with {} steps", roadmap.len());

    println!("{}", report::render(&submission, &roadmap, format)?);
    Ok(())
}

/// Validate a saved form
fn run_validate(dataset: &Path, profile: &Path) -> Result<()> {
    let catalog = load_catalog(dataset)?;
    info!("Validating form file: {:?}", profile);

    let form = match StudentForm::load_from_file(profile) {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to load form file: {}", e);
            eprintln!("✗ Failed to load form file: {}", e);
            std::process::exit(1);
        }
    };

    match form.validate(&catalog) {
        Ok(submission) => {
            println!("✓ Form is valid for {:?}", submission.name);
            Ok(())
        }
        Err(e) => {
            error!("Form validation failed: {}", e);
            eprintln!("✗ Form validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the value sets offered by the dataset
fn run_catalog(dataset: &Path, field: Option<&str>) -> Result<()> {
    let catalog = load_catalog(dataset)?;

    match field {
        Some(name) => {
            let field = CatalogField::from_str(name).map_err(|_| {
                let known: Vec<String> = CatalogField::iter().map(|f| f.to_string()).collect();
                anyhow!("Unknown field '{}' (expected one of: {})", name, known.join(", "))
            })?;
            for value in catalog.value_set(field) {
                println!("{}", value);
            }
        }
        None => {
            for field in CatalogField::iter() {
                let values: Vec<&str> =
                    catalog.value_set(field).iter().map(String::as_str).collect();
                println!("{}: {}", field.label(), values.join(", "));
            }
        }
    }
    Ok(())
}

/// Print the first `limit` dataset rows as an aligned table
fn run_dataset(dataset: &Path, limit: usize) -> Result<()> {
    let catalog = load_catalog(dataset)?;
    let headers = catalog.headers();
    let rows: Vec<&Vec<String>> = catalog.rows().iter().take(limit).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", format_row(headers));
    for row in &rows {
        println!("{}", format_row(row.as_slice()));
    }
    println!("({} of {} records)", rows.len(), catalog.len());
    Ok(())
}
