use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use tracing::info;

use meal_plan_parser::cli::{Cli, Command, OutputFormat, ShapeArgs};
use meal_plan_parser::error::{MealPlanError, Result};
use meal_plan_parser::interface::{
    display_meal_plan, display_saved_plans, format_meal_plan_for_sharing, prompt_plan_name,
    prompt_yes_no, resolve_plan_name, write_plan_csv, write_plan_json,
};
use meal_plan_parser::models::{Day, ParseConfig, SavedMealPlan};
use meal_plan_parser::parser::{MealPlanParser, Picker};
use meal_plan_parser::state::PlanLibrary;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse {
            file,
            shape,
            seed,
            format,
        } => cmd_parse(&file, &shape, seed, format),
        Command::Sample {
            shape,
            seed,
            format,
        } => cmd_sample(&shape, seed, format),
        Command::Save { file, name, shape } => cmd_save(&cli.library, &file, name, &shape),
        Command::List => cmd_list(&cli.library),
        Command::Show { name, seed, format } => cmd_show(&cli.library, &name, seed, format),
        Command::Remove { name } => cmd_remove(&cli.library, &name),
    }
}

fn make_parser(seed: Option<u64>) -> MealPlanParser {
    match seed {
        Some(seed) => MealPlanParser::seeded(seed),
        None => MealPlanParser::new(Picker::from_entropy()),
    }
}

/// Read a plan document from a file, or stdin for "-".
fn read_document(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(file)?)
}

fn emit(days: &[Day], config: &ParseConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => display_meal_plan(days, config),
        OutputFormat::Share => println!("{}", format_meal_plan_for_sharing(days, config)),
        OutputFormat::Json => write_plan_json(days, io::stdout().lock())?,
        OutputFormat::Csv => write_plan_csv(days, io::stdout().lock())?,
    }
    Ok(())
}

/// Parse a plan document and print it.
fn cmd_parse(file: &Path, shape: &ShapeArgs, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let config = shape.to_config()?;
    let document = read_document(file)?;
    info!(chars = document.len(), "read meal plan document");

    let days = make_parser(seed).parse(&document, &config);
    emit(&days, &config, format)
}

/// Print a fully synthesised plan.
fn cmd_sample(shape: &ShapeArgs, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let config = shape.to_config()?;
    let days = make_parser(seed).fallback_plan(&config);
    emit(&days, &config, format)
}

/// Save raw plan text and its shape to the library.
fn cmd_save(library_path: &Path, file: &Path, name: Option<String>, shape: &ShapeArgs) -> Result<()> {
    let config = shape.to_config()?;
    let raw_text = read_document(file)?;
    if raw_text.trim().is_empty() {
        return Err(MealPlanError::InvalidInput(format!(
            "{} is empty",
            file.display()
        )));
    }

    let mut library = PlanLibrary::load(library_path)?;

    let name = match name {
        Some(name) => name,
        None => {
            let default = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Meal Plan".to_string());
            prompt_plan_name(&default)?
        }
    };

    if library.contains(&name) {
        let overwrite = prompt_yes_no(&format!("'{}' already exists. Overwrite?", name), false)?;
        if !overwrite {
            println!("Nothing saved.");
            return Ok(());
        }
    }

    library.insert(SavedMealPlan::new(name.clone(), raw_text, config));
    library.save(library_path)?;
    println!("Saved '{}' ({} plans in library).", name, library.len());

    Ok(())
}

/// List saved plans.
fn cmd_list(library_path: &Path) -> Result<()> {
    let library = PlanLibrary::load(library_path)?;
    let plans: Vec<&SavedMealPlan> = library
        .names()
        .into_iter()
        .filter_map(|name| library.get(name))
        .collect();
    display_saved_plans(&plans);
    Ok(())
}

/// Re-parse a saved plan and print it.
fn cmd_show(library_path: &Path, query: &str, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let library = PlanLibrary::load(library_path)?;
    let name = resolve_plan_name(&library, query)?;
    let plan = library
        .get(&name)
        .ok_or_else(|| MealPlanError::PlanNotFound(name.clone()))?;

    let days = make_parser(seed).parse(&plan.raw_text, &plan.config);
    emit(&days, &plan.config, format)
}

/// Remove a saved plan.
fn cmd_remove(library_path: &Path, query: &str) -> Result<()> {
    let mut library = PlanLibrary::load(library_path)?;
    let name = resolve_plan_name(&library, query)?;
    let removed = library.remove(&name)?;
    library.save(library_path)?;
    println!("Removed '{}'.", removed.name);
    Ok(())
}
