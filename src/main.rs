//! sprout's main application entry point and orchestration logic.
//! Handles command dispatch and the generation pipeline:
//! parse, plan, confirm, materialize.

use clap::CommandFactory;

use sprout::{
    cli::{get_args, Args},
    config::{load_config, parse_config},
    error::{default_error_handler, Error, Result},
    exclude::build_exclude_set,
    plan::{build_plan, Disposition},
    processor::Materializer,
    prompt::{confirm_plan, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    template::resolve_templates,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Dispatches the requested command.
///
/// # Errors
/// * `Error::UnknownCommandError` for a command sprout does not know
fn run(args: Args) -> Result<()> {
    match args.command.as_deref() {
        None | Some("generate") => generate(args),
        Some("help") => {
            Args::command().print_help().map_err(Error::IoError)?;
            Ok(())
        }
        Some(name) => Err(Error::UnknownCommandError { name: name.to_string() }),
    }
}

/// The generation pipeline.
///
/// # Flow
/// 1. Resolves templates from flags (bundled defaults otherwise)
/// 2. Loads and parses the configuration into targets and excludes
/// 3. Computes the plan against the current filesystem state
/// 4. Prints the plan preview
/// 5. Asks for confirmation; nothing is created on a declined run
/// 6. Materializes CREATE/OVERWRITE entries in plan order
fn generate(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();

    let config_path = args.config.ok_or_else(|| {
        Error::ConfigFormatError("the '--config <PATH>' option is required".to_string())
    })?;

    let templates = resolve_templates(
        args.component_template.as_deref(),
        args.story_template.as_deref(),
    )?;

    let content = load_config(&config_path)?;
    let (targets, patterns) = parse_config(&content, &args.base_dir)?;
    let excludes = build_exclude_set(&patterns)?;

    let plan = build_plan(&targets, |path| path.exists(), &excludes, args.force);

    for entry in &plan.entries {
        println!("{}: '{}'", entry.disposition, entry.path.display());
    }

    if args.dry_run {
        return Ok(());
    }

    if !confirm_plan(&prompter, &plan, args.yes)? {
        if plan.write_count() > 0 {
            println!("Aborted.");
        }
        return Ok(());
    }

    let materializer = Materializer::new(&engine, &templates);
    for entry in plan.writes() {
        materializer.materialize(entry).inspect_err(|_| {
            eprintln!("Failed while generating '{}'", entry.path.display())
        })?;
        let action = if entry.disposition == Disposition::Overwrite {
            "overwritten"
        } else {
            "created"
        };
        println!("{}: '{}'", action, entry.path.display());
    }

    println!(
        "Generated {} file(s) in '{}'.",
        plan.write_count(),
        args.base_dir.display()
    );
    Ok(())
}
