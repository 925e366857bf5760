//! # CLI Dispatch
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, opens the form
//! - `handle_*()`: Per-command handlers that drive the form and print the outcome

use super::print::{print_messages, print_table};
use super::prompt::confirm_stdin;
use super::session;
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use roster::commands::{CmdMessage, CmdResult};
use roster::config::{ConfigKey, RosterConfig};
use roster::error::{Result, RosterError};
use roster::form::FormController;
use roster::logging::init_logging;
use roster::model::Field;
use roster::store::fs::FileSlot;
use std::path::{Path, PathBuf};

const HOME_ENV: &str = "ROSTER_HOME";
const LOG_DIR: &str = "logs";

struct AppContext {
    form: FormController<FileSlot>,
    config: RosterConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    start_logging(&data_dir, cli.verbose);

    let mut ctx = init_context(data_dir)?;

    match cli.command {
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Edit { position, fields }) => handle_edit(&mut ctx, position, fields),
        Some(Commands::Delete { position, yes }) => handle_delete(&mut ctx, position, yes),
        Some(Commands::Form) => session::run(&mut ctx.form, ctx.config.confirm_delete),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// `--data-dir`, then `$ROSTER_HOME`, then the platform data directory.
fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine a data directory".into()))
}

fn start_logging(data_dir: &Path, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    if let Err(err) = init_logging(level, &data_dir.join(LOG_DIR)) {
        eprintln!("warning: logging disabled: {}", err);
    }
}

fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = RosterConfig::load(&data_dir)?;
    let slot = FileSlot::new(&data_dir, config.slot_key.clone());
    let form = FormController::open(slot);

    Ok(AppContext {
        form,
        config,
        data_dir,
    })
}

/// Prints the outcome; a refused submission ends the process with status 1.
fn finish(result: &CmdResult) {
    print_messages(&result.messages);
    if result.is_rejected() {
        log::logger().flush();
        std::process::exit(1);
    }
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    ctx.form.fill(fields.into_form_fields());
    let result = ctx.form.submit()?;
    finish(&result);
    print_table(ctx.form.view());
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_table(ctx.form.view());
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, fields: FieldArgs) -> Result<()> {
    let Some(action) = ctx.form.view().row(position).map(|row| row.edit) else {
        finish(&missing_row(position));
        return Ok(());
    };
    if fields.is_empty() {
        print_messages(&[CmdMessage::info(
            "Nothing to change; pass --name, --id, --email or --contact",
        )]);
        return Ok(());
    }

    finish(&ctx.form.edit_row(action));
    let overrides = [
        (Field::Name, fields.name),
        (Field::Id, fields.id),
        (Field::Email, fields.email),
        (Field::Contact, fields.contact),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            ctx.form.set_field(field, &value);
        }
    }

    let result = ctx.form.submit()?;
    finish(&result);
    print_table(ctx.form.view());
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize, yes: bool) -> Result<()> {
    let Some(action) = ctx.form.view().row(position).map(|row| row.delete) else {
        finish(&missing_row(position));
        return Ok(());
    };
    let ask = ctx.config.confirm_delete && !yes;

    let result = ctx.form.delete_row(action, |record| {
        !ask || confirm_stdin(&format!("Delete student {}: {}?", position, record.name()))
    })?;
    if result.is_applied() {
        finish(&result);
        print_table(ctx.form.view());
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.form.store().slot().path().display());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in ConfigKey::ALL {
                println!("{} = {}", key, ctx.config.get(key));
            }
        }
        (Some(key), None) => {
            let key: ConfigKey = key.parse()?;
            println!("{}", ctx.config.get(key));
        }
        (Some(key), Some(value)) => {
            let key: ConfigKey = key.parse()?;
            ctx.config.set(key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!("{} set to {}", key, value))]);
        }
    }
    Ok(())
}

fn missing_row(position: usize) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(format!(
        "No student at position {}",
        position
    )))
}
