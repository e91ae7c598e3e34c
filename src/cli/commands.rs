//! Command dispatch and handlers.
//!
//! The handlers translate typed domain/application errors into
//! user-facing messages; the wording of the looting dialogue (prompts,
//! Success!/Failure! lines) is part of the user contract.

use std::io::{self, BufRead, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::load_catalog;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::{Catalog, DomainError, NodeTreeConvert, Session};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.data_dir.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::List) => _list(&settings),
        Some(Commands::Show { name }) => _show(&settings, name),
        Some(Commands::Tree { name }) => _tree(&settings, name.as_deref()),
        Some(Commands::Loot { container, items }) => _loot(&settings, container, items),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(&settings),
            ConfigCommands::Init => _config_init(&settings),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn banner(catalog: &Catalog) {
    output::info(&format!(
        "Initialised {} items including {} containers.\n",
        catalog.len(),
        catalog.container_count()
    ));
}

#[instrument(level = "debug", skip(settings))]
fn _list(settings: &Settings) -> CliResult<()> {
    let catalog = load_catalog(settings)?;
    banner(&catalog);

    output::header("Items:");
    for node in catalog.iter().filter(|n| !n.is_container()) {
        output::info(&node);
    }
    println!();
    output::header("Containers:");
    for node in catalog.iter().filter(|n| n.is_container()) {
        output::info(&node);
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _show(settings: &Settings, name: &str) -> CliResult<()> {
    let catalog = load_catalog(settings)?;
    let node = catalog.lookup(name)?;
    print!("{}", node.render());
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _tree(settings: &Settings, name: Option<&str>) -> CliResult<()> {
    let catalog = load_catalog(settings)?;
    match name {
        Some(name) => {
            let node = catalog.lookup(name)?;
            print!("{}", node.to_tree_string());
        }
        None => {
            for node in catalog.iter().filter(|n| n.is_container()) {
                print!("{}", node.to_tree_string());
            }
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _loot(settings: &Settings, container: &str, items: &[String]) -> CliResult<()> {
    let catalog = load_catalog(settings)?;
    banner(&catalog);

    if items.is_empty() {
        return interactive_loot(&catalog, container);
    }

    let mut session = catalog.start_session(container)?;
    for item in items {
        report_loot(&mut session, item);
    }
    print!("{}", session.render());
    Ok(())
}

/// One placement attempt with the dialogue's Success!/Failure! wording.
fn report_loot(session: &mut Session<'_>, item: &str) -> bool {
    match session.loot(item) {
        Ok(()) => {
            output::success(&format!(
                "Success! Item \"{}\" stored in container \"{}\".",
                item,
                session.root_name()
            ));
            true
        }
        Err(DomainError::OutOfCapacity { .. }) => {
            output::failure(&format!(
                "Failure! Item \"{}\" NOT stored in container \"{}\".",
                item,
                session.root_name()
            ));
            true
        }
        Err(_) => {
            output::info(&format!("\"{}\" not found. Try again.", item));
            false
        }
    }
}

/// The menu loop of the looting dialogue. Reads stdin line by line;
/// EOF quits like choice 0.
fn interactive_loot(catalog: &Catalog, container: &str) -> CliResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(mut session) = start_with_retry(catalog, container, &mut lines)? else {
        return Ok(());
    };

    loop {
        print_menu();
        let Some(choice) = next_line(&mut lines)? else {
            return Ok(());
        };
        match choice.trim() {
            "1" => loop {
                output::prompt("Enter the name of the item:");
                let Some(item) = next_line(&mut lines)? else {
                    return Ok(());
                };
                if report_loot(&mut session, item.trim()) {
                    break;
                }
            },
            "2" => print!("{}", session.render()),
            "0" => return Ok(()),
            other => debug!("ignoring menu choice {:?}", other),
        }
    }
}

/// Prompt for a container name until one resolves; None when stdin closes.
fn start_with_retry<'a, B: BufRead>(
    catalog: &'a Catalog,
    first_choice: &str,
    lines: &mut io::Lines<B>,
) -> CliResult<Option<Session<'a>>> {
    let mut name = first_choice.to_string();
    loop {
        match catalog.start_session(&name) {
            Ok(session) => return Ok(Some(session)),
            Err(DomainError::NotFound(_)) => {
                output::info(&format!("\"{}\" not found. Try again.", name));
                output::prompt("Enter the name of the container:");
                match next_line(lines)? {
                    Some(next) => name = next.trim().to_string(),
                    None => return Ok(None),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn next_line<B: BufRead>(lines: &mut io::Lines<B>) -> CliResult<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn print_menu() {
    output::info(&"=".repeat(34));
    output::info(&"Enter your choice:");
    output::info(&"1. Loot item.");
    output::info(&"2. List looted items.");
    output::info(&"0. Quit.");
    output::info(&"=".repeat(34));
}

#[instrument(level = "debug", skip(settings))]
fn _config_show(settings: &Settings) -> CliResult<()> {
    print!("{}", settings.to_toml());
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _config_path(settings: &Settings) -> CliResult<()> {
    match config::global_config_path() {
        Some(path) => output::info(&format!("config: {}", path.display())),
        None => output::info(&"config: <unavailable>"),
    }
    output::info(&format!("data:   {}", settings.data_dir.display()));
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _config_init(settings: &Settings) -> CliResult<()> {
    let path = config::global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".into()))?;
    if path.exists() {
        output::info(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let mut file = std::fs::File::create(&path)?;
    file.write_all(settings.to_toml().as_bytes())?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}
