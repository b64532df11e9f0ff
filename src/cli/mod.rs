//! # CLI Adapter
//!
//! The command-line host around the core. Parses arguments, translates each
//! subcommand into a `core::Action`, and reports the outcome.
//!
//! This is the only module that knows about clap. A settings screen in any
//! other UI would do the same job: build an `Action`, hand it to the
//! `Editor`, and show the rejection message if there is one.

pub mod outline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use crate::ListSide;
use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::editor::{Editor, Effect};
use crate::core::state::Settings;
use crate::core::store::{JsonFileStore, SettingsStore};

#[derive(Parser, Debug)]
#[command(name = "navlayout", about = "Arrange dashboard navigation: order, groups and visibility")]
pub struct Cli {
    /// Settings file to edit (overrides config and NAVLAYOUT_SETTINGS)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Config file (default: ~/.navlayout/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current layout
    Show,
    /// Report broken invariants in the stored file without repairing it
    Check,
    /// Move the entry at FROM to TO within one list
    Reorder {
        #[arg(long, value_enum, default_value_t)]
        side: ListSide,
        from: usize,
        to: usize,
    },
    /// Move the child at FROM to TO within a group
    ReorderGroup { group_id: String, from: usize, to: usize },
    /// Move a top-level item or group to the end of a list
    Move {
        id: String,
        #[arg(long, value_enum)]
        from: ListSide,
        /// Defaults to the other list
        #[arg(long, value_enum)]
        to: Option<ListSide>,
    },
    /// Create, edit or delete groups
    #[command(subcommand)]
    Group(GroupCommand),
    /// Put an item into a group
    Drop { item: String, group_id: String },
    /// Take an item out of a group
    Ungroup { group_id: String, item: String },
    /// Show or hide an item
    Visibility {
        item: String,
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GroupCommand {
    /// Append a new empty group to a list
    Create {
        name: String,
        #[arg(long, default_value = "Folder")]
        icon: String,
        #[arg(long, value_enum, default_value_t)]
        side: ListSide,
    },
    /// Rename a group or change its icon
    Edit {
        group_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a group, keeping its items
    Delete { group_id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Runs one command against the configured settings file.
pub fn run(command: Command, config: &ResolvedConfig) -> ExitCode {
    let registry = config.registry();
    let store = JsonFileStore::new(&config.settings_file);

    if command == Command::Check {
        return check(&store);
    }

    let mut editor = match Editor::open(store, &registry) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Could not load {}: {}", config.settings_file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if command == Command::Show {
        print!("{}", outline::render(editor.settings(), &registry));
        return ExitCode::SUCCESS;
    }

    let Some(action) = to_action(command, editor.settings()) else {
        println!("No change.");
        return ExitCode::SUCCESS;
    };
    info!("CLI action: {:?}", action);

    match editor.apply(action) {
        Ok(Effect::Saved) => {
            print!("{}", outline::render(editor.settings(), &registry));
            ExitCode::SUCCESS
        }
        Ok(Effect::Unchanged) => {
            println!("No change.");
            ExitCode::SUCCESS
        }
        Ok(Effect::SaveFailed(e)) => {
            eprintln!("Layout updated but not saved: {e}");
            ExitCode::FAILURE
        }
        Err(rejection) => {
            warn!("Rejected: {}", rejection);
            eprintln!("Rejected: {rejection}");
            ExitCode::FAILURE
        }
    }
}

fn check(store: &JsonFileStore) -> ExitCode {
    match store.load() {
        Ok(settings) => {
            if let Some(hidden) = hidden_summary(&settings) {
                println!("{}: {}", store.path().display(), hidden);
            }
            let violations = settings.violations();
            if violations.is_empty() {
                println!("{}: ok", store.path().display());
                return ExitCode::SUCCESS;
            }
            for violation in &violations {
                println!("{}: {}", store.path().display(), violation);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Could not load {}: {}", store.path().display(), e);
            ExitCode::FAILURE
        }
    }
}

/// One line naming every explicitly hidden item, or `None` if nothing is hidden.
fn hidden_summary(settings: &Settings) -> Option<String> {
    let hidden: Vec<&str> = settings.sidebar_visibility.hidden().collect();
    if hidden.is_empty() {
        None
    } else {
        Some(format!("hidden: {}", hidden.join(", ")))
    }
}

/// Builds the action for a mutating command. `None` means there is nothing to do.
///
/// Group edits fill unspecified fields from the current group; editing a group
/// that doesn't exist is nothing to do.
pub fn to_action(command: Command, settings: &Settings) -> Option<Action> {
    let action = match command {
        Command::Show | Command::Check => return None,
        Command::Reorder { side, from, to } => Action::Reorder { side, from, to },
        Command::ReorderGroup { group_id, from, to } => {
            Action::ReorderGroupChildren { group_id, from, to }
        }
        Command::Move { id, from, to } => Action::MoveBetweenLists {
            id,
            from,
            to: to.unwrap_or(from.opposite()),
        },
        Command::Group(GroupCommand::Create { name, icon, side }) => {
            Action::CreateGroup { name, icon, side }
        }
        Command::Group(GroupCommand::Edit {
            group_id,
            name,
            icon,
        }) => {
            let current = settings.group(&group_id)?;
            Action::EditGroup {
                name: name.unwrap_or_else(|| current.name.clone()),
                icon: icon.unwrap_or_else(|| current.icon.clone()),
                group_id,
            }
        }
        Command::Group(GroupCommand::Delete { group_id }) => Action::DeleteGroup { group_id },
        Command::Drop { item, group_id } => Action::DropIntoGroup { item, group_id },
        Command::Ungroup { group_id, item } => Action::Ungroup { group_id, item },
        Command::Visibility { item, state } => Action::SetVisible {
            item,
            visible: state == Toggle::On,
        },
    };
    Some(action)
}
