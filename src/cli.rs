//! Command-line driver for tab-shuttle.
//!
//! Loads a JSON snapshot of windows and tabs into a [`MemoryPlatform`], runs
//! the given triggers through one [`Dispatcher`] (so remembered positions
//! carry over from one trigger to the next) and returns the resulting
//! snapshot as JSON.

use crate::command::{Command, TOGGLE_MENU_ITEM_ID, TOGGLE_MENU_ITEM_TITLE, Trigger};
use crate::dispatcher::Dispatcher;
use crate::error::ShuttleError;
use crate::platform::{MemoryPlatform, Platform, Tab, TabId};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tab_shuttle_config::Settings;

/// tab-shuttle - keyboard-driven tab and window navigation
#[derive(Parser, Debug)]
#[command(name = "tab-shuttle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON snapshot of the windows and tabs to operate on
    #[arg(long, value_name = "FILE", required_unless_present = "list_commands")]
    pub snapshot: Option<PathBuf>,

    /// Tab the triggers refer to (default: active tab of the focused window)
    #[arg(long, value_name = "ID")]
    pub tab: Option<TabId>,

    /// Settings file (default: ~/.config/tab-shuttle/settings.yaml)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Set log level (overrides settings and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Print the known command ids and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Triggers to run in order: a command id, `menu`, `menu:<item-id>` or `icon`
    #[arg(value_name = "TRIGGER", required_unless_present = "list_commands")]
    pub triggers: Vec<String>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Parse one trigger argument, attaching `tab` where the trigger carries one.
pub fn parse_trigger(arg: &str, tab: Option<Tab>) -> Result<Trigger, ShuttleError> {
    match arg {
        "icon" => Ok(Trigger::IconClick),
        "menu" => Ok(Trigger::MenuClick {
            menu_item_id: TOGGLE_MENU_ITEM_ID.to_string(),
            tab,
        }),
        _ => {
            if let Some(menu_item_id) = arg.strip_prefix("menu:") {
                return Ok(Trigger::MenuClick {
                    menu_item_id: menu_item_id.to_string(),
                    tab,
                });
            }
            let command = Command::from_id(arg)
                .ok_or_else(|| ShuttleError::UnknownTrigger(arg.to_string()))?;
            Ok(Trigger::Command { command, tab })
        }
    }
}

/// Text printed by `--list-commands`: every command id, then the context
/// menu trigger with the title the menu item is registered under.
pub fn command_listing() -> String {
    let mut lines: Vec<String> = Command::ALL
        .iter()
        .map(|c| format!("{:<26}{:?}", c.id(), c.action()))
        .collect();
    lines.push(format!(
        "{:<26}{}",
        format!("menu:{TOGGLE_MENU_ITEM_ID}"),
        TOGGLE_MENU_ITEM_TITLE
    ));
    lines.join("\n")
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    let loaded = match path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load settings, using defaults: {:#}", e);
        Settings::default()
    })
}

/// Run the CLI and return the text to print.
pub async fn run(cli: Cli) -> Result<String> {
    if cli.list_commands {
        return Ok(command_listing());
    }

    let snapshot_path = cli
        .snapshot
        .as_ref()
        .context("--snapshot is required")?;
    let json = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("failed to read snapshot {:?}", snapshot_path))?;
    let platform = MemoryPlatform::from_json(&json)
        .with_context(|| format!("invalid snapshot {:?}", snapshot_path))?;

    let settings = load_settings(cli.settings.as_ref());
    crate::debug::set_log_level(settings.log_level.to_level_filter());
    platform.set_settings(settings);

    let dispatcher = Dispatcher::new(platform);
    for arg in &cli.triggers {
        // Re-read the tab before every trigger: earlier ones may have moved it
        let tab = match cli.tab {
            Some(id) => Some(dispatcher.platform().tab(id).await?),
            None => None,
        };
        let trigger = parse_trigger(arg, tab)?;
        dispatcher
            .dispatch(trigger)
            .await
            .with_context(|| format!("trigger '{arg}' failed"))?;
    }

    Ok(dispatcher.platform().to_json_pretty()?)
}
