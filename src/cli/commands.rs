//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{load_store, InputSource};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{TreeNodeConvert, TreeStore};

/// Settings from config layers, with command-line flags applied last.
fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?.merge_with(&cli.overrides());
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn open_store(cli: &Cli, settings: &Settings) -> CliResult<TreeStore> {
    let source = InputSource::from_arg(cli.input.as_deref());
    Ok(load_store(&source, &settings.builder())?)
}

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = effective_settings(cli)?;
    let pretty = settings.pretty;

    match &cli.command {
        Commands::All => {
            let store = open_store(cli, &settings)?;
            output::json(&store.get_all(), pretty)?;
        }
        Commands::Item { id } => {
            let store = open_store(cli, &settings)?;
            let item = store.get_item(*id);
            output::json(&item, pretty)?;
            if item.is_none() {
                return Err(CliError::NotFound(*id));
            }
        }
        Commands::Children { id } => {
            let store = open_store(cli, &settings)?;
            output::json(&store.get_children(*id)?, pretty)?;
        }
        Commands::Descendants { id } => {
            let store = open_store(cli, &settings)?;
            output::json(&store.get_all_children(*id)?, pretty)?;
        }
        Commands::Parents { id } => {
            let store = open_store(cli, &settings)?;
            output::json(&store.get_all_parents(*id)?, pretty)?;
        }
        Commands::Leaves => {
            let store = open_store(cli, &settings)?;
            output::json(&store.leaves(), pretty)?;
        }
        Commands::Tree { id } => {
            let store = open_store(cli, &settings)?;
            let tree = match id {
                Some(id) => store.subtree_string(*id)?,
                None => store.to_tree_string(),
            };
            output::info(&tree);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => output::info(&settings.to_toml()?),
            ConfigCommands::Path => match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::info("no config directory available"),
            },
            ConfigCommands::Template => output::info(&Settings::template()),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
        }
    }
    Ok(())
}
