//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::RawSettings;
use crate::domain::NodeId;

/// Query a tree built from flat parent-referencing JSON records
#[derive(Parser, Debug)]
#[command(name = "treestore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Items JSON file (`-` or omitted: stdin)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Explicit config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Reject input whose first record is not declared as root
    #[arg(long, global = true, overrides_with = "no_strict_root")]
    pub strict_root: bool,

    /// Accept any first record as root, even if the config says strict
    #[arg(long, global = true, overrides_with = "strict_root")]
    pub no_strict_root: bool,

    /// Print JSON on a single line
    #[arg(long, global = true, overrides_with = "pretty")]
    pub compact: bool,

    /// Pretty-print JSON, even if the config says compact
    #[arg(long, global = true, overrides_with = "compact")]
    pub pretty: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line; unset flags leave config values alone.
    pub fn overrides(&self) -> RawSettings {
        RawSettings {
            strict_root: flag_pair(self.strict_root, self.no_strict_root),
            pretty: flag_pair(self.pretty, self.compact),
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump every node in construction order
    All,

    /// Show a single node
    Item {
        /// Node id
        id: NodeId,
    },

    /// List direct children of a node
    Children {
        /// Node id
        id: NodeId,
    },

    /// List all descendants of a node (pre-order)
    Descendants {
        /// Node id
        id: NodeId,
    },

    /// List ancestors of a node, nearest first
    Parents {
        /// Node id
        id: NodeId,
    },

    /// List childless nodes
    Leaves,

    /// Render the tree (or the subtree below ID)
    Tree {
        /// Subtree root id
        id: Option<NodeId>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["treestore", "parents", "7", "-i", "items.json", "-dd"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Parents { id: 7 }));
        assert_eq!(cli.input, Some(PathBuf::from("items.json")));
        assert_eq!(cli.debug, 2);
    }

    #[test]
    fn given_negative_id_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["treestore", "item", "--", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Item { id: -3 }));
    }

    #[test]
    fn given_no_setting_flags_when_parsing_then_no_overrides() {
        let cli = Cli::try_parse_from(["treestore", "all"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.strict_root, None);
        assert_eq!(overrides.pretty, None);
    }

    #[test]
    fn given_negating_flags_when_parsing_then_override_to_false_and_true() {
        let cli = Cli::try_parse_from(["treestore", "all", "--no-strict-root", "--pretty"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.strict_root, Some(false));
        assert_eq!(overrides.pretty, Some(true));

        let cli = Cli::try_parse_from(["treestore", "all", "--strict-root", "--compact"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.strict_root, Some(true));
        assert_eq!(overrides.pretty, Some(false));
    }

    #[test]
    fn given_both_flags_of_a_pair_when_parsing_then_last_wins() {
        let cli = Cli::try_parse_from(["treestore", "all", "--strict-root", "--no-strict-root"])
            .unwrap();
        assert_eq!(cli.overrides().strict_root, Some(false));

        let cli = Cli::try_parse_from(["treestore", "all", "--pretty", "--compact"]).unwrap();
        assert_eq!(cli.overrides().pretty, Some(false));
    }

    #[test]
    fn given_strict_config_when_no_strict_root_flag_then_merged_setting_is_permissive() {
        let file = Settings {
            strict_root: true,
            pretty: false,
        };
        let cli = Cli::try_parse_from(["treestore", "all", "--no-strict-root", "--pretty"]).unwrap();

        let merged = file.merge_with(&cli.overrides());

        assert!(!merged.strict_root);
        assert!(merged.pretty);
    }
}
