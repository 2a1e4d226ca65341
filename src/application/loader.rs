//! Loads flat item lists from JSON and builds stores from them.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{InputItem, TreeBuilder, TreeStore};

/// Where the items JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a JSON array of item records.
pub fn parse_items(content: &str, context: &str) -> ApplicationResult<Vec<InputItem>> {
    serde_json::from_str(content).map_err(|source| ApplicationError::Parse {
        context: context.to_string(),
        source,
    })
}

#[instrument(level = "debug")]
pub fn load_items(source: &InputSource) -> ApplicationResult<Vec<InputItem>> {
    let content = match source {
        InputSource::File(path) => {
            std::fs::read_to_string(path).with_source_context(source)?
        }
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_source_context(source)?;
            buf
        }
    };
    let items = parse_items(&content, &source.to_string())?;
    debug!(count = items.len(), "loaded items");
    Ok(items)
}

/// Load items from `source` and build a store with `builder`.
#[instrument(level = "debug", skip(builder))]
pub fn load_store(source: &InputSource, builder: &TreeBuilder) -> ApplicationResult<TreeStore> {
    let items = load_items(source)?;
    Ok(builder.build(items)?)
}
