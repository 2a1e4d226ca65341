//! Ties I/O failures to the item source that was being read.

use std::io;

use crate::application::{ApplicationError, ApplicationResult, InputSource};

pub trait IoResultExt<T> {
    /// Turn an I/O error into `OperationFailed` naming `source`, so a missing
    /// items file and a broken stdin pipe report where the read failed.
    fn with_source_context(self, source: &InputSource) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, source: &InputSource) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("read items from {source}"),
            source: Box::new(e),
        })
    }
}
