//! Source document acquisition.
//!
//! The source document is raw bytes on disk, read once per invocation and
//! owned by the caller. Read failures surface as [`Error::FileRead`] with the
//! offending path attached.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Input path used when the caller does not name one.
pub const DEFAULT_INPUT_PATH: &str = "index.dom";

/// Read the raw bytes of a saved HTML document.
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
