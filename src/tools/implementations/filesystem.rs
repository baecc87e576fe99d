//! Filesystem tool implementations
//!
//! Implements the file-creation operation behind the `touch_file` tool.
//! Neither path segment is validated: no existence check on the
//! destination, no traversal restriction, no collision check. The server
//! will create or truncate any path the process can reach.

use crate::errors::{Result, ServerError};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Arguments accepted by the `touch_file` tool
#[derive(Debug, Deserialize)]
pub struct TouchFileArgs {
    /// Name of the file to create
    pub file: String,

    /// Directory the file is created in
    #[serde(rename = "destPath")]
    pub dest_path: String,
}

/// Wire adapter registered in the tool lookup table
///
/// Decodes the two text arguments and forwards to [`create_empty_file`].
/// A missing or mistyped argument is an invalid-params rejection; the
/// handler itself is never reached.
pub fn touch_file(args: &Value) -> Result<String> {
    let args: TouchFileArgs = serde_json::from_value(args.clone())
        .map_err(|e| ServerError::InvalidParams(format!("touch_file arguments: {e}")))?;

    create_empty_file(&args.file, &args.dest_path)
}

/// Create an empty file named `file_name` under `dest_path`
///
/// The two segments are combined with the platform join rule, so an
/// absolute `file_name` replaces `dest_path` entirely. The combined path
/// is opened for writing and closed immediately, truncating any existing
/// content; nothing is ever written. Filesystem failures propagate
/// unclassified.
pub fn create_empty_file(file_name: &str, dest_path: &str) -> Result<String> {
    let path = Path::new(dest_path).join(file_name);

    File::create(&path)?;

    Ok(format!("File {} created", path.display()))
}
