//! Trailing-input collection.
//!
//! After a parse, leftover positional arguments conventionally name
//! input files; with none remaining, the payload comes from the standard
//! input stream instead. Collection is a post-parse helper layered on
//! the engine: reads are initiated once, run to completion or failure,
//! and the engine never interprets the error — that is the caller's
//! responsibility.

use std::fs;
use std::io::{self, Read};

use thiserror::Error;

/// Errors surfaced while collecting trailing input.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Reading a named trailing file failed.
    #[error("failed to read {path}: {source}")]
    File {
        /// The path as it appeared in the remain list.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Reading the standard input stream failed.
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Reads and concatenates the named files, in order.
///
/// # Examples
///
/// ```no_run
/// use argweave_resolve::collect::concat_files;
///
/// let remain = vec!["a.txt".to_string(), "b.txt".to_string()];
/// let content = concat_files(&remain)?;
/// # Ok::<(), argweave_resolve::CollectError>(())
/// ```
pub fn concat_files(paths: &[String]) -> Result<String, CollectError> {
    let mut content = String::new();
    for path in paths {
        let chunk = fs::read_to_string(path).map_err(|source| CollectError::File {
            path: path.clone(),
            source,
        })?;
        content.push_str(&chunk);
    }
    Ok(content)
}

/// Drains any reader to end-of-stream.
pub fn read_all(mut reader: impl Read) -> Result<String, CollectError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Reads the standard input stream to end-of-stream.
pub fn read_stdin() -> Result<String, CollectError> {
    read_all(io::stdin().lock())
}

/// Resolves the trailing payload: named files when any remain, standard
/// input otherwise.
pub fn collect(remain: &[String]) -> Result<String, CollectError> {
    if remain.is_empty() {
        read_stdin()
    } else {
        concat_files(remain)
    }
}
