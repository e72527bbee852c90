//! Error types for the CLI.

use std::io;
use std::path::PathBuf;

/// Failures while reading input files. All of them abort the command
/// before anything is printed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not well-formed JSON.
    #[error("{} is not a valid JSON document", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file is not valid TOML or has bad values.
    #[error("invalid configuration in {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A command was refused before doing any work.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A positional argument with no configured default was not given.
    #[error("please provide a {argument} file for the '{command}' command")]
    MissingArgument {
        argument: &'static str,
        command: &'static str,
    },

    /// The merge overlay is one of the full canonical documents.
    #[error(
        "refusing to merge '{}': do not use a full document as the merge target, \
         use a diff or untranslated output file instead",
        .0.display()
    )]
    UnsafeMergeTarget(PathBuf),
}
