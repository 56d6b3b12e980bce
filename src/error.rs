use crate::lang::Lang;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not detect language from extension of {}", .0.display())]
    UnknownExtension(PathBuf),

    #[error("invalid body query for {lang}: {message}")]
    Query { lang: Lang, message: String },

    #[error("grammar for {0} rejected by tree-sitter")]
    Grammar(Lang),

    #[error("failed to parse source as {0}")]
    Parse(Lang),

    #[error("root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("expected a directory at {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid ignore pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("no files to concatenate")]
    NoFiles,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} is not valid UTF-8 text", .0.display())]
    NotUtf8(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
