use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write entry file {path}: {source}")]
    EntryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown build mode: {0}")]
    UnknownMode(String),
}
