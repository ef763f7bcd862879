use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("couldn't read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't write to output")]
    Write(#[from] std::io::Error),
}
