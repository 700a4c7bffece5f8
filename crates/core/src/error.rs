use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassglobError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },
    #[error("manifest error in {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ClassglobError>;
