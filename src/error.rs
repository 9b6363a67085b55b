use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a knockout run.
#[derive(Error, Debug)]
pub enum KnockoutError {
    #[error("image not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("buffer of {len} bytes is not a whole number of RGBA pixels")]
    MalformedBuffer { len: usize },
}

pub type Result<T> = std::result::Result<T, KnockoutError>;
