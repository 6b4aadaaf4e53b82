use std::path::PathBuf;

/// Errors returned by the image-to-array pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open '{}' for reading: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not open '{}' for writing: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("odd sample count ({len}) cannot be packed two per byte")]
    OddSampleCount { len: usize },
    #[error("'{name}' is not a valid C identifier")]
    InvalidName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
