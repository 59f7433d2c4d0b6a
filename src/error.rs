use std::path::PathBuf;

use image::{ColorType, ImageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot determine the image format of {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("cannot decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: ImageError },

    #[error("colour type {0:?} is not supported")]
    UnsupportedColor(ColorType),

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: ImageError },
}
