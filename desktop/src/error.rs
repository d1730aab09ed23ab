use std::{fmt, path::PathBuf};

use mochi_core::{bitmap::BitmapError, header::HeaderError};

#[derive(Debug)]
pub enum Error {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    NotADirectory(PathBuf),
    NoInputFiles(PathBuf),
    Image(image::ImageError),
    Io(std::io::Error),
    Bitmap(BitmapError),
    Header(HeaderError),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Error::NotAFile(path) => write!(f, "{} is not a file", path.display()),
            Error::NotADirectory(path) => write!(f, "{} is not a directory", path.display()),
            Error::NoInputFiles(path) => write!(f, "no GIF files found in {}", path.display()),
            Error::Image(err) => write!(f, "image error: {err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Bitmap(err) => write!(f, "bitmap error: {err}"),
            Error::Header(err) => write!(f, "cannot generate header: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Bitmap(err) => Some(err),
            Error::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<BitmapError> for Error {
    fn from(err: BitmapError) -> Self {
        Error::Bitmap(err)
    }
}

impl From<HeaderError> for Error {
    fn from(err: HeaderError) -> Self {
        Error::Header(err)
    }
}
