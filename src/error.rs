//! .
//!
//! Everything that can go wrong while writing icons is an I/O failure of some sort;
//! all geometry is constant and can not fail.
use {
  std::{io, path::PathBuf},
  thiserror::Error
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("unable to create output directory {}", path.display())]
  CreateDir {
    path: PathBuf,
    #[source] source: io::Error
  },
  #[error("unable to write {}", path.display())]
  Write {
    path: PathBuf,
    #[source] source: image::ImageError
  },
  #[error("unable to stat {}", path.display())]
  Stat {
    path: PathBuf,
    #[source] source: io::Error
  },
}

pub type Result<T> = std::result::Result<T, Error>;
