/// Failures at the edges of the crate: reading images, writing previews and
/// parsing options. Extraction itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to read or write image: {0}")]
  Image(#[from] image::ImageError),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
