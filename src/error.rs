use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A scene list was indexed past its end.
    #[error("{kind} index {index} is out of range (len {len})")]
    OutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("a render worker panicked")]
    WorkerPanicked,

    #[error("failed to write image")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
