/// An error type for the cvscope crate.
#[derive(thiserror::Error, Debug)]
pub enum ScopeError {
    /// The video source could not be opened.
    #[error("Error opening video source: {0}")]
    OpenSource(String),

    /// A frame could not be read from the video source.
    #[error("Error cannot read video source: {0}")]
    ReadSource(String),

    /// The display window rejected an operation.
    #[error("Window error. {0}")]
    Window(String),

    /// Failed to write a code fragment.
    #[error("Failed to write the code fragment. {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the OpenCV backend.
    #[cfg(feature = "opencv")]
    #[error("OpenCV error. {0}")]
    OpenCv(#[from] ::opencv::Error),
}
