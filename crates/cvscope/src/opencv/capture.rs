use ::opencv::{core::Mat, prelude::*, videoio};

use crate::{
    backend::{Frame, VideoSource},
    error::ScopeError,
    source::SourceSpec,
};

impl Frame for Mat {
    fn is_empty(&self) -> bool {
        self.empty()
    }
}

/// A capture device or video file opened through `videoio`.
///
/// The capture is released when the value is dropped.
pub struct OpenCvCapture {
    capture: videoio::VideoCapture,
    source: SourceSpec,
}

impl OpenCvCapture {
    /// Opens a capture device or a video file.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OpenSource`] naming the source when it cannot be opened.
    pub fn open(source: &SourceSpec) -> Result<Self, ScopeError> {
        let capture = match source {
            SourceSpec::Device(index) => videoio::VideoCapture::new(*index, videoio::CAP_ANY),
            SourceSpec::File(path) => {
                videoio::VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)
            }
        }
        .map_err(|e| ScopeError::OpenSource(format!("{source}. {e}")))?;

        let opened = capture
            .is_opened()
            .map_err(|e| ScopeError::OpenSource(format!("{source}. {e}")))?;
        if !opened {
            return Err(ScopeError::OpenSource(source.to_string()));
        }

        Ok(Self {
            capture,
            source: source.clone(),
        })
    }
}

impl VideoSource for OpenCvCapture {
    type Frame = Mat;

    fn read(&mut self) -> Result<Mat, ScopeError> {
        let mut frame = Mat::default();
        match self.capture.read(&mut frame) {
            Ok(true) => Ok(frame),
            Ok(false) => Err(ScopeError::ReadSource(self.source.to_string())),
            Err(e) => Err(ScopeError::ReadSource(format!("{}. {e}", self.source))),
        }
    }

    fn describe(&self) -> String {
        self.source.to_string()
    }
}

impl Drop for OpenCvCapture {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            log::warn!("failed to release video source {}: {e}", self.source);
        }
    }
}
