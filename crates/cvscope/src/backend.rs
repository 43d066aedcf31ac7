//! Seams to the capture device, the display window and the filter library.
//!
//! A [`crate::session::FilterSession`] owns one value of each trait for its
//! whole lifetime. Implementations release their resources in `Drop`, so a
//! session that is dropped on any exit path releases them exactly once.

use std::time::Duration;

use crate::{error::ScopeError, filter::FilterConfig};

/// An image buffer produced by a [`VideoSource`].
pub trait Frame {
    /// Returns true when the buffer holds no pixels and must be skipped.
    fn is_empty(&self) -> bool;
}

/// A device or file producing frames.
pub trait VideoSource {
    /// The frame type produced by the source.
    type Frame: Frame;

    /// Reads the next frame.
    ///
    /// An error is fatal for the session reading from this source.
    fn read(&mut self) -> Result<Self::Frame, ScopeError>;

    /// Returns a name for the source to use in messages.
    fn describe(&self) -> String;
}

/// A display window with integer trackbars and keyboard polling.
pub trait Window {
    /// The frame type the window can show.
    type Frame;

    /// Creates a trackbar with range `[0, max]`.
    fn create_trackbar(&mut self, name: &str, max: i32) -> Result<(), ScopeError>;

    /// Raises the lower bound of a trackbar.
    fn set_trackbar_min(&mut self, name: &str, min: i32) -> Result<(), ScopeError>;

    /// Returns the current trackbar position.
    fn trackbar_pos(&self, name: &str) -> Result<i32, ScopeError>;

    /// Moves a trackbar so the operator sees the new position.
    fn set_trackbar_pos(&mut self, name: &str, pos: i32) -> Result<(), ScopeError>;

    /// Replaces the window title.
    fn set_title(&mut self, title: &str) -> Result<(), ScopeError>;

    /// Displays a frame.
    fn show(&mut self, frame: &Self::Frame) -> Result<(), ScopeError>;

    /// Waits up to `delay` for a key press and returns its code.
    fn wait_key(&mut self, delay: Duration) -> Result<Option<i32>, ScopeError>;
}

/// The library computing the actual filters.
pub trait Imaging {
    /// The frame type the filters operate on.
    type Frame;

    /// Applies the filter described by `config` to `src`.
    fn apply(&mut self, src: &Self::Frame, config: &FilterConfig)
        -> Result<Self::Frame, ScopeError>;
}
