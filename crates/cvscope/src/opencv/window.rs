use std::time::Duration;

use ::opencv::{core::Mat, highgui};

use crate::{backend::Window, error::ScopeError};

/// A HighGUI window with trackbars.
///
/// The window is destroyed when the value is dropped.
pub struct HighGuiWindow {
    name: String,
}

impl HighGuiWindow {
    /// Creates a window identified by `name`.
    pub fn new(name: &str) -> Result<Self, ScopeError> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Window for HighGuiWindow {
    type Frame = Mat;

    fn create_trackbar(&mut self, name: &str, max: i32) -> Result<(), ScopeError> {
        highgui::create_trackbar(name, &self.name, None, max, None)?;
        Ok(())
    }

    fn set_trackbar_min(&mut self, name: &str, min: i32) -> Result<(), ScopeError> {
        highgui::set_trackbar_min(name, &self.name, min)?;
        Ok(())
    }

    fn trackbar_pos(&self, name: &str) -> Result<i32, ScopeError> {
        Ok(highgui::get_trackbar_pos(name, &self.name)?)
    }

    fn set_trackbar_pos(&mut self, name: &str, pos: i32) -> Result<(), ScopeError> {
        highgui::set_trackbar_pos(name, &self.name, pos)?;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), ScopeError> {
        highgui::set_window_title(&self.name, title)?;
        Ok(())
    }

    fn show(&mut self, frame: &Mat) -> Result<(), ScopeError> {
        highgui::imshow(&self.name, frame)?;
        Ok(())
    }

    fn wait_key(&mut self, delay: Duration) -> Result<Option<i32>, ScopeError> {
        // a zero delay would block until a key is pressed
        let delay = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX).max(1);
        let key = highgui::wait_key(delay)?;
        Ok((key >= 0).then_some(key))
    }
}

impl Drop for HighGuiWindow {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.name) {
            log::warn!("failed to destroy window {}: {e}", self.name);
        }
    }
}
