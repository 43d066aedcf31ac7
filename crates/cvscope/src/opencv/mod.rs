//! Backend built on the `opencv` crate.
//!
//! [`OpenCvCapture`] reads frames with `videoio`, [`HighGuiWindow`] displays
//! them with trackbars and key polling through `highgui`, and [`OpenCvImaging`]
//! runs the filters with `imgproc`.

mod capture;
mod imaging;
mod window;

pub use capture::OpenCvCapture;
pub use imaging::OpenCvImaging;
pub use window::HighGuiWindow;
