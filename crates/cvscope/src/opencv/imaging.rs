use ::opencv::{
    core::{self, Mat, Point, Size},
    imgproc,
};

use crate::{
    backend::Imaging,
    error::ScopeError,
    filter::FilterConfig,
    options::{BorderMode, MorphShape},
};

/// Runs the filters with `imgproc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenCvImaging;

impl Imaging for OpenCvImaging {
    type Frame = Mat;

    fn apply(&mut self, src: &Mat, config: &FilterConfig) -> Result<Mat, ScopeError> {
        let mut dst = Mat::default();
        let anchor = Point::new(-1, -1);

        match config {
            FilterConfig::Blur(c) => {
                imgproc::blur(src, &mut dst, size(c.ksize), anchor, core::BORDER_DEFAULT)?;
            }
            FilterConfig::Erode(c) => {
                let kernel =
                    imgproc::get_structuring_element(morph_shape(c.shape), size(c.ksize), anchor)?;
                imgproc::erode(
                    src,
                    &mut dst,
                    &kernel,
                    anchor,
                    1,
                    core::BORDER_CONSTANT,
                    imgproc::morphology_default_border_value()?,
                )?;
            }
            FilterConfig::GaussianBlur(c) => {
                imgproc::gaussian_blur(
                    src,
                    &mut dst,
                    size(c.ksize),
                    c.sigma.0,
                    c.sigma.1,
                    border_type(c.border),
                )?;
            }
            FilterConfig::Scharr(c) => {
                imgproc::scharr(
                    src,
                    &mut dst,
                    core::CV_16S,
                    c.dx,
                    c.dy,
                    c.scale,
                    c.delta,
                    border_type(c.border),
                )?;
            }
        }

        Ok(dst)
    }
}

#[inline]
fn size(ksize: (i32, i32)) -> Size {
    Size::new(ksize.0, ksize.1)
}

fn morph_shape(shape: MorphShape) -> i32 {
    match shape {
        MorphShape::Rect => imgproc::MORPH_RECT,
        MorphShape::Cross => imgproc::MORPH_CROSS,
        MorphShape::Ellipse => imgproc::MORPH_ELLIPSE,
    }
}

fn border_type(mode: BorderMode) -> i32 {
    match mode {
        BorderMode::Constant => core::BORDER_CONSTANT,
        BorderMode::Replicate => core::BORDER_REPLICATE,
        BorderMode::Reflect => core::BORDER_REFLECT,
        BorderMode::Reflect101 => core::BORDER_REFLECT_101,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{BlurConfig, ScharrConfig};
    use ::opencv::prelude::*;

    #[test]
    fn test_option_constants() {
        assert_eq!(morph_shape(MorphShape::Rect), imgproc::MORPH_RECT);
        assert_eq!(morph_shape(MorphShape::Ellipse), imgproc::MORPH_ELLIPSE);
        assert_eq!(border_type(BorderMode::Reflect101), core::BORDER_REFLECT_101);
    }

    #[test]
    fn test_apply_keeps_size() -> Result<(), ScopeError> {
        let src = Mat::new_rows_cols_with_default(24, 32, core::CV_8UC3, core::Scalar::all(128.0))?;
        let mut imaging = OpenCvImaging;

        let blurred = imaging.apply(&src, &FilterConfig::Blur(BlurConfig { ksize: (5, 5) }))?;
        assert_eq!(blurred.size()?, src.size()?);

        let gradient = imaging.apply(
            &src,
            &FilterConfig::Scharr(ScharrConfig {
                dx: 1,
                dy: 0,
                scale: 1.0,
                delta: 0.0,
                border: BorderMode::Replicate,
            }),
        )?;
        assert_eq!(gradient.size()?, src.size()?);
        assert_eq!(gradient.depth(), core::CV_16S);

        Ok(())
    }
}
