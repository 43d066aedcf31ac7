//! Code fragments reproducing the current filter call.
//!
//! Fragments are meant to be copy-pasted: a comment line naming the language,
//! a blank line, the call expression with every parameter as a literal, and a
//! closing blank line.

use crate::filter::{
    BlurConfig, ErodeConfig, FilterConfig, GaussianBlurConfig, ScharrConfig,
};

/// Target language of a code fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Rust against the `opencv` crate.
    Rust,
    /// Python. Not implemented yet, only the header and a notice are emitted.
    Python,
}

impl Language {
    /// Returns the language name used in the header.
    pub fn name(self) -> &'static str {
        match self {
            Language::Rust => "Rust",
            Language::Python => "Python",
        }
    }

    fn comment(self) -> &'static str {
        match self {
            Language::Rust => "//",
            Language::Python => "#",
        }
    }
}

/// Renders the call for `config` in `language`.
///
/// The output only depends on the arguments.
///
/// # Examples
///
/// ```
/// use cvscope::codegen::{render, Language};
/// use cvscope::filter::{BlurConfig, FilterConfig};
///
/// let config = FilterConfig::Blur(BlurConfig { ksize: (12, 12) });
/// let text = render(Language::Rust, &config);
/// assert!(text.starts_with("// Rust code fragment\n\n"));
/// assert!(text.contains("core::Size::new(12, 12)"));
/// ```
pub fn render(language: Language, config: &FilterConfig) -> String {
    let body = match language {
        Language::Rust => rust_call(config),
        Language::Python => "Not implemented.".to_string(),
    };
    format!(
        "{} {} code fragment\n\n{}\n\n",
        language.comment(),
        language.name(),
        body
    )
}

fn rust_call(config: &FilterConfig) -> String {
    match config {
        FilterConfig::Blur(BlurConfig { ksize: (x, y) }) => format!(
            "imgproc::blur(&src, &mut dst, core::Size::new({x}, {y}), core::Point::new(-1, -1), core::BORDER_DEFAULT)?;"
        ),
        FilterConfig::Erode(ErodeConfig {
            shape,
            ksize: (x, y),
        }) => format!(
            "let kernel = imgproc::get_structuring_element(imgproc::{}, core::Size::new({x}, {y}), core::Point::new(-1, -1))?;\n\
             imgproc::erode(&src, &mut dst, &kernel, core::Point::new(-1, -1), 1, core::BORDER_CONSTANT, imgproc::morphology_default_border_value()?)?;",
            shape.entry().symbol
        ),
        FilterConfig::GaussianBlur(GaussianBlurConfig {
            ksize: (x, y),
            sigma: (sx, sy),
            border,
        }) => format!(
            "// OpenCV >= 4.11 bindings take a trailing core::AlgorithmHint argument\n\
             imgproc::gaussian_blur(&src, &mut dst, core::Size::new({x}, {y}), {sx:.1}, {sy:.1}, core::{})?;",
            border.entry().symbol
        ),
        FilterConfig::Scharr(ScharrConfig {
            dx,
            dy,
            scale,
            delta,
            border,
        }) => format!(
            "imgproc::scharr(&src, &mut dst, core::CV_16S, {dx}, {dy}, {scale:.1}, {delta:.1}, core::{})?;",
            border.entry().symbol
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BorderMode, MorphShape};

    #[test]
    fn test_render_blur() {
        let config = FilterConfig::Blur(BlurConfig { ksize: (12, 12) });
        assert_eq!(
            render(Language::Rust, &config),
            "// Rust code fragment\n\n\
             imgproc::blur(&src, &mut dst, core::Size::new(12, 12), core::Point::new(-1, -1), core::BORDER_DEFAULT)?;\n\n"
        );
    }

    #[test]
    fn test_render_erode_uses_symbol() {
        let config = FilterConfig::Erode(ErodeConfig {
            shape: MorphShape::Cross,
            ksize: (3, 5),
        });
        let text = render(Language::Rust, &config);
        assert!(text.contains("imgproc::get_structuring_element(imgproc::MORPH_CROSS, core::Size::new(3, 5)"));
        assert!(text.contains("imgproc::erode(&src, &mut dst, &kernel"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_gaussian_float_precision() {
        let config = FilterConfig::GaussianBlur(GaussianBlurConfig {
            ksize: (1, 1),
            sigma: (30.0, 0.0),
            border: BorderMode::Reflect,
        });
        let text = render(Language::Rust, &config);
        assert!(text.contains(
            "imgproc::gaussian_blur(&src, &mut dst, core::Size::new(1, 1), 30.0, 0.0, core::BORDER_REFLECT)?;"
        ));
    }

    #[test]
    fn test_render_gaussian_notes_algorithm_hint() {
        let config = FilterConfig::GaussianBlur(GaussianBlurConfig {
            ksize: (3, 3),
            sigma: (1.0, 1.0),
            border: BorderMode::Constant,
        });
        let text = render(Language::Rust, &config);
        let body: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(
            body[0],
            "// OpenCV >= 4.11 bindings take a trailing core::AlgorithmHint argument"
        );
        assert!(body[1].starts_with("imgproc::gaussian_blur("));
    }

    #[test]
    fn test_render_scharr() {
        let config = FilterConfig::Scharr(ScharrConfig {
            dx: 0,
            dy: 1,
            scale: 2.0,
            delta: 0.0,
            border: BorderMode::Constant,
        });
        let text = render(Language::Rust, &config);
        assert!(text.contains(
            "imgproc::scharr(&src, &mut dst, core::CV_16S, 0, 1, 2.0, 0.0, core::BORDER_CONSTANT)?;"
        ));
    }

    #[test]
    fn test_render_python_not_implemented() {
        let config = FilterConfig::Blur(BlurConfig { ksize: (3, 3) });
        let text = render(Language::Python, &config);
        assert_eq!(text, "# Python code fragment\n\nNot implemented.\n\n");
        assert!(!text.contains("blur"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = FilterConfig::Scharr(ScharrConfig {
            dx: 1,
            dy: 0,
            scale: 60.0,
            delta: 12.0,
            border: BorderMode::Reflect101,
        });
        for language in [Language::Rust, Language::Python] {
            assert_eq!(render(language, &config), render(language, &config));
        }
    }
}
