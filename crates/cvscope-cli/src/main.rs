use argh::FromArgs;
use std::time::Duration;

use cvscope::{
    opencv::{HighGuiWindow, OpenCvCapture, OpenCvImaging},
    ExitReason, FilterKind, FilterSession, SessionConfig, SourceSpec,
};

#[derive(FromArgs)]
/// Tune image filter parameters on live video
#[argh(
    note = "Keys: 'z'/'x' page through options, 'space' pauses filtering, 'g' prints Rust code for the current filter, 'p' prints Python code, 'esc' exits."
)]
struct Args {
    /// the video source: a capture device index or a video file path
    #[argh(option, short = 's', default = "SourceSpec::default()")]
    source: SourceSpec,

    /// milliseconds to wait for a key press on every frame
    #[argh(option, default = "1")]
    poll_ms: u64,

    #[argh(subcommand)]
    filter: FilterCommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum FilterCommand {
    Blur(BlurArgs),
    Erode(ErodeArgs),
    Gaussian(GaussianArgs),
    Scharr(ScharrArgs),
}

impl FilterCommand {
    fn kind(&self) -> FilterKind {
        match self {
            FilterCommand::Blur(_) => FilterKind::Blur,
            FilterCommand::Erode(_) => FilterKind::Erode,
            FilterCommand::Gaussian(_) => FilterKind::GaussianBlur,
            FilterCommand::Scharr(_) => FilterKind::Scharr,
        }
    }
}

#[derive(FromArgs)]
/// Blur video images using a normalized box filter
#[argh(subcommand, name = "blur")]
struct BlurArgs {}

#[derive(FromArgs)]
/// Erode video images, 'z'/'x' page through structuring element shapes
#[argh(subcommand, name = "erode")]
struct ErodeArgs {}

#[derive(FromArgs)]
/// Apply Gaussian blur to video images, 'z'/'x' page through border types
#[argh(subcommand, name = "gaussian")]
struct GaussianArgs {}

#[derive(FromArgs)]
/// Apply Scharr to video images, 'z'/'x' page through border types
#[argh(subcommand, name = "scharr")]
struct ScharrArgs {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let kind = args.filter.kind();

    let source = OpenCvCapture::open(&args.source).inspect_err(|e| log::error!("{e}"))?;
    let window = HighGuiWindow::new(kind.name())?;

    let config = SessionConfig::new().with_poll_interval(Duration::from_millis(args.poll_ms));
    let session = FilterSession::new(kind, source, window, OpenCvImaging, config)?;

    match session.run()? {
        ExitReason::Requested => log::info!("Finished exploring. Closing app."),
        ExitReason::SourceFailed => log::warn!("Video source closed: {}", args.source),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::from_args(&["cvscope"], &["blur"]).expect("valid args");
        assert_eq!(args.source, SourceSpec::Device(0));
        assert_eq!(args.poll_ms, 1);
        assert_eq!(args.filter.kind(), FilterKind::Blur);
    }

    #[test]
    fn test_parse_file_source() {
        let args = Args::from_args(&["cvscope"], &["-s", "street.mp4", "--poll-ms", "10", "gaussian"])
            .expect("valid args");
        assert_eq!(args.source, SourceSpec::File("street.mp4".into()));
        assert_eq!(args.poll_ms, 10);
        assert_eq!(args.filter.kind(), FilterKind::GaussianBlur);
    }

    #[test]
    fn test_parse_requires_filter() {
        assert!(Args::from_args(&["cvscope"], &["-s", "1"]).is_err());
    }
}
