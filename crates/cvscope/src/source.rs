use std::{fmt, path::PathBuf, str::FromStr};

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A capture device by index.
    Device(i32),
    /// A video file.
    File(PathBuf),
}

impl FromStr for SourceSpec {
    type Err = std::convert::Infallible;

    /// Parses a non-negative integer as a device index, anything else as a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(index) if index >= 0 => Ok(SourceSpec::Device(index)),
            _ => Ok(SourceSpec::File(PathBuf::from(s))),
        }
    }
}

impl Default for SourceSpec {
    fn default() -> Self {
        SourceSpec::Device(0)
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Device(index) => write!(f, "device {index}"),
            SourceSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!("0".parse::<SourceSpec>(), Ok(SourceSpec::Device(0)));
        assert_eq!(" 2 ".parse::<SourceSpec>(), Ok(SourceSpec::Device(2)));
        assert_eq!(
            "clips/street.mp4".parse::<SourceSpec>(),
            Ok(SourceSpec::File(PathBuf::from("clips/street.mp4")))
        );
        assert_eq!(
            "-1".parse::<SourceSpec>(),
            Ok(SourceSpec::File(PathBuf::from("-1")))
        );
    }

    #[test]
    fn test_display_source() {
        assert_eq!(SourceSpec::Device(1).to_string(), "device 1");
        assert_eq!(SourceSpec::default().to_string(), "device 0");
    }
}
