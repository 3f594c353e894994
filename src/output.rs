//! Output file placement.
//!
//! Files are named `{Kind}_{YYYYMMDDHHMMSS}.{ext}` inside a destination
//! directory chosen by the caller.

use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp layout used in output file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Kind of file an operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Cover image carrying a secret image.
    ImageStegano,
    /// Bit-plane recovered from a stego image.
    ExtractedImage,
    /// Cover image carrying a message.
    MessageStegano,
    /// Cover audio carrying a message.
    AudioStegano,
}

impl OutputKind {
    /// File name prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::ImageStegano => "ImageStegano",
            Self::ExtractedImage => "ExtractedImage",
            Self::MessageStegano => "MessageStegano",
            Self::AudioStegano => "AudioStegano",
        }
    }

    /// File extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::AudioStegano => "wav",
            _ => "png",
        }
    }
}

/// Destination directory for output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// File path for `kind` stamped with `at`.
    pub fn file_path(&self, kind: OutputKind, at: NaiveDateTime) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.{}",
            kind.prefix(),
            at.format(TIMESTAMP_FORMAT),
            kind.extension()
        ))
    }

    /// Creates the directory if needed and returns a path stamped with the
    /// current local time.
    pub fn prepare(&self, kind: OutputKind) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.file_path(kind, Local::now().naive_local()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 2)
            .and_then(|d| d.and_hms_opt(22, 32, 0))
            .unwrap()
    }

    #[test]
    fn test_file_names() {
        let out = OutputDir::new("Output/Image");
        assert_eq!(
            out.file_path(OutputKind::MessageStegano, at()),
            PathBuf::from("Output/Image/MessageStegano_20231002223200.png")
        );
        assert_eq!(
            out.file_path(OutputKind::ExtractedImage, at()),
            PathBuf::from("Output/Image/ExtractedImage_20231002223200.png")
        );

        let audio = OutputDir::new("Output/Audio");
        assert_eq!(
            audio.file_path(OutputKind::AudioStegano, at()),
            PathBuf::from("Output/Audio/AudioStegano_20231002223200.wav")
        );
    }

    #[test]
    fn test_prepare_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::new(dir.path().join("a").join("b"));

        let path = out.prepare(OutputKind::ImageStegano).unwrap();
        assert!(out.path().is_dir());
        assert_eq!(path.parent(), Some(out.path()));

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ImageStegano_"));
        assert!(name.ends_with(".png"));
        // prefix + '_' + 14 digits + ".png"
        assert_eq!(name.len(), "ImageStegano_".len() + 14 + 4);
    }
}
