//! Enclosure media types

use std::fmt;
use std::path::Path;

/// Media types accepted for podcast enclosures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// MPEG audio layer 3
    Mp3,
    /// MPEG-4 audio
    M4a,
    /// MPEG-4 audiobook
    M4b,
    /// MPEG-4 video
    Mp4,
    /// iTunes video
    M4v,
    /// QuickTime video
    Mov,
    /// PDF document
    Pdf,
}

impl MediaType {
    /// Returns all supported media types
    pub fn all() -> Vec<Self> {
        vec![
            Self::Mp3,
            Self::M4a,
            Self::M4b,
            Self::Mp4,
            Self::M4v,
            Self::Mov,
            Self::Pdf,
        ]
    }

    /// Detects the media type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "m4b" => Some(Self::M4b),
            "mp4" => Some(Self::Mp4),
            "m4v" => Some(Self::M4v),
            "mov" => Some(Self::Mov),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Detects the media type from the last path segment of a URL.
    /// Query strings and fragments are ignored.
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let segment = path.rsplit('/').next().unwrap_or(path);
        Path::new(segment)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Looks up a media type by its MIME string
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_lowercase();
        Self::all().into_iter().find(|media| media.mime() == mime)
    }

    /// Returns the MIME type written to the enclosure `type` attribute
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/x-m4a",
            Self::M4b => "audio/x-m4b",
            Self::Mp4 => "video/mp4",
            Self::M4v => "video/x-m4v",
            Self::Mov => "video/quicktime",
            Self::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Media file attached to an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Public URL the file is served from
    pub url: String,
    /// File size in bytes
    pub length: u64,
    /// Media type of the file
    pub media_type: MediaType,
}

impl Enclosure {
    /// Creates an enclosure
    pub fn new(url: impl Into<String>, length: u64, media_type: MediaType) -> Self {
        Self {
            url: url.into(),
            length,
            media_type,
        }
    }

    /// Creates an enclosure, taking the media type from the URL's extension
    pub fn infer(url: impl Into<String>, length: u64) -> Option<Self> {
        let url = url.into();
        let media_type = MediaType::from_url(&url)?;
        Some(Self::new(url, length, media_type))
    }
}
