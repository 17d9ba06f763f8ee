//! MediaKind value object
//!
//! Classifies a discovered file by extension so the worker can decide whether
//! to route it through the metadata cache (music-like) or the extractor.

use serde::{Deserialize, Serialize};
use std::path::Path;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "aac", "ogg", "m4a", "wma", "opus"];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ts", "m2ts", "3gp",
];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff"];

/// Coarse content classification derived from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
    Image,
    Other,
}

impl MediaKind {
    /// Classify by extension; unknown or missing extensions are `Other`.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return MediaKind::Other;
        };
        let ext = ext.to_lowercase();
        if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Audio
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }

    /// Whether this kind is routed through the music-like branch: metadata
    /// lookup by content hash rather than format extraction.
    pub fn is_music_like(&self) -> bool {
        matches!(self, MediaKind::Audio)
    }

    pub fn is_scannable(&self) -> bool {
        !matches!(self, MediaKind::Other)
    }
}
