//! Image Processing Helpers
//!
//! Canvas-independent math for the compress and annotate views.

use serde::{Deserialize, Serialize};

// ========================
// Compression
// ========================

pub const MIN_QUALITY: f64 = 0.1;
pub const MAX_QUALITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressSettings {
    /// Longest edge of the output, in pixels
    pub max_edge: u32,
    /// JPEG quality passed to `toDataURL`
    pub quality: f64,
}

impl Default for CompressSettings {
    fn default() -> Self {
        Self {
            max_edge: 1280,
            quality: 0.7,
        }
    }
}

impl CompressSettings {
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = if quality.is_nan() {
            Self::default().quality
        } else {
            quality.clamp(MIN_QUALITY, MAX_QUALITY)
        };
        self
    }

    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = max_edge.max(1);
        self
    }
}

/// Scale `(width, height)` so the longer edge is at most `max_edge`.
/// Never upscales and never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest == 0 || longest <= max_edge {
        return (width.max(1), height.max(1));
    }
    let scale = max_edge as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Decoded byte length of a base64 data URL
pub fn data_url_size(data_url: &str) -> usize {
    let Some((_, payload)) = data_url.split_once(',') else {
        return 0;
    };
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() * 3 / 4).saturating_sub(padding)
}

pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Percentage saved going from `original` to `compressed`; negative if it grew
pub fn savings_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

// ========================
// Annotation
// ========================

/// Marker stored in image-relative coordinates (0.0..=1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
    next_id: u32,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a marker at a pixel position on a `width` x `height` surface.
    /// An empty label falls back to the marker number.
    pub fn add(&mut self, x: f64, y: f64, width: f64, height: f64, label: &str) -> Option<u32> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let label = match label.trim() {
            "" => format!("#{}", id),
            text => text.to_string(),
        };
        self.items.push(Annotation {
            id,
            x: (x / width).clamp(0.0, 1.0),
            y: (y / height).clamp(0.0, 1.0),
            label,
        });
        Some(id)
    }

    pub fn undo(&mut self) -> Option<Annotation> {
        self.items.pop()
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }

    pub fn items(&self) -> &[Annotation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.items).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_scales_longest_edge() {
        assert_eq!(fit_within(4000, 3000, 1000), (1000, 750));
        assert_eq!(fit_within(1080, 1920, 960), (540, 960));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(640, 480, 1280), (640, 480));
        assert_eq!(fit_within(0, 0, 100), (1, 1));
        assert_eq!(fit_within(10000, 1, 100), (100, 1));
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(CompressSettings::default().with_quality(5.0).quality, 1.0);
        assert_eq!(CompressSettings::default().with_quality(0.0).quality, 0.1);
        assert_eq!(CompressSettings::default().with_quality(f64::NAN).quality, 0.7);
        assert_eq!(CompressSettings::default().with_max_edge(0).max_edge, 1);
    }

    #[test]
    fn test_data_url_size() {
        // "hello" -> aGVsbG8=
        assert_eq!(data_url_size("data:text/plain;base64,aGVsbG8="), 5);
        // "hi" -> aGk=
        assert_eq!(data_url_size("data:text/plain;base64,aGk="), 2);
        assert_eq!(data_url_size("not a data url"), 0);
    }

    #[test]
    fn test_format_bytes_and_savings() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(savings_percent(1000, 250), 75.0);
        assert_eq!(savings_percent(0, 10), 0.0);
        assert!(savings_percent(100, 120) < 0.0);
    }

    #[test]
    fn test_annotations_normalized_and_numbered() {
        let mut set = AnnotationSet::new();
        let a = set.add(50.0, 25.0, 200.0, 100.0, "").unwrap();
        let b = set.add(500.0, -10.0, 200.0, 100.0, " crack ").unwrap();
        assert_eq!((a, b), (1, 2));

        let items = set.items();
        assert_eq!(items[0].label, "#1");
        assert_eq!((items[0].x, items[0].y), (0.25, 0.25));
        assert_eq!(items[1].label, "crack");
        assert_eq!((items[1].x, items[1].y), (1.0, 0.0));
    }

    #[test]
    fn test_annotation_undo_remove_clear() {
        let mut set = AnnotationSet::new();
        assert_eq!(set.add(1.0, 1.0, 0.0, 10.0, "x"), None);

        set.add(1.0, 1.0, 10.0, 10.0, "a");
        set.add(2.0, 2.0, 10.0, 10.0, "b");
        set.add(3.0, 3.0, 10.0, 10.0, "c");
        assert_eq!(set.undo().map(|a| a.label), Some("c".to_string()));
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.len(), 1);
        assert!(set.to_json().contains("\"b\""));

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.add(1.0, 1.0, 10.0, 10.0, ""), Some(1));
    }
}
