//! Text measurement capability.
//!
//! The layout core never touches a font backend: label widths and
//! heights depend on platform font rendering, so measurement is
//! injected by the caller. A renderer typically wraps its own font
//! stack in [`TextMeasurer`]; headless callers and tests can use
//! [`HeuristicMeasurer`].

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Caller-supplied measurement backend.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_family: &str, font_size: f32, font_weight: u16) -> TextSize;
}

/// Backend-free approximation: average glyph advance of `0.56 x
/// font_size`, line height of `1.2 x font_size`. Good enough for layout
/// smoke tests, not for production rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

const AVG_ADVANCE_RATIO: f32 = 0.56;
const LINE_HEIGHT_RATIO: f32 = 1.2;
const BOLD_WIDTH_RATIO: f32 = 1.08;

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, _font_family: &str, font_size: f32, font_weight: u16) -> TextSize {
        if text.is_empty() || font_size <= 0.0 {
            return TextSize {
                width: 0.0,
                height: 0.0,
            };
        }
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        let mut width = widest as f32 * font_size * AVG_ADVANCE_RATIO;
        if font_weight >= 600 {
            width *= BOLD_WIDTH_RATIO;
        }
        TextSize {
            width,
            height: lines as f32 * font_size * LINE_HEIGHT_RATIO,
        }
    }
}
