//! Text extent measurement.
//!
//! The geometry core never rasterizes anything; it only needs per-line
//! widths to size text containers. That one capability lives behind
//! [`MeasureText`] so the owning app can plug in whatever shaping backend
//! it renders with. [`GlyphMeasurer`] is the real implementation (ab_glyph
//! advances + kerning, the same arithmetic the renderer uses to lay glyphs
//! out); [`HeuristicMeasurer`] is a cheap fixed-advance stand-in.

use std::collections::HashMap;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use anyhow::{Context, Result};

use crate::shape::{FontStyle, FontWeight, Shape};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A text container is never measured smaller than this, whatever its
/// content.
pub const MIN_TEXT_WIDTH: f32 = 80.0;
pub const MIN_TEXT_HEIGHT: f32 = 40.0;

// Horizontal/vertical padding between glyphs and the container border,
// as multiples of the font size.
const PADDING_X_FACTOR: f32 = 1.2;
const PADDING_Y_FACTOR: f32 = 0.8;

/// The styling that affects measurement, bundled so it can travel through
/// the resize engine in one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFont<'a> {
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub family: &'a str,
}

impl<'a> TextFont<'a> {
    pub fn new(size: f32, family: &'a str) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            family,
        }
    }

    /// The font of a text shape; `None` for every other variant.
    pub fn of_shape(shape: &'a Shape) -> Option<TextFont<'a>> {
        match shape {
            Shape::Text {
                font_size,
                font_weight,
                font_style,
                font_family,
                ..
            } => Some(TextFont {
                size: *font_size,
                weight: *font_weight,
                style: *font_style,
                family: font_family.as_str(),
            }),
            _ => None,
        }
    }
}

/// The one external capability this crate consumes: the rendered width of a
/// single line of text under a given font.
pub trait MeasureText {
    fn line_width(&self, line: &str, font: &TextFont<'_>) -> f32;
}

/// Measured extents of a (possibly multi-line) text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub lines: Vec<String>,
    pub line_widths: Vec<f32>,
    pub max_line_width: f32,
    pub line_height: f32,
    pub total_height: f32,
}

/// Splits `text` on `\n` and measures every line.
pub fn measure_text(measurer: &impl MeasureText, text: &str, font: &TextFont<'_>) -> TextMetrics {
    let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    let line_widths: Vec<f32> = lines
        .iter()
        .map(|line| measurer.line_width(line, font))
        .collect();
    let max_line_width = line_widths.iter().copied().fold(0.0, f32::max);
    let line_height = font.size * LINE_HEIGHT_FACTOR;
    let total_height = line_height * lines.len() as f32;

    TextMetrics {
        lines,
        line_widths,
        max_line_width,
        line_height,
        total_height,
    }
}

/// Minimum container size `[width, height]` that keeps `text` clear of the
/// border at this font.
pub fn min_text_extent(measurer: &impl MeasureText, text: &str, font: &TextFont<'_>) -> [f32; 2] {
    let metrics = measure_text(measurer, text, font);
    [
        (metrics.max_line_width + 2.0 * font.size * PADDING_X_FACTOR).max(MIN_TEXT_WIDTH),
        (metrics.total_height + 2.0 * font.size * PADDING_Y_FACTOR).max(MIN_TEXT_HEIGHT),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FaceKey {
    weight: FontWeight,
    style: FontStyle,
}

/// Font-metrics backend over ab_glyph. Holds one face per (weight, style)
/// combination; a missing styled face falls back to the regular one, so a
/// single registered font is enough to measure everything.
pub struct GlyphMeasurer {
    faces: HashMap<FaceKey, FontArc>,
}

impl GlyphMeasurer {
    /// Builds a measurer from raw font data (TTF/OTF bytes) registered as
    /// the regular face.
    pub fn from_font_data(data: Vec<u8>) -> Result<Self> {
        let mut measurer = Self {
            faces: HashMap::new(),
        };
        measurer.register_face(FontWeight::Normal, FontStyle::Normal, data)?;
        Ok(measurer)
    }

    /// Registers a styled face (e.g. the bold or italic cut of the family).
    pub fn register_face(
        &mut self,
        weight: FontWeight,
        style: FontStyle,
        data: Vec<u8>,
    ) -> Result<()> {
        let font = FontArc::try_from_vec(data).context("failed to parse font data")?;
        log::debug!("registered {:?}/{:?} face", weight, style);
        self.faces.insert(FaceKey { weight, style }, font);
        Ok(())
    }

    fn face(&self, weight: FontWeight, style: FontStyle) -> Option<&FontArc> {
        self.faces.get(&FaceKey { weight, style }).or_else(|| {
            self.faces.get(&FaceKey {
                weight: FontWeight::Normal,
                style: FontStyle::Normal,
            })
        })
    }
}

impl MeasureText for GlyphMeasurer {
    fn line_width(&self, line: &str, font: &TextFont<'_>) -> f32 {
        let Some(face) = self.face(font.weight, font.style) else {
            return 0.0;
        };

        let scaled = face.as_scaled(PxScale::from(font.size));
        let mut width = 0.0;
        let mut prev_gid: Option<ab_glyph::GlyphId> = None;

        for ch in line.chars() {
            let gid = face.glyph_id(ch);
            if let Some(prev) = prev_gid {
                width += scaled.kern(prev, gid);
            }
            width += scaled.h_advance(gid);
            prev_gid = Some(gid);
        }

        width
    }
}

/// Fixed-advance approximation: 0.6 of the font size per character. Good
/// enough for tests and for callers that have no font loaded yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl MeasureText for HeuristicMeasurer {
    fn line_width(&self, line: &str, font: &TextFont<'_>) -> f32 {
        line.chars().count() as f32 * font.size * 0.6
    }
}
