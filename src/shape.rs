//! The drawable shape model: a tagged union over the shapes the canvas
//! supports, plus the style configuration its factories consume.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    None,
    Underline,
}

/// Drawing defaults passed into the shape factories. Callers own this value;
/// there is no module-level default state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub color: [f32; 4],
    pub stroke_width: f32,
    pub font_size: f32,
    pub font_family: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            stroke_width: 2.0,
            font_size: 32.0,
            font_family: "Virgil".to_string(),
        }
    }
}

/// One drawable element. Every variant carries a string id, unique within
/// the owning sequence (insertion order is z-order, later on top).
///
/// `Triangle` is a legacy variant kept for boards drawn by older builds;
/// no factory produces it. Its third vertex is synthesized from the two
/// stored corners, see [`crate::hit_test`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle {
        id: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
    },
    Circle {
        // x,y is the top-left of the bounding box; the center is always
        // (x + radius, y + radius).
        id: String,
        x: f32,
        y: f32,
        radius: f32,
        color: [f32; 4],
    },
    Pencil {
        id: String,
        points: Vec<[f32; 2]>,
        color: [f32; 4],
    },
    Text {
        id: String,
        text: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        font_size: f32,
        color: [f32; 4],
        align: TextAlign,
        vertical_align: VerticalAlign,
        font_weight: FontWeight,
        font_style: FontStyle,
        text_decoration: TextDecoration,
        font_family: String,
    },
    Triangle {
        id: String,
        start: [f32; 2],
        end: [f32; 2],
        color: [f32; 4],
    },
}

impl Shape {
    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, style: &ShapeStyle) -> Shape {
        Shape::Rectangle {
            id: Self::new_id(),
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
            color: style.color,
        }
    }

    pub fn circle(x: f32, y: f32, radius: f32, style: &ShapeStyle) -> Shape {
        Shape::Circle {
            id: Self::new_id(),
            x,
            y,
            radius: radius.max(1.0),
            color: style.color,
        }
    }

    /// A freehand stroke through `points`, in draw order. Callers feed at
    /// least one point; a stroke with fewer than two never hit-tests true.
    pub fn pencil(points: Vec<[f32; 2]>, style: &ShapeStyle) -> Shape {
        Shape::Pencil {
            id: Self::new_id(),
            points,
            color: style.color,
        }
    }

    pub fn text(
        text: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: &ShapeStyle,
    ) -> Shape {
        Shape::Text {
            id: Self::new_id(),
            text: text.into(),
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
            font_size: style.font_size,
            color: style.color,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            text_decoration: TextDecoration::None,
            font_family: style.font_family.clone(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Shape::Rectangle { id, .. }
            | Shape::Circle { id, .. }
            | Shape::Pencil { id, .. }
            | Shape::Text { id, .. }
            | Shape::Triangle { id, .. } => id,
        }
    }

    /// The shape moved by `(dx, dy)`. Returns a new value; the input is
    /// never mutated.
    pub fn translated(&self, dx: f32, dy: f32) -> Shape {
        let mut moved = self.clone();
        match &mut moved {
            Shape::Rectangle { x, y, .. }
            | Shape::Circle { x, y, .. }
            | Shape::Text { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            Shape::Pencil { points, .. } => {
                for point in points.iter_mut() {
                    point[0] += dx;
                    point[1] += dy;
                }
            }
            Shape::Triangle { start, end, .. } => {
                start[0] += dx;
                start[1] += dy;
                end[0] += dx;
                end[1] += dy;
            }
        }
        moved
    }
}
