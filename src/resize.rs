//! The resize engine: eight named handles around a shape's bounding box and
//! the transform applied when one of them is dragged.
//!
//! The contract for box-like shapes is that the edge(s) opposite the
//! dragged handle stay fixed while the dragged edge follows the pointer,
//! clamped to a minimum size. Circles ignore the handle entirely and only
//! change radius, keeping their center. Text gets a second pass that scales
//! the font with the box and then re-measures to keep the container large
//! enough for its content.

use serde::{Deserialize, Serialize};

use crate::geometry::{circle_center, distance};
use crate::hit_test::{BoundingBox, shape_bounding_box};
use crate::shape::Shape;
use crate::text_metrics::{MeasureText, TextFont, min_text_extent};

/// Smallest box a resize can produce for rectangles, circles and pencil
/// strokes. Text uses a content-derived minimum instead.
pub const MIN_SHAPE_SIZE: f32 = 10.0;

/// Handles sit this far outside the bounding box.
pub const HANDLE_OFFSET: f32 = 5.0;

/// Side length of the square hit region centered on each handle.
pub const HANDLE_HIT_SIZE: f32 = 12.0;

const MIN_FONT_SIZE: f32 = 8.0;
const MAX_FONT_SIZE: f32 = 200.0;

// Blend between the old font size and the box-derived scale; keeps the font
// from jumping on every pointer event during a drag.
const FONT_SCALE_DAMPING: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
    MiddleLeft,
    MiddleRight,
}

/// Fixed enumeration order: corners first, then edge midpoints. Hit regions
/// can overlap at extreme aspect ratios; the first match in this order wins.
pub const HANDLE_ORDER: [ResizeHandle; 8] = [
    ResizeHandle::TopLeft,
    ResizeHandle::TopRight,
    ResizeHandle::BottomLeft,
    ResizeHandle::BottomRight,
    ResizeHandle::TopCenter,
    ResizeHandle::BottomCenter,
    ResizeHandle::MiddleLeft,
    ResizeHandle::MiddleRight,
];

/// A handle together with its canvas position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePosition {
    pub handle: ResizeHandle,
    pub x: f32,
    pub y: f32,
}

/// The 8 handle positions around `shape`'s bounding box, in [`HANDLE_ORDER`].
pub fn shape_resize_handles(shape: &Shape) -> Vec<HandlePosition> {
    let b = shape_bounding_box(shape);
    let left = b.x - HANDLE_OFFSET;
    let right = b.x + b.width + HANDLE_OFFSET;
    let top = b.y - HANDLE_OFFSET;
    let bottom = b.y + b.height + HANDLE_OFFSET;
    let mid_x = b.x + b.width / 2.0;
    let mid_y = b.y + b.height / 2.0;

    HANDLE_ORDER
        .iter()
        .map(|&handle| {
            let (x, y) = match handle {
                ResizeHandle::TopLeft => (left, top),
                ResizeHandle::TopRight => (right, top),
                ResizeHandle::BottomLeft => (left, bottom),
                ResizeHandle::BottomRight => (right, bottom),
                ResizeHandle::TopCenter => (mid_x, top),
                ResizeHandle::BottomCenter => (mid_x, bottom),
                ResizeHandle::MiddleLeft => (left, mid_y),
                ResizeHandle::MiddleRight => (right, mid_y),
            };
            HandlePosition { handle, x, y }
        })
        .collect()
}

/// The handle whose hit region contains `point`, if any.
pub fn resize_handle_at_point(point: [f32; 2], shape: &Shape) -> Option<ResizeHandle> {
    let half = HANDLE_HIT_SIZE / 2.0;
    shape_resize_handles(shape)
        .into_iter()
        .find(|h| (point[0] - h.x).abs() <= half && (point[1] - h.y).abs() <= half)
        .map(|h| h.handle)
}

/// Resizes a bounding box by dragging `handle` to `point`. Edges opposite
/// the handle stay fixed; the result never shrinks below `min` on a dragged
/// axis.
fn resize_box(b: BoundingBox, handle: ResizeHandle, point: [f32; 2], min: f32) -> BoundingBox {
    let BoundingBox {
        mut x,
        mut y,
        mut width,
        mut height,
    } = b;

    match handle {
        ResizeHandle::TopLeft => {
            let fixed_right = x + width;
            let fixed_bottom = y + height;
            x = point[0].min(fixed_right - min);
            y = point[1].min(fixed_bottom - min);
            width = fixed_right - x;
            height = fixed_bottom - y;
        }
        ResizeHandle::TopCenter => {
            let fixed_bottom = y + height;
            y = point[1].min(fixed_bottom - min);
            height = fixed_bottom - y;
        }
        ResizeHandle::TopRight => {
            let fixed_bottom = y + height;
            y = point[1].min(fixed_bottom - min);
            height = fixed_bottom - y;
            width = (point[0] - x).max(min);
        }
        ResizeHandle::MiddleLeft => {
            let fixed_right = x + width;
            x = point[0].min(fixed_right - min);
            width = fixed_right - x;
        }
        ResizeHandle::MiddleRight => {
            width = (point[0] - x).max(min);
        }
        ResizeHandle::BottomLeft => {
            let fixed_right = x + width;
            x = point[0].min(fixed_right - min);
            width = fixed_right - x;
            height = (point[1] - y).max(min);
        }
        ResizeHandle::BottomCenter => {
            height = (point[1] - y).max(min);
        }
        ResizeHandle::BottomRight => {
            width = (point[0] - x).max(min);
            height = (point[1] - y).max(min);
        }
    }

    BoundingBox {
        x,
        y,
        width,
        height,
    }
}

/// Returns `shape` resized by dragging `handle` to `point`. The input is
/// never mutated; unsupported variants come back unchanged.
///
/// `measurer` is only consulted for text shapes, whose container must stay
/// large enough for the re-scaled font.
pub fn resize_shape(
    shape: &Shape,
    handle: ResizeHandle,
    point: [f32; 2],
    measurer: &impl MeasureText,
) -> Shape {
    match shape {
        Shape::Rectangle {
            id,
            x,
            y,
            width,
            height,
            color,
        } => {
            let nb = resize_box(
                BoundingBox::new(*x, *y, *width, *height),
                handle,
                point,
                MIN_SHAPE_SIZE,
            );
            Shape::Rectangle {
                id: id.clone(),
                x: nb.x,
                y: nb.y,
                width: nb.width,
                height: nb.height,
                color: *color,
            }
        }
        Shape::Circle { id, x, y, radius, color } => {
            // Any handle drag only changes the radius; the center never
            // moves, so the top-left is re-derived from it.
            let center = circle_center(*x, *y, *radius);
            let new_radius = distance(point, center).max(1.0);
            Shape::Circle {
                id: id.clone(),
                x: center[0] - new_radius,
                y: center[1] - new_radius,
                radius: new_radius,
                color: *color,
            }
        }
        Shape::Text {
            text,
            x,
            y,
            width,
            height,
            font_size,
            font_weight,
            font_style,
            font_family,
            ..
        } => {
            // Pass 1: geometric resize of the container.
            let nb = resize_box(
                BoundingBox::new(*x, *y, *width, *height),
                handle,
                point,
                MIN_SHAPE_SIZE,
            );

            // Pass 2: scale the font with the box (damped), then re-measure
            // and enlarge the container to fit the new font. The order
            // matters: the minimum depends on the already-updated font size.
            let raw_scale = if *width > 0.0 && *height > 0.0 {
                (nb.width / width + nb.height / height) / 2.0
            } else {
                1.0
            };
            let scale = (1.0 - FONT_SCALE_DAMPING) + raw_scale * FONT_SCALE_DAMPING;
            let new_font_size =
                (font_size * scale).round().clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);

            let font = TextFont {
                size: new_font_size,
                weight: *font_weight,
                style: *font_style,
                family: font_family.as_str(),
            };
            let min_extent = min_text_extent(measurer, text, &font);
            if nb.width < min_extent[0] || nb.height < min_extent[1] {
                log::trace!(
                    "text container clamped to content minimum {:?}",
                    min_extent
                );
            }

            let mut resized = shape.clone();
            if let Shape::Text {
                x,
                y,
                width,
                height,
                font_size,
                ..
            } = &mut resized
            {
                *x = nb.x;
                *y = nb.y;
                *width = nb.width.max(min_extent[0]);
                *height = nb.height.max(min_extent[1]);
                *font_size = new_font_size;
            }
            resized
        }
        Shape::Pencil { points, .. } => {
            let b = shape_bounding_box(shape);
            let nb = resize_box(b, handle, point, MIN_SHAPE_SIZE);

            let mut resized = shape.clone();
            if let Shape::Pencil { points: new_points, .. } = &mut resized {
                *new_points = points
                    .iter()
                    .map(|p| {
                        // A zero-extent axis has no scale; leave it alone.
                        let px = if b.width > f32::EPSILON {
                            nb.x + (p[0] - b.x) / b.width * nb.width
                        } else {
                            p[0]
                        };
                        let py = if b.height > f32::EPSILON {
                            nb.y + (p[1] - b.y) / b.height * nb.height
                        } else {
                            p[1]
                        };
                        [px, py]
                    })
                    .collect();
            }
            resized
        }
        // Legacy variant: not resizable, hand it back untouched.
        Shape::Triangle { .. } => shape.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeStyle;
    use crate::text_metrics::HeuristicMeasurer;

    fn style() -> ShapeStyle {
        ShapeStyle::default()
    }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::rectangle(x, y, w, h, &style())
    }

    fn box_of(shape: &Shape) -> BoundingBox {
        shape_bounding_box(shape)
    }

    #[test]
    fn test_bottom_right_drag_grows_from_origin() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        let resized = resize_shape(&shape, ResizeHandle::BottomRight, [150.0, 80.0], &HeuristicMeasurer);
        let b = box_of(&resized);
        assert!(b.x.abs() < 0.001);
        assert!(b.y.abs() < 0.001);
        assert!((b.width - 150.0).abs() < 0.001);
        assert!((b.height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_top_left_drag_keeps_opposite_corner() {
        let shape = rect(10.0, 20.0, 100.0, 50.0);
        let resized = resize_shape(&shape, ResizeHandle::TopLeft, [0.0, 0.0], &HeuristicMeasurer);
        let b = box_of(&resized);
        assert!((b.x + b.width - 110.0).abs() < 0.001);
        assert!((b.y + b.height - 70.0).abs() < 0.001);
        assert!(b.x.abs() < 0.001);
        assert!(b.y.abs() < 0.001);
    }

    #[test]
    fn test_edge_handles_touch_one_axis() {
        let shape = rect(10.0, 20.0, 100.0, 50.0);

        let wider = resize_shape(&shape, ResizeHandle::MiddleRight, [200.0, 999.0], &HeuristicMeasurer);
        let b = box_of(&wider);
        assert!((b.width - 190.0).abs() < 0.001);
        assert!((b.height - 50.0).abs() < 0.001);
        assert!((b.y - 20.0).abs() < 0.001);

        let taller = resize_shape(&shape, ResizeHandle::TopCenter, [999.0, 0.0], &HeuristicMeasurer);
        let b = box_of(&taller);
        assert!((b.width - 100.0).abs() < 0.001);
        assert!((b.x - 10.0).abs() < 0.001);
        assert!((b.height - 70.0).abs() < 0.001);
        assert!(b.y.abs() < 0.001);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        for &handle in HANDLE_ORDER.iter() {
            // Drag far past the opposite edge.
            let resized = resize_shape(&shape, handle, [50.0, 25.0], &HeuristicMeasurer);
            let b = box_of(&resized);
            assert!(b.width >= MIN_SHAPE_SIZE - 0.001, "{:?}", handle);
            assert!(b.height >= MIN_SHAPE_SIZE - 0.001, "{:?}", handle);

            let collapsed = resize_shape(&shape, handle, [500.0, -500.0], &HeuristicMeasurer);
            let b = box_of(&collapsed);
            assert!(b.width >= MIN_SHAPE_SIZE - 0.001, "{:?}", handle);
            assert!(b.height >= MIN_SHAPE_SIZE - 0.001, "{:?}", handle);
        }
    }

    #[test]
    fn test_circle_resize_keeps_center() {
        // Top-left (0,0), radius 10 -> center (10,10).
        let shape = Shape::circle(0.0, 0.0, 10.0, &style());
        for &handle in HANDLE_ORDER.iter() {
            let resized = resize_shape(&shape, handle, [10.0, 40.0], &HeuristicMeasurer);
            if let Shape::Circle { x, y, radius, .. } = resized {
                assert!((radius - 30.0).abs() < 0.001);
                assert!((x + 20.0).abs() < 0.001);
                assert!((y + 20.0).abs() < 0.001);
                // Center unchanged.
                assert!((x + radius - 10.0).abs() < 0.001);
                assert!((y + radius - 10.0).abs() < 0.001);
            } else {
                panic!("expected circle");
            }
        }
    }

    #[test]
    fn test_circle_radius_floor() {
        let shape = Shape::circle(0.0, 0.0, 10.0, &style());
        // Drag exactly onto the center.
        let resized = resize_shape(&shape, ResizeHandle::TopLeft, [10.0, 10.0], &HeuristicMeasurer);
        if let Shape::Circle { radius, .. } = resized {
            assert!((radius - 1.0).abs() < 0.001);
        } else {
            panic!("expected circle");
        }
    }

    #[test]
    fn test_text_font_scales_with_box() {
        let style = ShapeStyle::default(); // font_size 32
        let shape = Shape::text("hi", 0.0, 0.0, 100.0, 40.0, &style);
        // Double the width: raw scale (2.0 + 1.0) / 2 = 1.5, damped to 1.25.
        let resized = resize_shape(&shape, ResizeHandle::MiddleRight, [200.0, 0.0], &HeuristicMeasurer);
        if let Shape::Text { font_size, .. } = resized {
            assert!((font_size - 40.0).abs() < 0.001);
        } else {
            panic!("expected text");
        }
    }

    #[test]
    fn test_text_container_clamps_to_content_minimum() {
        let style = ShapeStyle {
            font_size: 20.0,
            ..ShapeStyle::default()
        };
        let shape = Shape::text("a fairly long single line", 0.0, 0.0, 400.0, 60.0, &style);
        // Try to crush the box far below what the text needs.
        let resized = resize_shape(&shape, ResizeHandle::BottomRight, [30.0, 15.0], &HeuristicMeasurer);
        if let Shape::Text {
            text,
            width,
            height,
            font_size,
            font_family,
            font_weight,
            font_style,
            ..
        } = &resized
        {
            let font = TextFont {
                size: *font_size,
                weight: *font_weight,
                style: *font_style,
                family: font_family.as_str(),
            };
            let min = min_text_extent(&HeuristicMeasurer, text, &font);
            assert!(*width >= min[0] - 0.001);
            assert!(*height >= min[1] - 0.001);
            assert!(*width > 30.0);
        } else {
            panic!("expected text");
        }
    }

    #[test]
    fn test_text_font_size_stays_in_range() {
        let style = ShapeStyle {
            font_size: 200.0,
            ..ShapeStyle::default()
        };
        let shape = Shape::text("x", 0.0, 0.0, 1000.0, 1000.0, &style);
        let grown = resize_shape(&shape, ResizeHandle::BottomRight, [4000.0, 4000.0], &HeuristicMeasurer);
        if let Shape::Text { font_size, .. } = grown {
            assert!(font_size <= 200.0);
            assert!(font_size >= 8.0);
        } else {
            panic!("expected text");
        }
    }

    #[test]
    fn test_repeated_resize_is_stable() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        let once = resize_shape(&shape, ResizeHandle::BottomRight, [150.0, 80.0], &HeuristicMeasurer);
        let twice = resize_shape(&once, ResizeHandle::BottomRight, [150.0, 80.0], &HeuristicMeasurer);
        assert_eq!(box_of(&once), box_of(&twice));
    }

    #[test]
    fn test_pencil_points_follow_box() {
        let shape = Shape::pencil(vec![[0.0, 0.0], [100.0, 50.0]], &style());
        let resized = resize_shape(&shape, ResizeHandle::BottomRight, [200.0, 100.0], &HeuristicMeasurer);
        if let Shape::Pencil { points, .. } = &resized {
            assert!((points[0][0]).abs() < 0.001);
            assert!((points[0][1]).abs() < 0.001);
            assert!((points[1][0] - 200.0).abs() < 0.001);
            assert!((points[1][1] - 100.0).abs() < 0.001);
        } else {
            panic!("expected pencil");
        }
    }

    #[test]
    fn test_pencil_zero_extent_axis_untouched() {
        // Horizontal stroke: height 0, so y coordinates must survive.
        let shape = Shape::pencil(vec![[0.0, 5.0], [50.0, 5.0]], &style());
        let resized = resize_shape(&shape, ResizeHandle::MiddleRight, [100.0, 5.0], &HeuristicMeasurer);
        if let Shape::Pencil { points, .. } = &resized {
            assert!((points[0][1] - 5.0).abs() < 0.001);
            assert!((points[1][1] - 5.0).abs() < 0.001);
            assert!((points[1][0] - 100.0).abs() < 0.001);
        } else {
            panic!("expected pencil");
        }
    }

    #[test]
    fn test_triangle_resize_is_noop() {
        let shape = Shape::Triangle {
            id: "t".to_string(),
            start: [10.0, 0.0],
            end: [20.0, 20.0],
            color: [1.0; 4],
        };
        let resized = resize_shape(&shape, ResizeHandle::BottomRight, [99.0, 99.0], &HeuristicMeasurer);
        assert_eq!(shape, resized);
    }

    #[test]
    fn test_handles_enumerate_in_fixed_order() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        let handles = shape_resize_handles(&shape);
        assert_eq!(handles.len(), 8);
        for (position, expected) in handles.iter().zip(HANDLE_ORDER.iter()) {
            assert_eq!(position.handle, *expected);
        }
        // Corners sit HANDLE_OFFSET outside the box.
        assert!((handles[0].x + 5.0).abs() < 0.001);
        assert!((handles[0].y + 5.0).abs() < 0.001);
        assert!((handles[3].x - 105.0).abs() < 0.001);
        assert!((handles[3].y - 55.0).abs() < 0.001);
    }

    #[test]
    fn test_handle_round_trip() {
        let shapes = [
            rect(10.0, 20.0, 100.0, 50.0),
            Shape::circle(0.0, 0.0, 30.0, &style()),
            Shape::pencil(vec![[0.0, 0.0], [60.0, 40.0]], &style()),
        ];
        for shape in &shapes {
            for position in shape_resize_handles(shape) {
                let found = resize_handle_at_point([position.x, position.y], shape);
                assert_eq!(found, Some(position.handle));
            }
        }
    }

    #[test]
    fn test_no_handle_away_from_shape() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(resize_handle_at_point([50.0, 25.0], &shape), None);
        assert_eq!(resize_handle_at_point([500.0, 500.0], &shape), None);
    }

    #[test]
    fn test_resize_does_not_mutate_input() {
        let shape = rect(0.0, 0.0, 100.0, 50.0);
        let snapshot = shape.clone();
        let _ = resize_shape(&shape, ResizeHandle::BottomRight, [300.0, 300.0], &HeuristicMeasurer);
        assert_eq!(shape, snapshot);
    }
}
