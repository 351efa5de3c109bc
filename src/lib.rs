mod geometry;
mod resize;
mod shape;
mod text_metrics;
mod transform;

// Re-export the main public interface
pub use geometry::{barycentric, circle_center, distance, point_in_triangle, point_segment_distance};
pub use hit_test::{
    BoundingBox, STROKE_HIT_TOLERANCE, is_point_in_shape, shape_at_point, shape_bounding_box,
};
pub use resize::{
    HANDLE_HIT_SIZE, HANDLE_OFFSET, HANDLE_ORDER, HandlePosition, MIN_SHAPE_SIZE, ResizeHandle,
    resize_handle_at_point, resize_shape, shape_resize_handles,
};
pub use shape::{
    FontStyle, FontWeight, Shape, ShapeStyle, TextAlign, TextDecoration, VerticalAlign,
};
pub use text_metrics::{
    GlyphMeasurer, HeuristicMeasurer, LINE_HEIGHT_FACTOR, MIN_TEXT_HEIGHT, MIN_TEXT_WIDTH,
    MeasureText, TextFont, TextMetrics, measure_text, min_text_extent,
};
pub use transform::{CanvasTransform, MAX_ZOOM, MIN_ZOOM};
