//! Pan/zoom mapping between screen and canvas coordinates.

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub offset: [f32; 2],
    pub scale: f32,
}

impl CanvasTransform {
    pub fn new() -> Self {
        Self {
            offset: [0.0, 0.0],
            scale: 1.0,
        }
    }

    pub fn screen_to_canvas(&self, screen_pos: [f32; 2]) -> [f32; 2] {
        [
            (screen_pos[0] - self.offset[0]) / self.scale,
            (screen_pos[1] - self.offset[1]) / self.scale,
        ]
    }

    pub fn canvas_to_screen(&self, canvas_pos: [f32; 2]) -> [f32; 2] {
        [
            canvas_pos[0] * self.scale + self.offset[0],
            canvas_pos[1] * self.scale + self.offset[1],
        ]
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    /// Scales by `factor` (clamped to `[MIN_ZOOM, MAX_ZOOM]` overall) while
    /// keeping the canvas point under `screen_pos` stationary on screen.
    pub fn zoom_about(&mut self, screen_pos: [f32; 2], factor: f32) {
        let before = self.screen_to_canvas(screen_pos);
        self.scale = (self.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.screen_to_canvas(screen_pos);

        self.offset[0] += (after[0] - before[0]) * self.scale;
        self.offset[1] += (after[1] - before[1]) * self.scale;
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::new()
    }
}
