//! Letterboxed mapping from the logical play field onto the window

use macroquad::math::Rect;

/// Uniform scale plus centring offset. The field keeps its aspect ratio;
/// leftover window space becomes black bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub field_width: f32,
    pub field_height: f32,
}

impl Viewport {
    pub fn fit(screen_width: f32, screen_height: f32, field_width: f32, field_height: f32) -> Self {
        let scale = (screen_width / field_width).min(screen_height / field_height);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            scale,
            offset_x: ((screen_width - field_width * scale) / 2.0).max(0.0),
            offset_y: ((screen_height - field_height * scale) / 2.0).max(0.0),
            field_width,
            field_height,
        }
    }

    pub fn x(&self, x: f32) -> f32 {
        self.offset_x + x * self.scale
    }

    pub fn y(&self, y: f32) -> f32 {
        self.offset_y + y * self.scale
    }

    /// Field rectangle in screen space
    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(self.x(x), self.y(y), w * self.scale, h * self.scale)
    }

    /// The field itself in screen space
    pub fn field(&self) -> Rect {
        self.rect(0.0, 0.0, self.field_width, self.field_height)
    }

    /// Screen areas outside the field, for masking anything drawn past its edges
    pub fn bars(&self, screen_width: f32, screen_height: f32) -> Vec<Rect> {
        let field = self.field();
        let mut bars = Vec::new();
        if field.x > 0.0 {
            bars.push(Rect::new(0.0, 0.0, field.x, screen_height));
            let right = field.x + field.w;
            bars.push(Rect::new(right, 0.0, screen_width - right, screen_height));
        }
        if field.y > 0.0 {
            bars.push(Rect::new(0.0, 0.0, screen_width, field.y));
            let bottom = field.y + field.h;
            bars.push(Rect::new(0.0, bottom, screen_width, screen_height - bottom));
        }
        bars
    }
}
