use crate::constants::MAX_PIXEL_RATIO;

/// Logical (CSS pixel) drawing area plus the display's device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Aspect ratio; a zero height (minimized window) falls back to 1.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Output pixel density, capped to keep fill cost bounded on dense screens.
    pub fn pixel_ratio(&self) -> f64 {
        let dpr = if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(MAX_PIXEL_RATIO)
    }

    /// Backing store size in physical pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let r = self.pixel_ratio();
        let w = (self.width * r).floor().max(1.0) as u32;
        let h = (self.height * r).floor().max(1.0) as u32;
        (w, h)
    }
}
