//! Responsive sizing relative to a reference device.
//!
//! Layout values are authored against a 390 x 844 screen and scaled to the
//! current device: `s` horizontally, `vs` vertically, `ms` half-way between,
//! `fs` for text with the system font scale cancelled out.

pub const BASE_WIDTH: f64 = 390.0;
pub const BASE_HEIGHT: f64 = 844.0;
pub const DEFAULT_MODERATE_FACTOR: f64 = 0.5;

/// Device metrics needed to scale layout values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Physical pixels per layout unit.
    pub pixel_ratio: f64,
    /// User font scale; 1.0 is the system default.
    pub font_scale: f64,
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new(BASE_WIDTH, BASE_HEIGHT)
    }
}

impl Scaler {
    pub const fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            screen_width,
            screen_height,
            pixel_ratio: 1.0,
            font_scale: 1.0,
        }
    }

    #[must_use]
    pub const fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub const fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Scale horizontally based on screen width.
    pub fn scale(&self, size: f64) -> f64 {
        self.screen_width / BASE_WIDTH * size
    }

    /// Scale vertically based on screen height.
    pub fn vertical_scale(&self, size: f64) -> f64 {
        self.screen_height / BASE_HEIGHT * size
    }

    /// Move `factor` of the way from `size` to its horizontally scaled value.
    pub fn moderate_scale(&self, size: f64, factor: f64) -> f64 {
        (self.scale(size) - size).mul_add(factor, size)
    }

    /// Font size that ignores the user's system font scaling.
    pub fn normalize(&self, size: f64) -> f64 {
        let font_scale = if self.font_scale > 0.0 {
            self.font_scale
        } else {
            1.0
        };
        let size = self.moderate_scale(size, DEFAULT_MODERATE_FACTOR) / font_scale;
        self.round_to_nearest_pixel(size).round()
    }

    /// Snap a layout value onto the physical pixel grid.
    pub fn round_to_nearest_pixel(&self, size: f64) -> f64 {
        if self.pixel_ratio <= 0.0 {
            return size;
        }
        (size * self.pixel_ratio).round() / self.pixel_ratio
    }

    /// Horizontal spacing.
    pub fn s(&self, size: u16) -> f64 {
        self.scale(f64::from(size))
    }

    /// Vertical spacing.
    pub fn vs(&self, size: u16) -> f64 {
        self.vertical_scale(f64::from(size))
    }

    /// Balanced spacing.
    pub fn ms(&self, size: u16) -> f64 {
        self.moderate_scale(f64::from(size), DEFAULT_MODERATE_FACTOR)
    }

    /// Corner radius.
    pub fn r(&self, size: u16) -> f64 {
        self.ms(size)
    }

    /// Font size.
    pub fn fs(&self, size: u16) -> f64 {
        self.normalize(f64::from(size))
    }
}
