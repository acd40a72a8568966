/// Horizontal extent of a comparison image in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

pub const INITIAL_REVEAL: f64 = 50.0;

/// Share (0..=100) of the "after" layer exposed when the pointer sits at
/// `client_x`. `None` for an image that has not been laid out yet.
pub fn reveal_percentage(client_x: f64, bounds: Bounds) -> Option<f64> {
    if !(bounds.width > 0.0) || !client_x.is_finite() {
        return None;
    }
    let offset = (client_x - bounds.left).clamp(0.0, bounds.width);
    Some((offset / bounds.width * 100.0).clamp(0.0, 100.0))
}

/// Clips the after layer so only its left `percentage`% stays visible.
pub fn clip_path(percentage: f64) -> String {
    format!("inset(0 {}% 0 0)", 100.0 - percentage)
}

pub fn handle_left(percentage: f64) -> String {
    format!("{}%", percentage)
}
