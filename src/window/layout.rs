/*!
 * Layout Policy
 * Pure geometry helpers the shell applies before calling the registry
 */

use super::types::Rect;

/// Strip of a dragged window that must stay on screen, in px
pub const MIN_VISIBLE_EDGE: f64 = 50.0;

/// Menu bar height; title bars may not go above this line
pub const MENU_BAR_HEIGHT: f64 = 32.0;

/// Smallest allowed window width
pub const MIN_WIDTH: f64 = 300.0;

/// Smallest allowed window height
pub const MIN_HEIGHT: f64 = 200.0;

/// Clamp a dragged window so it cannot be lost off screen
///
/// Horizontally a window may hang mostly off either side as long as
/// `MIN_VISIBLE_EDGE` of it stays visible; vertically the title bar stays
/// between the menu bar and the bottom visibility limit.
#[must_use]
pub fn clamp_position(rect: Rect, viewport: Rect) -> Rect {
    let min_x = viewport.x - (rect.width - MIN_VISIBLE_EDGE);
    let max_x = viewport.right() - MIN_VISIBLE_EDGE;
    let min_y = viewport.y + MENU_BAR_HEIGHT;
    let max_y = viewport.bottom() - MIN_VISIBLE_EDGE;

    Rect {
        x: rect.x.max(min_x).min(max_x),
        y: rect.y.max(min_y).min(max_y),
        ..rect
    }
}

/// Floor a resize request at the minimum window dimensions
#[must_use]
pub fn clamp_size(width: f64, height: f64) -> (f64, f64) {
    (width.max(MIN_WIDTH), height.max(MIN_HEIGHT))
}

/// Default window size for an application tag
#[must_use]
pub fn default_size(app: &str) -> (f64, f64) {
    match app {
        "calculator" => (420.0, 700.0),
        "preferences" => (700.0, 550.0),
        "terminal" => (700.0, 450.0),
        "notes" => (600.0, 500.0),
        "finder" => (850.0, 550.0),
        "browser" => (1000.0, 700.0),
        "mail" => (900.0, 600.0),
        _ => (800.0, 600.0),
    }
}

/// Spawn rect centered in the viewport, kept clear of the menu bar
#[must_use]
pub fn centered(width: f64, height: f64, viewport: Rect) -> Rect {
    let x = viewport.x + ((viewport.width - width) / 2.0).max(MIN_VISIBLE_EDGE);
    let y = viewport.y + ((viewport.height - height) / 2.0).max(MENU_BAR_HEIGHT);
    Rect {
        x,
        y,
        width,
        height,
    }
}
