// Pointer mapping and hover tracking for the board canvas.
use crate::layout::cell_at;

pub const CURSOR_CELL: &str = "crosshair";
pub const CURSOR_DEFAULT: &str = "default";

/// Converts a client-space point into surface pixels, undoing any CSS scaling
/// between the canvas' logical size and its displayed size.
pub fn to_surface(
    client: (f64, f64),
    origin: (f64, f64),
    surface_size: (f64, f64),
    displayed_size: (f64, f64),
) -> (f64, f64) {
    let scale = |logical: f64, shown: f64| if shown > 0.0 { logical / shown } else { 1.0 };
    (
        (client.0 - origin.0) * scale(surface_size.0, displayed_size.0),
        (client.1 - origin.1) * scale(surface_size.1, displayed_size.1),
    )
}

#[derive(Default, Debug, Clone)]
pub struct PointerState {
    pub hover: Option<usize>,
    cursor_set: bool,
}

impl PointerState {
    /// Records the hovered cell and returns the cursor to apply, or `None`
    /// when the cursor style doesn't need to change.
    pub fn update(&mut self, x: f64, y: f64) -> Option<&'static str> {
        let cell = cell_at(x, y);
        let was_over = self.hover.is_some();
        self.hover = cell;
        if self.cursor_set && was_over == cell.is_some() {
            return None;
        }
        self.cursor_set = true;
        Some(if cell.is_some() { CURSOR_CELL } else { CURSOR_DEFAULT })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscaled_canvas_only_offsets() {
        let p = to_surface((150.0, 120.0), (10.0, 20.0), (800.0, 600.0), (800.0, 600.0));
        assert_eq!(p, (140.0, 100.0));
    }

    #[test]
    fn half_size_canvas_doubles_coordinates() {
        let p = to_surface((60.0, 50.0), (0.0, 0.0), (800.0, 600.0), (400.0, 300.0));
        assert_eq!(p, (120.0, 100.0));
    }

    #[test]
    fn zero_display_size_falls_back_to_unit_scale() {
        let p = to_surface((5.0, 7.0), (0.0, 0.0), (800.0, 600.0), (0.0, 0.0));
        assert_eq!(p, (5.0, 7.0));
    }

    #[test]
    fn cursor_changes_only_on_enter_and_leave() {
        let mut ps = PointerState::default();
        assert_eq!(ps.update(10.0, 10.0), Some(CURSOR_DEFAULT));
        assert_eq!(ps.update(12.0, 10.0), None);
        assert_eq!(ps.update(100.0, 100.0), Some(CURSOR_CELL));
        assert_eq!(ps.hover, Some(0));
        // moving to another cell keeps the crosshair
        assert_eq!(ps.update(250.0, 100.0), None);
        assert_eq!(ps.hover, Some(1));
        // margin between cells
        assert_eq!(ps.update(220.0, 100.0), Some(CURSOR_DEFAULT));
        assert_eq!(ps.hover, None);
    }
}
