//! Decorative orbs that drift with the pointer.

/// Pointer position in percent of the hero area, each axis in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Converts an offset inside a `width`×`height` area to percentages. Degenerate areas
    /// yield the origin.
    #[must_use]
    pub fn from_offset(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self { x: (x / width * 100.0).clamp(0.0, 100.0), y: (y / height * 100.0).clamp(0.0, 100.0) }
    }
}

/// Last measured size of the hero stage. Updated on mount and on every resize; reports of
/// an empty box (stage hidden or collapsed) keep the previous size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageArea(Option<(f64, f64)>);

impl StageArea {
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.0 = Some((width, height));
        }
    }

    /// Pointer for an offset inside the stage, or `None` before the first measurement.
    #[must_use]
    pub fn pointer(&self, x: f64, y: f64) -> Option<Pointer> {
        self.0.map(|(width, height)| Pointer::from_offset(x, y, width, height))
    }
}

/// Orb A is placed from the top-left corner, orb B from the bottom-right one, so the two
/// move in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbLayout {
    pub a_left: f64,
    pub a_top: f64,
    pub b_right: f64,
    pub b_bottom: f64,
}

impl OrbLayout {
    #[must_use]
    pub fn follow(pointer: Pointer) -> Self {
        Self {
            a_left: pointer.x * 0.5,
            a_top: pointer.y * 0.5,
            b_right: (100.0 - pointer.x) * 0.3,
            b_bottom: (100.0 - pointer.y) * 0.3,
        }
    }

    #[must_use]
    pub fn primary_style(&self) -> String {
        format!("left: {:.2}%; top: {:.2}%;", self.a_left, self.a_top)
    }

    #[must_use]
    pub fn accent_style(&self) -> String {
        format!("right: {:.2}%; bottom: {:.2}%;", self.b_right, self.b_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbs_move_in_opposite_directions() {
        let resting = OrbLayout::follow(Pointer::default());
        assert_eq!(resting, OrbLayout { a_left: 0.0, a_top: 0.0, b_right: 30.0, b_bottom: 30.0 });

        let corner = OrbLayout::follow(Pointer { x: 100.0, y: 50.0 });
        assert!((corner.a_left - 50.0).abs() < 1e-9);
        assert!((corner.a_top - 25.0).abs() < 1e-9);
        assert!(corner.b_right.abs() < 1e-9);
        assert!((corner.b_bottom - 15.0).abs() < 1e-9);
        assert_eq!(corner.accent_style(), "right: 0.00%; bottom: 15.00%;");
    }

    #[test]
    fn offsets_are_clamped_to_the_area() {
        assert_eq!(Pointer::from_offset(640.0, 200.0, 1280.0, 800.0), Pointer { x: 50.0, y: 25.0 });
        assert_eq!(Pointer::from_offset(-5.0, 900.0, 1280.0, 800.0), Pointer { x: 0.0, y: 100.0 });
        assert_eq!(Pointer::from_offset(10.0, 10.0, 0.0, 800.0), Pointer::default());
    }

    #[test]
    fn pointer_follows_the_latest_stage_size() {
        let mut area = StageArea::default();
        assert_eq!(area.pointer(300.0, 200.0), None);

        area.resize(1200.0, 800.0);
        assert_eq!(area.pointer(300.0, 200.0), Some(Pointer { x: 25.0, y: 25.0 }));

        area.resize(600.0, 400.0);
        assert_eq!(area.pointer(300.0, 200.0), Some(Pointer { x: 50.0, y: 50.0 }));

        area.resize(0.0, 0.0);
        assert_eq!(area.pointer(300.0, 200.0), Some(Pointer { x: 50.0, y: 50.0 }));
    }
}
