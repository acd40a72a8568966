use crate::slider::geometry::{reveal_percentage, Bounds, INITIAL_REVEAL};

pub type SliderId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
struct SliderInstance {
    reveal: f64,
    dragging: bool,
}

impl Default for SliderInstance {
    fn default() -> Self {
        Self {
            reveal: INITIAL_REVEAL,
            dragging: false,
        }
    }
}

/// Drag state of every comparison slider on the page. Document-level pointer
/// events come in here and are applied only to instances that are being
/// dragged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderBoard {
    instances: Vec<SliderInstance>,
}

impl SliderBoard {
    pub fn with_instances(count: usize) -> Self {
        Self {
            instances: vec![SliderInstance::default(); count],
        }
    }

    pub fn register(&mut self) -> SliderId {
        self.instances.push(SliderInstance::default());
        self.instances.len() - 1
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn reveal(&self, id: SliderId) -> Option<f64> {
        self.instances.get(id).map(|s| s.reveal)
    }

    pub fn is_dragging(&self, id: SliderId) -> bool {
        self.instances.get(id).map_or(false, |s| s.dragging)
    }

    pub fn any_dragging(&self) -> bool {
        self.instances.iter().any(|s| s.dragging)
    }

    /// Pointer went down on the handle of `id`.
    pub fn grab(&mut self, id: SliderId) {
        if let Some(slider) = self.instances.get_mut(id) {
            slider.dragging = true;
        }
    }

    /// Pointer moved somewhere on the document. `bounds_of` measures the base
    /// image of a slider. Returns the ids whose reveal changed.
    pub fn drag_to<F>(&mut self, client_x: f64, bounds_of: F) -> Vec<SliderId>
    where
        F: Fn(SliderId) -> Option<Bounds>,
    {
        let mut moved = Vec::new();
        for (id, slider) in self.instances.iter_mut().enumerate() {
            if !slider.dragging {
                continue;
            }
            if let Some(pct) = bounds_of(id).and_then(|b| reveal_percentage(client_x, b)) {
                slider.reveal = pct;
                moved.push(id);
            }
        }
        moved
    }

    /// Pointer released anywhere: every drag session ends.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.any_dragging();
        for slider in &mut self.instances {
            slider.dragging = false;
        }
        was_dragging
    }

    /// Click straight on the base image of `id`.
    pub fn jump(&mut self, id: SliderId, client_x: f64, bounds: Bounds) -> Option<f64> {
        let pct = reveal_percentage(client_x, bounds)?;
        let slider = self.instances.get_mut(id)?;
        slider.reveal = pct;
        Some(pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: SliderId) -> Option<Bounds> {
        // two images side by side, 200px wide each
        match id {
            0 => Some(Bounds::new(0.0, 200.0)),
            1 => Some(Bounds::new(300.0, 200.0)),
            _ => None,
        }
    }

    #[test]
    fn moves_without_grab_do_nothing() {
        let mut board = SliderBoard::with_instances(2);
        assert!(board.drag_to(50.0, bounds).is_empty());
        assert_eq!(board.reveal(0), Some(INITIAL_REVEAL));
    }

    #[test]
    fn drag_session_updates_only_grabbed_slider() {
        let mut board = SliderBoard::with_instances(2);
        board.grab(1);
        assert!(board.is_dragging(1));
        assert!(!board.is_dragging(0));

        assert_eq!(board.drag_to(350.0, bounds), vec![1]);
        assert_eq!(board.reveal(1), Some(25.0));
        assert_eq!(board.reveal(0), Some(INITIAL_REVEAL));

        assert!(board.release());
        assert!(!board.any_dragging());
        assert!(board.drag_to(500.0, bounds).is_empty());
        assert_eq!(board.reveal(1), Some(25.0));
        assert!(!board.release());
    }

    #[test]
    fn drag_past_edges_clamps() {
        let mut board = SliderBoard::with_instances(1);
        board.grab(0);
        board.drag_to(-500.0, bounds);
        assert_eq!(board.reveal(0), Some(0.0));
        board.drag_to(10_000.0, bounds);
        assert_eq!(board.reveal(0), Some(100.0));
    }

    #[test]
    fn click_jumps_without_drag() {
        let mut board = SliderBoard::with_instances(2);
        assert_eq!(board.jump(0, 150.0, Bounds::new(0.0, 200.0)), Some(75.0));
        assert_eq!(board.reveal(0), Some(75.0));
        assert_eq!(board.reveal(1), Some(INITIAL_REVEAL));
        assert!(!board.any_dragging());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut board = SliderBoard::default();
        assert!(board.is_empty());
        board.grab(3);
        assert_eq!(board.jump(3, 10.0, Bounds::new(0.0, 100.0)), None);
        let id = board.register();
        assert_eq!(id, 0);
        assert_eq!(board.len(), 1);
    }
}
