//! Drag gesture tracking.
//!
//! [`PointerTracker`] turns raw mouse press, motion and release into drag
//! start, hover and drop, holding the drag back until the pointer has moved
//! the configured activation distance. [`Carry`] is the keyboard
//! counterpart: an item picked up with `Space` and steered with arrows.

use cardwall_protocol::DragItem;

/// A screen position in terminal cells.
pub type Position = (u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Pressed on a drag handle, not yet moved far enough.
    Pending { item: DragItem, origin: Position },
    /// Dragging, with the last pointer position and hover target.
    Dragging {
        item: DragItem,
        position: Position,
        over: Option<DragItem>,
    },
}

/// What a pointer motion means for the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMotion {
    /// The activation distance was just reached; the drag starts now.
    Started(DragItem),
    /// An active drag moved.
    Moved(DragItem),
}

/// Tracks one mouse drag gesture.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{CardId, DragItem};
/// use cardwall_tui::drag::{PointerMotion, PointerTracker};
///
/// let card = DragItem::Card(CardId::new(7));
/// let mut tracker = PointerTracker::new(2);
///
/// tracker.press(Some(card), (10, 5));
/// assert_eq!(tracker.motion((11, 5)), None);
/// assert_eq!(tracker.motion((12, 5)), Some(PointerMotion::Started(card)));
/// assert_eq!(tracker.release(), Some(card));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTracker {
    activation_distance: u16,
    phase: Phase,
}

impl PointerTracker {
    /// Creates a tracker that starts drags after `activation_distance` cells.
    #[must_use]
    pub fn new(activation_distance: u16) -> Self {
        Self {
            activation_distance,
            phase: Phase::Idle,
        }
    }

    /// Records a button press. `item` is the drag handle under the pointer.
    pub fn press(&mut self, item: Option<DragItem>, origin: Position) {
        self.phase = match item {
            Some(item) => Phase::Pending { item, origin },
            None => Phase::Idle,
        };
    }

    /// Records pointer motion with the button held.
    pub fn motion(&mut self, position: Position) -> Option<PointerMotion> {
        match self.phase {
            Phase::Idle => None,
            Phase::Pending { item, origin } => {
                if distance_reached(origin, position, self.activation_distance) {
                    self.phase = Phase::Dragging {
                        item,
                        position,
                        over: None,
                    };
                    Some(PointerMotion::Started(item))
                } else {
                    None
                }
            }
            Phase::Dragging { item, .. } => {
                self.set_position(position);
                Some(PointerMotion::Moved(item))
            }
        }
    }

    /// Records the button release.
    ///
    /// Returns the dragged item if a drag was active; a press that never
    /// travelled far enough is a plain click and returns `None`.
    pub fn release(&mut self) -> Option<DragItem> {
        match std::mem::take(&mut self.phase) {
            Phase::Dragging { item, .. } => Some(item),
            Phase::Idle | Phase::Pending { .. } => None,
        }
    }

    /// Abandons the gesture.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Records the current hover target of an active drag.
    pub fn set_over(&mut self, target: Option<DragItem>) {
        if let Phase::Dragging { over, .. } = &mut self.phase {
            *over = target;
        }
    }

    fn set_position(&mut self, at: Position) {
        if let Phase::Dragging { position, .. } = &mut self.phase {
            *position = at;
        }
    }

    /// Returns the dragged item and pointer position while dragging.
    #[must_use]
    pub fn dragging(&self) -> Option<(DragItem, Position)> {
        match self.phase {
            Phase::Dragging { item, position, .. } => Some((item, position)),
            _ => None,
        }
    }

    /// Returns the hover target while dragging.
    #[must_use]
    pub fn over(&self) -> Option<DragItem> {
        match self.phase {
            Phase::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Returns `true` once the activation distance has been reached.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(cardwall_config::drag::DEFAULT_ACTIVATION_DISTANCE)
    }
}

fn distance_reached(from: Position, to: Position, distance: u16) -> bool {
    let dx = u32::from(from.0.abs_diff(to.0));
    let dy = u32::from(from.1.abs_diff(to.1));
    let distance = u32::from(distance);
    dx * dx + dy * dy >= distance * distance
}

/// An item carried with the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carry {
    /// The item picked up.
    pub active: DragItem,
    /// Where it would be dropped right now.
    pub over: Option<DragItem>,
}

impl Carry {
    /// Picks up `active`, hovering over nothing yet.
    #[must_use]
    pub fn new(active: DragItem) -> Self {
        Self { active, over: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardwall_protocol::{BoardId, CardId};

    const CARD: DragItem = DragItem::Card(CardId::new(1));
    const BOARD: DragItem = DragItem::Board(BoardId::new(2));

    #[test]
    fn press_without_handle_never_drags() {
        let mut tracker = PointerTracker::new(1);
        tracker.press(None, (0, 0));

        assert!(!tracker.is_pressed());
        assert_eq!(tracker.motion((20, 20)), None);
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn small_motion_stays_pending() {
        let mut tracker = PointerTracker::new(3);
        tracker.press(Some(CARD), (10, 10));

        assert_eq!(tracker.motion((12, 10)), None);
        assert_eq!(tracker.motion((11, 12)), None);
        assert!(tracker.is_pressed());
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn click_is_not_a_drop() {
        let mut tracker = PointerTracker::new(2);
        tracker.press(Some(CARD), (10, 10));
        tracker.motion((11, 10));

        assert_eq!(tracker.release(), None);
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn diagonal_travel_counts() {
        let mut tracker = PointerTracker::new(3);
        tracker.press(Some(BOARD), (10, 10));

        // sqrt(2² + 2²) < 3
        assert_eq!(tracker.motion((12, 12)), None);
        // sqrt(3² + 2²) >= 3
        assert_eq!(tracker.motion((13, 12)), Some(PointerMotion::Started(BOARD)));
    }

    #[test]
    fn drag_reports_moves_and_position() {
        let mut tracker = PointerTracker::new(1);
        tracker.press(Some(CARD), (0, 0));

        assert_eq!(tracker.motion((1, 0)), Some(PointerMotion::Started(CARD)));
        assert_eq!(tracker.motion((5, 7)), Some(PointerMotion::Moved(CARD)));
        assert_eq!(tracker.dragging(), Some((CARD, (5, 7))));

        tracker.set_over(Some(BOARD));
        assert_eq!(tracker.over(), Some(BOARD));

        assert_eq!(tracker.release(), Some(CARD));
        assert_eq!(tracker.dragging(), None);
        assert_eq!(tracker.over(), None);
    }

    #[test]
    fn set_over_ignored_before_drag_starts() {
        let mut tracker = PointerTracker::new(4);
        tracker.press(Some(CARD), (0, 0));
        tracker.set_over(Some(BOARD));
        assert_eq!(tracker.over(), None);
    }

    #[test]
    fn reset_abandons_gesture() {
        let mut tracker = PointerTracker::new(1);
        tracker.press(Some(CARD), (0, 0));
        tracker.motion((3, 0));
        tracker.reset();

        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn default_uses_configured_default_distance() {
        let mut tracker = PointerTracker::default();
        tracker.press(Some(CARD), (0, 0));
        assert_eq!(tracker.motion((1, 0)), None);
        assert_eq!(tracker.motion((2, 0)), Some(PointerMotion::Started(CARD)));
    }

    #[test]
    fn carry_starts_without_target() {
        let carry = Carry::new(CARD);
        assert_eq!(carry.active, CARD);
        assert_eq!(carry.over, None);
    }
}
