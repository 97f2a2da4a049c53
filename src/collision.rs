use crate::geometry::{Axis, Offset, Rect, is_clear_of};
use crate::position::{Position, TextDirection, offsets};

/// Reposition attempts allowed before a colliding panel gives up and takes
/// the full-width fallback.
pub const REPOSITION_TRIES: u8 = 4;

/// Per-panel retry bookkeeping for one open/reposition cycle.
///
/// Widgets own one of these per floating panel and call [`reset`] whenever
/// the panel closes, so the next open starts with a fresh budget.
///
/// [`reset`]: RepositionState::reset
#[derive(Debug, Clone)]
pub struct RepositionState {
    tried: Vec<Position>,
    budget: u8,
    repositioned: bool,
}

impl Default for RepositionState {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositionState {
    pub fn new() -> Self {
        Self {
            tried: Vec::new(),
            budget: REPOSITION_TRIES,
            repositioned: false,
        }
    }

    pub fn reset(&mut self) {
        self.tried.clear();
        self.budget = REPOSITION_TRIES;
        self.repositioned = false;
    }

    /// Whether the panel was moved off its requested position this cycle.
    pub fn repositioned(&self) -> bool {
        self.repositioned
    }

    pub fn budget(&self) -> u8 {
        self.budget
    }

    /// Positions attempted so far this cycle, in attempt order.
    pub fn tried(&self) -> &[Position] {
        &self.tried
    }

    /// Pick the next placement candidate after `current` collided.
    ///
    /// The precedence ladder prefers flipping to the opposite side, then
    /// sliding to a perpendicular side, and settles on the default when
    /// everything has been tried. Order matters; each arm is only reachable
    /// when the earlier ones are not.
    pub fn reposition(&mut self, current: Position) -> Position {
        self.tried.push(current);
        let tried = |p: Position| self.tried.contains(&p);
        let next = match current {
            Position::Bottom if !tried(Position::Top) => Position::Top,
            Position::Top if !tried(Position::Bottom) => Position::Bottom,
            Position::Left if !tried(Position::Right) => Position::Right,
            Position::Right if !tried(Position::Left) => Position::Left,
            Position::Bottom if tried(Position::Top) && !tried(Position::Left) => Position::Left,
            Position::Top if tried(Position::Bottom) && !tried(Position::Left) => Position::Left,
            Position::Left if tried(Position::Right) && !tried(Position::Bottom) => {
                Position::Bottom
            }
            Position::Right if tried(Position::Left) && !tried(Position::Bottom) => {
                Position::Bottom
            }
            _ => Position::Bottom,
        };
        self.repositioned = true;
        self.budget = self.budget.saturating_sub(1);
        next
    }
}

/// Final placement decision for a floating panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The panel fits at `position`; move it to `offset`.
    At { offset: Offset, position: Position },
    /// No tried position cleared the viewport. The panel is forced under the
    /// anchor at viewport-constrained width; height is left to content.
    FullWidth { offset: Offset, width: f64 },
}

impl Placement {
    pub fn offset(&self) -> Offset {
        match *self {
            Placement::At { offset, .. } | Placement::FullWidth { offset, .. } => offset,
        }
    }
}

/// Place `element` relative to `anchor` inside `window`, retrying alternate
/// positions on collision until the budget in `state` runs out.
///
/// This never fails: when no candidate clears the viewport the panel is
/// accepted in its overflow-safe full-width form instead.
#[allow(clippy::too_many_arguments)]
pub fn place(
    element: Rect,
    anchor: Rect,
    window: Rect,
    position: Position,
    v_offset: f64,
    h_offset: f64,
    direction: TextDirection,
    state: &mut RepositionState,
) -> Placement {
    let mut position = position;
    if element.width >= window.width {
        return full_width(element, anchor, window, v_offset, h_offset, direction, state);
    }
    loop {
        let offset = offsets(
            element, anchor, window, position, v_offset, h_offset, direction, false,
        );
        let candidate = element.at(offset);
        if is_clear_of(candidate, window, Axis::Vertical) {
            return Placement::At { offset, position };
        }
        if state.budget == 0 {
            if is_clear_of(candidate, window, Axis::Both) {
                return Placement::At { offset, position };
            }
            return full_width(element, anchor, window, v_offset, h_offset, direction, state);
        }
        position = state.reposition(position);
    }
}

fn full_width(
    element: Rect,
    anchor: Rect,
    window: Rect,
    v_offset: f64,
    h_offset: f64,
    direction: TextDirection,
    state: &mut RepositionState,
) -> Placement {
    let offset = offsets(
        element,
        anchor,
        window,
        Position::CenterBottom,
        v_offset,
        h_offset,
        direction,
        true,
    );
    state.repositioned = true;
    let width = window.width - 2.0 * h_offset;
    tracing::debug!(width, tried = state.tried.len(), "placement fell back to full width");
    Placement::FullWidth { offset, width }
}
