use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;

pub mod dropdown;
pub mod reveal;
pub mod status_bar;
pub mod tooltip;

pub use dropdown::DropdownComponent;
pub use reveal::RevealComponent;
pub use status_bar::StatusBar;
pub use tooltip::TooltipComponent;

pub use crate::component_context::ComponentContext;

use crate::breakpoints::BreakpointChange;
use crate::geometry;
use crate::geometry::Offset;

pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// Called when the viewport crosses a breakpoint tier.
    fn breakpoint_changed(&mut self, _change: &BreakpointChange) {}
}

/// A terminal cell rect as measurement-space geometry (one cell = one unit).
pub fn cell_rect(rect: Rect) -> geometry::Rect {
    geometry::Rect::new(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

/// A placed panel back in cell coordinates, clipped to `bounds`. Negative
/// placement origins clamp to the bounds edge; fractional offsets round.
pub fn to_cells(rect: geometry::Rect, bounds: Rect) -> Rect {
    let x = rect.offset.left.round().max(bounds.x as f64) as u16;
    let y = rect.offset.top.round().max(bounds.y as f64) as u16;
    let width = rect.width.round().max(0.0) as u16;
    let height = rect.height.round().max(0.0) as u16;
    Rect {
        x,
        y,
        width,
        height,
    }
    .intersection(bounds)
}

/// Convenience for building the panel rect a placement produced.
pub fn placed_rect(width: f64, height: f64, offset: Offset, bounds: Rect) -> Rect {
    to_cells(
        geometry::Rect::new(offset.left, offset.top, width, height),
        bounds,
    )
}
