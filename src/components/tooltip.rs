use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};

use super::{Component, ComponentContext, cell_rect, placed_rect};
use crate::collision::{Placement, RepositionState, place};
use crate::position::Position;
use crate::theme;

/// A small floating label tied to an anchor. Prefers sitting centered above
/// it and flips below when the viewport edge is in the way.
#[derive(Debug)]
pub struct TooltipComponent {
    anchor: Rect,
    text: String,
    visible: bool,
    position: Position,
    v_offset: f64,
    h_offset: f64,
    state: RepositionState,
    placement: Option<Placement>,
}

impl TooltipComponent {
    pub fn new(anchor: Rect, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
            visible: false,
            position: Position::CenterTop,
            v_offset: 1.0,
            h_offset: 0.0,
            state: RepositionState::new(),
            placement: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn size(&self) -> (f64, f64) {
        (self.text.chars().count() as f64 + 2.0, 1.0)
    }

    pub fn show(&mut self, ctx: &ComponentContext) {
        self.visible = true;
        self.relayout(ctx);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.placement = None;
        self.state.reset();
    }

    pub fn toggle(&mut self, ctx: &ComponentContext) {
        if self.visible {
            self.hide();
        } else {
            self.show(ctx);
        }
    }

    pub fn relayout(&mut self, ctx: &ComponentContext) {
        if !self.visible {
            return;
        }
        let (width, height) = self.size();
        let element = crate::geometry::Rect::new(0.0, 0.0, width, height);
        self.placement = Some(place(
            element,
            cell_rect(self.anchor),
            ctx.viewport().rect(),
            self.position,
            self.v_offset,
            self.h_offset,
            ctx.direction(),
            &mut self.state,
        ));
    }

    /// The position the collision loop settled on, when one was accepted.
    pub fn placed_position(&self) -> Option<Position> {
        match self.placement {
            Some(Placement::At { position, .. }) => Some(position),
            _ => None,
        }
    }
}

impl Component for TooltipComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &ComponentContext) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }
        let Some(placement) = self.placement else {
            return;
        };
        let (width, height) = self.size();
        let rect = match placement {
            Placement::At { offset, .. } => placed_rect(width, height, offset, area),
            Placement::FullWidth { offset, width } => placed_rect(width, height, offset, area),
        };
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        frame.render_widget(Clear, rect);
        let label = Paragraph::new(format!(" {} ", self.text))
            .style(Style::default().bg(theme::tooltip_bg()).fg(theme::tooltip_fg()));
        frame.render_widget(label, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::{BreakpointConfig, BreakpointTracker};
    use crate::geometry::Viewport;
    use crate::keys::KeyDispatcher;
    use crate::position::TextDirection;

    fn ctx<'a>(
        keys: &'a KeyDispatcher,
        breakpoints: &'a BreakpointTracker,
    ) -> ComponentContext<'a> {
        ComponentContext::new(
            true,
            TextDirection::Ltr,
            Viewport::sized(100.0, 40.0),
            keys,
            breakpoints,
        )
    }

    #[test]
    fn tooltip_prefers_center_top() {
        let keys = KeyDispatcher::new();
        let bps = BreakpointTracker::new(BreakpointConfig::standard(), 100.0);
        let ctx = ctx(&keys, &bps);
        let anchor = Rect {
            x: 40,
            y: 20,
            width: 10,
            height: 1,
        };
        let mut tip = TooltipComponent::new(anchor, "hint");
        tip.show(&ctx);
        assert_eq!(tip.placed_position(), Some(Position::CenterTop));
    }

    #[test]
    fn tooltip_at_the_top_edge_flips_below() {
        let keys = KeyDispatcher::new();
        let bps = BreakpointTracker::new(BreakpointConfig::standard(), 100.0);
        let ctx = ctx(&keys, &bps);
        let anchor = Rect {
            x: 40,
            y: 0,
            width: 10,
            height: 1,
        };
        let mut tip = TooltipComponent::new(anchor, "hint");
        tip.show(&ctx);
        // center-top has no room above; the retry ladder lands it elsewhere
        let placed = tip.placed_position().expect("accepted placement");
        assert_ne!(placed, Position::CenterTop);
        tip.hide();
        assert!(!tip.is_visible());
    }
}
