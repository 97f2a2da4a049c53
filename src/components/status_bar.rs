use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Component, ComponentContext};
use crate::breakpoints::BreakpointChange;
use crate::theme;

/// Single-line readout of the responsive state: current tier and viewport
/// width on the left, the last tier crossing and text direction on the right.
#[derive(Debug, Default)]
pub struct StatusBar {
    left: String,
    last_change: Option<BreakpointChange>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn last_change(&self) -> Option<&BreakpointChange> {
        self.last_change.as_ref()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let tier = ctx.breakpoints().current().unwrap_or("-");
        let left = if self.left.is_empty() {
            format!(" {} ({} cols)", tier, ctx.viewport().width)
        } else {
            format!(" {} | {} ({} cols)", self.left, tier, ctx.viewport().width)
        };
        let right = match &self.last_change {
            Some(change) => format!("{change} "),
            None => String::new(),
        };
        let gap = (area.width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count());
        let line = Line::from(vec![
            Span::raw(left),
            Span::raw(" ".repeat(gap)),
            Span::raw(right),
        ]);
        let bar = Paragraph::new(line)
            .style(Style::default().bg(theme::status_bg()).fg(theme::status_fg()));
        frame.render_widget(bar, area);
    }

    fn breakpoint_changed(&mut self, change: &BreakpointChange) {
        self.last_change = Some(change.clone());
    }
}
