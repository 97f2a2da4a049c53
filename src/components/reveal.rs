use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{Component, ComponentContext, placed_rect};
use crate::geometry::Rect as GeoRect;
use crate::keys::{CommandTable, Dispatch, KeyDispatcher};
use crate::position::{Position, offsets};
use crate::theme;

/// Component kind name the modal registers its command table under.
pub const COMPONENT: &str = "reveal";

pub fn command_table() -> CommandTable {
    CommandTable::flat([("ESCAPE", "close"), ("ENTER", "close"), ("SPACE", "close")])
}

pub fn register_commands(dispatcher: &mut KeyDispatcher) {
    dispatcher.register(COMPONENT, command_table());
}

/// A modal overlay pinned near the top of the viewport. Below the named
/// breakpoint tier it expands to cover the whole viewport instead.
#[derive(Debug)]
pub struct RevealComponent {
    title: String,
    body: String,
    open: bool,
    width: f64,
    height: f64,
    v_offset: f64,
    full_screen_below: String,
    dim_backdrop: bool,
}

impl RevealComponent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            open: false,
            width: 50.0,
            height: 12.0,
            v_offset: 2.0,
            full_screen_below: "medium".to_string(),
            dim_backdrop: true,
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Tier under which the modal goes full screen.
    pub fn set_full_screen_below(&mut self, tier: impl Into<String>) {
        self.full_screen_below = tier.into();
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn full_screen(&self, ctx: &ComponentContext) -> bool {
        !ctx.breakpoints().at_least(&self.full_screen_below)
    }

    /// Where the modal sits for the current viewport and tier.
    pub fn modal_rect(&self, ctx: &ComponentContext, bounds: Rect) -> Rect {
        let window = ctx.viewport().rect();
        let (position, width, height) = if self.full_screen(ctx) {
            (Position::RevealFull, window.width, window.height)
        } else {
            (
                Position::Reveal,
                self.width.min(window.width),
                self.height.min(window.height),
            )
        };
        let element = GeoRect::new(0.0, 0.0, width, height);
        // viewport-anchored positions ignore the anchor rect
        let offset = offsets(
            element,
            GeoRect::default(),
            window,
            position,
            self.v_offset,
            0.0,
            ctx.direction(),
            false,
        );
        placed_rect(width, height, offset, bounds)
    }

    fn run(&mut self, command: &str) {
        if command == "close" {
            self.close();
        }
    }
}

impl Component for RevealComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ComponentContext) {
        if !self.open || area.width == 0 || area.height == 0 {
            return;
        }
        if self.dim_backdrop {
            let buffer = frame.buffer_mut();
            let dim_style = Style::default().add_modifier(Modifier::DIM);
            for y in area.y..area.y.saturating_add(area.height) {
                for x in area.x..area.x.saturating_add(area.width) {
                    if let Some(cell) = buffer.cell_mut((x, y)) {
                        cell.set_style(dim_style);
                    }
                }
            }
        }
        let rect = self.modal_rect(ctx, area);
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL);
        let paragraph = Paragraph::new(self.body.as_str())
            .style(Style::default().bg(theme::modal_bg()).fg(theme::modal_fg()))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, rect);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        if !self.open {
            return false;
        }
        let Event::Key(key) = event else {
            return false;
        };
        match ctx.keys().dispatch(key, COMPONENT, ctx.direction()) {
            Dispatch::Handled(command) => {
                self.run(&command);
                true
            }
            Dispatch::Unhandled | Dispatch::NoMatch => false,
        }
    }
}
