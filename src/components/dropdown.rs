use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use super::{Component, ComponentContext, cell_rect, placed_rect};
use crate::collision::{Placement, RepositionState, place};
use crate::keys::{CommandTable, Dispatch, KeyDispatcher};
use crate::position::Position;
use crate::theme;

/// Component kind name the dropdown registers its command table under.
pub const COMPONENT: &str = "dropdown";

/// Directional bindings: the arrow that opens the panel flips under RTL.
pub fn command_table() -> CommandTable {
    CommandTable::directional(
        [
            ("ARROW_DOWN", "next"),
            ("ARROW_UP", "previous"),
            ("ENTER", "select"),
            ("SPACE", "select"),
            ("ESCAPE", "close"),
            ("ARROW_RIGHT", "open"),
            ("ARROW_LEFT", "close"),
        ],
        [("ARROW_RIGHT", "close"), ("ARROW_LEFT", "open")],
    )
}

pub fn register_commands(dispatcher: &mut KeyDispatcher) {
    dispatcher.register(COMPONENT, command_table());
}

/// A floating list panel anchored to a trigger button.
#[derive(Debug)]
pub struct DropdownComponent {
    label: String,
    anchor: Rect,
    items: Vec<String>,
    selected: usize,
    open: bool,
    position: Position,
    v_offset: f64,
    h_offset: f64,
    state: RepositionState,
    placement: Option<Placement>,
}

impl DropdownComponent {
    pub fn new(label: impl Into<String>, anchor: Rect, items: Vec<String>) -> Self {
        Self {
            label: label.into(),
            anchor,
            items,
            selected: 0,
            open: false,
            position: Position::Bottom,
            v_offset: 0.0,
            h_offset: 1.0,
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

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Preferred panel size for the current items, borders included.
    fn panel_size(&self) -> (f64, f64) {
        let widest = self
            .items
            .iter()
            .map(|item| item.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.label.chars().count());
        ((widest + 2) as f64, (self.items.len() + 2) as f64)
    }

    pub fn open(&mut self, ctx: &ComponentContext) {
        self.open = true;
        self.relayout(ctx);
    }

    /// Close and forget the reposition history, so the next open starts with
    /// a full retry budget.
    pub fn close(&mut self) {
        self.open = false;
        self.placement = None;
        self.state.reset();
    }

    pub fn toggle(&mut self, ctx: &ComponentContext) {
        if self.open {
            self.close();
        } else {
            self.open(ctx);
        }
    }

    /// Recompute the panel placement. Call on open and whenever the viewport
    /// changes while the panel is showing; the retry budget spans the whole
    /// open cycle.
    pub fn relayout(&mut self, ctx: &ComponentContext) {
        if !self.open {
            return;
        }
        let (width, height) = self.panel_size();
        let element = crate::geometry::Rect::new(0.0, 0.0, width, height);
        let placement = place(
            element,
            cell_rect(self.anchor),
            ctx.viewport().rect(),
            self.position,
            self.v_offset,
            self.h_offset,
            ctx.direction(),
            &mut self.state,
        );
        self.placement = Some(placement);
    }

    fn run(&mut self, command: &str, ctx: &ComponentContext) {
        match command {
            "open" => self.open(ctx),
            "close" => self.close(),
            "next" => {
                if self.open && !self.items.is_empty() {
                    self.selected = (self.selected + 1) % self.items.len();
                }
            }
            "previous" => {
                if self.open && !self.items.is_empty() {
                    self.selected = self.selected.checked_sub(1).unwrap_or(self.items.len() - 1);
                }
            }
            "select" => {
                if self.open {
                    self.close();
                } else {
                    self.open(ctx);
                }
            }
            _ => {}
        }
    }

    fn panel_cells(&self, bounds: Rect) -> Option<Rect> {
        let placement = self.placement?;
        let (width, height) = self.panel_size();
        let rect = match placement {
            Placement::At { offset, .. } => placed_rect(width, height, offset, bounds),
            Placement::FullWidth { offset, width } => placed_rect(width, height, offset, bounds),
        };
        Some(rect)
    }
}

impl Component for DropdownComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let anchor_bg = if ctx.focused() {
            theme::anchor_focused_bg()
        } else {
            theme::anchor_bg()
        };
        let button = Paragraph::new(Line::from(self.label.as_str()))
            .style(Style::default().bg(anchor_bg).fg(theme::anchor_fg()));
        frame.render_widget(button, self.anchor.intersection(area));

        if !self.open {
            return;
        }
        let Some(panel) = self.panel_cells(area) else {
            return;
        };
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        frame.render_widget(Clear, panel);
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if idx == self.selected {
                    Style::default()
                        .bg(theme::panel_selected_bg())
                        .fg(theme::panel_selected_fg())
                } else {
                    Style::default()
                };
                ListItem::new(item.as_str()).style(style)
            })
            .collect();
        let list = List::new(items)
            .style(Style::default().bg(theme::panel_bg()).fg(theme::panel_fg()))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(list, panel);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        if !ctx.focused() {
            return false;
        }
        let Event::Key(key) = event else {
            return false;
        };
        match ctx.keys().dispatch(key, COMPONENT, ctx.direction()) {
            Dispatch::Handled(command) => {
                self.run(&command, ctx);
                true
            }
            Dispatch::Unhandled | Dispatch::NoMatch => false,
        }
    }
}
