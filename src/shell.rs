//! Shared widget glue
//!
//! `Shell` owns the pieces every widget consults: the key command registry,
//! the breakpoint tracker, the text direction, and the live viewport. Widget
//! kinds register their command tables through it once at setup; per-frame it
//! hands out [`ComponentContext`] borrows.

use crate::breakpoints::{BreakpointChange, BreakpointConfig, BreakpointTracker};
use crate::component_context::ComponentContext;
use crate::geometry::Viewport;
use crate::keys::{CommandTable, KeyDispatcher};
use crate::position::TextDirection;

#[derive(Debug)]
pub struct Shell {
    keys: KeyDispatcher,
    breakpoints: BreakpointTracker,
    direction: TextDirection,
    viewport: Viewport,
}

impl Shell {
    pub fn new(config: BreakpointConfig, viewport: Viewport, direction: TextDirection) -> Self {
        Self {
            keys: KeyDispatcher::new(),
            breakpoints: BreakpointTracker::new(config, viewport.width),
            direction,
            viewport,
        }
    }

    /// Register a widget kind's command table. Call once per kind.
    pub fn register(&mut self, component: impl Into<String>, table: CommandTable) {
        self.keys.register(component, table);
    }

    pub fn keys(&self) -> &KeyDispatcher {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyDispatcher {
        &mut self.keys
    }

    pub fn breakpoints(&self) -> &BreakpointTracker {
        &self.breakpoints
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a terminal resize. Returns the breakpoint crossing, if any,
    /// for the caller to broadcast to its components.
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<BreakpointChange> {
        self.viewport.width = width as f64;
        self.viewport.height = height as f64;
        self.breakpoints.resize(width as f64)
    }

    /// Context for one component this frame.
    pub fn context(&self, focused: bool) -> ComponentContext<'_> {
        ComponentContext::new(
            focused,
            self.direction,
            self.viewport,
            &self.keys,
            &self.breakpoints,
        )
    }
}
