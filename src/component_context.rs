//! Shared component rendering context
//!
//! `ComponentContext` carries the UI state components need during rendering
//! and event handling: focus, text direction, the live viewport, and borrows
//! of the shared key dispatcher and breakpoint tracker. Centralizing these
//! keeps the component trait stable as widgets grow.

use crate::breakpoints::BreakpointTracker;
use crate::geometry::Viewport;
use crate::keys::KeyDispatcher;
use crate::position::TextDirection;

/// Context passed to `Component` trait methods.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext<'a> {
    focused: bool,
    direction: TextDirection,
    viewport: Viewport,
    keys: &'a KeyDispatcher,
    breakpoints: &'a BreakpointTracker,
}

impl<'a> ComponentContext<'a> {
    pub fn new(
        focused: bool,
        direction: TextDirection,
        viewport: Viewport,
        keys: &'a KeyDispatcher,
        breakpoints: &'a BreakpointTracker,
    ) -> Self {
        Self {
            focused,
            direction,
            viewport,
            keys,
            breakpoints,
        }
    }

    /// Returns whether the component is focused.
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn keys(&self) -> &'a KeyDispatcher {
        self.keys
    }

    pub fn breakpoints(&self) -> &'a BreakpointTracker {
        self.breakpoints
    }

    /// Return a new context with a modified `focused` flag.
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}
