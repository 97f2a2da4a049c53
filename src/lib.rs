//! Overlay positioning, responsive breakpoints, and keyboard command routing
//! for terminal UIs.
//!
//! The core is surface-agnostic: [`geometry`] measures elements against an
//! explicit viewport, [`position`] and [`collision`] place floating panels
//! and retry alternate positions away from the viewport edges, [`breakpoints`]
//! tracks named minimum-width tiers, and [`keys`] routes key events through
//! per-widget command tables. The [`components`] module layers ratatui
//! widgets (dropdown, tooltip, modal, status bar) on top, glued together by
//! [`shell::Shell`].

pub mod breakpoints;
pub mod collision;
pub mod component_context;
pub mod components;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod keys;
pub mod position;
pub mod shell;
pub mod theme;
pub mod tracing_sub;

pub use breakpoints::{Breakpoint, BreakpointChange, BreakpointConfig, BreakpointTracker};
pub use collision::{Placement, REPOSITION_TRIES, RepositionState, place};
pub use geometry::{
    Axis, BoundingBox, Dimensions, ElementHandle, GeometryError, Offset, Rect, Viewport,
    dimensions, is_clear_of,
};
pub use keys::{CommandTable, Dispatch, KeyDispatcher, parse_key};
pub use position::{Position, TextDirection, offsets};
pub use shell::Shell;
