use std::fmt;

/// One named minimum-width tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: f64,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: f64) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }
}

/// Explicit tier configuration. Order does not matter; the widest matching
/// tier always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakpointConfig {
    pub breakpoints: Vec<Breakpoint>,
}

impl BreakpointConfig {
    /// The tiers the demo and tests use when nothing else is supplied:
    /// small from zero, medium at 80 columns, large at 120.
    pub fn standard() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::new("small", 0.0),
                Breakpoint::new("medium", 80.0),
                Breakpoint::new("large", 120.0),
            ],
        }
    }
}

/// Parse the legacy query-string tier encoding, e.g.
/// `"small=0&medium=40em&large=64em"`. The whole value may be wrapped in
/// single or double quotes, as it arrives when smuggled through a styled
/// property. Entries that do not parse are skipped.
///
/// Widths accept `em` (16 units each), `px`, or bare numbers.
pub fn parse_encoded(input: &str) -> BreakpointConfig {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    let mut breakpoints = Vec::new();
    for pair in trimmed.split('&') {
        let Some((name, width)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if let Some(min_width) = parse_width(width.trim()) {
            breakpoints.push(Breakpoint::new(name, min_width));
        }
    }
    BreakpointConfig { breakpoints }
}

fn parse_width(value: &str) -> Option<f64> {
    const UNITS_PER_EM: f64 = 16.0;
    if let Some(em) = value.strip_suffix("em") {
        return em.trim().parse::<f64>().ok().map(|v| v * UNITS_PER_EM);
    }
    if let Some(px) = value.strip_suffix("px") {
        return px.trim().parse::<f64>().ok();
    }
    value.parse::<f64>().ok()
}

/// A tier crossing reported by [`BreakpointTracker::resize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointChange {
    pub new_size: String,
    pub old_size: String,
}

impl fmt::Display for BreakpointChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old_size, self.new_size)
    }
}

#[derive(Debug, Clone)]
struct Query {
    name: String,
    value: String,
    min_width: f64,
}

/// Tracks which named tier the viewport width currently falls in.
///
/// An owned value rather than process state: construct one per surface (or
/// per test) and feed it widths. Callers broadcast the returned change to
/// whoever re-runs layout; there is no internal debounce.
#[derive(Debug, Clone)]
pub struct BreakpointTracker {
    queries: Vec<Query>,
    current: Option<String>,
    width: f64,
}

impl BreakpointTracker {
    pub fn new(config: BreakpointConfig, initial_width: f64) -> Self {
        let queries = config
            .breakpoints
            .into_iter()
            .map(|bp| Query {
                value: format!("(min-width: {})", bp.min_width),
                name: bp.name,
                min_width: bp.min_width,
            })
            .collect();
        let mut tracker = Self {
            queries,
            current: None,
            width: initial_width,
        };
        tracker.current = tracker.current_size().map(str::to_string);
        tracker
    }

    /// Construct from the legacy encoded form. Adapter over [`parse_encoded`].
    pub fn from_encoded(encoded: &str, initial_width: f64) -> Self {
        Self::new(parse_encoded(encoded), initial_width)
    }

    /// Whether the viewport is at least as wide as the named tier requires.
    /// Unknown names are never matched.
    pub fn at_least(&self, name: &str) -> bool {
        self.queries
            .iter()
            .find(|q| q.name == name)
            .is_some_and(|q| self.width >= q.min_width)
    }

    /// The min-width query expression built for the named tier.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.queries
            .iter()
            .find(|q| q.name == name)
            .map(|q| q.value.as_str())
    }

    /// Name of the current (widest matching) tier.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Widest tier whose minimum the current width meets, independent of
    /// configuration order.
    fn current_size(&self) -> Option<&str> {
        self.queries
            .iter()
            .filter(|q| self.width >= q.min_width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .map(|q| q.name.as_str())
    }

    /// Record a new viewport width. Returns the tier crossing, if any; the
    /// cached current tier is already updated when this returns.
    pub fn resize(&mut self, new_width: f64) -> Option<BreakpointChange> {
        self.width = new_width;
        let new_size = self.current_size().map(str::to_string);
        if new_size == self.current {
            return None;
        }
        let old_size = self.current.take().unwrap_or_default();
        let new_name = new_size.clone().unwrap_or_default();
        self.current = new_size;
        tracing::debug!(from = %old_size, to = %new_name, "breakpoint changed");
        Some(BreakpointChange {
            new_size: new_name,
            old_size,
        })
    }
}
