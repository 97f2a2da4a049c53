use thiserror::Error;

/// Page-relative top/left displacement in layout units (terminal cells when
/// driven by the shipped widget layer).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// A measured rectangle: size plus page-relative origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    pub offset: Offset,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offset: Offset { top, left },
        }
    }

    pub fn right(&self) -> f64 {
        self.offset.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.offset.top + self.height
    }

    /// The same rectangle moved to `offset`.
    pub fn at(&self, offset: Offset) -> Self {
        Self { offset, ..*self }
    }
}

/// Viewport-relative box reported by a surface element, before scroll
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll position and size of the visible viewport. Passed explicitly so
/// measurement is testable against any simulated viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    /// The viewport itself as a page-relative rect.
    pub fn rect(&self) -> Rect {
        Rect {
            width: self.width,
            height: self.height,
            offset: Offset {
                top: self.scroll_top,
                left: self.scroll_left,
            },
        }
    }
}

/// Measurement capability a host surface implements for its elements.
///
/// `bounding_box` returns `None` for an element that is no longer attached to
/// the surface; measurement then degrades to zeroed rects instead of failing.
pub trait ElementHandle {
    fn bounding_box(&self) -> Option<BoundingBox>;

    fn parent_box(&self) -> Option<BoundingBox> {
        None
    }

    /// Whether this handle denotes the viewport root itself.
    fn is_viewport_root(&self) -> bool {
        false
    }
}

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot measure the viewport root; measure a concrete element instead")]
    ViewportRoot,
}

/// Element, parent, and viewport rects from one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub rect: Rect,
    pub parent: Rect,
    pub window: Rect,
}

/// Measure `element` against `viewport`, normalizing every rect to page
/// coordinates by adding the current scroll offset.
pub fn dimensions(
    element: &dyn ElementHandle,
    viewport: Viewport,
) -> Result<Dimensions, GeometryError> {
    if element.is_viewport_root() {
        return Err(GeometryError::ViewportRoot);
    }
    Ok(Dimensions {
        rect: page_rect(element.bounding_box(), viewport),
        parent: page_rect(element.parent_box(), viewport),
        window: viewport.rect(),
    })
}

fn page_rect(bounds: Option<BoundingBox>, viewport: Viewport) -> Rect {
    match bounds {
        Some(b) => Rect {
            width: b.width,
            height: b.height,
            offset: Offset {
                top: b.top + viewport.scroll_top,
                left: b.left + viewport.scroll_left,
            },
        },
        None => Rect::default(),
    }
}

/// Which edges a clearance check considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Both,
    Horizontal,
    Vertical,
}

/// Whether `subject` stays inside `container`.
///
/// Single-axis checks report the *agreement* of that axis' two edge checks:
/// an element hanging out both sides at once still reads as clear. That
/// matches the behavior floating panels have always been positioned against,
/// and the full-width give-up path uses `Axis::Both`, which is strict.
pub fn is_clear_of(subject: Rect, container: Rect, axis: Axis) -> bool {
    let top = container.offset.top <= subject.offset.top;
    let bottom = container.bottom() >= subject.bottom();
    let left = container.offset.left <= subject.offset.left;
    let right = container.right() >= subject.right();
    match axis {
        Axis::Horizontal => left == right,
        Axis::Vertical => top == bottom,
        Axis::Both => top && bottom && left && right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeElement {
        bounds: Option<BoundingBox>,
        parent: Option<BoundingBox>,
        root: bool,
    }

    impl ElementHandle for FakeElement {
        fn bounding_box(&self) -> Option<BoundingBox> {
            self.bounds
        }

        fn parent_box(&self) -> Option<BoundingBox> {
            self.parent
        }

        fn is_viewport_root(&self) -> bool {
            self.root
        }
    }

    fn element(left: f64, top: f64, width: f64, height: f64) -> FakeElement {
        FakeElement {
            bounds: Some(BoundingBox {
                left,
                top,
                width,
                height,
            }),
            parent: None,
            root: false,
        }
    }

    #[test]
    fn dimensions_are_page_relative() {
        let viewport = Viewport {
            width: 100.0,
            height: 40.0,
            scroll_left: 7.0,
            scroll_top: 12.0,
        };
        let el = element(3.0, 5.0, 20.0, 4.0);
        let dims = dimensions(&el, viewport).unwrap();
        assert_eq!(dims.rect.offset.top, 5.0 + 12.0);
        assert_eq!(dims.rect.offset.left, 3.0 + 7.0);
        assert_eq!(dims.rect.width, 20.0);
        assert_eq!(dims.window.offset.top, 12.0);
        assert_eq!(dims.window.width, 100.0);
    }

    #[test]
    fn measuring_the_viewport_root_fails() {
        let root = FakeElement {
            bounds: None,
            parent: None,
            root: true,
        };
        assert!(dimensions(&root, Viewport::sized(80.0, 24.0)).is_err());
    }

    #[test]
    fn detached_element_measures_as_zeroed() {
        let detached = FakeElement {
            bounds: None,
            parent: None,
            root: false,
        };
        let dims = dimensions(&detached, Viewport::sized(80.0, 24.0)).unwrap();
        assert_eq!(dims.rect, Rect::default());
        assert_eq!(dims.parent, Rect::default());
        assert_eq!(dims.window.width, 80.0);
    }

    #[test]
    fn clear_when_fully_inside() {
        let container = Rect::new(0.0, 0.0, 100.0, 40.0);
        let subject = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(is_clear_of(subject, container, Axis::Both));
        assert!(is_clear_of(subject, container, Axis::Horizontal));
        assert!(is_clear_of(subject, container, Axis::Vertical));
    }

    #[test]
    fn one_edge_out_collides_on_that_axis() {
        let container = Rect::new(0.0, 0.0, 100.0, 40.0);
        // hangs off the bottom only
        let subject = Rect::new(10.0, 38.0, 20.0, 5.0);
        assert!(!is_clear_of(subject, container, Axis::Both));
        assert!(!is_clear_of(subject, container, Axis::Vertical));
        assert!(is_clear_of(subject, container, Axis::Horizontal));
    }

    #[test]
    fn both_edges_out_reads_clear_on_single_axis_but_not_both() {
        let container = Rect::new(0.0, 0.0, 100.0, 40.0);
        // taller than the container: out the top and the bottom
        let subject = Rect::new(10.0, -5.0, 20.0, 50.0);
        assert!(is_clear_of(subject, container, Axis::Vertical));
        assert!(!is_clear_of(subject, container, Axis::Both));
    }

    #[test]
    fn rect_at_moves_without_resizing() {
        let r = Rect::new(1.0, 2.0, 30.0, 4.0);
        let moved = r.at(Offset::new(9.0, 8.0));
        assert_eq!(moved.width, 30.0);
        assert_eq!(moved.height, 4.0);
        assert_eq!(moved.offset.top, 9.0);
        assert_eq!(moved.offset.left, 8.0);
    }
}
