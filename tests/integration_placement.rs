use term_kit::collision::{Placement, REPOSITION_TRIES, RepositionState, place};
use term_kit::geometry::{Rect, Viewport};
use term_kit::position::{Position, TextDirection, offsets};

#[test]
fn colliding_panel_walks_the_retry_ladder_then_gives_up() {
    // panel taller than the viewport: no position can clear it
    let viewport = Viewport::sized(120.0, 30.0);
    let element = Rect::new(0.0, 0.0, 24.0, 50.0);
    let anchor = Rect::new(50.0, 12.0, 12.0, 1.0);
    let mut state = RepositionState::new();

    let placement = place(
        element,
        anchor,
        viewport.rect(),
        Position::Bottom,
        1.0,
        2.0,
        TextDirection::Ltr,
        &mut state,
    );

    match placement {
        Placement::FullWidth { width, offset } => {
            assert_eq!(width, 120.0 - 2.0 * 2.0);
            assert_eq!(offset.left, 2.0);
        }
        Placement::At { .. } => panic!("expected the full-width fallback"),
    }
    assert_eq!(state.tried().len(), REPOSITION_TRIES as usize);
    assert_eq!(state.budget(), 0);
    // attempt order is deterministic: bottom, top, left, right
    assert_eq!(
        state.tried(),
        &[
            Position::Bottom,
            Position::Top,
            Position::Left,
            Position::Right
        ]
    );
}

#[test]
fn panel_near_the_bottom_edge_flips_above_the_anchor() {
    let viewport = Viewport::sized(120.0, 30.0);
    let element = Rect::new(0.0, 0.0, 24.0, 8.0);
    let anchor = Rect::new(50.0, 27.0, 12.0, 1.0);
    let mut state = RepositionState::new();

    let placement = place(
        element,
        anchor,
        viewport.rect(),
        Position::Bottom,
        0.0,
        0.0,
        TextDirection::Ltr,
        &mut state,
    );

    let Placement::At { position, offset } = placement else {
        panic!("expected an accepted placement");
    };
    assert_eq!(position, Position::Top);
    assert_eq!(offset.top, 27.0 - 8.0);
    assert!(state.repositioned());
}

#[test]
fn scrolled_viewport_keeps_placements_page_relative() {
    let viewport = Viewport {
        width: 120.0,
        height: 30.0,
        scroll_left: 0.0,
        scroll_top: 100.0,
    };
    // anchor mid-screen in page coordinates
    let anchor = Rect::new(50.0, 112.0, 12.0, 1.0);
    let element = Rect::new(0.0, 0.0, 24.0, 8.0);
    let mut state = RepositionState::new();

    let placement = place(
        element,
        anchor,
        viewport.rect(),
        Position::Bottom,
        0.0,
        0.0,
        TextDirection::Ltr,
        &mut state,
    );

    let Placement::At { position, offset } = placement else {
        panic!("expected an accepted placement");
    };
    assert_eq!(position, Position::Bottom);
    assert_eq!(offset.top, 113.0);
    assert!(!state.repositioned());
}

#[test]
fn offsets_for_every_position_are_idempotent() {
    let element = Rect::new(0.0, 0.0, 24.0, 8.0);
    let anchor = Rect::new(50.0, 12.0, 12.0, 1.0);
    let window = Rect::new(0.0, 0.0, 120.0, 30.0);
    for position in [
        Position::Top,
        Position::Left,
        Position::Right,
        Position::CenterTop,
        Position::CenterBottom,
        Position::CenterLeft,
        Position::CenterRight,
        Position::Center,
        Position::Reveal,
        Position::RevealFull,
        Position::LeftBottom,
        Position::RightBottom,
        Position::Bottom,
    ] {
        for direction in [TextDirection::Ltr, TextDirection::Rtl] {
            let first = offsets(element, anchor, window, position, 1.0, 2.0, direction, false);
            let second = offsets(element, anchor, window, position, 1.0, 2.0, direction, false);
            assert_eq!(first, second, "position {position} should be stable");
        }
    }
}

#[test]
fn rtl_mirrors_only_the_vertical_stack_positions() {
    let element = Rect::new(0.0, 0.0, 24.0, 8.0);
    let anchor = Rect::new(50.0, 12.0, 12.0, 1.0);
    let window = Rect::new(0.0, 0.0, 120.0, 30.0);

    let ltr = offsets(
        element,
        anchor,
        window,
        Position::Bottom,
        0.0,
        0.0,
        TextDirection::Ltr,
        false,
    );
    let rtl = offsets(
        element,
        anchor,
        window,
        Position::Bottom,
        0.0,
        0.0,
        TextDirection::Rtl,
        false,
    );
    assert_ne!(ltr.left, rtl.left);
    assert_eq!(ltr.top, rtl.top);

    // side positions are unaffected by direction
    let ltr_side = offsets(
        element,
        anchor,
        window,
        Position::Right,
        0.0,
        0.0,
        TextDirection::Ltr,
        false,
    );
    let rtl_side = offsets(
        element,
        anchor,
        window,
        Position::Right,
        0.0,
        0.0,
        TextDirection::Rtl,
        false,
    );
    assert_eq!(ltr_side, rtl_side);
}
