use ratatui::style::Color;

// Centralized theme colors. Small helpers so widgets stay consistent and a
// palette swap touches one file.

// Panel / dropdown
pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::White
}
pub fn panel_selected_bg() -> Color {
    Color::Gray
}
pub fn panel_selected_fg() -> Color {
    Color::Black
}

// Tooltip
pub fn tooltip_bg() -> Color {
    Color::Black
}
pub fn tooltip_fg() -> Color {
    Color::Yellow
}

// Modal
pub fn modal_bg() -> Color {
    Color::Black
}
pub fn modal_fg() -> Color {
    Color::White
}

// Anchor buttons
pub fn anchor_bg() -> Color {
    Color::Blue
}
pub fn anchor_fg() -> Color {
    Color::White
}
pub fn anchor_focused_bg() -> Color {
    Color::LightBlue
}

// Status line
pub fn status_bg() -> Color {
    Color::DarkGray
}
pub fn status_fg() -> Color {
    Color::White
}
