//! Titled modal overlay with background dimming
//!
//! Call [`render_modal`] after the background has been drawn. It dims the
//! whole buffer, clears the modal area, draws a titled border and returns
//! the inner area for the modal's content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Configuration for modal appearance
pub struct ModalStyle {
    /// Dim factor for background (0.0 = no dim, 1.0 = black)
    pub dim_factor: f32,
    /// Background color for the modal area (None = terminal default)
    pub bg_color: Option<Color>,
    pub border_color: Color,
}

impl Default for ModalStyle {
    fn default() -> Self {
        Self {
            dim_factor: 0.5,
            bg_color: None,
            border_color: Color::Cyan,
        }
    }
}

/// Render a titled modal over dimmed content and return its inner area
///
/// ```ignore
/// lookup_view.render(frame, area, lookup_props);
///
/// if state.preview_open {
///     let modal_area = centered_rect(70, 20, frame.area());
///     let inner = render_modal(frame, modal_area, &ModalStyle::default(), "Survey Preview");
///     // render fields into `inner`
/// }
/// ```
pub fn render_modal(frame: &mut Frame, area: Rect, style: &ModalStyle, title: &str) -> Rect {
    dim_buffer(frame.buffer_mut(), style.dim_factor);

    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border_color));
    if let Some(bg) = style.bg_color {
        block = block.style(Style::default().bg(bg));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Scale every cell's colors toward black
pub fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let scale = 1.0 - factor.clamp(0.0, 1.0);
    for cell in buffer.content.iter_mut() {
        cell.fg = dim_color(cell.fg, scale);
        cell.bg = dim_color(cell.bg, scale);
        cell.modifier.insert(Modifier::DIM);
    }
}

fn dim_color(color: Color, scale: f32) -> Color {
    let scaled = |r: u8, g: u8, b: u8| {
        Color::Rgb(
            (r as f32 * scale) as u8,
            (g as f32 * scale) as u8,
            (b as f32 * scale) as u8,
        )
    };
    match color {
        Color::Rgb(r, g, b) => scaled(r, g, b),
        Color::Red => scaled(205, 0, 0),
        Color::Green => scaled(0, 205, 0),
        Color::Yellow => scaled(205, 205, 0),
        Color::Blue => scaled(0, 0, 238),
        Color::Magenta => scaled(205, 0, 205),
        Color::Cyan => scaled(0, 205, 205),
        Color::Gray => scaled(229, 229, 229),
        Color::White => scaled(255, 255, 255),
        // Reset and indexed colors keep the terminal's choice; DIM covers them
        other => other,
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
