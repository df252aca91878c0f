use super::app::App;
use super::palette::Palette;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Paints the background and splits the screen into header, body, status
/// line and footer.
pub fn frame_layout(frame: &mut Frame, palette: &Palette) -> [Rect; 4] {
    frame.render_widget(Block::default().style(palette.base()), frame.area());
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(8),    // Main content
        Constraint::Length(1), // Status
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

pub fn draw_header(frame: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    let header = Paragraph::new(title.to_string())
        .style(palette.header())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        );

    frame.render_widget(header, area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect, help: &str, palette: &Palette) {
    let footer = Paragraph::new(help.to_string())
        .style(palette.muted())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );

    frame.render_widget(footer, area);
}

pub fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(status) = &app.status else {
        return;
    };
    let color = if status.is_error {
        palette.error
    } else {
        palette.good
    };
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        Style::new().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Marker shown after the row under the cursor.
#[must_use]
pub fn cursor_marker(is_selected: bool) -> &'static str {
    if is_selected {
        " ◄"
    } else {
        ""
    }
}

/// Edit buffer with a caret.
#[must_use]
pub fn editing_text(buffer: &str) -> String {
    format!("{buffer}▏")
}
