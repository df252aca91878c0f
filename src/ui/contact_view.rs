use super::app::{App, ContactField, EditTarget};
use super::chrome::{cursor_marker, draw_footer, draw_header, draw_status, editing_text, frame_layout};
use super::palette::Palette;
use crate::model::format_amount;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_contact(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let [header, body, status, footer] = frame_layout(frame, &palette);

    draw_header(frame, header, " Request Full Proposal ", &palette);

    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(9)]).split(body);
    draw_quote(frame, chunks[0], app, &palette);
    draw_fields(frame, chunks[1], app, &palette);

    draw_status(frame, status, app, &palette);
    let help = if app.editing.is_some() {
        " Type to edit | Enter Save | Esc Cancel "
    } else {
        " ↑↓ Field | Enter Edit/Cycle | s Submit | Esc Back "
    };
    draw_footer(frame, footer, help, &palette);
}

fn draw_quote(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = match app.wizard.result() {
        Some(result) => Line::from(vec![
            Span::styled("Attached estimate: ", palette.muted()),
            Span::styled(format!("₹{}", format_amount(result.total_cost)), palette.header()),
            Span::raw(format!(
                " | {} weeks | risk {}/100",
                result.timeline, result.risk_score
            )),
        ]),
        None => Line::styled("No estimate attached", palette.muted()),
    };

    let quote = Paragraph::new(line).block(
        Block::default()
            .title(" Quote ")
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    frame.render_widget(quote, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let items: Vec<ListItem> = ContactField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == app.contact.cursor;
            let value = if app.editing == Some(EditTarget::Contact(*field)) {
                editing_text(&app.buffer)
            } else {
                let value = app.contact_value(*field);
                if value.is_empty() {
                    "—".to_string()
                } else {
                    value
                }
            };

            let style = if is_selected {
                palette.selected()
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<14}", field.label()), palette.muted().patch(style)),
                Span::styled(value, style),
                Span::styled(cursor_marker(is_selected), Style::default().fg(palette.warn)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Your details ")
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );
    let mut state = ListState::default().with_selected(Some(app.contact.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
