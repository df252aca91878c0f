use super::app::App;
use super::chrome::{draw_footer, draw_header, draw_status, editing_text, frame_layout};
use super::palette::Palette;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

pub fn draw_search(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let [header, body, status, footer] = frame_layout(frame, &palette);

    let title = format!(" Search: {}", editing_text(&app.search.query));
    draw_header(frame, header, &title, &palette);

    let chunks =
        Layout::horizontal([Constraint::Length(28), Constraint::Min(40)]).split(body);
    draw_filters(frame, chunks[0], app, &palette);
    draw_hits(frame, chunks[1], app, &palette);

    draw_status(frame, status, app, &palette);
    draw_footer(
        frame,
        footer,
        " Type to search | Tab Kind | Shift+Tab Sort | ↑↓ Select | Esc Back ",
        &palette,
    );
}

fn draw_filters(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut items: Vec<ListItem> = app
        .search
        .results
        .kind_counts()
        .into_iter()
        .map(|(kind, count)| {
            let text = format!("{kind} ({count})");
            if kind == app.search.kind {
                ListItem::new(Line::styled(format!("▶ {text}"), palette.selected()))
            } else {
                ListItem::new(Line::raw(format!("  {text}")))
            }
        })
        .collect();

    items.push(ListItem::new(Line::raw("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("Sort: ", palette.muted()),
        Span::styled(app.search.sort.label(), palette.header()),
    ])));

    let list = List::new(items).block(
        Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    frame.render_widget(list, area);
}

fn draw_hits(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(format!(" Results ({}) ", app.search.results.len()))
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    if let Some(message) = app.search.results.empty_message() {
        let empty = Paragraph::new(message)
            .style(palette.muted())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .search_view()
        .into_iter()
        .map(|hit| {
            Row::new(vec![
                hit.entry.title.to_string(),
                hit.entry.kind.label().to_string(),
                hit.score.to_string(),
                hit.entry.date.unwrap_or("-").to_string(),
                hit.entry.read_time_label().unwrap_or_default(),
                hit.entry.path.to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(35),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Title", "Kind", "Score", "Date", "Read", "Path"]).style(palette.header()))
        .row_highlight_style(palette.selected())
        .highlight_symbol("► ")
        .style(Style::default().fg(palette.text))
        .block(block);

    let mut state = TableState::default().with_selected(Some(app.search.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
