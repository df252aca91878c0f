use super::app::{App, EditTarget, Row};
use super::chrome::{cursor_marker, draw_footer, draw_header, draw_status, editing_text, frame_layout};
use super::palette::Palette;
use crate::engine::Rates;
use crate::model::{format_amount, EstimateResult, TechStack};
use crate::wizard::Step;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row as TableRow, Table, Wrap},
    Frame,
};

pub fn draw_wizard(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let [header, body, status, footer] = frame_layout(frame, &palette);

    let step = app.wizard.step();
    let title = format!(
        " Predicto AI Estimator | Step {}/{}: {} | {} theme ",
        step.number(),
        Step::ALL.len(),
        step.title(),
        app.theme()
    );
    draw_header(frame, header, &title, &palette);

    match step {
        Step::ProjectType | Step::Details => draw_step_list(frame, body, app, &palette),
        Step::TechAndRequirements => {
            let chunks =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(body);
            draw_step_list(frame, chunks[0], app, &palette);
            draw_summary(frame, chunks[1], app, &palette);
        }
        Step::Results => {
            if let Some(result) = app.wizard.result() {
                draw_results(frame, body, result, &palette);
            }
        }
    }

    draw_status(frame, status, app, &palette);
    draw_footer(frame, footer, &footer_help(app), &palette);
}

fn footer_help(app: &App) -> String {
    let missing = app.blocking_fields();
    let next = if missing.is_empty() {
        "n Next".to_string()
    } else {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        format!("n Next (needs {})", names.join(", "))
    };

    if app.editing.is_some() {
        return " Type to edit | Enter Save | Esc Cancel ".to_string();
    }
    match app.wizard.step() {
        Step::ProjectType => format!(" ↑↓ Select | Enter Choose | {next} | / Search | t Theme | q Quit "),
        Step::Details => {
            format!(" ↑↓ Select | Enter Edit/Toggle | {next} | b Back | t Theme | q Quit ")
        }
        Step::TechAndRequirements => {
            " ↑↓ Select | Enter Choose/Edit | g Generate Estimate | b Back | t Theme | q Quit "
                .to_string()
        }
        Step::Results => {
            " e Export JSON | c Export CSV | p Request Proposal | r Restart | b Back | q Quit "
                .to_string()
        }
    }
}

fn draw_step_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rates = app.wizard.estimator().rates();
    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == app.cursor;
            let style = if is_selected {
                palette.selected()
            } else {
                Style::default()
            };
            let mut spans = row_spans(app, *row, rates, palette);
            for span in &mut spans {
                span.style = span.style.patch(style);
            }
            spans.push(Span::styled(
                cursor_marker(is_selected),
                Style::default().fg(palette.warn),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = match app.wizard.step() {
        Step::ProjectType => " Select your project category ",
        Step::Details => " Project details, features and add-ons ",
        _ => " Tech stack, requirements and documents ",
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn check(flag: bool) -> &'static str {
    if flag {
        "[x] "
    } else {
        "[ ] "
    }
}

fn radio(flag: bool) -> &'static str {
    if flag {
        "(●) "
    } else {
        "( ) "
    }
}

fn field_value(app: &App, target: EditTarget, value: String) -> String {
    if app.editing == Some(target) {
        editing_text(&app.buffer)
    } else if value.is_empty() {
        "—".to_string()
    } else {
        value
    }
}

fn row_spans(app: &App, row: Row, rates: &Rates, palette: &Palette) -> Vec<Span<'static>> {
    let input = app.wizard.input();
    let label = |text: &str| Span::styled(format!("{text}: "), palette.muted());

    match row {
        Row::ProjectType(project_type) => vec![
            Span::raw(radio(input.project_type == Some(project_type))),
            Span::raw(project_type.label()),
        ],
        Row::TeamSize => vec![
            label("Team size"),
            Span::raw(field_value(
                app,
                EditTarget::TeamSize,
                input.team_size.map(|n| format!("{n} developers")).unwrap_or_default(),
            )),
        ],
        Row::Duration => vec![
            label("Duration"),
            Span::raw(field_value(
                app,
                EditTarget::Duration,
                input.duration.map(|n| format!("{n} weeks")).unwrap_or_default(),
            )),
        ],
        Row::Complexity => vec![
            label("Complexity"),
            Span::raw(input.complexity.map_or("Select complexity…", |c| c.label())),
        ],
        Row::Location => vec![
            label("Location"),
            Span::raw(field_value(app, EditTarget::Location, input.location.clone())),
        ],
        Row::Feature(feature) => vec![
            Span::raw(check(input.features.contains(&feature))),
            Span::raw(feature.label()),
        ],
        Row::Addon(addon) => vec![
            Span::raw(check(input.addons.is_enabled(addon))),
            Span::raw(addon.label()),
            Span::styled(
                format!(" (+ ₹{})", format_amount(rates.addons.price(addon) as u64)),
                palette.muted(),
            ),
        ],
        Row::Stack(index) => {
            let preset = TechStack::PRESETS.get(index).cloned();
            let selected = preset.is_some() && input.tech_stack == preset;
            vec![
                Span::raw(radio(selected)),
                Span::raw(preset.map(String::from).unwrap_or_default()),
            ]
        }
        Row::CustomStack => {
            let custom = input
                .tech_stack
                .as_ref()
                .filter(|s| s.is_custom())
                .map(|s| s.label().to_string())
                .unwrap_or_default();
            vec![
                Span::raw(radio(!custom.is_empty())),
                label("Custom Stack"),
                Span::raw(field_value(app, EditTarget::CustomStack, custom)),
            ]
        }
        Row::Requirements => vec![
            label("Requirements"),
            Span::raw(field_value(
                app,
                EditTarget::Requirements,
                input.requirements.clone(),
            )),
        ],
        Row::AddDocument => {
            let text = if app.editing == Some(EditTarget::AddDocument) {
                editing_text(&app.buffer)
            } else {
                "enter a file path".to_string()
            };
            vec![label("Upload document"), Span::styled(text, palette.muted())]
        }
        Row::Document(index) => {
            let name = input
                .documents
                .get(index)
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            vec![
                Span::raw(format!("  📄 {name}")),
                Span::styled("  (Enter removes)", palette.muted()),
            ]
        }
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let summary = app.wizard.input().summary();
    let line = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name}: "), palette.muted()),
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        line("Project Type", summary.project_type),
        line("Complexity", summary.complexity),
        line("Duration", summary.duration),
        line("Team Size", summary.team_size),
        line("Features", summary.features),
        Line::raw(""),
        Line::styled(
            "Summary updates automatically as you modify your project.",
            palette.muted(),
        ),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Live Summary ")
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    frame.render_widget(card, area);
}

fn draw_results(frame: &mut Frame, area: Rect, result: &EstimateResult, palette: &Palette) {
    let columns =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);
    let left = Layout::vertical([
        Constraint::Length(6), // Total cost
        Constraint::Min(7),    // Breakdown
    ])
    .split(columns[0]);
    let right = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let risk_color = palette.risk(result.risk_score);
    let cost = Paragraph::new(vec![
        Line::styled(
            format!("₹{}", format_amount(result.total_cost)),
            palette.header(),
        ),
        Line::from(vec![
            Span::styled("AI-generated confidence score: ", palette.muted()),
            Span::styled(
                format!("{}%", result.confidence()),
                Style::default().fg(risk_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Risk score: ", palette.muted()),
            Span::styled(
                format!("{}/100", result.risk_score),
                Style::default().fg(risk_color),
            ),
            Span::styled("   Timeline: ", palette.muted()),
            Span::raw(format!("{} weeks", result.timeline)),
        ]),
    ])
    .block(
        Block::default()
            .title(" Estimated Total Cost ")
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );
    frame.render_widget(cost, left[0]);

    let rows: Vec<TableRow> = result
        .breakdown
        .rows()
        .iter()
        .map(|(name, amount)| {
            TableRow::new(vec![(*name).to_string(), format!("₹{}", format_amount(*amount))])
        })
        .collect();
    let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];
    let table = Table::new(rows, widths)
        .header(TableRow::new(vec!["Category", "Amount"]).style(palette.header()))
        .block(
            Block::default()
                .title(" Cost Breakdown ")
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(table, left[1]);

    let insights: Vec<ListItem> = result
        .ai_insights
        .iter()
        .map(|i| ListItem::new(Line::raw(format!("• {i}"))))
        .collect();
    frame.render_widget(
        List::new(insights).block(
            Block::default()
                .title(" AI Insights ")
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        ),
        right[0],
    );

    let team: Vec<ListItem> = result
        .team_structure
        .iter()
        .map(|role| ListItem::new(Line::raw(format!("👤 {role}"))))
        .collect();
    frame.render_widget(
        List::new(team).block(
            Block::default()
                .title(format!(" Team Structure ({}) ", result.team_structure.len()))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        ),
        right[1],
    );
}
