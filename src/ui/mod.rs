mod help;
mod helpers;
mod history;
mod moods;
mod swatches;
mod theme;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Board => (" Palette ", build_board_text(app)),
        AppView::Help => (" Help ", help::build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "mood palettes",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);
}

fn build_board_text(app: &App) -> Text<'static> {
    let mut lines = moods::build_moods_lines(app);
    lines.push(Line::from(""));
    lines.extend(swatches::build_palette_lines(app));
    lines.push(Line::from(""));
    lines.extend(history::build_history_lines(app));
    Text::from(lines)
}

fn footer_line(app: &App) -> Line<'static> {
    if app.is_generating() {
        // Animated indicator, stepped by the event-loop tick.
        let animation_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        let anim_index =
            (Local::now().timestamp_millis() / 100) as usize % animation_chars.len();
        let indicator = animation_chars[anim_index];

        return Line::from(Span::styled(
            format!("{indicator} Mixing new colors..."),
            Style::default()
                .fg(Theme::active())
                .add_modifier(Modifier::BOLD),
        ));
    }

    match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Theme::text()),
        )),
        None => Line::from(Span::styled(
            "● Every palette is one of a kind",
            Style::default().fg(Theme::dim()),
        )),
    }
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Board => (
            "←/→: Mood  g/space: New palette  ↑/↓: History  Enter: Recall",
            "c: Copy  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or Esc to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(
            primary.to_string(),
            Style::default().fg(Theme::dim()),
        )),
        Line::from(Span::styled(
            secondary.to_string(),
            Style::default().fg(Theme::dim()),
        )),
    ]
}
