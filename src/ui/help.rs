use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

fn key_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(action.to_string(), Style::default().fg(Theme::text())),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Keyboard Shortcuts",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section("Moods"));
    lines.push(key_line("←/→", "Cycle through moods"));
    lines.push(key_line("1-9", "Jump straight to a mood"));
    lines.push(Line::from(""));

    lines.push(section("Palettes"));
    lines.push(key_line("g / Space", "Generate a new palette"));
    lines.push(key_line("c", "Copy the current palette"));
    lines.push(Line::from(""));

    lines.push(section("History"));
    lines.push(key_line("↑/↓", "Move through recent palettes"));
    lines.push(key_line("Enter", "Bring a recent palette back"));
    lines.push(Line::from(""));

    lines.push(section("General"));
    lines.push(key_line("?", "Toggle this help screen"));
    lines.push(key_line("q / Esc", "Quit"));

    Text::from(lines)
}
