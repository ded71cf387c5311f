use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;

use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;

const MINI_SWATCH: &str = "██";

/// The recent-palettes list: mini swatches, mood and timestamp per entry.
pub fn build_history_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "  Recent palettes",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));

    if app.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No palettes yet. Press g to generate one.",
            Style::default().fg(Theme::dim()),
        )));
        return lines;
    }

    for (index, entry) in app.history.iter().enumerate() {
        let selected = index == app.selected_history_index;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };

        let mut spans = vec![Span::styled(
            if selected { "> " } else { "  " },
            marker_style,
        )];

        let (icon, name) = match app.registry.get(&entry.mood) {
            Ok(mood) => (mood.icon.clone(), mood.name.clone()),
            Err(_) => (" ".to_string(), entry.mood.clone()),
        };
        spans.push(Span::raw(format!("{icon} ")));

        for color in &entry.colors {
            let style = match hex_to_color(color) {
                Some(rgb) => Style::default().fg(rgb),
                None => Style::default().fg(Theme::dim()),
            };
            spans.push(Span::styled(MINI_SWATCH, style));
            spans.push(Span::raw(" "));
        }

        let name_style = if selected {
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        spans.push(Span::styled(format!(" {}", clamp_name(&name, 12)), name_style));
        spans.push(Span::styled(
            entry.created_at.format("  %H:%M:%S").to_string(),
            Style::default().fg(Theme::dim()),
        ));

        lines.push(Line::from(spans));
    }

    lines
}
