use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;

use super::helpers::hex_to_color;
use super::theme::Theme;

const SWATCH: &str = "██████████";

/// The current palette: one swatch row per color plus a copy preview.
pub fn build_palette_lines(app: &App) -> Vec<Line<'static>> {
    let mood_name = app
        .registry
        .get(&app.current_mood)
        .map(|mood| mood.name.clone())
        .unwrap_or_else(|_| app.current_mood.clone());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  Your {mood_name} palette"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for color in &app.current_colors {
        let swatch_style = match hex_to_color(color) {
            Some(rgb) => Style::default().fg(rgb),
            None => Style::default().fg(Theme::dim()),
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(SWATCH, swatch_style),
            Span::raw("  "),
            Span::styled(color.clone(), Style::default().fg(Theme::text())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", app.current_colors.join(" • ")),
        Style::default().fg(Theme::dim()),
    )));
    lines
}
