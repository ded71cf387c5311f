use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;

use super::theme::Theme;

/// The mood selector row plus the active mood's description.
pub fn build_moods_lines(app: &App) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (index, mood) in app.registry.moods().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = mood.id == app.current_mood;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(
            format!(" {} {} {} ", index + 1, mood.icon, mood.name),
            style,
        ));
    }

    let description = app
        .registry
        .get(&app.current_mood)
        .map(|mood| mood.description.clone())
        .unwrap_or_default();

    vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Theme::dim()),
        )),
    ]
}
