use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, LineGauge, Paragraph, Widget, Wrap},
};
use strum::IntoEnumIterator;

use crate::models::App;
use crate::players::PlayState;
use crate::screens::player::models::{ControlAction, PlayerScreenState};
use crate::screens::Screen;
use crate::utils::time::format_seconds;

pub fn render_player_screen(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(player) = &app.player_state else {
        Screen::Player.block().title("Player").render(area, buf);
        return;
    };

    let title = app
        .catalog
        .video(player.category, player.item)
        .map(|video| video.title.clone())
        .unwrap_or_else(|| "Player".to_string());
    Screen::Player.block().title(title).render(area, buf);

    render_video_panel(app, player, buf);
    render_progress(player, buf);
    render_buffer(player, buf);
    render_controls(player, buf);
}

fn render_video_panel(app: &App, player: &PlayerScreenState, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(player.video_area());
    block.render(player.video_area(), buf);

    let mut lines = Vec::new();
    if app.embedded {
        lines.push(Line::styled(
            "Video plays on the host surface",
            Style::default().fg(Color::DarkGray),
        ));
    } else if let Some(video) = app.catalog.video(player.category, player.item) {
        lines.push(Line::styled(
            video.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            video.description.clone(),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::styled(
        player.play_state.to_string(),
        match player.play_state {
            PlayState::Playing => Style::default().fg(Color::Green),
            PlayState::Paused => Style::default().fg(Color::Yellow),
            PlayState::Stopped => Style::default().fg(Color::DarkGray),
        },
    ));

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_progress(player: &PlayerScreenState, buf: &mut Buffer) {
    let label = format!(
        "{} / {}",
        format_seconds(player.elapsed),
        format_seconds(player.duration)
    );
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .percent(player.progress_percent() as u16)
        .label(label)
        .render(player.progress_area(), buf);
}

fn render_buffer(player: &PlayerScreenState, buf: &mut Buffer) {
    LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .ratio(f64::from(player.loaded_percent) / 100.0)
        .label(format!("Buffered {}%", player.loaded_percent))
        .render(player.buffer_area(), buf);
}

fn render_controls(player: &PlayerScreenState, buf: &mut Buffer) {
    for (index, action) in ControlAction::iter().enumerate() {
        let rect = player.button_rect(index);
        let focused = player.navigator.is_focused(&action);
        let border_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = button.inner(rect);
        button.render(rect, buf);

        // The play button doubles as pause while something is playing
        let label = match action {
            ControlAction::Play if player.play_state == PlayState::Playing => "Pause".to_string(),
            other => other.to_string(),
        };
        Paragraph::new(label).centered().render(inner, buf);
    }
}
