use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::models::App;
use crate::screens::browse::models::BrowseTarget;
use crate::screens::Screen;
use crate::utils::time::format_seconds;

pub fn render_browse_screen(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Screen::Browse.block().title("Video Library");
    block.render(area, buf);

    render_menu(app, buf);
    render_grid(app, buf);
    render_detail(app, buf);
}

fn render_menu(app: &App, buf: &mut Buffer) {
    let browse = &app.browse_state;
    let menu_area = browse.menu_area();
    for (index, category) in app.catalog.categories.iter().enumerate() {
        let rect = browse.menu_rect(index);
        if rect.bottom() > menu_area.bottom() {
            break;
        }
        let focused = browse.navigator.is_focused(&BrowseTarget::MenuRow(index));
        let selected = index == browse.selected_category;

        let mut style = Style::default();
        if selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if focused {
            style = style.bg(Color::Blue).fg(Color::White);
        }

        let marker = if selected { "▶ " } else { "  " };
        Paragraph::new(format!("{}{}", marker, category.name))
            .style(style)
            .render(rect, buf);
    }
}

fn render_grid(app: &App, buf: &mut Buffer) {
    let browse = &app.browse_state;
    let grid = browse.grid_area();
    let videos = app.catalog.videos(browse.selected_category);

    if videos.is_empty() {
        Paragraph::new("No videos in this category")
            .style(Style::default().fg(Color::DarkGray))
            .render(grid, buf);
        return;
    }

    let offset = browse.scroll_offset();
    for (index, video) in videos.iter().enumerate() {
        let rect = browse.tile_rect(index);
        // Skip rows scrolled out of the viewport
        if rect.y < grid.y + offset {
            continue;
        }
        let screen_y = rect.y - offset;
        if screen_y + rect.height > grid.y + grid.height {
            continue;
        }
        let screen_rect = Rect::new(rect.x, screen_y, rect.width, rect.height);

        let focused = browse.navigator.is_focused(&BrowseTarget::Tile(index));
        let border_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let tile_block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = tile_block.inner(screen_rect);
        tile_block.render(screen_rect, buf);

        let title_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let lines = vec![
            Line::styled(video.title.clone(), title_style),
            Line::styled(video.description.clone(), Style::default().fg(Color::Gray)),
            Line::styled(
                format_seconds(video.duration_secs),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

fn render_detail(app: &App, buf: &mut Buffer) {
    let browse = &app.browse_state;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(browse.detail_area());
    block.render(browse.detail_area(), buf);

    let lines = match browse.navigator.focused() {
        Some(BrowseTarget::Tile(index)) => {
            match app.catalog.video(browse.selected_category, *index) {
                Some(video) => vec![
                    Line::styled(
                        video.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::from(format!(
                        "{} · {}",
                        video.description,
                        format_seconds(video.duration_secs)
                    )),
                    Line::styled(video.url.clone(), Style::default().fg(Color::DarkGray)),
                ],
                None => vec![],
            }
        }
        Some(BrowseTarget::MenuRow(index)) => match app.catalog.category(*index) {
            Some(category) => vec![
                Line::styled(
                    category.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::from(format!("{} videos", category.videos.len())),
                Line::styled(
                    "Press Enter to show this category, → to enter the grid".to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            None => vec![],
        },
        None => vec![Line::from("Nothing focused")],
    };

    Paragraph::new(lines).render(inner, buf);
}
