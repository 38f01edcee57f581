//! UI rendering for the lane-dodging track.
//!
//! The scene is a pure projection of session state: it reads the manager,
//! paints one frame, and mutates nothing, so drawing the same state twice
//! produces the same frame.

use crate::game::{SessionManager, Vehicle, LANE_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full track scene: play area, status bar, and info panel.
pub fn render_track(frame: &mut Frame, area: Rect, manager: &SessionManager) {
    // Crash overlay takes priority
    if manager.session().is_over() {
        render_game_over(frame, area, manager);
        return;
    }

    frame.render_widget(Clear, area);

    // Outer border
    let block = Block::default()
        .title(" Lane Dodge ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: track (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Left side: play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], manager);
    render_status_bar(frame, v_chunks[1], manager);
    render_info_panel(frame, h_chunks[1], manager);
}

/// Paint the lane dividers and every vehicle into the play area.
fn render_play_area(frame: &mut Frame, area: Rect, manager: &SessionManager) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let session = manager.session();
    let track = &session.track;

    // Scale game coordinates to display cells
    let x_scale = width as f64 / track.width;
    let y_scale = height as f64 / track.height;

    // Dividers sit on the interior lane boundaries
    let lane_width = track.width / LANE_COUNT as f64;
    let divider_cols: Vec<usize> = (1..LANE_COUNT)
        .map(|i| (i as f64 * lane_width * x_scale).round() as usize)
        .collect();

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        let game_y = display_row as f64 / y_scale;
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            let game_x = display_col as f64 / x_scale;

            // Obstacles paint over the player so the crash frame shows the
            // car that caused it
            if let Some(obstacle) = session
                .obstacles
                .iter()
                .find(|o| covers(o, game_x, game_y))
            {
                spans.push(vehicle_span(obstacle));
            } else if covers(&session.player, game_x, game_y) {
                spans.push(vehicle_span(&session.player));
            } else if divider_cols.contains(&display_col) {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// True when the vehicle's rectangle covers the given game coordinate.
/// Vehicles above the track (negative y) simply produce no covered cells.
fn covers(vehicle: &Vehicle, game_x: f64, game_y: f64) -> bool {
    game_x >= vehicle.x
        && game_x < vehicle.x + vehicle.width
        && game_y >= vehicle.y
        && game_y < vehicle.y + vehicle.height
}

fn vehicle_span(vehicle: &Vehicle) -> Span<'static> {
    let (r, g, b) = vehicle.color;
    Span::styled("█", Style::default().fg(Color::Rgb(r, g, b)))
}

/// Render the status bar (2 lines: score + controls).
fn render_status_bar(frame: &mut Frame, area: Rect, manager: &SessionManager) {
    if area.height < 1 {
        return;
    }

    // Line 1: Score (centered)
    let status = Paragraph::new(format!("Score: {}", manager.session().score))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
    if area.height >= 2 {
        let controls = [("[←/A]", "Left"), ("[→/D]", "Right"), ("[Q/Esc]", "Quit")];
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, manager: &SessionManager) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let session = manager.session();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", manager.high_score()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", session.speed),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Cars:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.obstacles.len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Full-area crash overlay with the final score and restart hint.
fn render_game_over(frame: &mut Frame, area: Rect, manager: &SessionManager) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let best = if manager.is_new_record() {
        Span::styled(
            format!("New high score: {}!", manager.high_score()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Best: {}", manager.high_score()),
            Style::default().fg(Color::Cyan),
        )
    };

    let content_height: u16 = 7;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "CRASHED!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", manager.session().score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(best),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}
