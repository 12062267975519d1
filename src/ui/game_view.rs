use crate::game::{Board, Cell, GameStatus, Player, PlayerId, TokenColor, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + side panel
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(body[1]);

    render_header(frame, app, chunks[0]);
    render_board(frame, app, body[0]);
    render_players(frame, app.engine().players(), side[0]);
    render_log(frame, app.log(), side[1]);
    render_controls(frame, chunks[2]);
}

/// Terminal color for a player's tokens.
pub fn token_style(color: TokenColor) -> Color {
    match color {
        TokenColor::Red => Color::Red,
        TokenColor::Yellow => Color::Yellow,
        TokenColor::Blue => Color::Blue,
        TokenColor::Black => Color::DarkGray,
        TokenColor::Green => Color::Green,
        TokenColor::Magenta => Color::Magenta,
        TokenColor::Cyan => Color::Cyan,
        TokenColor::White => Color::White,
    }
}

fn player_color(players: &[Player], id: PlayerId) -> Color {
    players
        .get(id.index())
        .map(|p| token_style(p.color()))
        .unwrap_or(Color::Gray)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let engine = app.engine();
    let (status, color) = match (engine.status(), engine.active_player()) {
        (GameStatus::NotStarted, _) => ("Press 's' to start".to_string(), Color::Gray),
        (GameStatus::InProgress, Some(player)) => (
            format!("Current Player: {}", player.name()),
            token_style(player.color()),
        ),
        (GameStatus::InProgress, None) => ("Players not configured".to_string(), Color::Gray),
        (GameStatus::Won(id), _) => {
            let name = engine.player(id).map(Player::name).unwrap_or("?");
            (
                format!("Game Over  |  {} wins", name),
                player_color(engine.players(), id),
            )
        }
        (GameStatus::Draw, _) => ("Game Over  |  Draw".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let board: &Board = app.engine().board();
    let players = app.engine().players();
    let selected_column = app.selected_column();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Occupied(id) => (" ● ", player_color(players, id)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_players(frame: &mut Frame, players: &[Player], area: Rect) {
    let lines: Vec<Line> = players
        .iter()
        .map(|player| {
            let marker = if player.is_active() { "▶ " } else { "  " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    "●",
                    Style::default().fg(token_style(player.color())),
                ),
                Span::raw(format!(" {} ({:?})", player.name(), player.kind())),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(widget, area);
}

fn render_log(frame: &mut Frame, log: &[String], area: Rect) {
    // Show the most recent lines that fit inside the borders.
    let visible = area.height.saturating_sub(2) as usize;
    let start = log.len().saturating_sub(visible);
    let items: Vec<ListItem> = log[start..]
        .iter()
        .map(|line| ListItem::new(line.as_str()))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Events"));
    frame.render_widget(list, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  S: Start  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("H: Human vs Human  |  C: Human vs Computer");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
