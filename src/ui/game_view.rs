use crate::game::{Cell, GameSession, GameStatus, Seat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::One => Color::Red,
        Seat::Two => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Score
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_score(frame, session, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let current = session.current_player();
    let color = seat_color(session.current_seat());

    let status = match session.status() {
        GameStatus::InProgress => format!("{}'s turn", current.name),
        GameStatus::WonBy(seat) => format!("Player {} won", session.player(seat).name),
        GameStatus::Drawn => "It is a draw".to_string(),
        GameStatus::Aborted => "Session aborted".to_string(),
    };
    let title = format!(
        "{} VS {}  |  Game #{} of {}",
        session.player(Seat::One).name,
        session.player(Seat::Two).name,
        session.game_number(),
        session.games_total(),
    );

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &GameSession, selected_column: usize, area: Rect) {
    let board = session.board();
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..cols {
        if col == selected_column {
            col_line.push(Span::styled(
                format!("{} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!("{} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    // Board rows, framed the classic way: ║o║*║ ║...
    for row in 0..board.rows() {
        let mut row_spans = Vec::new();
        for col in 0..cols {
            row_spans.push(Span::raw("║"));
            row_spans.push(match board.get(row, col) {
                Cell::Empty => Span::raw(" "),
                Cell::One => Span::styled(
                    session.player(Seat::One).symbol.to_string(),
                    Style::default().fg(seat_color(Seat::One)),
                ),
                Cell::Two => Span::styled(
                    session.player(Seat::Two).symbol.to_string(),
                    Style::default().fg(seat_color(Seat::Two)),
                ),
            });
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border: ╚═╩═...═╝
    let bottom = format!("╚{}═╝", "═╩".repeat(cols.saturating_sub(1)));
    lines.push(Line::from(bottom));

    // Selection indicator under the board
    let mut indicator = vec![Span::raw(" ")];
    for col in 0..cols {
        if col == selected_column {
            indicator.push(Span::styled("▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("  "));
        }
    }
    lines.push(Line::from(indicator));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, session: &GameSession, area: Rect) {
    let score = session.score();
    let line = Line::from(vec![
        Span::styled(
            format!("{}: {}", session.player(Seat::One).name, score.one),
            Style::default()
                .fg(seat_color(Seat::One))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: {}", session.player(Seat::Two).name, score.two),
            Style::default()
                .fg(seat_color(Seat::Two))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  N: Next game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
