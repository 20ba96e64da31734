//! Board and status rendering.

use crate::app::App;
use noughts_core::{Mark, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the whole frame: title, board, status line.
pub fn draw(f: &mut Frame, app: &App) {
    let [title_area, board_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(11),
        Constraint::Length(2),
    ])
    .areas(f.area());

    let title = Paragraph::new("noughts")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, title_area);

    render_board(f, board_area, app);

    let status = Paragraph::new(app.status_message())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, status_area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let winning = board.winning_line().ok().flatten();

    let board_area = center_rect(area, 23, 11);
    let [top, sep_a, middle, sep_b, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(board_area);

    for (row_area, start) in [(top, 0), (middle, 3), (bottom, 6)] {
        render_row(f, row_area, app, start, winning);
    }
    render_separator(f, sep_a);
    render_separator(f, sep_b);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, start: usize, winning: Option<[usize; 3]>) {
    let [left, sep_a, center, sep_b, right] = Layout::horizontal([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(7),
    ])
    .areas(area);

    for (cell_area, offset) in [(left, 0), (center, 1), (right, 2)] {
        render_square(f, cell_area, app, start + offset, winning);
    }
    render_vertical_sep(f, sep_a);
    render_vertical_sep(f, sep_b);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, index: usize, winning: Option<[usize; 3]>) {
    let square = app.game().board().get(index).unwrap_or(Square::Empty);
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning.is_some_and(|line| line.contains(&index)) {
        style = style.fg(Color::Black).bg(Color::Yellow);
    }
    let cell = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(cell, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
