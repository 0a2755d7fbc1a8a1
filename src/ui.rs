#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::app::App;
use crate::components::{BACKGROUND, Board, TetrominoType};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// Each cell is 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;
const BOARD_AREA_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2;
const BOARD_AREA_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const INFO_WIDTH: u16 = 22;
pub const MIN_WIDTH: u16 = BOARD_AREA_WIDTH + INFO_WIDTH;
pub const MIN_HEIGHT: u16 = BOARD_AREA_HEIGHT + 2;

/// Score as shown on screen, zero-padded to four digits.
#[must_use]
pub fn format_score(score: u32) -> String {
    format!("{score:04}")
}

pub fn render(f: &mut Frame, app: &App) {
    if f.area().width < MIN_WIDTH || f.area().height < MIN_HEIGHT {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Pitris"));

        let warning_area = centered_rect(60, 40, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    if app.is_game_over() {
        render_game_over(f, app.board().score, f.area());
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_AREA_WIDTH), Constraint::Min(INFO_WIDTH)])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // Title
            Constraint::Length(BOARD_AREA_HEIGHT), // Game board
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Score
            Constraint::Length(5), // Held piece
            Constraint::Min(5),    // Controls
        ])
        .split(main_layout[1]);

    let title = Paragraph::new("PITRIS")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, game_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let score = Paragraph::new(format_score(app.board().score))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, info_layout[1]);

    render_held_piece(f, app.board().held, info_layout[2]);

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→ j/l: Move\n\
        ↑ i: Rotate\n\
        ↓ k: Soft drop\n\
        Space: Hard drop\n\
        Shift/c: Hold\n\
        R: Restart\n\
        Q/Esc: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);
}

fn render_game_board(f: &mut Frame, app: &App, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let empty_symbol = if app.config.display.show_grid { "·" } else { " " };
    for gx in 0..BOARD_WIDTH {
        for gy in 0..BOARD_HEIGHT {
            let (x, y) = cell_origin(inner_area, gx, gy);
            paint_cell(f, inner_area, x, y, empty_symbol, Color::DarkGray, BACKGROUND.into());
        }
    }

    for (position, color) in app.get_render_blocks() {
        let Some((gx, gy)) = Board::grid_index(position.x, position.y) else {
            continue;
        };
        let (x, y) = cell_origin(inner_area, gx, gy);
        paint_cell(f, inner_area, x, y, "█", color.into(), BACKGROUND.into());
    }
}

fn render_held_piece(f: &mut Frame, held: Option<TetrominoType>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Hold");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let Some(kind) = held else {
        return;
    };

    // Offsets span dx -1..=2 and dy -1..=1
    for (dx, dy) in kind.offsets() {
        let x = inner_area.left() + ((dx + 1) as u16) * CELL_WIDTH + 1;
        let y = inner_area.top() + (dy + 1) as u16;
        paint_cell(f, inner_area, x, y, "█", kind.color().into(), Color::Reset);
    }
}

fn render_game_over(f: &mut Frame, score: u32, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format_score(score)),
        Line::from(""),
        Line::from("R: restart  Q: quit"),
    ];

    let game_over = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Pitris"));

    f.render_widget(game_over, centered_rect(60, 40, area));
}

fn cell_origin(inner_area: Rect, gx: usize, gy: usize) -> (u16, u16) {
    (
        inner_area.left() + gx as u16 * CELL_WIDTH,
        inner_area.top() + gy as u16,
    )
}

// Paints a cell two characters wide, clipped to `bounds`
fn paint_cell(f: &mut Frame, bounds: Rect, x: u16, y: u16, symbol: &str, fg: Color, bg: Color) {
    for column in x..x + CELL_WIDTH {
        if column >= bounds.right() || y >= bounds.bottom() {
            continue;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((column, y)) {
            cell.set_symbol(symbol);
            cell.set_fg(fg);
            cell.set_bg(bg);
        }
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
