#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{ActivePiece, Board, Cell, Rgb, TetrominoType};
    use crate::tests::test_utils::create_test_app;
    use crate::ui::{self, MIN_HEIGHT, MIN_WIDTH, centered_rect, format_score};
    use ratatui::{backend::TestBackend, layout::Rect, prelude::*};
    use std::time::Instant;

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0000");
        assert_eq!(format_score(42), "0042");
        assert_eq!(format_score(800), "0800");
        assert_eq!(format_score(12_345), "12345");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 40, area);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 40);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 30);
    }

    #[test]
    fn test_render_playing_screen() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        app.world.resource_mut::<Board>().score = 42;

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("PITRIS"));
        assert!(text.contains("0042"));
        assert!(text.contains("Hold"));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_render_locked_cell_in_color() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        app.world.resource_mut::<Board>().cells[0][19] = Cell::Filled(Rgb(1, 2, 3));

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        // Title takes 2 rows, then the board border
        let buffer = terminal.backend().buffer();
        for x in [1, 2] {
            let cell = &buffer[(x, 22)];
            assert_eq!(cell.symbol(), "█");
            assert_eq!(cell.fg, Color::Rgb(1, 2, 3));
        }
        let empty = &buffer[(3, 22)];
        assert_eq!(empty.bg, Color::Rgb(40, 40, 40));
    }

    #[test]
    fn test_render_active_piece() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        app.world.insert_resource(ActivePiece::spawn(TetrominoType::O));

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        // O covers absolute (12, 4), grid (5, 1): screen column 1 + 5 * 2, row 3 + 1
        let cell = &terminal.backend().buffer()[(11, 4)];
        assert_eq!(cell.symbol(), "█");
        assert_eq!(cell.fg, Color::from(TetrominoType::O.color()));
    }

    #[test]
    fn test_render_held_piece() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        app.world.resource_mut::<Board>().held = Some(TetrominoType::I);

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let held_color = Color::from(TetrominoType::I.color());
        let painted = buffer
            .content
            .iter()
            .filter(|cell| cell.symbol() == "█" && cell.fg == held_color)
            .count();
        // Four cells, two characters each, unless the active piece is also an I
        assert!(painted >= 8);
    }

    #[test]
    fn test_render_grid_dots() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        app.config.display.show_grid = true;

        terminal.draw(|f| ui::render(f, &app)).unwrap();
        assert_eq!(terminal.backend().buffer()[(1, 22)].symbol(), "·");
    }

    #[test]
    fn test_render_game_over_screen() {
        let mut terminal = create_test_terminal(60, 30);
        let mut app = create_test_app(Instant::now());
        {
            let mut board = app.world.resource_mut::<Board>();
            board.score = 800;
            board.game_over = true;
        }

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Game Over!"));
        assert!(text.contains("0800"));
        // The board view is replaced
        assert!(!text.contains("PITRIS"));
        assert!(!text.contains("INFO"));
    }

    #[test]
    fn test_render_with_small_terminal() {
        let mut terminal = create_test_terminal(MIN_WIDTH - 1, MIN_HEIGHT);
        let app = create_test_app(Instant::now());

        terminal.draw(|f| ui::render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("small"));
        assert!(!text.contains("PITRIS"));
    }
}
