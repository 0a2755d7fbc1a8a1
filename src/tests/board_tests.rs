#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{ActivePiece, Board, Cell, Position, TetrominoType};
    use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::tests::test_utils::{STACK, fill_cells, fill_rows};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.score, 0);
        assert_eq!(board.held, None);
        assert!(!board.game_over);
    }

    #[test]
    fn test_grid_translation() {
        assert_eq!(Board::grid_index(7, 3), Some((0, 0)));
        assert_eq!(Board::grid_index(16, 22), Some((9, 19)));
        assert_eq!(Board::grid_index(6, 3), None);
        assert_eq!(Board::grid_index(7, 23), None);
        assert_eq!(Board::grid_index(12, 2), None);
        assert_eq!(Board::absolute(9, 19), Position { x: 16, y: 22 });
    }

    #[test]
    fn test_lock_piece_writes_color() {
        let mut board = Board::new();
        let mut piece = ActivePiece::spawn(TetrominoType::O);
        piece.hard_drop(&board);
        board.lock_piece(&piece);

        assert_eq!(board.occupied_count(), 4);
        for block in piece.blocks() {
            assert_eq!(board.cell_at(block.x, block.y), Cell::Filled(piece.color));
        }
        assert_eq!(board.cells[5][19], Cell::Filled(TetrominoType::O.color()));
    }

    #[test]
    fn test_lock_drops_cells_above_the_board() {
        let mut board = Board::new();
        let mut piece = ActivePiece::spawn(TetrominoType::I);
        // Vertical with cells at y 2..=5
        piece.rotate();
        piece.rotate();
        piece.rotate();
        assert_eq!(piece.blocks().map(|b| b.y).min(), Some(2));

        board.lock_piece(&piece);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_clear_scoring_by_row_count() {
        for (rows, points) in [(1, 100), (2, 200), (3, 300), (4, 800)] {
            let mut board = Board::new();
            fill_rows(&mut board, BOARD_HEIGHT - rows..BOARD_HEIGHT);
            let before = board.occupied_count();

            let cleared = board.clear_rows();

            assert_eq!(cleared as usize, rows);
            assert_eq!(board.score, points, "{rows} rows");
            assert_eq!(before - board.occupied_count(), BOARD_WIDTH * rows);
        }
    }

    #[test]
    fn test_tetris_empties_bottom_rows() {
        let mut board = Board::new();
        fill_rows(&mut board, 16..20);

        board.clear_rows();

        assert_eq!(board.score, 800);
        for y in 16..20 {
            for x in 0..BOARD_WIDTH {
                assert_eq!(board.cells[x][y], Cell::Empty);
                assert_eq!(board.cells[x][y].color(), crate::components::BACKGROUND);
            }
        }
    }

    #[test]
    fn test_rows_above_slide_down() {
        let mut board = Board::new();
        fill_rows(&mut board, [17, 19]);
        fill_cells(&mut board, &[(0, 18), (4, 16)]);

        assert_eq!(board.clear_rows(), 2);

        // Old row 18 lands on 19, old row 16 on 18
        assert_eq!(board.cells[0][19], Cell::Filled(STACK));
        assert_eq!(board.cells[4][18], Cell::Filled(STACK));
        assert_eq!(board.occupied_count(), 2);
        assert!((0..BOARD_HEIGHT).all(|y| !board.is_row_full(y)));
    }

    #[test]
    fn test_top_row_is_not_reset_after_shift() {
        let mut board = Board::new();
        fill_rows(&mut board, [19]);
        fill_cells(&mut board, &[(3, 0)]);

        board.clear_rows();

        // Row 0 keeps its content and row 1 receives a copy of it
        assert_eq!(board.cells[3][0], Cell::Filled(STACK));
        assert_eq!(board.cells[3][1], Cell::Filled(STACK));
    }

    #[test]
    fn test_full_top_row_is_cleared() {
        let mut board = Board::new();
        fill_rows(&mut board, [0, 19]);

        assert_eq!(board.clear_rows(), 2);
        assert_eq!(board.score, 200);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_no_full_rows_scores_nothing() {
        let mut board = Board::new();
        fill_cells(&mut board, &[(0, 19), (1, 19)]);
        assert_eq!(board.clear_rows(), 0);
        assert_eq!(board.score, 0);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_score_accumulates() {
        let mut board = Board::new();
        fill_rows(&mut board, [19]);
        board.clear_rows();
        fill_rows(&mut board, 16..20);
        board.clear_rows();
        assert_eq!(board.score, 900);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        fill_rows(&mut board, [10]);
        board.score = 300;
        board.held = Some(TetrominoType::J);
        board.game_over = true;

        board.reset();
        assert_eq!(board, Board::new());
    }
}
