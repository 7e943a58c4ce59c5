use tictactoe_minimax::{evaluate, GameState, Mark};

fn board(cells: &str, to_move: Mark) -> GameState {
    let mut parsed = [None; 9];
    for (i, ch) in cells.chars().enumerate() {
        parsed[i] = match ch {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            '.' => None,
            other => panic!("bad cell char {:?}", other),
        };
    }
    GameState::from_cells(parsed, to_move)
}

#[test]
fn test_empty_board_is_neutral() {
    assert_eq!(evaluate(&GameState::new()), 0.0);
}

#[test]
fn test_terminal_states_return_exact_utility() {
    let x_win = board("XXX.OO...", Mark::O);
    let o_win = board("OOOXX..X.", Mark::X);
    let draw = board("XOXXOOOXX", Mark::O);

    assert_eq!(evaluate(&x_win), x_win.utility());
    assert_eq!(evaluate(&x_win), 1.0);
    assert_eq!(evaluate(&o_win), o_win.utility());
    assert_eq!(evaluate(&o_win), -1.0);
    assert_eq!(evaluate(&draw), 0.0);
}

#[test]
fn test_center_control() {
    // X in the center: +1 for the cell, +3 for each of the 4 open lines
    // through it (middle row, middle column, both diagonals).
    let state = board("....X....", Mark::O);
    assert_eq!(evaluate(&state), 1.0 + 4.0 * 3.0);

    // Mirrored for O.
    let state = board("....O....", Mark::X);
    assert_eq!(evaluate(&state), -(1.0 + 4.0 * 3.0));
}

#[test]
fn test_corner_control() {
    // X in corner 0: +0.5 for the corner, +3 for each of the 3 open lines
    // through it (top row, left column, main diagonal).
    let state = board("X........", Mark::O);
    assert_eq!(evaluate(&state), 0.5 + 3.0 * 3.0);
}

#[test]
fn test_contested_lines_contribute_nothing() {
    // X at 0, O at 1: the top row holds both marks and scores zero. X keeps
    // the left column and main diagonal (+6), O keeps the middle column
    // (-3), plus X's corner (+0.5).
    let state = board("XO.......", Mark::X);
    assert_eq!(evaluate(&state), 6.0 - 3.0 + 0.5);
}

#[test]
fn test_symmetry_between_sides() {
    // Swapping every mark negates the score.
    let for_x = board("X..OX...O", Mark::O);
    let for_o = board("O..XO...X", Mark::X);

    assert_eq!(evaluate(&for_x), -evaluate(&for_o));
}

#[test]
fn test_evaluation_is_deterministic() {
    let state = board("X.O.X.O..", Mark::X);
    assert_eq!(evaluate(&state), evaluate(&state));
}
