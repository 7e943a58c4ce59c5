use tictactoe_minimax::{evaluate, GameState, Mark, Minimax, SearchStats, Strategy};

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

fn value_of(state: &GameState, depth_limit: Option<usize>) -> f64 {
    let mut stats = SearchStats::new(depth_limit);
    Minimax
        .search(state, depth_limit, 0, &mut stats)
        .unwrap()
        .value
}

#[test]
fn test_empty_board_is_a_draw_under_optimal_play() {
    // The canonical solved-game result: perfect play draws.
    assert_eq!(value_of(&GameState::new(), None), 0.0);
}

#[test]
fn test_takes_immediate_win() {
    // X completes the top row at cell 2. The win is found exhaustively and
    // at any limit deep enough for the heuristic frontier to see O's
    // counterplay (at depth 1 the heuristic's open-line terms can outscore
    // the +1 utility of the win itself).
    let state = board("XX.OO....", Mark::X);

    for depth_limit in [None, Some(2), Some(3), Some(9)] {
        assert_eq!(
            Minimax.decide(&state, depth_limit).unwrap(),
            2,
            "minimax should complete the top row at depth limit {:?}",
            depth_limit
        );
    }
    assert_eq!(value_of(&state, None), 1.0);
}

#[test]
fn test_blocks_immediate_loss() {
    // O threatens the middle row at cell 5; X cannot win outright and must
    // block.
    let state = board("X..OO..X.", Mark::X);
    assert_eq!(Minimax.decide(&state, None).unwrap(), 5);
}

#[test]
fn test_minimizing_side_takes_its_win() {
    // O to move completes the left column at cell 6.
    let state = board("OX.OXX...", Mark::O);

    assert_eq!(Minimax.decide(&state, None).unwrap(), 6);
    assert_eq!(value_of(&state, None), -1.0);
}

#[test]
fn test_tie_break_keeps_lowest_index() {
    // X has two immediate wins: cell 2 (top row) and cell 3 (left column).
    // Both are worth +1; ascending action order keeps the first.
    let state = board("XX..OOX..", Mark::X);

    assert_eq!(
        Minimax.decide(&state, None).unwrap(),
        2,
        "equal-valued wins should break toward the lower index"
    );
}

#[test]
fn test_depth_zero_is_one_ply_lookahead() {
    // With a limit of 0 the root still expands its children, scores each
    // with the heuristic, and recurses no further. On the empty board the
    // center scores highest (+1 center, four open lines).
    let state = GameState::new();
    let (action, stats) = Minimax.decide_with_stats(&state, Some(0)).unwrap();

    let best_by_eval = state
        .legal_actions()
        .into_iter()
        .max_by(|&a, &b| {
            let ea = evaluate(&state.successor(a).unwrap());
            let eb = evaluate(&state.successor(b).unwrap());
            ea.partial_cmp(&eb).unwrap()
        })
        .unwrap();

    assert_eq!(action, 4, "center maximizes the one-ply heuristic");
    assert_eq!(action, best_by_eval);
    assert_eq!(
        stats.nodes, 10,
        "root plus nine children, nothing deeper"
    );
}

#[test]
fn test_self_play_draws_in_nine_moves() {
    let mut state = GameState::new();
    let mut moves = 0;

    while !state.is_terminal() {
        let action = Minimax.decide(&state, None).unwrap();
        state = state.successor(action).unwrap();
        moves += 1;
    }

    assert_eq!(state.winner(), None, "optimal self-play never produces a winner");
    assert_eq!(moves, 9, "optimal self-play fills the board");
}

#[test]
fn test_node_count_shrinks_as_the_board_fills() {
    let empty = GameState::new();
    let later = board("X.O.X....", Mark::O);

    let (_, from_empty) = Minimax.decide_with_stats(&empty, None).unwrap();
    let (_, from_later) = Minimax.decide_with_stats(&later, None).unwrap();

    assert!(
        from_empty.nodes > from_later.nodes,
        "a smaller subtree should visit fewer nodes ({} vs {})",
        from_empty.nodes,
        from_later.nodes
    );
}
