use super::*;
use crate::board::{Board, Player};
use crate::evaluate::basic_evaluation;
use crate::mancala_position;
use crate::rules::{self, GameResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plain minimax with the same turn and leaf conventions as the searcher, no pruning.
fn plain_minimax(board: &Board, depth: u8, maximizing: bool, root: Player, nodes: &mut usize) -> f64 {
    *nodes += 1;
    let mut probe = board.clone();
    match rules::get_game_result(&mut probe) {
        GameResult::Winner(winner) if winner == root => return f64::INFINITY,
        GameResult::Winner(_) => return f64::NEG_INFINITY,
        GameResult::Draw => return 0.0,
        GameResult::InProgress => {}
    }

    let candidates = rules::legal_moves(board);
    if depth == 0 || candidates.is_empty() {
        return basic_evaluation(board, board.turn());
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for &pit in candidates.iter() {
        let mut child = board.clone();
        let outcome = rules::make_move(&mut child, pit);
        if !outcome.extra_turn {
            child.switch_player();
        }
        let child_maximizing = if outcome.extra_turn {
            maximizing
        } else {
            !maximizing
        };
        let score = plain_minimax(&child, depth - 1, child_maximizing, root, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

fn plain_best_move(board: &Board, depth: u8) -> (usize, f64, usize) {
    let root = board.turn();
    let candidates = rules::legal_moves(board);
    let mut nodes = 0;
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;

    for &pit in candidates.iter() {
        let mut child = board.clone();
        let outcome = rules::make_move(&mut child, pit);
        if !outcome.extra_turn {
            child.switch_player();
        }
        let score = plain_minimax(&child, depth - 1, outcome.extra_turn, root, &mut nodes);
        if score > best_score {
            best_score = score;
            best = Some(pit);
        }
    }

    (best.unwrap_or(candidates[0]), best_score, nodes)
}

/// Plays `plies` random legal moves from the opening, stopping early if the game ends.
fn random_position(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::starting_position();
    for _ in 0..plies {
        if rules::get_game_result(&mut board.clone()).is_over() {
            break;
        }
        let moves = rules::legal_moves(&board);
        let pit = *moves.choose(rng).unwrap();
        let outcome = rules::make_move(&mut board, pit);
        if !outcome.extra_turn {
            board.switch_player();
        }
    }
    board
}

#[test]
fn test_finds_winning_capture_at_depth_one() {
    let board = mancala_position! {
        one: [6, 0, 0, 0, 1, 0],
        two: [2, 0, 0, 0, 0, 0],
        stores: [18, 21],
    };
    println!("Testing board:\n{}", board);

    let mut searcher = AlphaBetaSearcher::new(1, EvaluationFunction::default());
    let result = searcher.search(&board).unwrap();

    // pit 4 captures the last stones on player two's side and the sweep wins the game
    assert_eq!(result.best_move, 4);
    assert_eq!(result.score, f64::INFINITY);
    assert_eq!(searcher.last_score(), Some(f64::INFINITY));
}

#[test]
fn test_finds_winning_capture_for_player_two() {
    let board = mancala_position! {
        one: [2, 0, 0, 0, 0, 0],
        two: [6, 0, 0, 0, 1, 0],
        stores: [21, 18],
        turn: Player::Two,
    };

    let mut searcher = AlphaBetaSearcher::new(1, EvaluationFunction::Basic);
    let result = searcher.search(&board).unwrap();

    assert_eq!(result.best_move, 4);
    assert_eq!(result.score, f64::INFINITY);
}

#[test]
fn test_falls_back_to_first_legal_move_when_nothing_beats_negative_infinity() {
    let board = mancala_position! {
        one: [0, 4, 4, 4, 4, 4],
        two: [4, 4, 4, 4, 4, 4],
        stores: [4, 0],
    };
    let hopeless = |_: &Board, _: Player| f64::NEG_INFINITY;

    let mut searcher = AlphaBetaSearcher::new(1, hopeless);
    let result = searcher.search(&board).unwrap();

    assert_eq!(result.best_move, 1);
    assert_eq!(result.score, f64::NEG_INFINITY);
}

#[test]
fn test_ties_go_to_lowest_pit() {
    let board = Board::starting_position();
    let flat = |_: &Board, _: Player| 0.0;

    let mut searcher = AlphaBetaSearcher::new(2, flat);
    assert_eq!(searcher.get_best_move(&board), Ok(0));
}

#[test]
fn test_depth_one_from_opening_visits_each_root_move_once() {
    let board = Board::starting_position();
    let mut searcher = AlphaBetaSearcher::new(1, EvaluationFunction::default());

    let result = searcher.search(&board).unwrap();
    assert_eq!(result.nodes_evaluated, 6);
    assert_eq!(searcher.nodes_evaluated(), 6);
    assert_eq!(result.depth, 1);
    assert!(searcher.last_search_duration().is_some());
}

#[test]
fn test_zero_depth_is_rejected() {
    let board = Board::starting_position();
    let mut searcher = AlphaBetaSearcher::new(0, EvaluationFunction::default());
    assert_eq!(searcher.search(&board), Err(SearchError::DepthTooLow));
}

#[test]
fn test_empty_side_has_no_moves_to_search() {
    let board = mancala_position! {
        one: [0, 0, 0, 0, 0, 0],
        two: [4, 4, 4, 4, 4, 4],
        stores: [24, 0],
    };
    let mut searcher = AlphaBetaSearcher::new(3, EvaluationFunction::default());
    assert_eq!(searcher.search(&board), Err(SearchError::NoAvailableMoves));
}

#[test]
fn test_search_leaves_the_board_untouched() {
    let board = mancala_position! {
        one: [3, 0, 7, 1, 2, 5],
        two: [4, 4, 0, 6, 1, 2],
        stores: [6, 7],
    };
    let before = board.clone();

    let mut searcher = AlphaBetaSearcher::new(5, EvaluationFunction::default());
    let legal = rules::legal_moves(&board);
    let best = searcher.get_best_move(&board).unwrap();

    assert_eq!(board, before);
    assert!(legal.contains(&best));
}

#[test]
fn test_search_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    let board = random_position(&mut rng, 8);

    let mut first = AlphaBetaSearcher::new(5, EvaluationFunction::default());
    let mut second = AlphaBetaSearcher::new(5, EvaluationFunction::default());
    assert_eq!(first.search(&board), second.search(&board));
}

#[test]
fn test_pruning_agrees_with_plain_minimax() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..25 {
        let board = random_position(&mut rng, round % 12);
        if rules::legal_moves(&board).is_empty() {
            continue;
        }
        if rules::get_game_result(&mut board.clone()).is_over() {
            continue;
        }

        for depth in 1..=4 {
            let mut searcher = AlphaBetaSearcher::new(depth, EvaluationFunction::Basic);
            let result = searcher.search(&board).unwrap();
            let (expected_move, expected_score, plain_nodes) = plain_best_move(&board, depth);

            assert_eq!(
                result.best_move,
                expected_move,
                "depth {} on {}",
                depth,
                board.to_notation()
            );
            assert_eq!(result.score, expected_score);
            assert!(result.nodes_evaluated <= plain_nodes);
        }
    }
}

#[test]
fn test_search_config_builds_searchers() {
    let config = SearchConfig::default();
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.time_limit, Duration::from_secs(5));
    assert_eq!(config.evaluation, EvaluationFunction::default());

    let searcher = AlphaBetaSearcher::with_config(&SearchConfig::new(
        3,
        Duration::from_millis(100),
        EvaluationFunction::Basic,
    ));
    assert_eq!(searcher.max_depth(), 3);
    assert_eq!(searcher.evaluator(), &EvaluationFunction::Basic);
}

#[test]
fn test_iterative_deepening_matches_fixed_depth_with_ample_time() {
    let board = mancala_position! {
        one: [3, 0, 7, 1, 2, 5],
        two: [4, 4, 0, 6, 1, 2],
        stores: [6, 7],
    };

    let mut fixed = AlphaBetaSearcher::new(3, EvaluationFunction::default());
    let expected = fixed.search(&board).unwrap();

    let mut iterative =
        IterativeDeepeningSearcher::new(3, Duration::from_secs(60), EvaluationFunction::default());
    let result = iterative.search(&board).unwrap();

    assert_eq!(result, expected);
    assert_eq!(iterative.last_search_stats(), (3, expected.nodes_evaluated));
    assert_eq!(iterative.get_best_move(&board), Ok((expected.best_move, 3)));
}

#[test]
fn test_iterative_deepening_always_completes_depth_one() {
    let board = Board::starting_position();
    let mut iterative =
        IterativeDeepeningSearcher::new(10, Duration::from_secs(0), EvaluationFunction::default());

    let result = iterative.search(&board).unwrap();
    assert_eq!(result.depth, 1);
    assert_eq!(iterative.last_search_stats(), (1, 6));
    assert!(rules::is_valid_move(&board, result.best_move));
}

#[test]
fn test_iterative_deepening_errors() {
    let mut iterative =
        IterativeDeepeningSearcher::new(0, Duration::from_secs(1), EvaluationFunction::default());
    assert_eq!(
        iterative.search(&Board::starting_position()),
        Err(SearchError::DepthTooLow)
    );

    let board = mancala_position! {
        one: [4, 4, 4, 4, 4, 4],
        two: [0, 0, 0, 0, 0, 0],
        stores: [0, 24],
        turn: Player::Two,
    };
    let mut iterative = IterativeDeepeningSearcher::with_config(&SearchConfig::default());
    assert_eq!(iterative.search(&board), Err(SearchError::NoAvailableMoves));
}
