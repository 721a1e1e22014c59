//! Command implementations.
//!
//! Each command returns the text to print so the binary stays a thin
//! shell around these functions.

use crate::config::OutputFormat;
use crate::error::PlayError;
use serde::Serialize;
use tic_tac_types::{Board, Game, GameTreeStats, LegalMove, Mark, Outcome, Player, Position, explore};
use tracing::{debug, info, instrument, warn};

/// One move of a played sequence.
#[derive(Debug, Clone, Serialize)]
pub struct PlayedMove {
    /// Who moved.
    pub player: Player,
    /// Where.
    pub position: Position,
    /// The board afterwards.
    pub board: Board,
}

/// Result of playing a sequence of positions.
#[derive(Debug, Clone, Serialize)]
pub struct PlayReport {
    /// Player who moved first.
    pub starting_player: Player,
    /// Every move played, in order.
    pub moves: Vec<PlayedMove>,
    /// Final board.
    pub board: Board,
    /// Player to move next, if the game is open.
    pub to_move: Option<Player>,
    /// Positions still playable.
    pub legal_moves: Vec<Position>,
    /// Outcome, once the game is over.
    pub outcome: Option<Outcome>,
}

/// Plays `positions` in order from a fresh game.
///
/// Each position is looked up in the current game's legal-move map. A
/// position with no entry stops the sequence with an error.
#[instrument(skip(positions), fields(count = positions.len()))]
pub fn play(starting_player: Player, positions: &[Position]) -> Result<PlayReport, PlayError> {
    let mut game = Game::new(starting_player);
    let mut moves = Vec::with_capacity(positions.len());

    for (ply, &position) in positions.iter().enumerate() {
        let Some(mv) = game.legal_moves().get(position) else {
            warn!(ply, %position, "Position not playable");
            return Err(PlayError::new(unplayable_message(&game, ply, position)));
        };
        moves.push(played(mv));
        game = mv.play();
        debug!(ply, %position, "Move played");
    }

    info!(moves = moves.len(), over = game.is_over(), "Sequence played");
    Ok(PlayReport {
        starting_player,
        moves,
        board: *game.board(),
        to_move: game.to_move(),
        legal_moves: game.legal_moves().positions().collect(),
        outcome: game.outcome(),
    })
}

fn played(mv: &LegalMove) -> PlayedMove {
    PlayedMove {
        player: mv.mover(),
        position: mv.position(),
        board: *mv.board(),
    }
}

fn unplayable_message(game: &Game, ply: usize, position: Position) -> String {
    if game.is_over() {
        let outcome = game
            .outcome()
            .map_or_else(|| "Game over".to_string(), |o| o.to_string());
        return format!("Move {} ({}) comes after the game ended: {}", ply + 1, position, outcome);
    }
    let open = game
        .legal_moves()
        .positions()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Move {} ({}) is not playable; open positions: {}",
        ply + 1,
        position,
        open
    )
}

/// Formats a play report.
pub fn format_play(report: &PlayReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, mv) in report.moves.iter().enumerate() {
                out.push_str(&format!("{}. {} -> {}\n", i + 1, mv.player, mv.position));
                out.push_str(&mv.board.to_string());
                out.push('\n');
            }
            if report.moves.is_empty() {
                out.push_str(&report.board.to_string());
                out.push('\n');
            }
            match (report.outcome, report.to_move) {
                (Some(outcome), _) => out.push_str(&format!("{}\n", outcome)),
                (None, Some(player)) => out.push_str(&format!(
                    "{} to move, {} legal moves\n",
                    player,
                    report.legal_moves.len()
                )),
                (None, None) => {}
            }
            Ok(out)
        }
    }
}

/// Renders nine row-major marks.
pub fn render_marks(marks: &[Mark]) -> Result<String, PlayError> {
    let marks: [Mark; 9] = marks
        .try_into()
        .map_err(|_| PlayError::new(format!("Expected 9 marks, got {}", marks.len())))?;
    Ok(tic_tac_types::render(&Board::from_marks(marks)))
}

/// Counts every complete game from an empty board.
#[instrument]
pub fn tree(starting_player: Player) -> GameTreeStats {
    explore(&Game::new(starting_player))
}

/// Formats game-tree counts.
pub fn format_tree(stats: &GameTreeStats, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(stats),
        OutputFormat::Text => Ok(format!(
            "games: {}\nX wins: {}\nO wins: {}\ndraws: {}\npositions visited: {}\n",
            stats.games, stats.x_wins, stats.o_wins, stats.draws, stats.positions_visited
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(indices: &[usize]) -> Vec<Position> {
        indices.iter().filter_map(|&i| Position::from_index(i)).collect()
    }

    #[test]
    fn test_play_reports_winner() {
        let report = play(Player::O, &positions(&[0, 8, 1, 7, 2])).expect("legal sequence");
        assert_eq!(report.moves.len(), 5);
        assert_eq!(report.outcome, Some(Outcome::Winner(Player::O)));
        assert!(report.legal_moves.is_empty());
        assert_eq!(report.to_move, None);
    }

    #[test]
    fn test_occupied_position_is_an_error() {
        let err = play(Player::X, &positions(&[4, 4])).unwrap_err();
        assert!(err.message.contains("not playable"), "{}", err.message);
        assert!(err.message.contains("top-left"));
        assert!(!err.message.contains("middle-middle,"));
    }

    #[test]
    fn test_move_after_win_is_an_error() {
        let err = play(Player::X, &positions(&[0, 3, 1, 4, 2, 5])).unwrap_err();
        assert!(err.message.contains("after the game ended"), "{}", err.message);
    }

    #[test]
    fn test_text_format_lists_moves() {
        let report = play(Player::X, &positions(&[4])).expect("legal");
        let text = format_play(&report, OutputFormat::Text).expect("format");
        assert!(text.starts_with("1. X -> middle-middle\n"));
        assert!(text.ends_with("O to move, 8 legal moves\n"));
    }

    #[test]
    fn test_render_marks_requires_nine() {
        assert!(render_marks(&[Mark::Empty; 8]).is_err());
        assert_eq!(render_marks(&[Mark::Empty; 9]).expect("nine"), "   |   |  \n".repeat(3));
    }
}
