use std::fmt::Write;

use crate::action::PlayerId;
use crate::dice::Dice;
use crate::player::Player;
use crate::state::{FailureReason, GameStatus, TurnOutcome, TurnReport};

pub fn format_dice(dice: &[Dice]) -> String {
    let faces = dice
        .iter()
        .map(|die| die.face().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{faces}]")
}

/// One line per player; `highlight` marks the viewer's own seat.
pub fn render_standings(players: &[Player], highlight: Option<PlayerId>) -> String {
    let mut out = String::from("Standings:");
    for (id, player) in players.iter().enumerate() {
        let marker = if highlight == Some(id) { " (You)" } else { "" };
        let entered = if player.has_entered_game() {
            ""
        } else {
            "  [not entered]"
        };
        let _ = write!(
            out,
            "\n  P{id} {:<12} {:>6}{marker}{entered}",
            player.name(),
            player.total_points()
        );
    }
    out
}

pub fn describe_turn(report: &TurnReport, players: &[Player]) -> String {
    let name = players
        .get(report.player)
        .map(Player::name)
        .unwrap_or("?");
    let adopted = if report.adopted { " (adopted)" } else { "" };
    let result = match &report.outcome {
        TurnOutcome::Success { points } => format!("banked {points}"),
        TurnOutcome::Failure {
            reason: FailureReason::Bust,
        } => format!("bust at {}", report.points),
        TurnOutcome::Failure {
            reason: FailureReason::Violation(kind),
        } => format!("failed: {kind}"),
    };
    format!(
        "#{:<4} P{} {name}{adopted}: {result} after {} roll(s), delta {}",
        report.turn_index, report.player, report.rolls, report.points_delta
    )
}

pub fn describe_status(status: &GameStatus, players: &[Player]) -> String {
    match status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Aborted => String::from("Aborted (turn cap reached)"),
        GameStatus::Finished { winners } => {
            let names = winners
                .iter()
                .filter_map(|id| players.get(*id))
                .map(Player::name)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Finished (winner: {names})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleViolation;

    #[test]
    fn formats_dice_faces() {
        let dice = Dice::from_faces(&[1, 5, 6]).unwrap();
        assert_eq!(format_dice(&dice), "[1 5 6]");
        assert_eq!(format_dice(&[]), "[]");
    }

    #[test]
    fn describes_failed_turn() {
        let players = vec![Player::new("ada")];
        let report = TurnReport {
            turn_index: 3,
            player: 0,
            adopted: false,
            rolls: 1,
            points: 0,
            dice_remaining: 6,
            points_delta: 0,
            outcome: TurnOutcome::Failure {
                reason: FailureReason::Violation(RuleViolation::NoDiceKept),
            },
        };
        let text = describe_turn(&report, &players);
        assert!(text.contains("ada"));
        assert!(text.contains("at least one die must be kept"));
    }
}
