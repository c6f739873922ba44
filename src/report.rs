use std::fmt;

use serde::Serialize;

use crate::{game::{Game, Player}, hand::BLACKJACK_SCORE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Outcome {
    PlayerBlackjack,
    /// Dealer's hand scored as blackjack; the wording credits the player.
    DealerBlackjack,
    DealerWins,
    PlayerWins { seat: usize },
    Draw,
}

impl Outcome {
    /// First matching rule wins. `index` is the player's position in the game.
    pub fn decide(index: usize, player: &Player, dealer: &Player) -> Outcome {
        if player.total_score == BLACKJACK_SCORE {
            Outcome::PlayerBlackjack
        } else if dealer.total_score == BLACKJACK_SCORE {
            Outcome::DealerBlackjack
        } else if dealer.total_score > player.total_score {
            Outcome::DealerWins
        } else if player.total_score > dealer.total_score {
            Outcome::PlayerWins { seat: index + 1 }
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerBlackjack => write!(f, "Player one blackjack and wins automatically"),
            Outcome::DealerBlackjack => write!(f, "Player two blackjack and wins automatically"),
            Outcome::DealerWins => write!(f, "Dealer wins"),
            Outcome::PlayerWins { seat } => write!(f, "Player {seat} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOutcome {
    pub seat: usize,
    pub score: u32,
    pub outcome: Outcome,
}

pub fn outcomes(game: &Game) -> Vec<PlayerOutcome> {
    let dealer = game.dealer();
    game.seats()
        .map(|(index, player)| PlayerOutcome {
            seat: index + 1,
            score: player.total_score,
            outcome: Outcome::decide(index, player, dealer),
        })
        .collect()
}

/// Player hands, then the dealer's hand, then one outcome per player.
pub fn report_lines(game: &Game) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, player) in game.seats() {
        lines.push(format!("Player {} has following cards:", index + 1));
        lines.extend(player.cards.iter().map(ToString::to_string));
    }
    lines.push("Dealer has the following cards:".to_string());
    lines.extend(game.dealer().cards.iter().map(ToString::to_string));
    lines.extend(outcomes(game).iter().map(|o| o.outcome.to_string()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Card, Suit};

    fn player(total_score: u32) -> Player {
        Player {
            total_score,
            ..Player::default()
        }
    }

    fn dealer(total_score: u32) -> Player {
        Player {
            total_score,
            ..Player::dealer()
        }
    }

    #[test]
    fn outcome_priority() {
        assert_eq!(Outcome::decide(1, &player(0), &dealer(0)), Outcome::PlayerBlackjack);
        assert_eq!(Outcome::decide(1, &player(9), &dealer(0)), Outcome::DealerBlackjack);
        assert_eq!(Outcome::decide(1, &player(9), &dealer(12)), Outcome::DealerWins);
        assert_eq!(Outcome::decide(1, &player(12), &dealer(9)), Outcome::PlayerWins { seat: 2 });
        assert_eq!(Outcome::decide(1, &player(9), &dealer(9)), Outcome::Draw);
    }

    #[test]
    fn outcome_text() {
        assert_eq!(Outcome::PlayerWins { seat: 3 }.to_string(), "Player 3 wins");
        assert_eq!(Outcome::DealerWins.to_string(), "Dealer wins");
        assert_eq!(
            Outcome::DealerBlackjack.to_string(),
            "Player two blackjack and wins automatically"
        );
    }

    #[test]
    fn lines_list_players_then_dealer_then_outcomes() {
        let hand = |suit, a, b| vec![Card::new(suit, a), Card::new(suit, b)];
        let mut game = Game {
            players: vec![
                Player { cards: hand(Suit::Club, 13, 12), ..Player::dealer() },
                Player { cards: hand(Suit::Heart, 1, 2), ..Player::default() },
                Player { cards: hand(Suit::Diamond, 9, 8), ..Player::default() },
            ],
        };
        game.score_hands();

        assert_eq!(
            report_lines(&game),
            vec![
                "Player 2 has following cards:",
                "Heart of One",
                "Heart of Two",
                "Player 3 has following cards:",
                "Diamond of Nine",
                "Diamond of Eight",
                "Dealer has the following cards:",
                "Club of Ace",
                "Club of King",
                "Dealer wins",
                "Dealer wins",
            ]
        );
    }
}
