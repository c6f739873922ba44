use anyhow::{ensure, Context, Result};
use serde::Serialize;

use crate::{deck::{Card, Deck}, hand};

pub const HAND_SIZE: usize = 2;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub cards: Vec<Card>,
    pub total_score: u32,
    pub is_dealer: bool,
}

impl Player {
    pub fn dealer() -> Self {
        Player {
            is_dealer: true,
            ..Player::default()
        }
    }

    pub fn score(&self) -> u32 {
        hand::score(&self.cards)
    }

    pub fn check_burst(&self) -> bool {
        hand::check_burst(&self.cards)
    }
}

/// Dealer at index 0, then the players in seat order.
#[derive(Clone, Debug, Serialize)]
pub struct Game {
    pub players: Vec<Player>,
}

impl Game {
    /// Seats a dealer plus `num_players` and deals two passes, one card per
    /// participant each pass, dealer first. Returns the game and what is left
    /// of the deck.
    pub fn initialize(num_players: usize, mut deck: Deck) -> Result<(Game, Deck)> {
        let participants = num_players + 1;
        let needed = participants * HAND_SIZE;
        ensure!(
            deck.remaining_cards() >= needed,
            "deck has {} cards, {} participants need {}",
            deck.remaining_cards(),
            participants,
            needed
        );

        let mut players = Vec::with_capacity(participants);
        players.push(Player::dealer());
        players.extend((0..num_players).map(|_| Player::default()));

        for _ in 0..HAND_SIZE {
            for player in players.iter_mut() {
                let card = deck.deal_card().context("deck ran out while dealing")?;
                player.cards.push(card);
            }
        }
        log::debug!(
            "dealt {} cards to {} participants, {} left",
            needed,
            participants,
            deck.remaining_cards()
        );

        Ok((Game { players }, deck))
    }

    pub fn score_hands(&mut self) {
        for player in self.players.iter_mut() {
            player.total_score = player.score();
        }
    }

    pub fn dealer(&self) -> &Player {
        &self.players[0]
    }

    /// Non-dealer players with their index in [`Game::players`].
    pub fn seats(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players.iter().enumerate().skip(1)
    }
}
