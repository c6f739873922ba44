#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    deck::{Deck, DECK_SIZE},
    game::{Game, Player, HAND_SIZE},
    report::{self, PlayerOutcome},
};

/// Largest table one deck can deal two cards to, dealer included.
pub const MAX_PLAYERS: usize = DECK_SIZE / HAND_SIZE - 1;

fn default_num_players() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInput {
    #[serde(default = "default_num_players")]
    pub num_players: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RoundInput {
    fn default() -> Self {
        RoundInput {
            num_players: default_num_players(),
            seed: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub seed: Option<u64>,
    pub players: Vec<Player>,
    pub outcomes: Vec<PlayerOutcome>,
    pub lines: Vec<String>,
    pub cards_remaining: usize,
}

/// Largest seed a JavaScript number holds exactly (2^53 - 1).
pub const MAX_SEED: u64 = (1 << 53) - 1;

#[cfg(not(target_arch = "wasm32"))]
fn default_seed() -> Result<u64> {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
    Ok(nanos & MAX_SEED)
}

#[cfg(target_arch = "wasm32")]
fn default_seed() -> Result<u64> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|err| anyhow::anyhow!("no entropy for seed: {err}"))?;
    Ok(u64::from_le_bytes(bytes) & MAX_SEED)
}

/// The input seed, or a fresh one when none is given.
pub fn resolve_seed(seed: Option<u64>) -> Result<u64> {
    match seed {
        Some(seed) => {
            ensure!(seed <= MAX_SEED, "seed {} exceeds {}", seed, MAX_SEED);
            Ok(seed)
        }
        None => default_seed(),
    }
}

pub fn run(input: RoundInput) -> Result<RoundResult> {
    ensure!(
        input.num_players <= MAX_PLAYERS,
        "{} players requested, at most {} fit one deck",
        input.num_players,
        MAX_PLAYERS
    );
    let seed = resolve_seed(input.seed)?;
    log::info!("round with {} players, seed {}", input.num_players, seed);

    let mut rng = SmallRng::seed_from_u64(seed);
    let deck = Deck::build().shuffled(&mut rng);
    play(input.num_players, deck, Some(seed))
}

/// Deals, scores and reports a round from an already ordered deck. `seed` is
/// the one the deck was shuffled with, if any.
pub fn play(num_players: usize, deck: Deck, seed: Option<u64>) -> Result<RoundResult> {
    let (mut game, deck) = Game::initialize(num_players, deck)?;
    game.score_hands();

    let outcomes = report::outcomes(&game);
    let lines = report::report_lines(&game);
    log::info!(
        "dealer scored {}, {} outcomes decided",
        game.dealer().total_score,
        outcomes.len()
    );

    Ok(RoundResult {
        seed,
        players: game.players,
        outcomes,
        lines,
        cards_remaining: deck.remaining_cards(),
    })
}
