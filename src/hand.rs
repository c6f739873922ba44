use std::cmp::Ordering;

use crate::deck::Card;

/// Rank that pairs with a 10..=12 card for a blackjack. Sits outside the
/// 1..=13 catalog, so dealt hands never reach it.
pub const BLACKJACK_RANK: u8 = 14;

/// Score reported for a blackjack hand.
pub const BLACKJACK_SCORE: u32 = 0;

pub const BURST_LIMIT: u32 = 21;

pub fn is_blackjack(a: &Card, b: &Card) -> bool {
    let pairs = |ace: &Card, other: &Card| {
        ace.rank == BLACKJACK_RANK && (10..=12).contains(&other.rank)
    };
    pairs(a, b) || pairs(b, a)
}

/// Raw rank sum of the hand, or [`BLACKJACK_SCORE`] when the first two cards
/// form a blackjack.
pub fn score(cards: &[Card]) -> u32 {
    if let [a, b, ..] = cards {
        if is_blackjack(a, b) {
            return BLACKJACK_SCORE;
        }
    }
    cards.iter().map(|c| c.rank as u32).sum()
}

pub fn card_value(rank: u8) -> u32 {
    match rank {
        11 | 12 | 13 => 10,
        _ => rank as u32,
    }
}

pub fn check_burst(cards: &[Card]) -> bool {
    cards.iter().map(|c| card_value(c.rank)).sum::<u32>() > BURST_LIMIT
}

/// Orders by rank label as text, then by suit value.
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.rank_label
        .cmp(b.rank_label)
        .then_with(|| a.suit_value().cmp(&b.suit_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Suit;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spade, rank)
    }

    #[test]
    fn score_sums_raw_ranks() {
        assert_eq!(score(&[card(5), card(7)]), 12);
        assert_eq!(score(&[card(13), card(12)]), 25);
        assert_eq!(score(&[card(1), card(2)]), 3);
    }

    #[test]
    fn blackjack_needs_rank_fourteen() {
        assert!(is_blackjack(&card(14), &card(11)));
        assert!(is_blackjack(&card(10), &card(14)));
        assert!(is_blackjack(&card(14), &card(12)));
        assert!(!is_blackjack(&card(14), &card(13)));
        assert!(!is_blackjack(&card(14), &card(9)));
        assert!(!is_blackjack(&card(5), &card(6)));
        // the catalog's Ace is 13 and does not qualify
        assert!(!is_blackjack(&card(13), &card(11)));
    }

    #[test]
    fn blackjack_scores_zero() {
        assert_eq!(score(&[card(14), card(11)]), BLACKJACK_SCORE);
    }

    #[test]
    fn burst_counts_faces_as_ten() {
        assert!(!check_burst(&[card(12), card(12)]));
        assert!(check_burst(&[card(12), card(12), card(5)]));
        assert!(!check_burst(&[card(13), card(11), card(1)]));
        assert!(check_burst(&[card(13), card(11), card(2)]));
    }

    #[test]
    fn compare_uses_label_text() {
        // "Two" > "Jack" as text even though 2 < 10
        assert_eq!(compare(&card(2), &card(10)), Ordering::Greater);
        assert_eq!("Two".cmp("Ten"), Ordering::Greater);
        // "Eight" < "Five"
        assert_eq!(compare(&card(8), &card(5)), Ordering::Less);
        // "Ace" sorts first despite being the top rank
        assert_eq!(compare(&card(13), &card(1)), Ordering::Less);
    }

    #[test]
    fn compare_breaks_ties_on_suit() {
        let spade = Card::new(Suit::Spade, 4);
        let diamond = Card::new(Suit::Diamond, 4);
        assert_eq!(compare(&spade, &diamond), Ordering::Less);
        assert_eq!(compare(&diamond, &spade), Ordering::Greater);
        assert_eq!(compare(&spade, &spade.clone()), Ordering::Equal);
    }
}
