//! Win condition evaluation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combinations::combinations;
use crate::meld::is_meld;

/// Number of cards in a hand at rest.
pub const HAND_SIZE: usize = 13;

/// A decomposition of a winning hand, by hand position.
///
/// Only the four-card meld and the two three-card melds are validated; the
/// `unmatched` cards are whatever is left over and need not form a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    /// Positions of the four-card meld.
    pub four: [usize; 4],
    /// Positions of the two disjoint three-card melds.
    pub threes: [[usize; 3]; 2],
    /// Positions of the three remaining cards.
    pub unmatched: [usize; 3],
}

/// Returns whether `hand` is a winning hand.
///
/// A hand wins when it has exactly 13 cards and contains one four-card meld
/// plus two three-card melds, all disjoint.
///
/// ```
/// use concor::{check_winning_condition, parse_cards};
///
/// let hand = parse_cards("J♠ Q♠ K♠ A♠ 5♥ 5♦ 5♣ 9♦ 10♦ J♦ 2♣ 7♥ 4♠").unwrap();
/// assert!(check_winning_condition(&hand));
/// assert!(!check_winning_condition(&hand[..12]));
/// ```
#[must_use]
pub fn check_winning_condition(hand: &[Card]) -> bool {
    find_winning_arrangement(hand).is_some()
}

/// Searches `hand` for a winning decomposition.
///
/// Every four-card meld is tried in turn. For each, the three-card melds
/// among the nine remaining cards are collected and the first disjoint pair
/// wins. Cards are identified by position, so duplicate cards from a
/// multi-deck shoe are never confused with each other.
#[must_use]
pub fn find_winning_arrangement(hand: &[Card]) -> Option<Arrangement> {
    if hand.len() != HAND_SIZE {
        return None;
    }

    let positions: Vec<usize> = (0..hand.len()).collect();
    let fours = combinations(&positions, 4)
        .into_iter()
        .filter(|group| is_meld_at(hand, group));

    for four in fours {
        let rest: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|position| !four.contains(position))
            .collect();

        let threes: Vec<Vec<usize>> = combinations(&rest, 3)
            .into_iter()
            .filter(|group| is_meld_at(hand, group))
            .collect();
        if threes.len() < 2 {
            continue;
        }

        for pair in combinations(&threes, 2) {
            let (first, second) = (&pair[0], &pair[1]);
            if mask(first) & mask(second) != 0 {
                continue;
            }

            let used = mask(&four) | mask(first) | mask(second);
            let unmatched: Vec<usize> = positions
                .iter()
                .copied()
                .filter(|&position| used & (1 << position) == 0)
                .collect();

            return Some(Arrangement {
                four: four.as_slice().try_into().ok()?,
                threes: [
                    first.as_slice().try_into().ok()?,
                    second.as_slice().try_into().ok()?,
                ],
                unmatched: unmatched.as_slice().try_into().ok()?,
            });
        }
    }

    None
}

fn is_meld_at(hand: &[Card], group: &[usize]) -> bool {
    let cards: Vec<Card> = group.iter().map(|&position| hand[position]).collect();
    is_meld(&cards)
}

fn mask(group: &[usize]) -> u16 {
    group.iter().fold(0, |bits, &position| bits | (1 << position))
}
