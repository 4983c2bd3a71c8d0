//! Card, meld, deck and win-condition tests.

use std::collections::HashMap;

use concor::{
    Card, Color, DECK_SIZE, DealError, Deck, MeldKind, ParseCardError, Player, Rank, Seat, Suit,
    check_winning_condition, classify, combinations, decks_for_players, find_winning_arrangement,
    is_run, is_set, parse_cards,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const WINNING: &str = "J♠ Q♠ K♠ A♠ 5♥ 5♦ 5♣ 9♦ 10♦ J♦ 2♣ 7♥ 4♠";
const NO_MELDS: &str = "A♠ 2♥ 3♦ 4♣ 5♠ 6♥ 7♦ 8♣ 9♠ 10♥ J♦ Q♣ K♠";

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
    if cards.len() <= 1 {
        return vec![cards.to_vec()];
    }

    let mut out = Vec::new();
    for i in 0..cards.len() {
        let mut rest = cards.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

#[test]
fn every_token_parses_and_round_trips() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let token = format!("{}{}", rank.symbol(), suit.symbol());
            let card: Card = token.parse().unwrap();

            assert_eq!(card, Card::new(suit, rank));
            assert_eq!(card.to_string(), token);
            assert!((1..=13).contains(&card.value()));
        }
    }
}

#[test]
fn card_values_and_colors() {
    let ten: Card = "10♦".parse().unwrap();
    assert_eq!(ten.rank, Rank::Ten);
    assert_eq!(ten.suit, Suit::Diamonds);
    assert_eq!(ten.value(), 10);
    assert_eq!(ten.color(), Color::Red);

    let ace: Card = "A♣".parse().unwrap();
    assert_eq!(ace.value(), 1);
    assert_eq!(ace.color(), Color::Black);

    let king: Card = "K♥".parse().unwrap();
    assert_eq!(king.value(), 13);
    assert_eq!(king.color(), Color::Red);

    assert_eq!("Q♠".parse::<Card>().unwrap().color(), Color::Black);
}

#[test]
fn malformed_tokens_are_rejected() {
    assert_eq!("".parse::<Card>().unwrap_err(), ParseCardError::Empty);
    assert_eq!("AS".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
    assert_eq!("10".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
    assert_eq!("♠".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("1♠".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("11♥".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!(
        parse_cards("A♠ 2♠ X♠").unwrap_err(),
        ParseCardError::InvalidRank
    );
}

#[test]
fn parse_cards_accepts_commas_and_spaces() {
    let parsed = cards("A♠,2♠,  10♥\nK♣");
    assert_eq!(parsed.len(), 4);
    assert_eq!(parsed[2], Card::new(Suit::Hearts, Rank::Ten));
}

#[test]
fn combinations_enumerate_each_subset_once() {
    let items: Vec<usize> = (0..13).collect();
    assert_eq!(combinations(&items, 4).len(), 715);
    assert_eq!(combinations(&items[..9], 3).len(), 84);

    let mut seen = combinations(&items, 4);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 715);

    assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
    assert!(combinations(&[1, 2, 3], 4).is_empty());
}

#[test]
fn combinations_preserve_order() {
    let subsets = combinations(&["a", "b", "c", "d"], 3);
    assert_eq!(
        subsets,
        vec![
            vec!["a", "b", "c"],
            vec!["a", "b", "d"],
            vec!["a", "c", "d"],
            vec!["b", "c", "d"],
        ]
    );

    for subset in &subsets {
        assert!(subset.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn combinations_of_card_groups() {
    let groups = vec![cards("A♠ 2♠ 3♠"), cards("K♥ K♦ K♣"), cards("4♣ 5♣ 6♣")];
    let pairs = combinations(&groups, 2);

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], vec![groups[0].clone(), groups[1].clone()]);
}

#[test]
fn sets_follow_the_color_balance_rule() {
    assert!(is_set(&cards("K♥ K♦ K♣")));
    assert!(is_set(&cards("K♥ K♠ K♣")));
    assert!(is_set(&cards("7♠ 7♥ 7♣ 7♦")));

    // Suits need not be distinct, only the colors balanced.
    assert!(is_set(&cards("Q♥ Q♥ Q♠")));
    assert!(is_set(&cards("9♥ 9♥ 9♠ 9♠")));

    assert!(!is_set(&cards("K♥ K♦ K♥")));
    assert!(!is_set(&cards("K♠ K♣ K♠")));
    assert!(!is_set(&cards("7♠ 7♥ 7♦ 7♥")));
    assert!(!is_set(&cards("7♠ 7♣ 7♠ 7♥")));
    assert!(!is_set(&cards("K♥ K♦ Q♣")));
    assert!(!is_set(&cards("K♥ K♣")));
    assert!(!is_set(&cards("K♥ K♣ K♦ K♠ K♥")));
    assert!(!is_set(&[]));
}

#[test]
fn runs_need_one_suit_and_consecutive_values() {
    assert!(is_run(&cards("4♣ 5♣ 6♣")));
    assert!(is_run(&cards("9♦ 10♦ J♦ Q♦")));
    assert!(is_run(&cards("2♥ 3♥ 4♥ 5♥ 6♥")));

    assert!(!is_run(&cards("4♣ 5♣ 6♦")));
    assert!(!is_run(&cards("4♣ 6♣ 7♣")));
    assert!(!is_run(&cards("4♣ 4♣ 5♣")));
    assert!(!is_run(&cards("4♣ 5♣")));
    assert!(!is_run(&[]));
}

#[test]
fn ace_is_low_or_high_but_not_both() {
    assert!(is_run(&cards("A♠ 2♠ 3♠")));
    assert!(is_run(&cards("A♠ 2♠ 3♠ 4♠")));
    assert!(is_run(&cards("Q♠ K♠ A♠")));
    assert!(is_run(&cards("J♠ Q♠ K♠ A♠")));

    assert!(!is_run(&cards("K♠ A♠ 2♠")));
    assert!(!is_run(&cards("Q♠ K♠ A♠ 2♠")));
    assert!(!is_run(&cards("J♠ K♠ A♠")));
    assert!(!is_run(&cards("A♠ Q♠ K♠ A♠")));
}

#[test]
fn classify_reports_meld_kind() {
    assert_eq!(classify(&cards("5♥ 5♦ 5♣")), Some(MeldKind::Set));
    assert_eq!(classify(&cards("5♣ 6♣ 7♣")), Some(MeldKind::Run));
    assert_eq!(classify(&cards("5♣ 6♣ 8♣")), None);
}

#[test]
fn meld_predicates_ignore_card_order() {
    let groups = [
        "K♥ K♦ K♣",
        "K♥ K♦ K♥",
        "7♠ 7♥ 7♣ 7♦",
        "7♠ 7♥ 7♣ 7♣",
        "A♠ 2♠ 3♠",
        "Q♠ K♠ A♠",
        "J♠ Q♠ K♠ A♠",
        "K♠ A♠ 2♠",
        "9♦ 10♦ J♦ Q♦",
        "9♦ 10♦ 10♦ Q♦",
        "4♣ 5♣ 6♦",
    ];

    for group in groups {
        let group = cards(group);
        let expected = (is_set(&group), is_run(&group));
        for permutation in permutations(&group) {
            assert_eq!(
                (is_set(&permutation), is_run(&permutation)),
                expected,
                "{permutation:?}"
            );
        }
    }
}

#[test]
fn deck_size_scales_with_player_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for players in 0..=6 {
        let decks = decks_for_players(players);
        assert_eq!(decks, players.div_ceil(2).max(1));

        let deck = Deck::build(players, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE * decks);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in deck.iter() {
            *counts.entry(*card).or_default() += 1;
        }
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&count| count == decks));
    }
}

#[test]
fn deck_is_shuffled_per_seed() {
    let first = Deck::build(2, &mut ChaCha8Rng::seed_from_u64(1));
    let again = Deck::build(2, &mut ChaCha8Rng::seed_from_u64(1));
    let other = Deck::build(2, &mut ChaCha8Rng::seed_from_u64(2));

    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn deck_draws_and_deals_from_the_head() {
    let mut deck = Deck::from(cards("A♠ 2♠ 3♠ 4♠ 5♠ 6♠ 7♠"));
    let mut players = vec![
        Player::new(1, "One".into(), Seat::South),
        Player::new(2, "Two".into(), Seat::West),
    ];

    deck.deal(&mut players, 3).unwrap();
    assert_eq!(players[0].hand.cards(), cards("A♠ 2♠ 3♠").as_slice());
    assert_eq!(players[1].hand.cards(), cards("4♠ 5♠ 6♠").as_slice());

    assert_eq!(deck.draw(), Some(Card::new(Suit::Spades, Rank::Seven)));
    assert_eq!(deck.draw(), None);
    assert!(deck.is_empty());
}

#[test]
fn short_deck_refuses_to_deal() {
    let mut deck = Deck::from(cards("A♠ 2♠ 3♠ 4♠ 5♠"));
    let mut players = vec![
        Player::new(1, "One".into(), Seat::South),
        Player::new(2, "Two".into(), Seat::West),
    ];

    assert_eq!(
        deck.deal(&mut players, 3).unwrap_err(),
        DealError::NotEnoughCards
    );
    assert_eq!(deck.len(), 5);
    assert!(players.iter().all(|player| player.hand.is_empty()));
}

#[test]
fn winning_hand_is_found() {
    let hand = cards(WINNING);
    assert!(check_winning_condition(&hand));

    let arrangement = find_winning_arrangement(&hand).unwrap();
    assert_eq!(arrangement.four, [0, 1, 2, 3]);
    assert_eq!(arrangement.threes, [[4, 5, 6], [7, 8, 9]]);
    assert_eq!(arrangement.unmatched, [10, 11, 12]);
}

#[test]
fn winning_hand_survives_shuffling() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut hand = cards(WINNING);

    for _ in 0..20 {
        hand.shuffle(&mut rng);
        assert!(check_winning_condition(&hand), "{hand:?}");
    }
}

#[test]
fn only_thirteen_card_hands_can_win() {
    let hand = cards(WINNING);
    assert!(!check_winning_condition(&hand[..12]));
    assert!(!check_winning_condition(&[]));

    let mut fourteen = hand.clone();
    fourteen.push(Card::new(Suit::Clubs, Rank::Nine));
    assert!(!check_winning_condition(&fourteen));
}

#[test]
fn hand_without_melds_does_not_win() {
    assert!(!check_winning_condition(&cards(NO_MELDS)));
}

#[test]
fn three_card_melds_alone_do_not_win() {
    // Four three-card melds but no four-card meld.
    let hand = cards("A♠ 2♠ 3♠ K♥ K♦ K♣ Q♥ Q♦ Q♠ 4♣ 5♣ 6♣ 7♦");
    assert!(!check_winning_condition(&hand));
}

#[test]
fn a_single_three_card_meld_is_not_enough() {
    let hand = cards("2♠ 3♠ 4♠ 5♠ 7♥ 8♥ 9♥ K♣ Q♦ 10♣ 6♦ J♥ A♦");
    assert!(!check_winning_condition(&hand));
}

#[test]
fn overlapping_three_card_melds_do_not_win() {
    let hand = cards("K♠ K♥ K♦ K♣ 7♥ 8♥ 9♥ 10♥ A♠ 3♦ 5♣ J♠ 2♣");
    assert!(!check_winning_condition(&hand));

    let shared = cards("9♣ 10♣ J♣ Q♣ 7♦ 7♥ 7♠ 5♦ 6♦ A♠ 3♥ K♦ 2♠");
    assert!(!check_winning_condition(&shared));
}

#[test]
fn duplicate_cards_are_distinct_by_position() {
    // Two 7♦ from a double deck let the set and the run each take one.
    let hand = cards("9♣ 10♣ J♣ Q♣ 7♦ 7♥ 7♠ 5♦ 6♦ A♠ 3♥ 7♦ 2♠");
    assert!(check_winning_condition(&hand));

    let doubled = cards("5♥ 5♥ 5♠ 5♠ 8♦ 8♦ 8♣ 2♣ 3♣ 4♣ J♥ A♦ 10♠");
    let arrangement = find_winning_arrangement(&doubled).unwrap();
    assert_eq!(arrangement.four, [0, 1, 2, 3]);
}

#[test]
fn leftover_cards_are_not_checked() {
    // The last three cards form no meld and the hand still wins.
    let hand = cards("7♠ 7♥ 7♣ 7♦ A♥ 2♥ 3♥ Q♦ Q♠ Q♥ 4♠ 9♦ J♣");
    assert!(check_winning_condition(&hand));
    assert_eq!(classify(&cards("4♠ 9♦ J♣")), None);
}
