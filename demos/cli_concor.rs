//! CLI Concor example: you sit in seat 1, the other seats are played by a
//! simple bot.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use concor::{
    Card, Color, Game, GameOptions, GameState, HAND_SIZE, Hand, check_winning_condition,
};

const HUMAN: usize = 0;

fn main() {
    println!("Concor CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_player_names(["You"]);
    let mut game = Game::new(options, seed);

    let Some(players) = prompt_usize("Players (1-4): ") else {
        return;
    };
    if let Err(err) = game.start_game(players) {
        println!("Start error: {err}");
        return;
    }

    while game.state() == GameState::InProgress {
        let resting = game
            .current_player()
            .is_some_and(|player| player.hand.len() == HAND_SIZE);
        if resting && game.cards_remaining() == 0 && !game.can_declare() {
            println!("The deck is exhausted. Nobody wins.");
            return;
        }

        if game.current_player_index() == HUMAN {
            if !human_turn(&mut game) {
                return;
            }
        } else {
            bot_turn(&mut game);
        }
    }

    if let Some(winner) = game.winner() {
        println!("\n{} wins with {}", winner.name, format_hand(&winner.hand));
    }
}

/// Runs one human command. Returns `false` when the user quits.
fn human_turn(game: &mut Game) -> bool {
    print_table(game);
    println!(
        "Actions: [d]raw  [x N]discard  [s]kip  [c]declare  [m A B]move  [q]uit{}",
        if game.can_declare() {
            colorize("  (you can declare!)", "32")
        } else {
            String::new()
        }
    );

    let line = prompt_line("Action: ");
    let mut words = line.split_whitespace();
    let index = |word: Option<&str>| word.and_then(|w| w.parse::<usize>().ok());

    let result = match words.next() {
        Some("d" | "draw") => game.draw().map(|card| println!("You drew {card}")),
        Some("x" | "discard") => match index(words.next()) {
            Some(n) => game.discard(n).map(|card| println!("You discarded {card}")),
            None => {
                println!("Usage: x <index>");
                return true;
            }
        },
        Some("s" | "skip") => game.skip(),
        Some("c" | "declare") => game.declare().map(|_| ()),
        Some("m" | "move") => match (index(words.next()), index(words.next())) {
            (Some(from), Some(to)) => game.reorder(from, to),
            _ => {
                println!("Usage: m <from> <to>");
                return true;
            }
        },
        Some("q" | "quit") => return false,
        _ => {
            println!("Unknown action.");
            return true;
        }
    };

    if let Err(err) = result {
        println!("Action error: {err}");
    }
    true
}

/// Declares when possible; otherwise draws and throws away the card that
/// helps least, or skips when the deck is empty.
fn bot_turn(game: &mut Game) {
    let Some(name) = game.current_player().map(|player| player.name.clone()) else {
        return;
    };

    if game.can_declare() {
        if game.declare().is_ok() {
            println!("{name} declares!");
        }
        return;
    }

    if game.draw().is_err() {
        if game.skip().is_ok() {
            println!("{name} skips.");
        }
        return;
    }

    let Some(cards) = game.current_player().map(|player| player.hand.cards().to_vec()) else {
        return;
    };
    let throw = (0..cards.len())
        .find(|&index| {
            let mut rest = cards.clone();
            rest.remove(index);
            check_winning_condition(&rest)
        })
        .unwrap_or(cards.len() - 1);

    if let Ok(card) = game.discard(throw) {
        println!("{name} draws and discards {}", format_card(&card));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    match game.last_discard() {
        Some(discard) => println!(
            "Discard pile: {} (from player {})",
            format_card(&discard.card),
            discard.player_id
        ),
        None => println!("Discard pile: (empty)"),
    }

    for (index, player) in game.players().iter().enumerate() {
        let marker = if index == game.current_player_index() {
            "*"
        } else {
            " "
        };
        if index == HUMAN {
            println!("{marker} {}: {}", player.name, format_hand(&player.hand));
        } else {
            println!("{marker} {}: {} cards", player.name, player.hand.len());
        }
    }

    if let Some(player) = game.players().get(HUMAN) {
        let positions: Vec<String> = (0..player.hand.len())
            .map(|index| format!("{index:>4}"))
            .collect();
        println!("  index: {}", positions.join(""));
    }
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| colorize(&format!("{:>4}", card.to_string()), color_code(card)))
        .collect::<Vec<_>>()
        .join("")
}

fn format_card(card: &Card) -> String {
    colorize(&card.to_string(), color_code(card))
}

const fn color_code(card: &Card) -> &'static str {
    match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
