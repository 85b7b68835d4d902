//! Simple interactive CLI mode
//!
//! A text Wordle session: type each row as you play it and see what is still
//! possible.

use crate::core::Attempt;
use crate::dictionary::DictionaryIndex;
use crate::session::{AttemptHistory, MAX_ATTEMPTS};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed in full when at most this many remain
const SHOW_CANDIDATES: usize = 12;

/// What one line of input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Solved,
    Undone,
    NothingToUndo,
    Reset,
    Quit,
    Invalid(String),
}

/// Apply one line of input to the session
///
/// Accepts `GUESS:FEEDBACK`, `GUESS FEEDBACK`, or one of `undo`, `new`,
/// `quit`.
pub fn handle_input(history: &mut AttemptHistory, input: &str) -> Outcome {
    let input = input.trim();

    match input.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return Outcome::Quit,
        "new" | "n" => {
            history.reset();
            return Outcome::Reset;
        }
        "undo" | "u" => {
            return if history.undo().is_some() {
                Outcome::Undone
            } else {
                Outcome::NothingToUndo
            };
        }
        _ => {}
    }

    let row = match input.split_once(char::is_whitespace) {
        Some((guess, feedback)) if !input.contains(':') => Attempt::parse(guess, feedback),
        _ => input.parse(),
    };

    let attempt = match row {
        Ok(attempt) => attempt,
        Err(e) => return Outcome::Invalid(e.to_string()),
    };

    match history.push(attempt) {
        Ok(()) if history.is_solved() => Outcome::Solved,
        Ok(()) => Outcome::Added,
        Err(e) => Outcome::Invalid(e.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(index: &DictionaryIndex) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Helper - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each row you play as GUESS FEEDBACK, e.g. 'crane --g-y':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last row\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history = AttemptHistory::new();

    loop {
        print_status(&history, index);

        print!("Row {}: ", history.len() + 1);
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match handle_input(&mut history, &line) {
            Outcome::Added => {}
            Outcome::Solved => {
                print_solved(&history);
                history.reset();
                println!("\n🔄 New game started!\n");
            }
            Outcome::Undone => println!("✓ Undone! Back to row {}\n", history.len() + 1),
            Outcome::NothingToUndo => println!("Nothing to undo!\n"),
            Outcome::Reset => println!("\n🔄 New game started!\n"),
            Outcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Outcome::Invalid(reason) => println!("❌ {reason}\n"),
        }
    }
}

fn print_status(history: &AttemptHistory, index: &DictionaryIndex) {
    let candidates = history.suggestions(index);

    println!("────────────────────────────────────────────────────────────");
    for attempt in history.attempts() {
        println!("  {} {}", attempt.guess_text().bright_white().bold(), attempt.to_emoji());
    }
    println!(
        "{} candidates remaining ({} of {} rows used)",
        candidates.len().to_string().bright_cyan().bold(),
        history.len(),
        MAX_ATTEMPTS
    );
    println!("────────────────────────────────────────────────────────────");

    if candidates.is_empty() {
        println!("\n❌ No candidates remain! Your feedback may be incorrect.");
        println!("Type 'undo' to go back, or 'new' to start over.\n");
    } else if candidates.len() <= SHOW_CANDIDATES {
        println!("Remaining candidates:");
        for candidate in &candidates {
            println!("  • {}", candidate.text());
        }
        println!();
    }
}

fn print_solved(history: &AttemptHistory) {
    let rows = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        rows.to_string().bright_cyan().bold(),
        if rows == 1 { "guess" } else { "guesses" }
    );
    for (i, attempt) in history.attempts().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess_text().bright_white().bold(),
            attempt.to_emoji()
        );
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
}
