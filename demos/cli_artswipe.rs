//! CLI artwork chronology game.
//!
//! Usage: `cargo run --example cli_artswipe -- [path/to/obras.json]`
//! Set `RUST_LOG=artswipe=debug` to trace the state machine.

use std::io::{self, Write};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use artswipe::{
    Catalog, CatalogError, Direction, Feedback, Game, GameOptions, GameOutcome, Haptics,
    HapticsError, Input, Key, Session, SessionEvent,
};
use tracing_subscriber::EnvFilter;

struct TerminalBell;

impl Haptics for TerminalBell {
    fn vibrate(&mut self, pattern: &[u32]) -> Result<(), HapticsError> {
        if pattern.len() > 1 {
            print!("\u{7}");
            io::stdout().flush().map_err(|_| HapticsError::Rejected)?;
        }
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Artwork chronology CLI (type 'q' to quit)");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "obras.json".to_string());
    let catalog = match std::fs::read_to_string(&path) {
        Ok(payload) => Catalog::from_payload(&payload),
        Err(_) => Catalog::fallback(CatalogError::Unavailable),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session =
        Session::with_haptics(catalog, GameOptions::default(), seed, TerminalBell);

    if let Some(notice) = session.notice() {
        println!("{}", colorize(notice, "90"));
    }

    if !session.game().is_ready() {
        println!("Not enough artworks to play.");
        return;
    }

    loop {
        if let Some(summary) = session.game().summary() {
            print_final(session.game());
            let label = match summary.outcome {
                GameOutcome::OutOfLives => colorize("GAME OVER", "31"),
                GameOutcome::DeckCompleted if summary.perfect => colorize("PERFECT", "32"),
                GameOutcome::DeckCompleted => colorize("GAME OVER", "32"),
            };
            println!("{label}  Score: {} / {}", summary.score, summary.rounds);

            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    session.handle(Input::Restart, Instant::now());
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        print_table(session.game());
        println!(
            "Actions: {} {} {} {} {}",
            colorize("[b]efore", "36"),
            colorize("[a]fter", "36"),
            colorize("[d <dx>]rag", "36"),
            colorize("[r]estart", "90"),
            colorize("[q]uit", "90"),
        );

        let line = prompt_line("Action: ");
        let input = match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["b" | "before"] => Input::Key(Key::ArrowLeft),
            ["a" | "after"] => Input::Key(Key::ArrowRight),
            ["<"] => Input::Tap(Direction::Before),
            [">"] => Input::Tap(Direction::After),
            ["d" | "drag", dx] => match dx.parse::<f32>() {
                Ok(dx) => Input::DragEnd { dx },
                Err(_) => {
                    println!("Please enter a drag distance.");
                    continue;
                }
            },
            ["r" | "restart"] => Input::Restart,
            ["q" | "quit"] => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match session.handle(input, Instant::now()) {
            Some(SessionEvent::SnappedBack) => {
                println!("Not far enough, the card springs back.");
                continue;
            }
            Some(SessionEvent::Restarted) => {
                println!("Deck reshuffled.");
                continue;
            }
            Some(_) => {}
            None => continue,
        }

        run_until_idle(&mut session);
    }
}

fn run_until_idle<H: Haptics>(session: &mut Session<H>) {
    while let Some(deadline) = session.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }

        match session.tick(Instant::now()) {
            Some(SessionEvent::Staged(ticket)) => {
                print_feedback(session.game(), ticket.feedback());
            }
            Some(SessionEvent::Committed(result)) => {
                if result.outcome.is_none() {
                    let max = session.game().starting_lives();
                    println!("Score {} | lives {}\n", result.score, hearts(result.lives, max));
                }
            }
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\n{}   Score {}   Progress {} / {}",
        hearts(game.lives(), game.starting_lives()),
        game.score(),
        game.progress(),
        game.rounds()
    );

    if let Some(previous) = game.previous() {
        println!(
            "Reference: {} ({})",
            previous.title,
            colorize(&previous.author, "90")
        );
    }
    if let Some(current) = game.current() {
        println!(
            "\n  {}\n  {}\n",
            colorize(&current.title, "1"),
            colorize(&current.author, "90")
        );
    }
}

fn print_feedback(game: &Game, feedback: Feedback) {
    let label = game.reveal_label().unwrap_or_default();
    match feedback {
        Feedback::Correct => println!("{}  {label}", colorize("Correct!", "32")),
        Feedback::Incorrect => println!("{}  {label}", colorize("Wrong", "31")),
    }
}

fn print_final(game: &Game) {
    println!("\nDeck:");
    for (index, artwork) in game.deck().cards().iter().enumerate() {
        let marker = if index == game.position() { "*" } else { " " };
        println!(
            "{marker} {} | {} | {}",
            artwork.year, artwork.title, artwork.author
        );
    }
    println!();
}

fn hearts(lives: u8, max: u8) -> String {
    (0..max)
        .map(|slot| {
            if slot < lives {
                colorize("♥", "31")
            } else {
                colorize("♡", "90")
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
