//! Terminal front end for the game controller
//!
//! Reads commands from stdin, forwards them as intents through the
//! [`GameHandle`], and prints every new snapshot. Countdown ticks only print
//! a warning on the warning seconds instead of redrawing the screen.

use crate::input::intent::{COMMANDS_HELP, parse_intent};
use crate::output::console::ConsoleRenderer;
use colored::Colorize;
use milhao_application::{GameHandle, GameIntent};
use milhao_domain::{PrizeLadder, SessionSnapshot};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::debug;

/// Decides what to print for each published snapshot
pub struct SnapshotPrinter {
    ladder: PrizeLadder,
    last: Option<SessionSnapshot>,
}

impl SnapshotPrinter {
    pub fn new(ladder: PrizeLadder) -> Self {
        Self { ladder, last: None }
    }

    /// Text to print for `snapshot`, if any
    pub fn next(&mut self, snapshot: SessionSnapshot) -> Option<String> {
        let output = match &self.last {
            Some(previous) if previous.revision == snapshot.revision => None,
            Some(previous) if snapshot.is_tick_of(previous) => {
                ConsoleRenderer::countdown_warning(&snapshot)
            }
            _ => Some(ConsoleRenderer::render(&snapshot, &self.ladder)),
        };
        self.last = Some(snapshot);
        output
    }
}

/// Interactive game over stdin/stdout
pub struct ConsoleGame {
    handle: GameHandle,
    printer: SnapshotPrinter,
}

impl ConsoleGame {
    pub fn new(handle: GameHandle, ladder: PrizeLadder) -> Self {
        Self {
            handle,
            printer: SnapshotPrinter::new(ladder),
        }
    }

    /// Run until the player quits, stdin closes, or the controller stops.
    pub async fn run(mut self) {
        let mut snapshots = self.handle.subscribe();
        let first = snapshots.borrow_and_update().clone();
        self.show(first);

        let mut lines = spawn_stdin_reader();

        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        debug!("Controller gone, leaving console loop");
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    self.show(snapshot);
                }
                line = lines.recv() => {
                    let Some(line) = line else {
                        self.handle.send(GameIntent::Quit).await;
                        break;
                    };
                    match parse_intent(&line) {
                        Some(GameIntent::Quit) => {
                            self.handle.send(GameIntent::Quit).await;
                            break;
                        }
                        Some(intent) => {
                            if !self.handle.send(intent).await {
                                break;
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => println!("{} {}", "Comando desconhecido.".yellow(), COMMANDS_HELP),
                    }
                }
            }
        }
    }

    fn show(&mut self, snapshot: SessionSnapshot) {
        if let Some(text) = self.printer.next(snapshot) {
            println!("{}", text);
        }
    }
}

/// Blocking stdin reads live on their own thread so shutdown never waits on
/// a pending read.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use milhao_domain::{GameRules, GameSession, QuestionPool, builtin_questions};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn session() -> GameSession {
        let pool = Arc::new(QuestionPool::from_questions(builtin_questions()));
        GameSession::start(pool, GameRules::default(), StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn test_first_snapshot_renders_screen() {
        colored::control::set_override(false);
        let session = session();
        let mut printer = SnapshotPrinter::new(PrizeLadder::standard());
        let text = printer.next(session.snapshot()).unwrap();
        assert!(text.contains("PERGUNTA 1 / 16"));
    }

    #[test]
    fn test_repeated_snapshot_prints_nothing() {
        let session = session();
        let mut printer = SnapshotPrinter::new(PrizeLadder::standard());
        printer.next(session.snapshot());
        assert!(printer.next(session.snapshot()).is_none());
    }

    #[test]
    fn test_ticks_print_only_warnings() {
        let mut session = session();
        let mut printer = SnapshotPrinter::new(PrizeLadder::standard());
        printer.next(session.snapshot());

        let mut printed = Vec::new();
        for _ in 0..29 {
            session.tick();
            let snapshot = session.snapshot();
            let left = snapshot.time_left;
            if printer.next(snapshot).is_some() {
                printed.push(left);
            }
        }
        assert_eq!(printed, vec![10, 5, 3, 2, 1]);
    }

    #[test]
    fn test_answer_redraws_screen() {
        colored::control::set_override(false);
        let mut session = session();
        let mut printer = SnapshotPrinter::new(PrizeLadder::standard());
        printer.next(session.snapshot());
        session.tick();
        printer.next(session.snapshot());

        let index = session.current_question().unwrap().correct_option();
        session.answer(index);
        let text = printer.next(session.snapshot()).unwrap();
        assert!(text.contains("PERGUNTA 2 / 16"));
    }
}
