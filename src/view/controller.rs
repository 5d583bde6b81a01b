//! Interactive browse session.
//!
//! Multiplexes stdin commands with fetch completions. Each `apply`
//! spawns one retrieval task; outcomes come back over an mpsc channel
//! tagged with their sequence number and go through
//! [`ViewState::complete`], which discards superseded ones. Fetch
//! failures are reported on stderr only; the grid keeps its previous
//! contents. In-flight fetches are never cancelled.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use crate::client::{CredentialSource, FetchError};
use crate::models::CredentialRecord;
use crate::output::RecordRenderer;
use crate::output::table::TableRenderer;
use crate::view::state::{Completion, ViewState};

/// One finished retrieval, tagged with the sequence number it was
/// issued under.
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<Vec<CredentialRecord>, FetchError>,
}

/// What the command loop should do after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// Interactive session owning the view state and the outcome channel.
pub struct BrowseSession {
    state: ViewState,
    source: Arc<dyn CredentialSource>,
    reveal_passwords: bool,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl BrowseSession {
    pub fn new(source: Arc<dyn CredentialSource>, limit: u32, reveal_passwords: bool) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::new(limit),
            source,
            reveal_passwords,
            tx,
            rx,
        }
    }

    /// Run the session: one unfiltered fetch up front, then the command
    /// loop until `quit` or EOF on stdin.
    pub async fn run(mut self) -> std::io::Result<()> {
        self.apply();

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print_prompt();
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if self.handle_command(line.trim()) == SessionControl::Quit {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                Some(outcome) = self.rx.recv() => {
                    eprintln!();
                    self.handle_outcome(outcome);
                }
            }
        }

        Ok(())
    }

    /// Start a retrieval for the currently buffered filters.
    ///
    /// Applying while a fetch is in flight is allowed; the new fetch
    /// supersedes the old one, whose outcome will arrive stale.
    pub fn apply(&mut self) {
        let (seq, query) = self.state.begin_fetch();
        eprintln!("  {} {}", "◌".cyan().bold(), "fetching records…".cyan());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(&query).await;
            let _ = tx.send(FetchOutcome { seq, result });
        });
    }

    /// Receive the next fetch outcome. Used by the run loop, and by
    /// tests driving the session without stdin.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.rx.recv().await
    }

    /// Handle one line of user input.
    pub fn handle_command(&mut self, line: &str) -> SessionControl {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "email" => {
                self.state.set_email(rest);
                print_buffered("email", rest);
            }
            "domain" => {
                self.state.set_domain(rest);
                print_buffered("domain", rest);
            }
            "limit" => match rest.parse::<u32>() {
                Ok(limit) if limit > 0 => {
                    self.state.set_limit(limit);
                    print_buffered("limit", rest);
                }
                _ => eprintln!("  {} limit must be a positive integer", "✖".red().bold()),
            },
            "apply" | "fetch" => self.apply(),
            "show" => self.render(),
            "filters" => {
                eprintln!(
                    "  email: {:?}  domain: {:?}  limit: {}",
                    self.state.email_filter(),
                    self.state.domain_filter(),
                    self.state.limit(),
                );
            }
            "reveal" => {
                self.reveal_passwords = true;
                eprintln!("  passwords revealed");
            }
            "mask" => {
                self.reveal_passwords = false;
                eprintln!("  passwords masked");
            }
            "help" => print_help(),
            "quit" | "exit" => return SessionControl::Quit,
            other => {
                eprintln!("  unknown command '{other}' — type 'help' for commands");
            }
        }

        SessionControl::Continue
    }

    /// Apply one fetch outcome to the state and report it.
    pub fn handle_outcome(&mut self, outcome: FetchOutcome) {
        match self.state.complete(outcome.seq, outcome.result) {
            Completion::Replaced(count) => {
                let noun = if count == 1 { "record" } else { "records" };
                eprintln!("  {} {}", "✔".green().bold(), format!("{count} {noun}").green());
                self.render();
            }
            Completion::Failed(reason) => {
                eprintln!("  {} {}", "✖".red().bold(), reason.red());
            }
            // Superseded by a newer fetch; a current one may still be in flight.
            Completion::Stale => {}
        }
    }

    fn render(&self) {
        let renderer = TableRenderer::new(self.reveal_passwords);
        print!("{}", renderer.render(self.state.records()));
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

fn print_prompt() {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "{} ", "credview>".bold());
    let _ = stdout.flush();
}

fn print_buffered(name: &str, value: &str) {
    if value.is_empty() {
        eprintln!("  {name} filter cleared — 'apply' to refetch");
    } else {
        eprintln!("  {name} set to '{value}' — 'apply' to refetch");
    }
}

fn print_help() {
    eprintln!("  email [value]    set or clear the email filter (buffered)");
    eprintln!("  domain [value]   set or clear the domain filter (buffered)");
    eprintln!("  limit <n>        set the record cap (buffered)");
    eprintln!("  apply            fetch with the buffered filters");
    eprintln!("  show             re-render the current records");
    eprintln!("  filters          print the buffered filter values");
    eprintln!("  reveal / mask    toggle password display");
    eprintln!("  quit             leave the session");
}
