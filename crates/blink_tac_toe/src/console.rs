//! Line-oriented terminal front end.
//!
//! Reads setup answers and commands from any [`BufRead`], writes the board
//! and notifications to any [`Write`]. All game logic lives in the
//! [`Session`]; this module only translates text to events and back.

use anyhow::Result;
use blink_tictactoe::{
    Categories, Event, Notification, Position, Seat, Session, SessionError, SetupError,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// How-to-play text.
pub const RULES: &str = "\
How to Play
  - Choose emoji categories and enter player names.
  - Players take turns placing a random emoji from their category on the grid.
  - Only 3 emojis per player can exist at a time. Placing a 4th makes your
    oldest one vanish. You cannot place on the cell that is vanishing.
  - Align 3 of your own emojis in a row, column or diagonal to win.
  - Type 'reset' to play again; scores are kept.

Commands: 0-8 or a cell name (e.g. 'top left'), undo, redo, reset, state,
help, quit";

/// Names and categories supplied up front, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    /// Per-seat names.
    pub names: [Option<String>; 2],
    /// Per-seat categories.
    pub categories: [Option<String>; 2],
}

/// One line of player input during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the session.
    Event(Event),
    /// Dump the authoritative state as JSON.
    State,
    /// Show the rules.
    Help,
    /// Leave.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses a line. Blank lines yield `None`.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let command = match line.to_lowercase().as_str() {
            "undo" | "u" => Command::Event(Event::Undo),
            "redo" | "r" => Command::Event(Event::Redo),
            "reset" | "again" => Command::Event(Event::Reset),
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => match Position::parse(line) {
                Some(pos) => Command::Event(Event::CellClick(pos.to_index())),
                None => Command::Unknown(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Maps a category answer to a catalogue name: a 1-based number or a
/// case-insensitive name. Unmatched answers come back unchanged so the
/// session can reject them.
fn resolve_category(categories: &Categories, answer: &str) -> String {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>()
        && let Some(name) = n.checked_sub(1).and_then(|i| categories.names().nth(i))
    {
        return name.to_string();
    }
    categories
        .names()
        .find(|name| name.eq_ignore_ascii_case(answer))
        .unwrap_or(answer)
        .to_string()
}

/// Terminal front end over a reader and a writer.
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prints `text` and reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, note: &Notification) -> Result<()> {
        writeln!(self.output, "{}", note)?;
        Ok(())
    }

    fn report(&mut self, err: &SessionError) -> Result<()> {
        match err.notification() {
            Some(note) => self.notify(&note),
            None => {
                writeln!(self.output, "  ({})", err)?;
                Ok(())
            }
        }
    }

    /// Collects names and categories and starts the match.
    ///
    /// Returns false if input ended before the match could start.
    #[instrument(skip_all)]
    pub fn run_setup<R: Rng>(&mut self, session: &mut Session<R>, preset: &Preset) -> Result<bool> {
        writeln!(self.output, "Blink Tac Toe")?;
        writeln!(self.output, "=============")?;

        for seat in Seat::ALL {
            if let Some(name) = &preset.names[seat.index()] {
                session.set_name(seat, name)?;
            }
            while session.setup().and_then(|s| s.name(seat)).is_none() {
                let Some(name) = self.prompt(&format!("Name for {}: ", seat))? else {
                    return Ok(false);
                };
                session.set_name(seat, &name)?;
            }
            if !self.choose_category(session, seat, preset.categories[seat.index()].clone())? {
                return Ok(false);
            }
        }

        loop {
            match session.start() {
                Ok(()) => break,
                Err(err @ SessionError::Setup(SetupError::SharedCategory(_))) => {
                    self.report(&err)?;
                    if !self.choose_category(session, Seat::Two, None)? {
                        return Ok(false);
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        writeln!(self.output, "\n{}\n", RULES)?;
        Ok(true)
    }

    fn choose_category<R: Rng>(
        &mut self,
        session: &mut Session<R>,
        seat: Seat,
        mut preset: Option<String>,
    ) -> Result<bool> {
        loop {
            let answer = match preset.take() {
                Some(answer) => answer,
                None => {
                    for (i, category) in session.categories().iter().enumerate() {
                        let symbols: Vec<_> = category.symbols().iter().map(|s| s.as_str()).collect();
                        writeln!(self.output, "  {}. {}: {}", i + 1, category.name(), symbols.join(" "))?;
                    }
                    let name = session
                        .setup()
                        .and_then(|s| s.name(seat))
                        .map(str::to_string)
                        .unwrap_or_else(|| seat.to_string());
                    match self.prompt(&format!("Category for {} (number or name): ", name))? {
                        Some(answer) => answer,
                        None => return Ok(false),
                    }
                }
            };

            let category = resolve_category(session.categories(), &answer);
            match session.select_category(seat, &category) {
                Ok(note) => {
                    self.notify(&note)?;
                    return Ok(true);
                }
                Err(err) => self.report(&err)?,
            }
        }
    }

    /// Draws the displayed snapshot, scores and status.
    fn render<R>(&mut self, session: &Session<R>) -> Result<()> {
        let (Some(state), Some(history)) = (session.state(), session.history()) else {
            return Ok(());
        };
        let snapshot = history.current();

        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board().display())?;
        if !history.is_at_tail() {
            writeln!(
                self.output,
                "(viewing step {} of {}; 'redo' to go forward)",
                history.cursor(),
                history.len() - 1
            )?;
        }
        if let Some(line) = snapshot.winning_line() {
            let cells: Vec<_> = line.indices().iter().map(ToString::to_string).collect();
            writeln!(self.output, "Winning line: {}", cells.join("-"))?;
        }
        let [one, two] = state.score_lines();
        writeln!(self.output, "{}  |  {}", one, two)?;
        writeln!(self.output, "{}", state.status_line())?;
        Ok(())
    }

    /// Runs the match until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run_match<R: Rng>(&mut self, session: &mut Session<R>) -> Result<()> {
        self.render(session)?;
        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!(?command, "Console command");

            match command {
                Command::Quit => break,
                Command::Help => writeln!(self.output, "{}", RULES)?,
                Command::State => {
                    if let Some(state) = session.state() {
                        writeln!(self.output, "{}", serde_json::to_string_pretty(state)?)?;
                    }
                }
                Command::Unknown(text) => {
                    writeln!(self.output, "Unrecognised input {:?}; type 'help'", text)?;
                }
                Command::Event(event) => {
                    match session.handle(event) {
                        Ok(notes) => {
                            for note in &notes {
                                self.notify(note)?;
                            }
                        }
                        Err(err) => self.report(&err)?,
                    }
                    self.render(session)?;
                }
            }
        }
        writeln!(self.output, "Bye!")?;
        Ok(())
    }
}
