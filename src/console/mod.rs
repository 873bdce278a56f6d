//! Line-oriented console for playing a session from a terminal or script.
//!
//! The console owns a [`GameSession`], reads one command per line, and
//! redraws the board, status, and history list whenever the session
//! reports a change. Rejected moves and jumps print the reason and leave
//! the session as it was.

mod command;
mod view;

pub use command::{Command, CommandError, HELP};
pub use view::{history_label, render_board, render_history};

use crate::config::ConsoleConfig;
use crate::games::tictactoe::{GameSession, MoveError, SessionEvent};
use anyhow::Result;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Interactive driver over a single session.
pub struct Console<R, W> {
    session: GameSession,
    config: ConsoleConfig,
    input: R,
    output: W,
    changed: Rc<Cell<bool>>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around `session`.
    #[instrument(skip_all)]
    pub fn new(mut session: GameSession, config: ConsoleConfig, input: R, output: W) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        session.subscribe(move |event: &SessionEvent| {
            debug!(?event, "Session changed");
            flag.set(true);
        });

        Self {
            session,
            config,
            input,
            output,
            changed,
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Returns the session in its final state.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameSession> {
        info!("Starting console");
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            }

            if self.changed.replace(false) {
                self.render()?;
            }
        }

        info!(
            current_move = self.session.current_move(),
            history_len = self.session.history_len(),
            "Console finished"
        );
        Ok(self.session)
    }

    #[instrument(skip(self))]
    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Play(position) => {
                let result = self.session.apply_move(position);
                self.report(result)?;
            }
            Command::Jump(target) => {
                let result = self.session.jump_to(target);
                self.report(result)?;
            }
            Command::History => writeln!(self.output, "{}", render_history(&self.session))?,
            Command::Status => writeln!(self.output, "{}", self.session.status())?,
            Command::Board => self.draw_board()?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.session.snapshot())?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn report(&mut self, result: Result<(), MoveError>) -> Result<()> {
        if let Err(e) = result {
            writeln!(self.output, "Rejected: {}", e)?;
        }
        Ok(())
    }

    fn draw_board(&mut self) -> Result<()> {
        let highlight = if *self.config.highlight_winner() {
            self.session.winning_line()
        } else {
            None
        };
        writeln!(
            self.output,
            "{}",
            render_board(self.session.current_board(), highlight)
        )?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.draw_board()?;
        writeln!(self.output, "{}", self.session.status())?;
        if *self.config.show_history() {
            writeln!(self.output, "{}", render_history(&self.session))?;
        }
        Ok(())
    }
}
