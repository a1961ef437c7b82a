use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use aho_corasick::BuildError;
use lib_2048::{GameSession, Grid, GridError, RandomSource};

use crate::{input::Input, render::Renderer};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("terminal I/O failed: {_0}")]
    Io(io::Error),
    #[display("invalid board: {_0}")]
    Grid(GridError),
    #[display("could not build key decoder: {_0}")]
    Keys(BuildError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub colour: bool,
}

/// Everything the shell owns while a game is running.
pub struct App<R, W> {
    session: GameSession<R>,
    renderer: Renderer,
    out: W,
}

impl<R, W> App<R, W>
where
    R: RandomSource,
    W: Write,
{
    /// Starts a session and draws the first frame.
    pub fn init(config: &Config, rng: R, out: W) -> Result<Self, AppError> {
        let grid = Grid::new(config.rows, config.cols)?;

        let mut app = Self {
            session: GameSession::new(grid, rng),
            renderer: Renderer::new(config.colour),
            out,
        };
        app.out.write_all(b"\x1b[?25l")?;
        app.iterate()?;

        Ok(app)
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Handles one decoded key press.
    pub fn event(&mut self, input: Input) -> ControlFlow<()> {
        let Input::Command(command) = input else {
            return ControlFlow::Break(());
        };

        log::trace!("{command}");

        if let Some(outcome) = self.session.apply(command) {
            if outcome.changed && !self.session.has_legal_move() {
                log::info!(
                    "no moves left, final score {} (best {})",
                    self.session.score(),
                    self.session.high_score()
                );
            }
        }

        ControlFlow::Continue(())
    }

    /// Redraws the board.
    pub fn iterate(&mut self) -> io::Result<()> {
        self.renderer
            .draw(&mut self.out, &self.session.snapshot())
            .map(|_| ())
    }

    /// Restores the cursor and hands back the output.
    pub fn quit(mut self) -> io::Result<W> {
        self.out.write_all(b"\x1b[?25h")?;
        self.out.flush()?;

        Ok(self.out)
    }
}
