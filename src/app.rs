//! App: the interactive session and the auto-play bot.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trislide::probe::all_slides;
use trislide::render::{render_colored, render_plain};
use trislide::{EngineError, Game, GameConfig, SlideMove, TurnReport};

use crate::input::{Action, HELP, parse_command};
use crate::{Args, Mode};

pub struct App {
    game: Game,
    mode: Mode,
    color: bool,
    max_moves: u32,
    /// Picks bot moves when no slide makes a match.
    bot_rng: StdRng,
}

impl App {
    pub fn new(args: &Args, config: &GameConfig, seed: u64) -> Result<Self> {
        let game = Game::new(config, seed).context("failed to start game")?;
        tracing::info!(seed, rows = config.rows, "new game");
        Ok(Self {
            game,
            mode: args.mode,
            color: !args.no_color,
            max_moves: args.max_moves,
            bot_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.mode {
            Mode::Play => {
                let stdin = std::io::stdin();
                self.run_session(stdin.lock(), &mut out)
            }
            Mode::Auto => self.run_auto(&mut out),
        }
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        let board = if self.color {
            render_colored(self.game.board())
        } else {
            render_plain(self.game.board())
        };
        write!(out, "{board}")?;
        writeln!(
            out,
            "score {}  moves {}  cleared {}",
            self.game.score(),
            self.game.moves(),
            self.game.tiles_cleared()
        )?;
        Ok(())
    }

    /// Read commands until quit, end of input, or game over.
    pub fn run_session(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.draw(out)?;
        if self.game.is_over() {
            writeln!(out, "no slide can make a match; game over")?;
            return Ok(());
        }
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            match parse_command(&line) {
                Action::Quit => break,
                Action::None => {}
                Action::Help => writeln!(out, "{HELP}")?,
                Action::Show => self.draw(out)?,
                Action::Hint => match self.game.hint() {
                    Some(mv) => writeln!(out, "try {mv}")?,
                    None => writeln!(out, "no single slide makes a match")?,
                },
                Action::Invalid(msg) => writeln!(out, "{msg}")?,
                Action::Slide { row, direction } => match self.game.slide(row, direction) {
                    Ok(report) => {
                        self.report_turn(&report, out)?;
                        self.draw(out)?;
                        if report.game_over {
                            writeln!(out, "no slide can make a match; game over")?;
                            break;
                        }
                    }
                    Err(err @ EngineError::IndexOutOfRange { .. }) => writeln!(out, "{err}")?,
                    Err(err) => return Err(err.into()),
                },
            }
            out.flush()?;
        }
        self.summary(out)
    }

    /// Let the bot play: a matching slide when there is one, otherwise a random
    /// slide. Stops at game over or the move cap.
    pub fn run_auto(&mut self, out: &mut impl Write) -> Result<()> {
        self.draw(out)?;
        while !self.game.is_over() && self.game.moves() < self.max_moves {
            let Some(mv) = self.game.hint().or_else(|| self.random_slide()) else {
                break;
            };
            let report = self.game.slide(mv.row, mv.direction)?;
            if report.cleared > 0 {
                self.report_turn(&report, out)?;
            }
        }
        self.draw(out)?;
        self.summary(out)
    }

    fn random_slide(&mut self) -> Option<SlideMove> {
        let slides: Vec<SlideMove> = all_slides(self.game.board()).collect();
        if slides.is_empty() {
            return None;
        }
        Some(slides[self.bot_rng.random_range(0..slides.len())])
    }

    fn report_turn(&self, report: &TurnReport, out: &mut impl Write) -> Result<()> {
        if report.cleared == 0 {
            writeln!(out, "{}: no match", report.slide)?;
        } else {
            writeln!(
                out,
                "{}: cleared {} tiles in {} step(s), +{}",
                report.slide, report.cleared, report.cascades, report.points
            )?;
        }
        Ok(())
    }

    fn summary(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "final score {} after {} moves ({} tiles cleared, best chain {}){}",
            self.game.score(),
            self.game.moves(),
            self.game.tiles_cleared(),
            self.game.best_chain(),
            if self.game.is_over() { ", game over" } else { "" }
        )?;
        tracing::info!(score = self.game.score(), moves = self.game.moves(), "session ended");
        Ok(())
    }
}
