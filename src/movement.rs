#![cfg(feature = "std")]

//! Text narration of chess pieces sliding across the board.
//!
//! Each piece walks with a different loop discipline: the rook with a
//! counted `for`, the bishop with a `while` that tests before each step, and
//! the queen with a body-first loop that tests after each step.

use core::fmt;
use std::io::{self, Write};

use log::debug;

use crate::config::DrillConfig;

const RULE: &str = "======================================";

/// Message emitted instead of step lines when a piece has nowhere to go.
pub const NO_MOVEMENT: &str = "No movement made.";

/// Direction a piece slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    UpRight,
    Left,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::UpRight => write!(f, "up, right"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// Loop construct driving a piece's narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// Known iteration count, `1..=n`.
    Counted,
    /// Condition checked before the body.
    PreCondition,
    /// Body runs once, condition checked after.
    PostCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Rook,
    Bishop,
    Queen,
}

impl Piece {
    pub const ALL: [Piece; 3] = [Piece::Rook, Piece::Bishop, Piece::Queen];

    pub fn direction(self) -> Direction {
        match self {
            Piece::Rook => Direction::Right,
            Piece::Bishop => Direction::UpRight,
            Piece::Queen => Direction::Left,
        }
    }

    pub fn loop_kind(self) -> LoopKind {
        match self {
            Piece::Rook => LoopKind::Counted,
            Piece::Bishop => LoopKind::PreCondition,
            Piece::Queen => LoopKind::PostCondition,
        }
    }

    /// Step count for this piece in `config`.
    pub fn steps_in(self, config: &DrillConfig) -> u32 {
        match self {
            Piece::Rook => config.rook_steps,
            Piece::Bishop => config.bishop_steps,
            Piece::Queen => config.queen_steps,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Piece::Rook => "      ROOK MOVEMENT SIMULATION",
            Piece::Bishop => "     BISHOP MOVEMENT SIMULATION",
            Piece::Queen => "    QUEEN MOVEMENT SIMULATION",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Piece::Rook => "to the right",
            Piece::Bishop => "diagonally (up and right)",
            Piece::Queen => "to the left",
        }
    }
}

fn step_line<W: Write>(out: &mut W, step: u32, direction: Direction) -> io::Result<()> {
    writeln!(out, "step {}: {}", step, direction)
}

/// Counted loop: one line per step, `1..=steps`.
pub fn move_rook<W: Write>(out: &mut W, steps: u32) -> io::Result<()> {
    for step in 1..=steps {
        step_line(out, step, Direction::Right)?;
    }
    Ok(())
}

/// Pre-condition loop: the counter is tested before each step.
pub fn move_bishop<W: Write>(out: &mut W, steps: u32) -> io::Result<()> {
    let mut counter = 0;
    while counter < steps {
        counter += 1;
        step_line(out, counter, Direction::UpRight)?;
    }
    Ok(())
}

/// Post-condition loop: the body runs before the counter is tested.
///
/// With zero steps the loop is skipped and [`NO_MOVEMENT`] is written
/// instead.
pub fn move_queen<W: Write>(out: &mut W, steps: u32) -> io::Result<()> {
    if steps == 0 {
        writeln!(out, "{}", NO_MOVEMENT)?;
        return Ok(());
    }
    let mut counter = 0;
    loop {
        counter += 1;
        step_line(out, counter, Direction::Left)?;
        if counter >= steps {
            break;
        }
    }
    Ok(())
}

/// Write the section header for `piece`, then its step lines.
pub fn narrate_piece<W: Write>(out: &mut W, piece: Piece, steps: u32) -> io::Result<()> {
    debug!(
        "narrating {:?}: {} steps {} ({:?} loop)",
        piece,
        steps,
        piece.direction(),
        piece.loop_kind()
    );
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", piece.title())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Moving {} squares {}:", steps, piece.heading())?;
    match piece.loop_kind() {
        LoopKind::Counted => move_rook(out, steps),
        LoopKind::PreCondition => move_bishop(out, steps),
        LoopKind::PostCondition => move_queen(out, steps),
    }
}

/// Narrate rook, bishop and queen in order.
///
/// A blank line separates consecutive sections; nothing trails the last one.
pub fn narrate<W: Write>(out: &mut W, config: &DrillConfig) -> io::Result<()> {
    for (i, piece) in Piece::ALL.iter().enumerate() {
        narrate_piece(out, *piece, piece.steps_in(config))?;
        if i + 1 < Piece::ALL.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}
