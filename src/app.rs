#![cfg(feature = "std")]

//! Composes the two drills into one program run.

use std::io::{self, Write};

use log::info;

use crate::board::initialize_board;
use crate::config::DrillConfig;
use crate::movement::narrate;

const BANNER_RULE: &str = "#################################################";
const BANNER_TITLE: &str = "   START OF CHALLENGE: PLACING SHIPS";

/// Separator printed between the movement drill and the board drill.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n\n{}\n{}\n{}\n\n", BANNER_RULE, BANNER_TITLE, BANNER_RULE)
}

/// Run the movement drill, print the banner, then set up the board.
///
/// The board is initialized but never written to `out`.
pub fn run<W: Write>(out: &mut W, config: &DrillConfig) -> io::Result<()> {
    info!("starting movement drill with {:?}", config);
    narrate(out, config)?;
    write_banner(out)?;
    let setup = initialize_board();
    info!(
        "board drill done, horizontal ship origin {:?}",
        setup.horizontal_origin
    );
    out.flush()
}
