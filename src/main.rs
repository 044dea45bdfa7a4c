#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use board_drills::{init_logging, run, DrillConfig, BISHOP_STEPS, QUEEN_STEPS, ROOK_STEPS};
#[cfg(feature = "std")]
use clap::Parser;

/// Chess movement narration followed by naval board setup.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = ROOK_STEPS, help = "Squares the rook moves right")]
    rook_steps: u32,
    #[arg(long, default_value_t = BISHOP_STEPS, help = "Squares the bishop moves up and right")]
    bishop_steps: u32,
    #[arg(long, default_value_t = QUEEN_STEPS, help = "Squares the queen moves left")]
    queen_steps: u32,
}

#[cfg(feature = "std")]
impl From<Cli> for DrillConfig {
    fn from(cli: Cli) -> Self {
        DrillConfig::new(cli.rook_steps, cli.bishop_steps, cli.queen_steps)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let config = DrillConfig::from(Cli::parse());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &config)?;
    Ok(())
}
