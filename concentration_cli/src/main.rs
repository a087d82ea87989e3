use std::time::Duration;

use clap::Parser;
use concentration::{play_game, Board, BoardSize, Game};
use concentration_cli::TerminalFrontend;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Side length of the board, an even number from 2 to 10. Asked interactively if not given
    #[arg(short, long, conflicts_with = "standard")]
    size: Option<usize>,

    /// Play on the standard 6x6 board without asking
    #[arg(long, default_value_t = false)]
    standard: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How long both cards of a turn stay face-up, in milliseconds
    #[arg(long, default_value_t = 1000)]
    turn_delay_ms: u64,

    /// Don't clear the screen before drawing the board
    #[arg(long, default_value_t = false)]
    no_clear: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut frontend = TerminalFrontend::new(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        !args.no_clear,
    );

    let size = match args.size {
        Some(size) => BoardSize::new(size)?,
        None if args.standard => BoardSize::STANDARD,
        None => frontend.choose_board_size()?,
    };
    info!(%size, "Starting game");

    let mut game = Game::new(Board::new(size, &mut rng));
    play_game(
        &mut game,
        &mut frontend,
        Duration::from_millis(args.turn_delay_ms),
    )?;

    Ok(())
}

// Logs go to stderr, so that they don't get mixed up with the board
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
