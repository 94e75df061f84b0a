#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, print_boards, tally, AiPlayer, CliPlayer, Game, GameError, Player, Side,
    StatusLine, TurnState, DEFAULT_AI_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{thread, time::Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pause before each computer shot")]
        ai_delay_ms: u64,
    },
    /// Watch a second computer player take the human's seat.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause before each computer shot")]
        ai_delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, ai_delay_ms } => {
            let mut game = Game::new(make_rng(seed)).map_err(|e| anyhow::anyhow!(e))?;
            game.set_observer(Box::new(StatusLine));
            let mut player = CliPlayer::new();
            let delay = Duration::from_millis(ai_delay_ms);
            loop {
                println!("Your turn! Pick a cell on the AI's board to fire.");
                if !run_interactive(&mut game, &mut player, delay)? {
                    println!("Bye.");
                    return Ok(());
                }
                if !player.confirm("Play again?")? {
                    return Ok(());
                }
                game.reset().map_err(|e| anyhow::anyhow!(e))?;
            }
        }
        Commands::Demo { seed, ai_delay_ms } => {
            let mut rng = make_rng(seed);
            let stand_in_rng = SmallRng::from_rng(&mut rng);
            let mut game = Game::new(rng).map_err(|e| anyhow::anyhow!(e))?;
            game.set_observer(Box::new(StatusLine));
            run_demo(&mut game, stand_in_rng, Duration::from_millis(ai_delay_ms))?;
        }
    }
    Ok(())
}

/// Play one game against the keyboard. Returns `false` if the human quit.
#[cfg(feature = "std")]
fn run_interactive(
    game: &mut Game<SmallRng>,
    player: &mut CliPlayer<std::io::StdinLock<'static>>,
    delay: Duration,
) -> anyhow::Result<bool> {
    loop {
        match game.state() {
            TurnState::PlayerTurn => {
                print_boards(game);
                let Some((r, c)) = player.prompt_target()? else {
                    return Ok(false);
                };
                match game.on_cell_clicked(Side::Ai, r, c) {
                    Ok(_) => {}
                    Err(e) if e.is_recoverable() => println!("{}", e),
                    Err(e) => return Err(anyhow::anyhow!(e)),
                }
            }
            TurnState::AiTurn => {
                thread::sleep(delay);
                game.take_ai_turn().map_err(|e| anyhow::anyhow!(e))?;
            }
            TurnState::PlayerWon | TurnState::AiWon => {
                print_summary(game);
                return Ok(true);
            }
        }
    }
}

/// Drive the human seat with a second AI player until someone wins.
#[cfg(feature = "std")]
fn run_demo(game: &mut Game<SmallRng>, mut rng: SmallRng, delay: Duration) -> anyhow::Result<()> {
    let mut stand_in = AiPlayer::new();
    loop {
        match game.state() {
            TurnState::PlayerTurn => {
                let (r, c) = stand_in
                    .select_target(&mut rng, game.guesses(Side::Player))
                    .map_err(|e| anyhow::anyhow!(e))?;
                let report = game
                    .on_cell_clicked(Side::Ai, r, c)
                    .map_err(|e: GameError| anyhow::anyhow!(e))?;
                stand_in.handle_shot_result((r, c), report.outcome);
            }
            TurnState::AiTurn => {
                thread::sleep(delay);
                game.take_ai_turn().map_err(|e| anyhow::anyhow!(e))?;
            }
            TurnState::PlayerWon | TurnState::AiWon => break,
        }
    }
    print_summary(game);
    Ok(())
}

#[cfg(feature = "std")]
fn print_summary(game: &Game<SmallRng>) {
    print_boards(game);
    let (player_hits, player_misses) = tally(&game.board_view(Side::Ai));
    let (ai_hits, ai_misses) = tally(&game.guesses(Side::Ai).view());
    println!(
        "Your shots: {} hits, {} misses. AI shots: {} hits, {} misses.",
        player_hits, player_misses, ai_hits, ai_misses
    );
}
