#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::Write;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use liars_dice::{
    cli::{self, Command},
    init_logging, EngineConfig, GameConfig, HistoryMode, Session, ValidationTarget,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a round against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1500, help = "Computer thinking time in milliseconds")]
        think_ms: u64,
        #[arg(long, value_enum, default_value_t = HistoryMode::Full)]
        history: HistoryMode,
        #[arg(long, value_enum, default_value_t = ValidationTarget::LastBid)]
        validate: ValidationTarget,
    },
    /// Print the rules.
    Rules,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            think_ms,
            history,
            validate,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig {
                engine: EngineConfig { history, validation: validate },
                think_time: Duration::from_millis(think_ms),
            };
            run_cli(Session::new(config, rng)).await?;
        }
        Commands::Rules => print!("{}", cli::render_rules()),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn redraw(session: &Session) {
    let view = session.view();
    println!();
    print!("{}", cli::render_view(&view, &session.selection()));
    if let Some(hint) = cli::render_hint(&view) {
        print!("{}", hint);
    }
}

#[cfg(feature = "std")]
fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(feature = "std")]
async fn run_cli(mut session: Session) -> anyhow::Result<()> {
    println!("Liar's Dice (type `help` for commands)");
    redraw(&session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = cli::parse_command(&line) else {
                    println!("Invalid input (type `help` for commands)");
                    continue;
                };
                match command {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{}", cli::HELP);
                        continue;
                    }
                    Command::Rules => {
                        print!("{}", cli::render_rules());
                        continue;
                    }
                    _ => {}
                }
                for event in command.events() {
                    for notice in session.handle(event) {
                        println!("{}", cli::render_notice(&notice));
                    }
                }
                redraw(&session);
            }
            Some(ticket) = session.next_ticket() => {
                if let Some(record) = session.apply_ticket(ticket) {
                    println!("\nComputer bids {}", record.bid);
                    redraw(&session);
                }
            }
        }
    }
    println!("Goodbye!");
    Ok(())
}
