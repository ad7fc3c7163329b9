use liars_dice::{sim::simulate, EngineConfig, HistoryMode, ValidationTarget};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: {} <seed> <games> [full|latest] [last|opponent]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    let history = match args.get(3).map(String::as_str) {
        None | Some("full") => HistoryMode::Full,
        Some("latest") => HistoryMode::LatestOnly,
        Some(other) => anyhow::bail!("unknown history mode: {}", other),
    };
    let validation = match args.get(4).map(String::as_str) {
        None | Some("last") => ValidationTarget::LastBid,
        Some("opponent") => ValidationTarget::OpponentBid,
        Some(other) => anyhow::bail!("unknown validation target: {}", other),
    };

    let report = simulate(EngineConfig { history, validation }, seed, games)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
