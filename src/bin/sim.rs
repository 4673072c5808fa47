use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    Coord, EngineConfig, InMemoryStore, OutcomeKind, PlayerId, RecordingSink, SessionManager,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let store = Arc::new(InMemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let manager = SessionManager::new(
        store.clone(),
        sink.clone(),
        EngineConfig::default().with_seed(seed),
    );
    let player = PlayerId(seed);
    manager.start(player, Some("sim".to_string())).await?;

    let mut targets: Vec<Coord> = Coord::all().collect();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    targets.shuffle(&mut rng);

    let mut sunk = 0;
    let mut won = false;
    let mut moves = 0;
    for at in targets {
        let report = manager.play(player, at.col(), at.row()).await?;
        match report.outcome.kind() {
            OutcomeKind::Sunk => sunk += 1,
            OutcomeKind::Win => {
                // the winning shot also finishes the last ship
                sunk += 1;
                won = true;
            }
            _ => {}
        }
        moves = report.session.moves();
        if won {
            break;
        }
    }

    let result = json!({
        "seed": seed,
        "moves": moves,
        "won": won,
        "ships_sunk": sunk,
        "events": sink.events().len(),
        "sessions": store.sessions()?.len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
