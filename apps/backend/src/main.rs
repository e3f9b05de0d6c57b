use bowling_backend::config::EngineConfig;
use bowling_backend::domain::{create_initial_state, replay, GameSnapshot, Pins};
use bowling_backend::telemetry;
use tracing::error;

const USAGE: &str = "usage: bowling <name,name,...> [pins,pins,...]";

fn main() {
    telemetry::init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(names) = args.next() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let rolls = match parse_rolls(args.next().as_deref().unwrap_or("")) {
        Ok(rolls) => rolls,
        Err(bad) => {
            eprintln!("❌ '{bad}' is not a pin count\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(code = %e.code(), detail = %e, "Invalid configuration");
            eprintln!("❌ {}: {e}", e.code());
            std::process::exit(1);
        }
    };

    let game = create_initial_state(names.split(','), &config).and_then(|g| replay(&g, &rolls));
    let game = match game {
        Ok(game) => game,
        Err(e) => {
            error!(code = %e.code(), detail = e.detail(), "Replay failed");
            eprintln!("❌ {}: {}", e.code(), e.detail());
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&GameSnapshot::from_game(&game)) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("❌ Failed to render snapshot: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_rolls(raw: &str) -> Result<Vec<Pins>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Pins>().map_err(|_| s.to_owned()))
        .collect()
}
