//! Dial Stop entry point
//!
//! The browser build is driven from the page through `platform::web::WebGame`.
//! Natively the binary plays a seeded demo game headless:
//!
//! ```text
//! dial-stop [PRESET | CONFIG.json] [SEED]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dial_stop::demo::AutoPlayer;
    use dial_stop::{Game, GameConfig, platform};

    platform::init_logging();
    log::info!("Dial Stop (native) starting...");

    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| "classic".to_string());
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(platform::clock_seed);

    let config = if source.ends_with(".json") {
        GameConfig::load(&source)
    } else {
        GameConfig::from_preset_name(&source)
    };
    let mut game = match config.and_then(|c| Game::new(&c)) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration ({source}): {e}");
            eprintln!("dial-stop: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Autoplay with seed: {}", seed);
    let results = AutoPlayer::new(seed).play_game(&mut game);
    for (i, r) in results.iter().enumerate() {
        println!(
            "Try {}: stopped after {} frames at {:.3} rad -> {} (tries {} / {})",
            i + 1,
            r.frames,
            r.angle,
            r.category,
            r.tries_remaining,
            game.max_tries()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WebGame, this is just to satisfy the compiler
}
