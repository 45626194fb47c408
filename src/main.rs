//! Grid Snake entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless session: frames with jittered timing, a few
//! random turns, event logging and a final summary.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use grid_snake::platform::init_logging;
    use grid_snake::sim::{DirectionInput, GameEvent};
    use grid_snake::{Game, GameConfig, Variant};

    /// Run grid snake episodes without a renderer
    #[derive(Debug, Parser)]
    #[command(name = "grid-snake", version)]
    struct Args {
        /// JSON config file (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed for both the game and the scripted input
        #[arg(long)]
        seed: Option<u64>,
        /// Presentation variant tag (prototype | full)
        #[arg(long)]
        variant: Option<String>,
        /// Episodes to play
        #[arg(long, default_value_t = 3)]
        episodes: u32,
        /// Frame cap per episode (60 fps nominal)
        #[arg(long, default_value_t = 36_000)]
        max_frames: u32,
    }

    const FRAME_SECONDS: f32 = 1.0 / 60.0;
    const INPUTS: [DirectionInput; 4] = [
        DirectionInput::Up,
        DirectionInput::Down,
        DirectionInput::Left,
        DirectionInput::Right,
    ];

    pub fn run() -> anyhow::Result<()> {
        init_logging();
        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_json(&json).context("parsing config")?
            }
            None => GameConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(name) = &args.variant {
            config.variant = Variant::from_str(name)
                .with_context(|| format!("unknown variant {:?}", name))?;
        }
        let input_seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(input_seed);
        let mut game = Game::new(config)?;
        let board = game.config().grid_half * 2 + 1;
        println!(
            "{} variant, {}x{} board",
            game.variant().as_str(),
            board,
            board
        );

        let mut best = 0;
        for episode in 1..=args.episodes {
            if episode > 1 {
                game.reset()?;
            }
            for _ in 0..args.max_frames {
                // 50% to 150% of a nominal frame
                let dt = FRAME_SECONDS * rng.random_range(0.5..1.5);
                if rng.random_ratio(1, 40) {
                    game.set_direction(INPUTS[rng.random_range(0..INPUTS.len())]);
                }
                game.tick(dt)?;
                for event in game.drain_events() {
                    match event {
                        GameEvent::AteFood { cell } => {
                            log::info!("Score {} (ate at {:?})", game.score(), cell)
                        }
                        GameEvent::GameOver { reason } => log::info!("Game over: {}", reason.as_str()),
                        GameEvent::Moved { .. } | GameEvent::FoodSpawned { .. } => {}
                    }
                }
                if !game.state().is_running() {
                    break;
                }
            }
            best = best.max(game.score());
            println!(
                "episode {}: score {}, steps {}, {}",
                episode,
                game.score(),
                game.steps(),
                game.game_over_reason()
                    .map(|r| r.as_str())
                    .unwrap_or("still running")
            );
        }

        println!("best score: {}", best);
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
