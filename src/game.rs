//! Host-facing game facade
//!
//! Wires the clock, input router and simulation together behind the handful
//! of calls a renderer needs: reset, tick, set_direction and read accessors.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::platform::KeyCommand;
use crate::settings::{ConfigError, GameConfig, Variant};
use crate::sim::{
    Cell, DirectionInput, GameEvent, GameOverReason, GamePhase, GameState, Obstacle,
    SimulationClock, Snapshot, SpawnError, step,
};

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The board filled up; only possible with an over-dense configuration
    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),
}

pub struct Game {
    config: GameConfig,
    state: GameState,
    clock: SimulationClock,
    /// Draws one seed per episode
    seeds: Pcg32,
    /// Events since the last drain
    events: Vec<GameEvent>,
    episodes: u32,
}

impl Game {
    /// Validate `config` and start the first episode
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let master_seed = config.seed.unwrap_or_else(rand::random);
        let mut seeds = Pcg32::seed_from_u64(master_seed);
        let state = GameState::new(&config, seeds.random())?;
        let clock = SimulationClock::new(config.step_seconds, config.max_frame_seconds);
        log::info!(
            "Game created ({} variant, master seed {})",
            config.variant.as_str(),
            master_seed
        );
        Ok(Self {
            config,
            state,
            clock,
            seeds,
            events: Vec::new(),
            episodes: 1,
        })
    }

    /// Replace the whole episode. On error the previous episode is kept.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let state = GameState::new(&self.config, self.seeds.random())?;
        self.state = state;
        self.clock.reset();
        self.events.clear();
        self.episodes += 1;
        Ok(())
    }

    /// Advance by `dt` seconds of wall time, running any steps that fall due
    pub fn tick(&mut self, dt: f32) -> Result<(), GameError> {
        if !self.state.is_running() {
            return Ok(());
        }
        let due = self.clock.advance(dt);
        for _ in 0..due {
            match step(&mut self.state) {
                Ok(events) => self.events.extend(events),
                Err(err) => {
                    self.events.push(GameEvent::GameOver {
                        reason: GameOverReason::BoardFull,
                    });
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    /// Request a turn. Ignored after game over; false if rejected.
    pub fn set_direction(&mut self, input: DirectionInput) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state.input.set_direction(input)
    }

    /// Apply a host key name (see [`KeyCommand::from_key`]); unknown keys are ignored
    pub fn handle_key(&mut self, key: &str) -> Result<(), GameError> {
        match KeyCommand::from_key(key) {
            Some(KeyCommand::Turn(input)) => {
                self.set_direction(input);
            }
            Some(KeyCommand::Restart) => self.reset()?,
            None => {}
        }
        Ok(())
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.state.snake
    }

    pub fn foods(&self) -> &[Cell] {
        &self.state.foods
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.state.reason
    }

    /// Interpolation fraction between the previous and current step
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    /// Completed moves this episode
    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    /// Episodes started so far, including the current one
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(self.clock.progress())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn direction_input() -> impl Strategy<Value = Option<DirectionInput>> {
        prop_oneof![
            3 => Just(None),
            1 => Just(Some(DirectionInput::Up)),
            1 => Just(Some(DirectionInput::Down)),
            1 => Just(Some(DirectionInput::Left)),
            1 => Just(Some(DirectionInput::Right)),
        ]
    }

    proptest! {
        #[test]
        fn episode_invariants_hold(
            seed in any::<u64>(),
            frames in prop::collection::vec((0.0f32..0.5, direction_input()), 1..200),
        ) {
            let config = GameConfig { grid_half: 6, ..GameConfig::default() }.with_seed(seed);
            let mut game = Game::new(config).unwrap();
            let mut head = game.snake()[0];

            for (dt, input) in frames {
                if let Some(input) = input {
                    game.set_direction(input);
                }
                game.tick(dt).unwrap();

                for event in game.drain_events() {
                    if let GameEvent::Moved { head: new_head } = event {
                        prop_assert_eq!(head.manhattan(new_head), 1);
                        head = new_head;
                    }
                }

                prop_assert_eq!(game.snake().len() as u32, game.score() + 1);
                prop_assert!((0.0..=1.0).contains(&game.progress()));
                if game.phase() == GamePhase::Running {
                    prop_assert_eq!(game.foods().len(), 3);
                    prop_assert!(game.snake().iter().all(|c| c.in_bounds(6)));
                    let unique: HashSet<_> = game.snake().iter().collect();
                    prop_assert_eq!(unique.len(), game.snake().len());
                    for food in game.foods() {
                        prop_assert!(!game.snake().contains(food));
                        prop_assert!(!game.obstacles().iter().any(|o| o.covers(*food)));
                    }
                } else {
                    prop_assert!(game.game_over_reason().is_some());
                }
            }
        }

        #[test]
        fn reset_always_yields_fresh_episode(seed in any::<u64>(), steps in 0u32..40) {
            let config = GameConfig::default().with_seed(seed);
            let mut game = Game::new(config).unwrap();
            game.tick(steps as f32 * 0.18).unwrap();
            game.reset().unwrap();

            prop_assert_eq!(game.phase(), GamePhase::Running);
            prop_assert_eq!(game.score(), 0);
            prop_assert_eq!(game.snake().len(), 1);
            prop_assert_eq!(game.snake()[0], Cell::ORIGIN);
            prop_assert_eq!(game.foods().len(), 3);
            prop_assert_eq!(game.obstacles().len(), 3);
        }
    }
}
