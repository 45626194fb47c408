//! One discrete simulation step
//!
//! Check order is fixed: wall, self, obstacle, then food. The fatal checks
//! all run before any growth, so a step never both eats and dies.

use super::cell::Cell;
use super::spawn::SpawnError;
use super::state::{GameEvent, GameOverReason, GameState};

/// Advance the episode by one grid move. No-op once the game is over.
///
/// A failed food refill ends the episode with `BoardFull` before the error is
/// returned, so a running state always carries its full food count.
pub fn step(state: &mut GameState) -> Result<Vec<GameEvent>, SpawnError> {
    let mut events = Vec::new();
    if !state.is_running() {
        return Ok(events);
    }

    let direction = state.input.latch();
    let new_head = state.head().offset(direction);

    if let Some(reason) = collision(state, new_head) {
        state.end(reason);
        events.push(GameEvent::GameOver { reason });
        return Ok(events);
    }

    state.snake.push_front(new_head);
    state.steps += 1;
    events.push(GameEvent::Moved { head: new_head });

    match state.foods.iter().position(|&f| f == new_head) {
        Some(index) => {
            state.foods.swap_remove(index);
            state.score += 1;
            log::debug!("Ate food at {:?}, score {}", new_head, state.score);
            events.push(GameEvent::AteFood { cell: new_head });
            match state.refill_food() {
                Ok(spawned) => {
                    events.extend(spawned.into_iter().map(|cell| GameEvent::FoodSpawned { cell }));
                }
                Err(err) => {
                    state.end(GameOverReason::BoardFull);
                    return Err(err);
                }
            }
        }
        None => {
            state.snake.pop_back();
        }
    }

    Ok(events)
}

/// Fatal collision for a head moving onto `cell`, if any.
///
/// The self check uses the whole body, tail included: moving into the cell
/// the tail is about to vacate is still a collision.
fn collision(state: &GameState, cell: Cell) -> Option<GameOverReason> {
    let grid = state.occupancy();
    if !cell.in_bounds(state.grid_half) {
        Some(GameOverReason::HitWall)
    } else if grid.snake_contains(cell) {
        Some(GameOverReason::HitSelf)
    } else if grid.obstacle_contains(cell) {
        Some(GameOverReason::HitObstacle)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::cell::Direction;
    use crate::sim::input::{DirectionInput, InputRouter};
    use crate::sim::spawn::SpawnPlanner;
    use crate::sim::state::{GamePhase, Obstacle};
    use std::collections::VecDeque;

    /// Empty H=15 board with the given snake and heading
    fn board(snake: &[(i32, i32)], heading: Direction) -> GameState {
        let mut state = GameState::empty(&GameConfig::default().with_seed(5), 5);
        state.food_count = 0;
        state.snake = snake.iter().map(|&(x, z)| Cell::new(x, z)).collect();
        state.input = InputRouter::new(heading);
        state
    }

    #[test]
    fn test_plain_move() {
        let mut state = board(&[(0, 0)], Direction::PlusX);
        let events = step(&mut state).unwrap();
        assert_eq!(state.snake, VecDeque::from(vec![Cell::new(1, 0)]));
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 1);
        assert_eq!(events, vec![GameEvent::Moved { head: Cell::new(1, 0) }]);
    }

    #[test]
    fn test_wall() {
        let mut state = board(&[(15, 0)], Direction::PlusX);
        let events = step(&mut state).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.reason, Some(GameOverReason::HitWall));
        assert_eq!(state.snake, VecDeque::from(vec![Cell::new(15, 0)]));
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                reason: GameOverReason::HitWall
            }]
        );
    }

    #[test]
    fn test_self_collision() {
        let mut state = board(&[(2, 0), (1, 0), (0, 0)], Direction::MinusX);
        step(&mut state).unwrap();
        assert_eq!(state.reason, Some(GameOverReason::HitSelf));
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_moving_onto_vacating_tail_is_fatal() {
        // Square loop: head (0,0) turning -Z onto the tail at (0,-1)
        let mut state = board(&[(0, 0), (1, 0), (1, -1), (0, -1)], Direction::MinusX);
        state.input.set_direction(DirectionInput::Up);
        step(&mut state).unwrap();
        assert_eq!(state.reason, Some(GameOverReason::HitSelf));
    }

    #[test]
    fn test_eat_and_respawn() {
        let mut state = board(&[(0, 0)], Direction::PlusX);
        state.food_count = 3;
        state.foods = vec![Cell::new(1, 0), Cell::new(-5, -5), Cell::new(7, 2)];

        let events = step(&mut state).unwrap();
        assert_eq!(
            state.snake,
            VecDeque::from(vec![Cell::new(1, 0), Cell::new(0, 0)])
        );
        assert_eq!(state.score, 1);
        assert_eq!(state.foods.len(), 3);
        assert!(!state.foods.contains(&Cell::new(1, 0)));
        assert!(state.foods.contains(&Cell::new(-5, -5)));
        assert!(state.foods.contains(&Cell::new(7, 2)));

        assert_eq!(events[0], GameEvent::Moved { head: Cell::new(1, 0) });
        assert_eq!(events[1], GameEvent::AteFood { cell: Cell::new(1, 0) });
        assert!(matches!(events[2], GameEvent::FoodSpawned { .. }));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_obstacle() {
        let mut state = board(&[(6, 7), (6, 8)], Direction::MinusZ);
        state.obstacles = vec![Obstacle::new(Cell::new(5, 5))];
        step(&mut state).unwrap();
        assert_eq!(state.reason, Some(GameOverReason::HitObstacle));
        assert_eq!(state.snake.front(), Some(&Cell::new(6, 7)));
    }

    #[test]
    fn test_wall_checked_before_food() {
        // Food that somehow sits outside the board must not be eaten
        let mut state = board(&[(15, 3)], Direction::PlusX);
        state.foods = vec![Cell::new(16, 3)];
        step(&mut state).unwrap();
        assert_eq!(state.reason, Some(GameOverReason::HitWall));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_full_board_after_eating_ends_episode() {
        // 3x3 board: snake covers 8 cells, the last free cell holds the food
        let mut state = GameState::empty(&GameConfig::default().with_seed(5), 5);
        state.grid_half = 1;
        state.food_count = 1;
        state.planner = SpawnPlanner::new(1).with_max_attempts(50);
        state.snake = [(0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0), (0, 0)]
            .iter()
            .map(|&(x, z)| Cell::new(x, z))
            .collect();
        state.foods = vec![Cell::new(1, 1)];
        state.input = InputRouter::new(Direction::PlusX);

        assert_eq!(
            step(&mut state),
            Err(SpawnError::FoodExhausted { attempts: 50 })
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.reason, Some(GameOverReason::BoardFull));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 9);
        assert!(step(&mut state).unwrap().is_empty());
    }

    #[test]
    fn test_step_after_game_over_is_noop() {
        let mut state = board(&[(15, 0)], Direction::PlusX);
        step(&mut state).unwrap();
        let before = state.snapshot(0.0);
        assert!(step(&mut state).unwrap().is_empty());
        assert_eq!(state.snapshot(0.0), before);
    }

    #[test]
    fn test_direction_latched_at_step_start() {
        let mut state = board(&[(0, 0)], Direction::PlusX);
        state.input.set_direction(DirectionInput::Down);
        step(&mut state).unwrap();
        assert_eq!(state.head(), Cell::new(0, 1));
        assert_eq!(state.input.current(), Direction::PlusZ);
    }
}
