//! Axis-aligned collision detection between the bird, the field bounds
//! and the pipes.
//!
//! Pure functions of the current state; nothing here mutates.

use super::state::{Bird, Collision, GameState, Pipe};
use crate::config::GameConfig;

/// Whether the bird has left the field vertically.
///
/// Ceiling and ground are both fatal and not told apart.
#[inline]
pub fn out_of_bounds(bird: &Bird, field_height: f32) -> bool {
    bird.bottom() > field_height || bird.top() < 0.0
}

/// Standard AABB x-overlap test
#[inline]
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.right() > pipe.x && bird.left() < pipe.right()
}

/// Whether the bird touches either blocking segment of `pipe`.
///
/// A bird fully inside the gap, or not overlapping the pipe's columns,
/// never collides.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    overlaps_horizontally(bird, pipe)
        && (bird.top() < pipe.top_height || bird.bottom() > pipe.bottom_y)
}

/// Find the first thing the bird collides with, if any
pub fn detect_collision(state: &GameState, config: &GameConfig) -> Option<Collision> {
    if out_of_bounds(&state.bird, config.field_height) {
        return Some(Collision::Boundary);
    }

    state
        .pipes
        .iter()
        .position(|pipe| bird_hits_pipe(&state.bird, pipe))
        .map(|index| Collision::Pipe { index })
}

/// Boolean form of [`detect_collision`]
#[inline]
pub fn check_collisions(state: &GameState, config: &GameConfig) -> bool {
    detect_collision(state, config).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state_with(bird_y: f32, pipes: Vec<Pipe>) -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.bird.pos.y = bird_y;
        state.pipes = pipes;
        (state, config)
    }

    #[test]
    fn test_ceiling_is_fatal() {
        let (state, config) = state_with(-1.0, Vec::new());
        assert_eq!(detect_collision(&state, &config), Some(Collision::Boundary));
    }

    #[test]
    fn test_ceiling_with_any_pipes() {
        // Pipe far away and a pipe the bird sits in the gap of
        let pipes = vec![
            Pipe::new(300.0, 60.0, 100.0, 150.0),
            Pipe::new(90.0, 60.0, 0.0, 600.0),
        ];
        let (state, config) = state_with(-1.0, pipes);
        assert!(check_collisions(&state, &config));
    }

    #[test]
    fn test_ground_is_fatal() {
        // Bottom edge at 601
        let (state, config) = state_with(571.0, Vec::new());
        assert_eq!(detect_collision(&state, &config), Some(Collision::Boundary));

        // Touching the ground exactly is fine
        let (state, config) = state_with(570.0, Vec::new());
        assert!(!check_collisions(&state, &config));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Gap spans 250..400, bird spans 300..330
        let (state, config) = state_with(300.0, vec![Pipe::new(80.0, 60.0, 250.0, 150.0)]);
        assert!(overlaps_horizontally(&state.bird, &state.pipes[0]));
        assert!(!check_collisions(&state, &config));
    }

    #[test]
    fn test_hits_top_segment() {
        let (state, config) = state_with(300.0, vec![Pipe::new(80.0, 60.0, 310.0, 150.0)]);
        assert_eq!(
            detect_collision(&state, &config),
            Some(Collision::Pipe { index: 0 })
        );
    }

    #[test]
    fn test_hits_bottom_segment() {
        let (state, config) = state_with(300.0, vec![Pipe::new(80.0, 60.0, 100.0, 150.0)]);
        assert!(check_collisions(&state, &config));
    }

    #[test]
    fn test_edges_touching_do_not_overlap() {
        // Bird spans x 100..140; pipe ending exactly at 100 or starting at 140
        let pipes = vec![
            Pipe::new(40.0, 60.0, 500.0, 50.0),
            Pipe::new(140.0, 60.0, 500.0, 50.0),
        ];
        let (state, config) = state_with(300.0, pipes);
        assert!(!check_collisions(&state, &config));
    }

    #[test]
    fn test_first_hit_reported() {
        let pipes = vec![
            Pipe::new(300.0, 60.0, 100.0, 150.0),
            Pipe::new(90.0, 60.0, 400.0, 150.0),
            Pipe::new(110.0, 60.0, 400.0, 150.0),
        ];
        let (state, config) = state_with(300.0, pipes);
        assert_eq!(
            detect_collision(&state, &config),
            Some(Collision::Pipe { index: 1 })
        );
    }

    proptest! {
        #[test]
        fn prop_inside_every_gap_never_collides(
            top in 50.0f32..400.0,
            y_offset in 0.0f32..119.0,
            x in -59.0f32..139.0,
        ) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config);
            let pipe = Pipe::new(x, config.pipe_width, top, config.pipe_gap);
            // 150 gap - 30 bird height leaves 120 of slack; stay clear of rounding
            state.bird.pos = Vec2::new(config.bird_start.x, top + y_offset);
            state.pipes.push(pipe);
            prop_assert!(!check_collisions(&state, &config));
        }

        #[test]
        fn prop_pipe_order_does_not_change_result(
            tops in proptest::collection::vec(0.0f32..450.0, 1..6),
            xs in proptest::collection::vec(-80.0f32..420.0, 6),
            bird_y in 0.0f32..570.0,
        ) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config);
            state.bird.pos.y = bird_y;
            state.pipes = tops
                .iter()
                .zip(&xs)
                .map(|(&top, &x)| Pipe::new(x, config.pipe_width, top, config.pipe_gap))
                .collect();
            let forward = check_collisions(&state, &config);
            state.pipes.reverse();
            prop_assert_eq!(forward, check_collisions(&state, &config));
        }
    }
}
