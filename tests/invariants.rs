use canvas_pong::consts::{BALL_SIZE, PADDLE_HEIGHT};
use canvas_pong::sim::{GameEvent, GameState, Playfield, Side, TickInput, tick};
use canvas_pong::tuning::Tuning;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<Option<f32>>> {
    prop::collection::vec(prop::option::of(-200.0f32..700.0), 1..600)
}

fn new_state(seed: u64) -> GameState {
    GameState::new(seed, Playfield::default(), Tuning::default())
}

proptest! {
    #[test]
    fn paddles_stay_in_bounds(seed in any::<u64>(), pointers in inputs()) {
        let mut state = new_state(seed);
        let max_y = state.playfield.height - PADDLE_HEIGHT;

        for pointer_y in pointers {
            tick(&mut state, &TickInput { pointer_y, autopilot: false });
            prop_assert!(state.player.y >= 0.0 && state.player.y <= max_y);
            prop_assert!(state.ai.y >= 0.0 && state.ai.y <= max_y);
        }
    }

    #[test]
    fn at_most_one_point_per_frame(seed in any::<u64>(), pointers in inputs()) {
        let mut state = new_state(seed);

        for pointer_y in pointers {
            let before = state.score;
            tick(&mut state, &TickInput { pointer_y, autopilot: false });

            prop_assert!(state.score.player >= before.player);
            prop_assert!(state.score.ai >= before.ai);
            let gained = (state.score.player - before.player) + (state.score.ai - before.ai);
            prop_assert!(gained <= 1);

            let scored = state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored(_)))
                .count();
            prop_assert_eq!(scored as u32, gained);
        }
    }

    #[test]
    fn reset_recenters_ball(seed in any::<u64>(), frames in 1usize..3000) {
        let mut state = new_state(seed);
        let input = TickInput { pointer_y: Some(0.0), autopilot: false };

        for _ in 0..frames {
            tick(&mut state, &input);
            if state.events.iter().any(|e| matches!(e, GameEvent::Scored(_))) {
                prop_assert_eq!(state.ball.pos, state.playfield.ball_home());
                prop_assert_eq!(state.ball.vel.x.abs(), 5.0);
                prop_assert!(state.ball.vel.y >= -2.0 && state.ball.vel.y < 2.0);
            }
        }
    }

    #[test]
    fn paddle_hits_leave_ball_flush(seed in any::<u64>(), frames in 1usize..3000) {
        let mut state = new_state(seed);
        let input = TickInput { pointer_y: None, autopilot: true };

        for _ in 0..frames {
            let vx_before = state.ball.vel.x;
            tick(&mut state, &input);

            for event in &state.events {
                if let GameEvent::PaddleHit(side) = event {
                    let paddle = state.paddle(*side).rect(state.playfield);
                    let expected_x = match side {
                        Side::Left => paddle.right(),
                        Side::Right => paddle.x - BALL_SIZE,
                    };
                    prop_assert_eq!(state.ball.pos.x, expected_x);
                    prop_assert_eq!(state.ball.vel.x, -vx_before);
                    prop_assert!(!state.ball.rect().overlaps(&paddle));
                }
            }
        }
    }

    #[test]
    fn wall_bounces_clamp_and_flip(seed in any::<u64>(), pointers in inputs()) {
        let mut state = new_state(seed);
        let bottom = state.playfield.height - BALL_SIZE;

        for pointer_y in pointers {
            let vy_before = state.ball.vel.y;
            tick(&mut state, &TickInput { pointer_y, autopilot: false });

            if state.events == [GameEvent::WallBounce] {
                prop_assert!(state.ball.pos.y == 0.0 || state.ball.pos.y == bottom);
                prop_assert_eq!(state.ball.vel.y, -vy_before);
            }
            prop_assert!(state.ball.pos.y >= 0.0 && state.ball.pos.y <= bottom);
        }
    }
}
