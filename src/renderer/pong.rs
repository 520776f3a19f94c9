//! Pong scene builder

use super::scene::Scene;
use crate::pong::PongState;

const BACKGROUND: &str = "#111";
const NET: &str = "#333";
const FOREGROUND: &str = "#fff";

/// Net dashes: 4 wide, 16 tall, one every 24 pixels
const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 16.0;
const NET_STEP: f32 = 24.0;

const SCORE_SIZE: f32 = 32.0;
const SCORE_BASELINE: f32 = 40.0;

pub fn pong_scene(state: &PongState) -> Scene {
    let (w, h) = (state.config.width, state.config.height);
    let mut scene = Scene::new(w, h);

    scene.fill_rect(0.0, 0.0, w, h, BACKGROUND);

    let mut y = 0.0;
    while y < h {
        scene.fill_rect(w / 2.0 - NET_WIDTH / 2.0, y, NET_WIDTH, NET_DASH, NET);
        y += NET_STEP;
    }

    for paddle in [&state.player, &state.ai] {
        scene.fill_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height, FOREGROUND);
    }

    let ball = &state.ball;
    scene.fill_rect(ball.pos.x, ball.pos.y, ball.size, ball.size, FOREGROUND);

    scene.text(
        state.player.score.to_string(),
        w / 4.0,
        SCORE_BASELINE,
        SCORE_SIZE,
        FOREGROUND,
    );
    scene.text(
        state.ai.score.to_string(),
        3.0 * w / 4.0,
        SCORE_BASELINE,
        SCORE_SIZE,
        FOREGROUND,
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PongConfig;
    use crate::renderer::DrawCmd;

    #[test]
    fn test_background_first_scores_last() {
        let mut state = PongState::new(PongConfig::default(), 1);
        state.player.score = 3;
        state.ai.score = 11;
        let scene = pong_scene(&state);

        assert_eq!(
            scene.commands.first(),
            Some(&DrawCmd::FillRect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 500.0,
                color: BACKGROUND
            })
        );
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["3", "11"]);
        assert!(matches!(
            scene.commands.last(),
            Some(DrawCmd::Text { x, .. }) if *x == 600.0
        ));
    }

    #[test]
    fn test_net_dashes() {
        let state = PongState::new(PongConfig::default(), 1);
        let scene = pong_scene(&state);
        // 0, 24, ... 480
        assert_eq!(scene.rects_with_color(NET).count(), 21);
    }

    #[test]
    fn test_paddles_and_ball() {
        let state = PongState::new(PongConfig::default(), 1);
        let scene = pong_scene(&state);
        let rects: Vec<_> = scene.rects_with_color(FOREGROUND).collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(
            rects[2],
            &DrawCmd::FillRect {
                x: 393.0,
                y: 243.0,
                w: 14.0,
                h: 14.0,
                color: FOREGROUND
            }
        );
    }
}
