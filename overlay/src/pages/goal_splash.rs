use super::{
    HALF_WIDTH, Interpolate, SceneRenderer, draw_rectangle_both, draw_text_both_ex,
    draw_texture_both_ex,
};
use crate::scene::Video;
use crate::splash::SPLASH_LENGTH_MS;
use coarsetime::Instant;
use macroquad::prelude::*;

/// Fraction of the splash spent fading in, and again fading out
const FADE: f32 = 0.125;
const BANNER: Color = Color::new(0.02, 0.02, 0.05, 0.85);

/// Opacity of the splash at `progress` through its playback
fn splash_alpha(progress: f32) -> f32 {
    if progress < FADE {
        (0f32, 1f32).interpolate_linear(progress / FADE)
    } else if progress > 1f32 - FADE {
        (1f32, 0f32).interpolate_linear((progress - (1f32 - FADE)) / FADE)
    } else {
        1f32
    }
}

impl SceneRenderer {
    pub(super) fn draw_goal_splash(&self, video: &Video, now: Instant) {
        let progress = (video.current_time(now).as_f64() * 1000.0 / SPLASH_LENGTH_MS as f64)
            .clamp(0.0, 1.0) as f32;
        let alpha = splash_alpha(progress);

        if let Some(frame) = &self.assets.goal_splash {
            draw_texture_both_ex!(
                frame,
                0f32,
                0f32,
                Color { a: alpha, ..WHITE },
                DrawTextureParams {
                    dest_size: Some(vec2(HALF_WIDTH, 1080f32)),
                    ..Default::default()
                }
            );
            return;
        }

        // Without a splash image, a banner with growing text stands in
        draw_rectangle_both!(
            0f32,
            400f32,
            HALF_WIDTH,
            280f32,
            Color {
                a: alpha * BANNER.a,
                ..BANNER
            }
        );
        let font_size = (140f32, 200f32).interpolate_linear(progress) as u16;
        let size = measure_text("GOAL!", self.assets.font.as_ref(), font_size, 1.0);
        let x = (HALF_WIDTH - size.width) / 2f32;
        let y = 540f32 + size.offset_y / 2f32;
        let color = Color { a: alpha, ..WHITE };
        draw_text_both_ex!(
            "GOAL!",
            x,
            y,
            self.text_params(font_size, color),
            self.text_params(font_size, color)
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_splash_alpha() {
        assert_eq!(splash_alpha(0f32), 0f32);
        assert_eq!(splash_alpha(0.0625), 0.5);
        assert_eq!(splash_alpha(0.125), 1f32);
        assert_eq!(splash_alpha(0.5), 1f32);
        assert_eq!(splash_alpha(0.9375), 0.5);
        assert_eq!(splash_alpha(1f32), 0f32);
    }
}
