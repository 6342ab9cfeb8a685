use crate::load_images::Textures;
use crate::scene::Scene;
use coarsetime::Instant;
use macroquad::prelude::*;

mod goal_splash;
mod hud;

/// Width of one half of the output. The colour picture is drawn on the left, the key on the right.
pub const HALF_WIDTH: f32 = 1920f32;

pub(crate) trait Interpolate {
    /// `value` must be a `float` normally varying from `0f32` to `1f32`
    fn interpolate_linear(&self, value: f32) -> f32;
}

impl Interpolate for (f32, f32) {
    fn interpolate_linear(&self, value: f32) -> f32 {
        (self.1 - self.0).mul_add(value, self.0)
    }
}

/// Colour used on the key half for something drawn with `color` on the colour half
pub fn key_color(color: Color) -> Color {
    Color { a: color.a, ..WHITE }
}

/// Shortens `text` until `measure` says it fits in `width`, marking a cut with "..".
///
/// Returns the offset from the left of the field that centers the result, and the result itself.
/// If not even ".." fits, the offset is negative.
pub fn fit_text(text: &str, width: f32, measure: impl Fn(&str) -> f32) -> (f32, String) {
    let mut fitted = text.to_string();
    if measure(&fitted) > width {
        loop {
            fitted.pop();
            if fitted.is_empty() || measure(&format!("{fitted}..")) <= width {
                break;
            }
        }
        fitted.push_str("..");
    }
    ((width - measure(&fitted)) / 2f32, fitted)
}

macro_rules! draw_rectangle_both {
    ($x: expr, $y: expr, $w: expr, $h: expr, $color: expr) => {
        draw_rectangle($x, $y, $w, $h, $color);
        draw_rectangle(
            $x + $crate::pages::HALF_WIDTH,
            $y,
            $w,
            $h,
            $crate::pages::key_color($color),
        );
    };
}
pub(crate) use draw_rectangle_both;

macro_rules! draw_texture_both_ex {
    ($texture: expr, $x: expr, $y: expr, $color: expr, $params: expr) => {
        draw_texture_ex(&$texture.color, $x, $y, $color, $params);
        draw_texture_ex(
            &$texture.alpha,
            $x + $crate::pages::HALF_WIDTH,
            $y,
            $color,
            $params,
        );
    };
}
pub(crate) use draw_texture_both_ex;

macro_rules! draw_text_both_ex {
    ($text: expr, $x: expr, $y: expr, $params_color: expr, $params_alpha: expr) => {
        draw_text_ex($text, $x, $y, $params_color);
        draw_text_ex($text, $x + $crate::pages::HALF_WIDTH, $y, $params_alpha);
    };
}
pub(crate) use draw_text_both_ex;

pub struct SceneRenderer {
    /// Contains textures, alpha in alpha mode, color in color mode
    pub assets: Textures,
}

impl SceneRenderer {
    /// Draws every visible element of `scene`, with the goal splash on top
    pub fn draw(&self, scene: &Scene, now: Instant) {
        for element in scene.elements().filter(|e| e.is_visible()) {
            self.draw_element(element);
        }
        if scene.goal_splash.is_visible() {
            self.draw_goal_splash(&scene.goal_splash, now);
        }
    }

    fn text_params(&self, font_size: u16, color: Color) -> TextParams<'_> {
        TextParams {
            font: self.assets.font.as_ref(),
            font_size,
            color,
            ..Default::default()
        }
    }
}
