use super::{
    SceneRenderer, draw_rectangle_both, draw_text_both_ex, draw_texture_both_ex, fit_text,
};
use crate::scene::{Element, ElementId};
use macroquad::prelude::*;

const BLUE_TEAM: Color = Color::new(0.0, 0.45, 0.95, 0.9);
const ORANGE_TEAM: Color = Color::new(0.98, 0.5, 0.05, 0.9);
const BOOST_BAR_BACKGROUND: Color = Color::new(0.05, 0.05, 0.08, 0.75);
const BOOST_FILL: Color = Color::new(0.25, 0.7, 1.0, 1.0);

const NAME_FONT_SIZE: u16 = 36;
const NAME_PADDING: f32 = 16f32;

impl SceneRenderer {
    pub(super) fn draw_element(&self, element: &Element) {
        let Rect { x, y, w, h } = element.frame;
        match element.id {
            ElementId::BotNameBlue => self.draw_name_box(element, BLUE_TEAM),
            ElementId::BotNameOrange => self.draw_name_box(element, ORANGE_TEAM),
            ElementId::BoostBarBlue => {
                draw_rectangle_both!(x, y, w, h, BOOST_BAR_BACKGROUND);
            }
            ElementId::BoostFillBlue => {
                // The fill shrinks towards the bottom of its frame
                let height = h * element.scale_y.clamp(0f32, 1f32);
                draw_rectangle_both!(x, y + h - height, w, height, BOOST_FILL);
            }
            ElementId::Logo => {
                if let Some(logo) = &self.assets.logo {
                    draw_texture_both_ex!(
                        logo,
                        x,
                        y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(w, h)),
                            ..Default::default()
                        }
                    );
                }
            }
        }
    }

    fn draw_name_box(&self, element: &Element, color: Color) {
        let Rect { x, y, w, h } = element.frame;
        draw_rectangle_both!(x, y, w, h, color);

        let font = self.assets.font.as_ref();
        let (offset, text) = fit_text(&element.text, w - 2f32 * NAME_PADDING, |text| {
            measure_text(text, font, NAME_FONT_SIZE, 1.0).width
        });
        let baseline = y + (h + measure_text(&text, font, NAME_FONT_SIZE, 1.0).offset_y) / 2f32;
        draw_text_both_ex!(
            &text,
            x + NAME_PADDING + offset,
            baseline,
            self.text_params(NAME_FONT_SIZE, WHITE),
            self.text_params(NAME_FONT_SIZE, WHITE)
        );
    }
}
