use league_common::config::Theme;
use log::{info, warn};
use macroquad::prelude::*;
use std::{fs::read, path::Path};

/// File the goal splash frame is read from, relative to the assets directory
pub const GOAL_SPLASH_FILE: &str = "goal_splash.png";
pub const FONT_FILE: &str = "font.ttf";

pub struct Texture {
    pub alpha: Texture2D,
    pub color: Texture2D,
}

/// Everything read from the assets directory. Any of these may be missing, the pages fall back to
/// plain shapes and the built in font.
#[derive(Default)]
pub struct Textures {
    pub logo: Option<Texture>,
    pub goal_splash: Option<Texture>,
    pub font: Option<Font>,
}

impl Textures {
    pub fn load(assets_path: &Path, theme: Theme) -> Self {
        let font = match read(assets_path.join(FONT_FILE)) {
            Ok(bytes) => load_ttf_font_from_bytes(&bytes)
                .map_err(|e| warn!("Failed to parse font file: {e:?}"))
                .ok(),
            Err(e) => {
                info!("No font file found, using the built in font: {e}");
                None
            }
        };

        Self {
            logo: load_optional(&assets_path.join(theme.logo_file()), "logo"),
            goal_splash: load_optional(&assets_path.join(GOAL_SPLASH_FILE), "goal splash"),
            font,
        }
    }
}

fn load_optional(path: &Path, what: &str) -> Option<Texture> {
    match read_image_from_file(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("Failed to read {what} file: {} : {e}", path.display());
            None
        }
    }
}

/// Loads an image into a colour texture and a matching key texture for the alpha half
pub fn read_image_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Texture, Box<dyn std::error::Error>> {
    let image = ::image::open(path)?.to_rgba8();
    let width = u16::try_from(image.width())?;
    let height = u16::try_from(image.height())?;

    Ok(Texture {
        color: Texture2D::from_rgba8(width, height, image.as_raw()),
        alpha: Texture2D::from_rgba8(width, height, &alpha_mask(image.as_raw())),
    })
}

/// Turns RGBA pixels into opaque greyscale pixels whose brightness is the source alpha
pub fn alpha_mask(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|pixel| [pixel[3], pixel[3], pixel[3], u8::MAX])
        .collect()
}
