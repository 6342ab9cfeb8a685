//! Retained model of everything the overlay can show. The packet logic only ever touches this
//! model; `pages` turns it into pixels once per frame.

use coarsetime::{Duration, Instant};
use macroquad::math::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    BotNameBlue,
    BotNameOrange,
    BoostBarBlue,
    BoostFillBlue,
    Logo,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BotNameBlue => "Bot_Name_Blue",
            Self::BotNameOrange => "Bot_Name_Orange",
            Self::BoostBarBlue => "Boost_Bar_Blue",
            Self::BoostFillBlue => "Boost_Fill_Blue",
            Self::Logo => "Logo",
        }
    }
}

impl core::fmt::Display for ElementId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an element is laid out. Anything but `None` is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Flex,
    Initial,
    Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    /// Position within the 1920x1080 colour half of the output
    pub frame: Rect,
    pub display: Display,
    /// Hidden while no match is running
    pub hide_after_match: bool,
    /// Uses `Display::Initial` instead of `Display::Flex` when shown again
    pub set: bool,
    pub text: String,
    /// Vertical scale, `1.0` is the full frame height
    pub scale_y: f32,
}

impl Element {
    fn new(id: ElementId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            display: Display::Flex,
            hide_after_match: false,
            set: false,
            text: String::new(),
            scale_y: 1.0,
        }
    }

    fn hide_after_match(mut self) -> Self {
        self.hide_after_match = true;
        self
    }

    fn set(mut self) -> Self {
        self.set = true;
        self.display = Display::Initial;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.display != Display::None
    }

    /// Display mode used when the element is shown after being hidden
    pub fn shown_display(&self) -> Display {
        if self.set {
            Display::Initial
        } else {
            Display::Flex
        }
    }
}

/// Playback state of a video-like element. Positions are derived from the instant playback was
/// last resumed, so nothing needs to be updated while it plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Video {
    pub display: Display,
    playing: bool,
    position: Duration,
    resumed_at: Option<Instant>,
}

impl Video {
    pub fn new() -> Self {
        Self {
            display: Display::None,
            playing: false,
            position: Duration::from_secs(0),
            resumed_at: None,
        }
    }

    pub fn play(&mut self, now: Instant) {
        if !self.playing {
            self.playing = true;
            self.resumed_at = Some(now);
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if self.playing {
            self.position = self.current_time(now);
            self.playing = false;
            self.resumed_at = None;
        }
    }

    pub fn seek(&mut self, position: Duration, now: Instant) {
        self.position = position;
        if self.playing {
            self.resumed_at = Some(now);
        }
    }

    pub fn current_time(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) if self.playing && now > resumed_at => {
                self.position + now.duration_since(resumed_at)
            }
            _ => self.position,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_visible(&self) -> bool {
        self.display != Display::None
    }
}

impl Default for Video {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
    /// The `Goal_Splash` element
    pub goal_splash: Video,
}

impl Scene {
    /// The layout used for regular ladder matches
    pub fn regular_overlay() -> Self {
        Self {
            elements: vec![
                Element::new(ElementId::BotNameBlue, Rect::new(500f32, 20f32, 420f32, 64f32)),
                Element::new(ElementId::BotNameOrange, Rect::new(1000f32, 20f32, 420f32, 64f32)),
                Element::new(ElementId::BoostBarBlue, Rect::new(40f32, 680f32, 56f32, 340f32))
                    .hide_after_match()
                    .set(),
                Element::new(ElementId::BoostFillBlue, Rect::new(44f32, 684f32, 48f32, 332f32))
                    .hide_after_match(),
                Element::new(ElementId::Logo, Rect::new(1740f32, 20f32, 160f32, 160f32))
                    .hide_after_match(),
            ],
            goal_splash: Video::new(),
        }
    }

    /// Elements in drawing order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    #[cfg(test)]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn hide_after_match_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut().filter(|e| e.hide_after_match)
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
        }
    }

    pub fn set_scale_y(&mut self, id: ElementId, scale_y: f32) {
        if let Some(element) = self.element_mut(id) {
            element.scale_y = scale_y;
        }
    }
}
