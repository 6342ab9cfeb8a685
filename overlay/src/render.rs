use crate::{
    scene::{Display, ElementId, Scene},
    splash::{GoalSplash, SPLASH_DELAY_MS},
    state::OverlayState,
};
use coarsetime::Instant;
use league_common::{game_packet::GameTickPacket, team::Team};
use log::{debug, info};

/// Shown in both name boxes once a match is over
pub const GAME_ENDED_LABEL: &str = "Game ended";

/// Applies packets to the scene and owns everything that has to survive between them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Renderer {
    pub state: OverlayState,
    pub splash: GoalSplash,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            state: OverlayState::new(),
            splash: GoalSplash::new(),
        }
    }

    pub fn render(&mut self, packet: &GameTickPacket, scene: &mut Scene, now: Instant) {
        if packet.is_match_over() {
            if self.state.is_match_active {
                info!(
                    "Match over with {} goals scored",
                    self.state.last_total_goals
                );
            }
            self.show_match_over(scene);
        } else {
            if !self.state.is_match_active {
                info!(
                    "Match in progress with {} cars",
                    packet.participant_count()
                );
            }
            self.show_match_in_progress(packet, scene, now);
        }
    }

    /// Runs the splash timers, call once per frame
    pub fn advance(&mut self, scene: &mut Scene, now: Instant) {
        self.splash.advance(&mut scene.goal_splash, now);
    }

    fn show_match_over(&mut self, scene: &mut Scene) {
        for element in scene.hide_after_match_mut() {
            element.display = Display::None;
        }
        scene.set_text(ElementId::BotNameBlue, GAME_ENDED_LABEL);
        scene.set_text(ElementId::BotNameOrange, GAME_ENDED_LABEL);
        self.state.reset_after_match();
    }

    fn show_match_in_progress(&mut self, packet: &GameTickPacket, scene: &mut Scene, now: Instant) {
        self.state.is_match_active = true;

        for element in scene.hide_after_match_mut() {
            if element.display == Display::None {
                element.display = element.shown_display();
            }
        }

        for (slot, car) in packet.participants().iter().enumerate() {
            if car.team == Team::Blue && car.is_named() {
                let boost = car.boost_fraction();
                self.state.boost_by_slot.insert(slot, boost);
                scene.set_scale_y(ElementId::BoostFillBlue, boost);
            }
        }

        let total_goals = packet.total_goals();
        if self.state.register_goal_total(total_goals) {
            info!("Goal! {total_goals} scored this match, splash in {SPLASH_DELAY_MS} ms");
            if self.splash.is_pending() {
                debug!("Goal splash was still waiting to start, rescheduling it");
            } else if scene.goal_splash.is_playing() {
                debug!("Goal splash already playing, restarting it");
            }
            self.splash.trigger(now);
        } else if total_goals < self.state.last_total_goals {
            debug!(
                "Packet reports {total_goals} goals, fewer than the {} already seen",
                self.state.last_total_goals
            );
        }
    }
}
