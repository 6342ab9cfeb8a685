//! The subset of the game tick packet that the overlay consumes.
//!
//! The bridge serializes the whole packet structure, so every type here ignores fields it does not
//! know about and falls back to defaults for fields that are missing.

use crate::team::Team;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTickPacket {
    pub game_info: GameInfo,
    /// Number of slots in `game_cars` holding a real car. Older bridges leave this out.
    pub num_cars: Option<usize>,
    pub game_cars: Vec<CarInfo>,
}

impl GameTickPacket {
    /// The cars taking part in the match. When the bridge reports `num_cars`, any trailing
    /// placeholder slots are cut off.
    pub fn participants(&self) -> &[CarInfo] {
        match self.num_cars {
            Some(count) => &self.game_cars[..count.min(self.game_cars.len())],
            None => &self.game_cars,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants().len()
    }

    /// A match counts as over when the game says so, or when nobody is on the pitch.
    pub fn is_match_over(&self) -> bool {
        self.game_info.is_match_ended || self.participant_count() == 0
    }

    /// Sum of goals over every participant, both teams included. Stops at `u32::MAX`.
    pub fn total_goals(&self) -> u32 {
        self.participants()
            .iter()
            .fold(0u32, |total, car| total.saturating_add(car.score_info.goals))
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInfo {
    pub is_match_ended: bool,
    pub is_round_active: bool,
    pub is_kickoff_pause: bool,
    pub seconds_elapsed: f32,
    pub game_time_remaining: f32,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarInfo {
    pub name: String,
    pub team: Team,
    /// Boost amount as reported by the game, nominally `0..=100`
    pub boost: f32,
    pub score_info: ScoreInfo,
}

impl CarInfo {
    /// Boost as a fraction in `0.0..=1.0`. Readings outside the game's range are clamped first.
    pub fn boost_fraction(&self) -> f32 {
        if self.boost.is_nan() {
            return 0.0;
        }
        self.boost.clamp(0.0, 100.0) / 100.0
    }

    /// Unused slots in the packet have an empty name
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreInfo {
    pub score: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub shots: u32,
    pub demolitions: u32,
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    fn car(team: Team, name: &str, boost: f32, goals: u32) -> CarInfo {
        CarInfo {
            name: name.to_string(),
            team,
            boost,
            score_info: ScoreInfo {
                goals,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    const BRIDGE_PACKET: &str = indoc!(
        r#"{
            "game_info": {
                "is_match_ended": false,
                "is_round_active": true,
                "seconds_elapsed": 42.5,
                "world_gravity_z": -650.0
            },
            "num_cars": 2,
            "num_boost": 34,
            "game_cars": [
                {
                    "name": "ReliefBot",
                    "team": 0,
                    "boost": 33,
                    "is_bot": true,
                    "physics": {"location": {"x": 0.0, "y": 0.0, "z": 17.0}},
                    "score_info": {"score": 120, "goals": 1, "own_goals": 0, "assists": 0,
                                   "saves": 2, "shots": 3, "demolitions": 0}
                },
                {
                    "name": "Botimus Prime",
                    "team": 1,
                    "boost": 100,
                    "score_info": {"goals": 2}
                },
                {
                    "name": "",
                    "team": 0,
                    "boost": 0,
                    "score_info": {"goals": 0}
                }
            ]
        }"#
    );

    #[test]
    fn test_deser_bridge_packet() {
        let packet: GameTickPacket = serde_json::from_str(BRIDGE_PACKET).unwrap();
        assert!(!packet.game_info.is_match_ended);
        assert_eq!(packet.game_info.seconds_elapsed, 42.5);
        assert_eq!(packet.game_cars.len(), 3);
        assert_eq!(packet.participant_count(), 2);
        assert_eq!(packet.participants()[0].name, "ReliefBot");
        assert_eq!(packet.participants()[0].score_info.saves, 2);
        assert_eq!(packet.participants()[1].team, Team::Orange);
        assert_eq!(packet.participants()[1].score_info.shots, 0);
        assert_eq!(packet.total_goals(), 3);
    }

    #[test]
    fn test_deser_minimal_packet() {
        let packet: GameTickPacket =
            serde_json::from_str(r#"{"game_info": {"is_match_ended": true}}"#).unwrap();
        assert!(packet.game_info.is_match_ended);
        assert_eq!(packet.num_cars, None);
        assert_eq!(packet.participant_count(), 0);
        assert!(packet.is_match_over());
    }

    #[test]
    fn test_participants_without_num_cars() {
        let packet = GameTickPacket {
            game_cars: vec![car(Team::Blue, "A", 0.0, 1), car(Team::Orange, "B", 0.0, 0)],
            ..Default::default()
        };
        assert_eq!(packet.participant_count(), 2);
        assert_eq!(packet.total_goals(), 1);
        assert!(!packet.is_match_over());
    }

    #[test]
    fn test_num_cars_larger_than_list() {
        let packet = GameTickPacket {
            num_cars: Some(8),
            game_cars: vec![car(Team::Blue, "A", 0.0, 0)],
            ..Default::default()
        };
        assert_eq!(packet.participant_count(), 1);
    }

    #[test]
    fn test_zero_participants_is_over() {
        let packet = GameTickPacket {
            num_cars: Some(0),
            game_cars: vec![car(Team::Blue, "A", 0.0, 4)],
            ..Default::default()
        };
        assert!(packet.is_match_over());
        assert_eq!(packet.total_goals(), 0);
    }

    #[test]
    fn test_total_goals_saturates() {
        let packet = GameTickPacket {
            game_cars: vec![
                car(Team::Blue, "A", 0.0, u32::MAX),
                car(Team::Orange, "B", 0.0, 1),
            ],
            ..Default::default()
        };
        assert_eq!(packet.total_goals(), u32::MAX);
    }

    #[test]
    fn test_boost_fraction() {
        assert_eq!(car(Team::Blue, "A", 50.0, 0).boost_fraction(), 0.5);
        assert_eq!(car(Team::Blue, "A", 100.0, 0).boost_fraction(), 1.0);
        assert_eq!(car(Team::Blue, "A", 0.0, 0).boost_fraction(), 0.0);
        assert_eq!(car(Team::Blue, "A", 180.0, 0).boost_fraction(), 1.0);
        assert_eq!(car(Team::Blue, "A", -3.0, 0).boost_fraction(), 0.0);
        assert_eq!(car(Team::Blue, "A", f32::NAN, 0).boost_fraction(), 0.0);
    }

    #[test]
    fn test_is_named() {
        assert!(car(Team::Orange, "Kamael", 0.0, 0).is_named());
        assert!(!car(Team::Orange, "", 0.0, 0).is_named());
    }
}
