use derivative::Derivative;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side of the pitch a car plays for. The bridge encodes this as `0` for blue and `1` for orange.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(try_from = "u8", into = "u8")]
pub enum Team {
    #[derivative(Default)]
    Blue,
    Orange,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Team index {0} is neither blue (0) nor orange (1)")]
pub struct InvalidTeam(pub u8);

impl TryFrom<u8> for Team {
    type Error = InvalidTeam;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Blue),
            1 => Ok(Self::Orange),
            other => Err(InvalidTeam(other)),
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        match team {
            Team::Blue => 0,
            Team::Orange => 1,
        }
    }
}

impl core::fmt::Display for Team {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Blue => write!(f, "Blue"),
            Self::Orange => write!(f, "Orange"),
        }
    }
}
