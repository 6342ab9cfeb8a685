use std::collections::BTreeMap;

/// Everything the overlay remembers between two packets
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// Highest goal total seen during the current match
    pub last_total_goals: u32,
    /// Whether the latest packet described a match in progress
    pub is_match_active: bool,
    /// Boost fraction of every tracked car, keyed by its slot in the packet
    pub boost_by_slot: BTreeMap<usize, f32>,
    pub blue_names: Vec<String>,
    pub orange_names: Vec<String>,
    pub blue_votes: f32,
    pub orange_votes: f32,
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            last_total_goals: 0,
            is_match_active: false,
            boost_by_slot: BTreeMap::new(),
            blue_names: Vec::new(),
            orange_names: Vec::new(),
            blue_votes: 0.5,
            orange_votes: 0.5,
        }
    }

    /// Forget the finished match. Boost readings are kept so the meter does not jump while hidden.
    pub fn reset_after_match(&mut self) {
        self.is_match_active = false;
        self.last_total_goals = 0;
        self.blue_names.clear();
        self.orange_names.clear();
        self.blue_votes = 1.0;
        self.orange_votes = 1.0;
    }

    /// Records a new goal total. Returns `true` if it is higher than any total seen so far.
    pub fn register_goal_total(&mut self, total: u32) -> bool {
        if total > self.last_total_goals {
            self.last_total_goals = total;
            true
        } else {
            false
        }
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
