use core::time::Duration;

use alloc::string::String;

use crate::ai::Difficulty;
use crate::ship::ShipConfig;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipConfig; NUM_SHIPS] = [
    ShipConfig::new("carrier", "Carrier", 5),
    ShipConfig::new("battleship", "Battleship", 4),
    ShipConfig::new("cruiser", "Cruiser", 3),
    ShipConfig::new("submarine", "Submarine", 3),
    ShipConfig::new("destroyer", "Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws allowed for a single ship before the fleet is redeployed.
pub const SHIP_PLACEMENT_ATTEMPTS: usize = 200;

/// Random draws allowed across the whole fleet before the fleet is redeployed.
pub const FLEET_PLACEMENT_ATTEMPTS: usize = 2000;

/// Pause before the computer fires.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound on a remote decision round-trip.
pub const DEFAULT_DECISION_TIMEOUT: Duration = Duration::from_secs(5);

/// Look up a catalog entry by its stable id. Returns `None` if the id does not
/// match any defined ship.
pub fn ship_config(id: &str) -> Option<ShipConfig> {
    SHIPS.iter().copied().find(|def| def.id() == id)
}

/// Runtime knobs for a match against the computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Remote decision service; `None` keeps every decision local.
    pub ai_endpoint: Option<String>,
    pub decision_timeout: Duration,
    pub ai_delay: Duration,
    /// A hit lets the shooter fire again.
    pub bonus_shot_on_hit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            ai_endpoint: None,
            decision_timeout: DEFAULT_DECISION_TIMEOUT,
            ai_delay: DEFAULT_AI_DELAY,
            bonus_shot_on_hit: true,
        }
    }
}

impl Settings {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Blank endpoints are treated as "no endpoint".
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.ai_endpoint = endpoint.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = timeout;
        self
    }

    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn with_bonus_shot_on_hit(mut self, enabled: bool) -> Self {
        self.bonus_shot_on_hit = enabled;
        self
    }
}
