use serde::Deserialize;
use std::collections::HashMap;

/// One published data snapshot: the roster, the current top-5 rankings per
/// division, every player's picks per division, and the optional display
/// extras around them.
///
/// Every field except `players` may be absent in the JSON; absent mappings
/// deserialize to empty so lookups degrade to "no contribution" instead of
/// failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Authoritative, de-duplicated roster. Validated in `validation`,
    /// assumed by the scoring engine.
    pub players: Vec<String>,

    /// Division -> ordered top-5 fighter names, index 0 = best. Entries may
    /// be shorter than five.
    #[serde(default)]
    pub rankings_top5: HashMap<String, Vec<String>>,

    /// Division -> (player -> picked fighter name).
    #[serde(default)]
    pub picks: HashMap<String, HashMap<String, String>>,

    #[serde(default)]
    pub next_important_fight: Option<NextFight>,

    /// Timestamp string, rendered best-effort; never parsed for scoring.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Fighter name -> image reference for the picks view.
    #[serde(default)]
    pub fighters: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextFight {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub fighters: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Snapshot {
    /// A player's pick for a division, if any.
    pub fn pick_for(&self, division: &str, player: &str) -> Option<&str> {
        self.picks
            .get(division)?
            .get(player)
            .map(String::as_str)
    }

    /// Image reference for a fighter. Blank references count as unset.
    pub fn image_for(&self, fighter: &str) -> Option<&str> {
        self.fighters
            .get(fighter)
            .map(String::as_str)
            .filter(|img| !img.trim().is_empty())
    }

    /// Division names that have picks, sorted for deterministic display.
    pub fn pick_divisions(&self) -> Vec<&str> {
        let mut divisions: Vec<&str> = self.picks.keys().map(String::as_str).collect();
        divisions.sort_unstable();
        divisions
    }
}
