use super::types::Snapshot;
use std::collections::HashSet;

/// Validate the roster precondition the scoring engine assumes: `players`
/// must be de-duplicated and free of blank names. The engine does not defend
/// against violations, so the snapshot boundary checks them up front.
/// Returns all violations at once (not just the first).
pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, player) in snapshot.players.iter().enumerate() {
        if player.trim().is_empty() {
            errors.push(format!("players[{}]: blank player name", i));
        }
        if !seen.insert(player.as_str()) {
            errors.push(format!("players[{}]: duplicate player '{}'", i, player));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
