use std::collections::HashMap;

/// One leaderboard entry: a player with their accumulated champ picks and
/// points across all scored divisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub player: String,
    pub champs: u32,
    pub points: u32,
}

/// Compute the leaderboard from a roster, published top-5 rankings, and
/// player picks.
///
/// `players` is the authoritative, de-duplicated roster (validated at the
/// snapshot boundary, not here). Every roster player gets exactly one row,
/// whether or not they made any picks.
///
/// Scoring per division: a pick matching the top-5 entry at zero-based index
/// `i` (case-insensitive exact name match) awards `max(0, 5 - i)` points;
/// a match at index 0 also counts as a champ pick. Divisions missing from
/// either side, missing picks, and picks matching nothing all contribute
/// zero. The zero floor at index >= 5 is deliberate: rankings longer than
/// five entries award nothing beyond the fifth slot.
///
/// Pure and infallible: no input shape causes an error, only zero
/// contributions.
pub fn compute_leaderboard(
    players: &[String],
    rankings_by_division: &HashMap<String, Vec<String>>,
    picks_by_division: &HashMap<String, HashMap<String, String>>,
) -> Vec<LeaderboardRow> {
    let mut points: HashMap<&str, u32> = players.iter().map(|p| (p.as_str(), 0)).collect();
    let mut champs: HashMap<&str, u32> = players.iter().map(|p| (p.as_str(), 0)).collect();

    // Iteration order over divisions does not matter: contributions are
    // additive and commutative.
    for (division, top5) in rankings_by_division {
        let empty = HashMap::new();
        let picks_for_div = picks_by_division.get(division).unwrap_or(&empty);

        for player in players {
            let Some(pick) = picks_for_div.get(player) else {
                continue;
            };

            let pick_lower = pick.to_lowercase();
            let Some(idx) = top5.iter().position(|name| name.to_lowercase() == pick_lower) else {
                continue;
            };

            let awarded = 5u32.saturating_sub(idx as u32);
            if let Some(p) = points.get_mut(player.as_str()) {
                *p += awarded;
            }
            if idx == 0 {
                if let Some(c) = champs.get_mut(player.as_str()) {
                    *c += 1;
                }
            }
        }
    }

    let mut rows: Vec<LeaderboardRow> = players
        .iter()
        .map(|p| LeaderboardRow {
            player: p.clone(),
            champs: champs.get(p.as_str()).copied().unwrap_or(0),
            points: points.get(p.as_str()).copied().unwrap_or(0),
        })
        .collect();

    // Champs descending, then points descending. sort_by is stable, so full
    // ties keep the original roster order.
    rows.sort_by(|a, b| b.champs.cmp(&a.champs).then(b.points.cmp(&a.points)));

    rows
}
