use std::io::IsTerminal;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::LeaderboardRow;
use crate::snapshot::{NextFight, Snapshot};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// One-line summary of who currently leads the board
/// Format: "{player} leads with {champs} champs and {points} points."
pub fn format_leader_summary(board: &[LeaderboardRow], use_colors: bool) -> String {
    let Some(leader) = board.first() else {
        return "No data yet.".to_string();
    };

    if use_colors {
        format!(
            "{} leads with {} champs and {} points.",
            leader.player.bold(),
            leader.champs.bold(),
            leader.points.bold()
        )
    } else {
        format!(
            "{} leads with {} champs and {} points.",
            leader.player, leader.champs, leader.points
        )
    }
}

/// Format the leaderboard as a table with columns: Index, Player, Champs, Points
/// Index column: 3 chars (fits "99."), right-aligned
/// Champs and Points columns: right-aligned, 6 chars each
pub fn format_leaderboard_table(board: &[LeaderboardRow], use_colors: bool) -> String {
    if board.is_empty() {
        return "No players found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let count_width = 6;
    let separator = "  ";

    // Player column sized to the longest name, capped by terminal width.
    let longest = board
        .iter()
        .map(|row| row.player.chars().count())
        .max()
        .unwrap_or(0);
    let fixed_width = index_width + 1 + separator.len() * 2 + count_width * 2;
    let player_width = match term_width {
        Some(width) if width > fixed_width + 10 => longest.min(width - fixed_width),
        Some(_) => longest.min(20),
        None => longest,
    };

    let header = format!(
        "{:>index_width$} {:<player_width$}{}{:>count_width$}{}{:>count_width$}",
        "", "Player", separator, "Champs", separator, "Points",
    );

    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    for (idx, row) in board.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        // Pad before styling so ANSI codes don't count against the width.
        let player_padded = format!(
            "{:<player_width$}",
            truncate_name(&row.player, player_width)
        );

        if use_colors {
            lines.push(format!(
                "{} {}{}{:>count_width$}{}{:>count_width$}",
                index_str.dimmed(),
                player_padded.bold(),
                separator,
                row.champs,
                separator,
                row.points,
            ));
        } else {
            lines.push(format!(
                "{} {}{}{:>count_width$}{}{:>count_width$}",
                index_str, player_padded, separator, row.champs, separator, row.points,
            ));
        }
    }

    lines.join("\n")
}

/// Format the leaderboard as tab-separated values for scripting
/// Columns: player, champs, points (no headers, no colors)
pub fn format_tsv(board: &[LeaderboardRow]) -> String {
    board
        .iter()
        .map(|row| format!("{}\t{}\t{}", row.player, row.champs, row.points))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the next important fight line
/// Format: "{event} — {A} vs {B} ({date})", with "TBD" fallbacks
pub fn format_next_fight(next_fight: Option<&NextFight>) -> String {
    let Some(nf) = next_fight else {
        return "TBD".to_string();
    };
    let Some(event) = nf.event.as_deref() else {
        return "TBD".to_string();
    };

    let fighters = if nf.fighters.is_empty() {
        "TBD".to_string()
    } else {
        nf.fighters.join(" vs ")
    };
    let date = nf.date.as_deref().unwrap_or("TBD");

    format!("{} — {} ({})", event, fighters, date)
}

/// Format the last-updated line. RFC 3339 timestamps are shown as UTC
/// RFC 2822; anything else is shown verbatim. Absent timestamps produce an
/// empty string (the line is omitted).
pub fn format_updated_at(updated_at: Option<&str>) -> String {
    let Some(raw) = updated_at else {
        return String::new();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => format!("Last updated: {}", dt.with_timezone(&Utc).to_rfc2822()),
        Err(_) => format!("Last updated: {}", raw),
    }
}

/// Format the per-division picks view: one section per division with picks,
/// one line per roster player pairing their pick with an image reference.
/// Fighters with no configured image get `placeholder` instead.
///
/// `division_filter` narrows the view to one division, matched
/// case-insensitively on the division name.
pub fn format_picks(
    snapshot: &Snapshot,
    division_filter: Option<&str>,
    placeholder: &str,
    use_colors: bool,
) -> String {
    let divisions: Vec<&str> = snapshot
        .pick_divisions()
        .into_iter()
        .filter(|div| match division_filter {
            Some(filter) => div.eq_ignore_ascii_case(filter),
            None => true,
        })
        .collect();

    if divisions.is_empty() {
        return match division_filter {
            Some(filter) => format!("No picks found for division '{}'.", filter),
            None => "No picks found.".to_string(),
        };
    }

    let mut sections = Vec::new();
    for division in divisions {
        let mut lines = vec![if use_colors {
            division.bold().to_string()
        } else {
            division.to_string()
        }];

        for player in &snapshot.players {
            let fighter = snapshot.pick_for(division, player).unwrap_or("—");
            let image = snapshot.image_for(fighter).unwrap_or(placeholder);

            if use_colors {
                lines.push(format!(
                    "  {}: {}  [{}]",
                    player.bold(),
                    fighter,
                    image.dimmed()
                ));
            } else {
                lines.push(format!("  {}: {}  [{}]", player, fighter, image));
            }
        }

        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Vec<LeaderboardRow> {
        vec![
            LeaderboardRow {
                player: "Alice".to_string(),
                champs: 2,
                points: 17,
            },
            LeaderboardRow {
                player: "Bob".to_string(),
                champs: 1,
                points: 21,
            },
        ]
    }

    fn sample_snapshot() -> Snapshot {
        serde_json::from_str(
            r#"{
                "players": ["Alice", "Bob"],
                "picks": {
                    "LW": { "Alice": "Fighter1", "Bob": "Fighter2" },
                    "HW": { "Alice": "Fighter3" }
                },
                "fighters": { "Fighter1": "img/f1.jpg", "Fighter2": "  " }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_leader_summary() {
        let result = format_leader_summary(&sample_board(), false);
        assert_eq!(result, "Alice leads with 2 champs and 17 points.");
    }

    #[test]
    fn test_leader_summary_empty() {
        assert_eq!(format_leader_summary(&[], false), "No data yet.");
    }

    #[test]
    fn test_leaderboard_table() {
        let result = format_leaderboard_table(&sample_board(), false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].contains("Player"));
        assert!(lines[0].contains("Champs"));
        assert!(lines[0].contains("Points"));
        assert!(lines[1].contains(" 1."));
        assert!(lines[1].contains("Alice"));
        assert!(lines[1].contains("17"));
        assert!(lines[2].contains(" 2."));
        assert!(lines[2].contains("Bob"));
        assert!(lines[2].contains("21"));
    }

    #[test]
    fn test_leaderboard_table_empty() {
        assert_eq!(format_leaderboard_table(&[], false), "No players found.");
    }

    #[test]
    fn test_format_tsv() {
        let result = format_tsv(&sample_board());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines, vec!["Alice\t2\t17", "Bob\t1\t21"]);
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_next_fight_full() {
        let nf: NextFight = serde_json::from_str(
            r#"{ "event": "UFC 300", "fighters": ["A", "B"], "date": "2026-09-12" }"#,
        )
        .unwrap();
        assert_eq!(format_next_fight(Some(&nf)), "UFC 300 — A vs B (2026-09-12)");
    }

    #[test]
    fn test_next_fight_missing_parts() {
        let nf: NextFight = serde_json::from_str(r#"{ "event": "UFC 300" }"#).unwrap();
        assert_eq!(format_next_fight(Some(&nf)), "UFC 300 — TBD (TBD)");
    }

    #[test]
    fn test_next_fight_no_event() {
        let nf: NextFight = serde_json::from_str(r#"{ "date": "2026-09-12" }"#).unwrap();
        assert_eq!(format_next_fight(Some(&nf)), "TBD");
        assert_eq!(format_next_fight(None), "TBD");
    }

    #[test]
    fn test_updated_at_rfc3339() {
        let result = format_updated_at(Some("2026-08-20T10:00:00Z"));
        assert_eq!(result, "Last updated: Thu, 20 Aug 2026 10:00:00 +0000");
    }

    #[test]
    fn test_updated_at_unparseable_shown_verbatim() {
        assert_eq!(
            format_updated_at(Some("last tuesday")),
            "Last updated: last tuesday"
        );
    }

    #[test]
    fn test_updated_at_absent() {
        assert_eq!(format_updated_at(None), "");
    }

    #[test]
    fn test_picks_view_sections_and_placeholder() {
        let snapshot = sample_snapshot();
        let result = format_picks(&snapshot, None, "img/none.png", false);

        // Divisions sorted: HW before LW.
        let hw_pos = result.find("HW").unwrap();
        let lw_pos = result.find("LW").unwrap();
        assert!(hw_pos < lw_pos);

        // Configured image used where present.
        assert!(result.contains("Alice: Fighter1  [img/f1.jpg]"));
        // Blank image reference falls back to placeholder.
        assert!(result.contains("Bob: Fighter2  [img/none.png]"));
        // Missing pick shows the em-dash placeholder and the image fallback.
        assert!(result.contains("Bob: —  [img/none.png]"));
    }

    #[test]
    fn test_picks_view_division_filter_case_insensitive() {
        let snapshot = sample_snapshot();
        let result = format_picks(&snapshot, Some("lw"), "img/none.png", false);
        assert!(result.contains("LW"));
        assert!(!result.contains("Fighter3"));
    }

    #[test]
    fn test_picks_view_unknown_division() {
        let snapshot = sample_snapshot();
        let result = format_picks(&snapshot, Some("Flyweight"), "img/none.png", false);
        assert_eq!(result, "No picks found for division 'Flyweight'.");
    }

    #[test]
    fn test_picks_view_no_picks_at_all() {
        let snapshot: Snapshot = serde_json::from_str(r#"{ "players": ["A"] }"#).unwrap();
        let result = format_picks(&snapshot, None, "img/none.png", false);
        assert_eq!(result, "No picks found.");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("A very long player name", 15), "A very long ...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }
}
