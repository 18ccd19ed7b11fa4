use crate::sports::League;

/// Prompt for enumerating upcoming games, one per line in a fixed format.
pub fn upcoming_games(league: League, count: usize) -> String {
    format!(
        "Find {count} upcoming {league} games in the next week. \
         Use this exact format on each line: 'Away Team at Home Team - YYYY-MM-DD'. \
         No bullets, no extra text, no explanations — just the lines.",
        count = count,
        league = league.display_name(),
    )
}

/// Prompt for picking one winner per listed game, one line per item.
pub fn winner_picks(league: League, games: &[String]) -> String {
    format!(
        "Consider these upcoming {league} games:\n{games}\n\n\
         For each item (1..N), pick the more likely winner based on general team strength. \
         No odds or betting language. Output EXACTLY one line per item like this:\n\
         1) Winner: TEAM NAME",
        league = league.display_name(),
        games = numbered_list(games),
    )
}

/// Prompt for a one-sentence justification per (game, predicted winner) pair.
/// Restricts output to plain prose so the splitter heuristics hold up:
/// text, commas, and periods only, with a recency constraint on evidence.
pub fn pick_reasoning(league: League, matchups: &[(String, String)]) -> String {
    let lines: Vec<String> = matchups
        .iter()
        .enumerate()
        .map(|(i, (game, winner))| format!("{}. {} -> Predicted winner: {}", i + 1, game, winner))
        .collect();

    format!(
        "Here are some upcoming {league} games and predicted winners:\n{matchups}\n\n\
         Give a short, one-sentence reason for each prediction based on player stats, \
         team performance, and recent matchups. Prioritize analytics from the 2024-2025 \
         season and the 25-26 season. Do not reference stats from 2023 or earlier. \
         Be concise, your responses should be easy to read and digest while staying \
         informative. Your response should only include text, commas, and periods. \
         No dashes or additional punctuation or characters.",
        league = league.display_name(),
        matchups = lines.join("\n"),
    )
}

fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_games_prompt_content() {
        let prompt = upcoming_games(League::Nfl, 3);
        assert!(prompt.contains("Find 3 upcoming NFL games"));
        assert!(prompt.contains("'Away Team at Home Team - YYYY-MM-DD'"));
        assert!(prompt.contains("No bullets"));
    }

    #[test]
    fn test_upcoming_games_prompt_respects_count() {
        let prompt = upcoming_games(League::Mlb, 5);
        assert!(prompt.contains("Find 5 upcoming MLB games"));
    }

    #[test]
    fn test_winner_picks_prompt_numbers_games() {
        let games = vec![
            "Jets at Bills - 2025-11-02".to_string(),
            "Eagles at Cowboys - 2025-11-03".to_string(),
        ];
        let prompt = winner_picks(League::Nfl, &games);
        assert!(prompt.contains("1. Jets at Bills - 2025-11-02"));
        assert!(prompt.contains("2. Eagles at Cowboys - 2025-11-03"));
        assert!(prompt.contains("1) Winner: TEAM NAME"));
        assert!(prompt.contains("EXACTLY one line per item"));
        assert!(prompt.contains("No odds or betting language"));
    }

    #[test]
    fn test_pick_reasoning_prompt_content() {
        let matchups = vec![(
            "Lakers at Celtics - 2025-11-04".to_string(),
            "Celtics".to_string(),
        )];
        let prompt = pick_reasoning(League::Nba, &matchups);
        assert!(prompt.contains("upcoming NBA games and predicted winners"));
        assert!(prompt.contains("1. Lakers at Celtics - 2025-11-04 -> Predicted winner: Celtics"));
        assert!(prompt.contains("one-sentence reason"));
        assert!(prompt.contains("2024-2025"));
        assert!(prompt.contains("Do not reference stats from 2023 or earlier"));
        assert!(prompt.contains("text, commas, and periods"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let games = vec!["Mets at Braves - 2025-07-01".to_string()];
        assert_eq!(
            winner_picks(League::Mlb, &games),
            winner_picks(League::Mlb, &games)
        );
    }
}
