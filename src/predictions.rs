use chrono::{DateTime, Utc};

use crate::api::ResponsesClient;
use crate::errors::{BetError, FetchStage};
use crate::parser;
use crate::prompts;
use crate::sports::League;

/// One predicted game: the matchup text, the picked winner, and a
/// one-sentence justification. All three are free text from the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub game: String,
    pub winner: String,
    pub reason: String,
}

/// Predictions for one league from a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueCard {
    pub league: League,
    pub matchups: Vec<Matchup>,
    pub fetched_at: DateTime<Utc>,
}

/// Zip games, winners, and reasons into a card.
///
/// Winners and reasons are forced to the game count first, so a model
/// that returns too few or too many lines never drops a game row.
pub fn assemble_card(
    league: League,
    games: Vec<String>,
    winners: Vec<String>,
    reasons: Vec<String>,
) -> LeagueCard {
    let target = games.len();
    let winners = parser::align_to(winners, target, parser::NO_PICK);
    let reasons = parser::align_to(reasons, target, parser::NO_REASONING);

    let matchups = games
        .into_iter()
        .zip(winners)
        .zip(reasons)
        .map(|((game, winner), reason)| Matchup {
            game,
            winner,
            reason,
        })
        .collect();

    LeagueCard {
        league,
        matchups,
        fetched_at: Utc::now(),
    }
}

/// Run the three-stage pipeline for one league: list games, pick a winner
/// per game, then ask for one-sentence reasoning. Stages run in order
/// because each prompt embeds the previous stage's output. `notify` is
/// called as each stage starts so the UI can show progress.
pub async fn fetch_league(
    client: &ResponsesClient,
    league: League,
    count: usize,
    notify: impl Fn(FetchStage),
) -> Result<LeagueCard, BetError> {
    notify(FetchStage::FindingGames(league));
    let games_reply = client
        .generate(&prompts::upcoming_games(league, count), true)
        .await?;
    let games = parser::split_items(&games_reply);
    if games.is_empty() {
        // Nothing usable came back. Skip the remaining stages rather than
        // prompting the model about an empty list.
        return Ok(assemble_card(league, games, Vec::new(), Vec::new()));
    }

    notify(FetchStage::PickingWinners(league));
    let picks_reply = client
        .generate(&prompts::winner_picks(league, &games), false)
        .await?;
    let winners = parser::align_to(
        parser::split_items(&picks_reply)
            .iter()
            .map(|line| parser::extract_winner(line))
            .collect(),
        games.len(),
        parser::NO_PICK,
    );

    notify(FetchStage::WritingReasoning(league));
    let pairs: Vec<(String, String)> = games
        .iter()
        .cloned()
        .zip(winners.iter().cloned())
        .collect();
    let reasoning_reply = client
        .generate(&prompts::pick_reasoning(league, &pairs), true)
        .await?;
    let reasons = parser::split_items(&reasoning_reply)
        .iter()
        .map(|line| parser::trim_reason(line))
        .collect();

    Ok(assemble_card(league, games, winners, reasons))
}

/// Fetch all three leagues concurrently. The first failing league fails
/// the whole action and nothing is kept from the others.
pub async fn fetch_all_leagues(
    client: &ResponsesClient,
    count: usize,
    notify: impl Fn(FetchStage) + Copy,
) -> Result<Vec<LeagueCard>, BetError> {
    let (nfl, nba, mlb) = futures::try_join!(
        fetch_league(client, League::Nfl, count, notify),
        fetch_league(client, League::Nba, count, notify),
        fetch_league(client, League::Mlb, count, notify),
    )?;
    Ok(vec![nfl, nba, mlb])
}

/// Plain-text rendering of one card for the command line.
pub fn console_summary(card: &LeagueCard) -> String {
    let mut out = format!("--- {} ---\n", card.league.display_name());
    for matchup in &card.matchups {
        out.push_str(&format!(
            "Matchup: {}\nBestBet: {}\nExplanation: {}\n\n",
            matchup.game, matchup.winner, matchup.reason
        ));
    }
    out.push_str(&"-".repeat(40));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games2() -> Vec<String> {
        vec![
            "Team A at Team B - 2025-01-01".to_string(),
            "Team C at Team D - 2025-01-02".to_string(),
        ]
    }

    #[test]
    fn test_assemble_full_lists() {
        let card = assemble_card(
            League::Nfl,
            games2(),
            vec!["Team B".to_string(), "Team D".to_string()],
            vec!["Reason one.".to_string(), "Reason two.".to_string()],
        );
        assert_eq!(card.league, League::Nfl);
        assert_eq!(card.matchups.len(), 2);
        assert_eq!(card.matchups[0].game, "Team A at Team B - 2025-01-01");
        assert_eq!(card.matchups[0].winner, "Team B");
        assert_eq!(card.matchups[1].reason, "Reason two.");
    }

    #[test]
    fn test_assemble_pads_missing_reasons() {
        let card = assemble_card(
            League::Nba,
            games2(),
            vec!["Team B".to_string(), "Team D".to_string()],
            vec!["Only one reason.".to_string()],
        );
        assert_eq!(card.matchups[0].reason, "Only one reason.");
        assert_eq!(card.matchups[1].reason, parser::NO_REASONING);
    }

    #[test]
    fn test_assemble_pads_missing_winners() {
        let card = assemble_card(
            League::Mlb,
            games2(),
            vec!["Team B".to_string()],
            Vec::new(),
        );
        assert_eq!(card.matchups[0].winner, "Team B");
        assert_eq!(card.matchups[1].winner, parser::NO_PICK);
        assert_eq!(card.matchups[1].reason, parser::NO_REASONING);
    }

    #[test]
    fn test_assemble_truncates_extras() {
        let card = assemble_card(
            League::Nfl,
            games2(),
            vec!["w1".to_string(), "w2".to_string(), "w3".to_string()],
            vec![
                "r1.".to_string(),
                "r2.".to_string(),
                "r3.".to_string(),
            ],
        );
        assert_eq!(card.matchups.len(), 2);
        assert_eq!(card.matchups[1].winner, "w2");
    }

    #[test]
    fn test_assemble_empty_games() {
        let card = assemble_card(League::Nba, Vec::new(), Vec::new(), Vec::new());
        assert!(card.matchups.is_empty());
    }

    #[test]
    fn test_pipeline_from_canned_replies() {
        // The parse half of a fetch, driven by fixed model output.
        let games = games2();

        let winners_reply = "1) Winner: Team B\n2) Winner: Team D";
        let winners: Vec<String> = parser::split_items(winners_reply)
            .iter()
            .map(|line| parser::extract_winner(line))
            .collect();
        assert_eq!(winners, vec!["Team B", "Team D"]);

        // Single-sentence reply exercises the fallback split and padding.
        let reasoning_reply = "Team B has been dominant at home.";
        let reasons: Vec<String> = parser::split_items(reasoning_reply)
            .iter()
            .map(|line| parser::trim_reason(line))
            .collect();

        let card = assemble_card(League::Nfl, games, winners, reasons);
        assert_eq!(card.matchups[0].reason, "Team B has been dominant at home");
        assert_eq!(card.matchups[1].reason, parser::NO_REASONING);
        assert_eq!(card.matchups[1].winner, "Team D");
    }

    #[test]
    fn test_console_summary_format() {
        let card = assemble_card(
            League::Nfl,
            vec!["Jets at Bills - 2025-11-02".to_string()],
            vec!["Bills".to_string()],
            vec!["Stronger defense this season.".to_string()],
        );
        let text = console_summary(&card);
        assert!(text.starts_with("--- NFL ---\n"));
        assert!(text.contains("Matchup: Jets at Bills - 2025-11-02\n"));
        assert!(text.contains("BestBet: Bills\n"));
        assert!(text.contains("Explanation: Stronger defense this season.\n"));
        assert!(text.ends_with(&"-".repeat(40)));
    }
}
