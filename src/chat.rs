use crate::predictions::LeagueCard;
use crate::sports::{detect_league, League};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the session transcript. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Where a chat message gets handled: a fresh fetch for a named league,
/// or an open-ended model call with the text as the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatRoute {
    League(League),
    FreeForm,
}

/// League keyword match wins over free-form, NFL before NBA before MLB.
pub fn route_message(text: &str) -> ChatRoute {
    match detect_league(text) {
        Some(league) => ChatRoute::League(league),
        None => ChatRoute::FreeForm,
    }
}

/// Render a fetched card as one assistant chat reply.
pub fn format_league_reply(card: &LeagueCard) -> String {
    if card.matchups.is_empty() {
        return format!(
            "No upcoming {} games found right now.",
            card.league.display_name()
        );
    }

    let mut out = format!("{} BestBets:", card.league.display_name());
    for (i, matchup) in card.matchups.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {}\n   BestBet: {}\n   {}",
            i + 1,
            matchup.game,
            matchup.winner,
            matchup.reason
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::assemble_card;

    #[test]
    fn test_route_league_keyword_any_case() {
        assert_eq!(route_message("show me NBA picks"), ChatRoute::League(League::Nba));
        assert_eq!(route_message("nba tonight?"), ChatRoute::League(League::Nba));
        assert_eq!(
            route_message("what about the MLB slate"),
            ChatRoute::League(League::Mlb)
        );
    }

    #[test]
    fn test_route_priority_order() {
        // NFL is checked first when several league names appear.
        assert_eq!(
            route_message("nba or nfl this weekend?"),
            ChatRoute::League(League::Nfl)
        );
    }

    #[test]
    fn test_route_free_form() {
        assert_eq!(route_message("who is the best quarterback ever"), ChatRoute::FreeForm);
        assert_eq!(route_message("hello"), ChatRoute::FreeForm);
    }

    #[test]
    fn test_format_league_reply_lists_matchups() {
        let card = assemble_card(
            League::Nba,
            vec!["Lakers at Celtics - 2025-11-04".to_string()],
            vec!["Celtics".to_string()],
            vec!["Home court and a deeper bench.".to_string()],
        );
        let reply = format_league_reply(&card);
        assert!(reply.starts_with("NBA BestBets:"));
        assert!(reply.contains("1. Lakers at Celtics - 2025-11-04"));
        assert!(reply.contains("BestBet: Celtics"));
        assert!(reply.contains("Home court and a deeper bench."));
    }

    #[test]
    fn test_format_league_reply_empty_card() {
        let card = assemble_card(League::Mlb, Vec::new(), Vec::new(), Vec::new());
        assert_eq!(
            format_league_reply(&card),
            "No upcoming MLB games found right now."
        );
    }
}
