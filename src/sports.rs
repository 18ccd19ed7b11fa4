use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The three supported leagues, in keyword-routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    Nfl,
    Nba,
    Mlb,
}

impl League {
    pub fn all() -> &'static [League] {
        &[League::Nfl, League::Nba, League::Mlb]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nba => "NBA",
            League::Mlb => "MLB",
        }
    }

    /// Lowercase keyword used for chat routing
    pub fn keyword(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nba => "nba",
            League::Mlb => "mlb",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            League::Nfl => "\u{1f3c8}", // football
            League::Nba => "\u{1f3c0}", // basketball
            League::Mlb => "\u{26be}",  // baseball
        }
    }

    /// Accent color per league, following the original hue scheme
    /// (NFL green, NBA red, MLB blue).
    pub fn accent_color(&self) -> Color {
        match self {
            League::Nfl => Color::Rgb(60, 200, 90),
            League::Nba => Color::Rgb(230, 70, 70),
            League::Mlb => Color::Rgb(80, 150, 240),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nfl" => Ok(League::Nfl),
            "nba" => Ok(League::Nba),
            "mlb" => Ok(League::Mlb),
            other => Err(format!(
                "unknown league '{}', expected NFL, NBA, or MLB",
                other
            )),
        }
    }
}

/// Case-insensitive substring routing in fixed priority order:
/// "nfl" wins over "nba" wins over "mlb".
pub fn detect_league(text: &str) -> Option<League> {
    let q = text.to_lowercase();
    League::all()
        .iter()
        .copied()
        .find(|league| q.contains(league.keyword()))
}

/// Returns the primary color for a team based on its name or abbreviation.
/// Winner labels on the board are tinted with these.
pub fn get_team_color(name: &str) -> Color {
    let name = name.to_uppercase();

    // NBA
    if name.contains("HAWKS") || name == "ATL" {
        return Color::Rgb(224, 58, 62);
    }
    if name.contains("CELTICS") || name == "BOS" {
        return Color::Rgb(0, 200, 80);
    }
    if name.contains("NETS") || name == "BKN" {
        return Color::Rgb(200, 200, 200);
    }
    if name.contains("HORNETS") || name == "CHA" {
        return Color::Cyan;
    }
    if name.contains("BULLS") || name == "CHI" {
        return Color::Rgb(206, 17, 65);
    }
    if name.contains("CAVALIERS") || name == "CLE" {
        return Color::Rgb(134, 0, 56);
    }
    if name.contains("MAVERICKS") || name == "DAL" {
        return Color::Cyan;
    }
    if name.contains("NUGGETS") || name == "DEN" {
        return Color::Rgb(254, 197, 36);
    }
    if name.contains("PISTONS") || name == "DET" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("WARRIORS") || name == "GSW" {
        return Color::Rgb(255, 199, 44);
    }
    if name.contains("ROCKETS") || name == "HOU" {
        return Color::Rgb(206, 17, 65);
    }
    if name.contains("PACERS") || name == "IND" {
        return Color::Rgb(253, 187, 48);
    }
    if name.contains("CLIPPERS") || name == "LAC" {
        return Color::Rgb(200, 16, 46);
    }
    if name.contains("LAKERS") || name == "LAL" {
        return Color::Rgb(190, 140, 255);
    }
    if name.contains("GRIZZLIES") || name == "MEM" {
        return Color::Rgb(93, 118, 169);
    }
    if name.contains("HEAT") || name == "MIA" {
        return Color::Rgb(240, 60, 80);
    }
    if name.contains("BUCKS") || name == "MIL" {
        return Color::Rgb(70, 200, 120);
    }
    if name.contains("TIMBERWOLVES") || name == "MIN" {
        return Color::Cyan;
    }
    if name.contains("PELICANS") || name == "NOP" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("KNICKS") || name == "NYK" {
        return Color::Rgb(245, 132, 38);
    }
    if name.contains("THUNDER") || name == "OKC" {
        return Color::Cyan;
    }
    if name.contains("MAGIC") || name == "ORL" {
        return Color::Cyan;
    }
    if name.contains("76ERS") || name == "PHI" {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("SUNS") || name == "PHX" {
        return Color::Rgb(245, 130, 50);
    }
    if name.contains("BLAZERS") || name == "POR" {
        return Color::Rgb(224, 58, 62);
    }
    if name.contains("KINGS") || name == "SAC" {
        return Color::Rgb(160, 100, 220);
    }
    if name.contains("SPURS") || name == "SAS" {
        return Color::Rgb(196, 206, 212);
    }
    if name.contains("RAPTORS") || name == "TOR" {
        return Color::Rgb(206, 17, 65);
    }
    if name.contains("JAZZ") || name == "UTA" {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("WIZARDS") || name == "WAS" {
        return Color::Rgb(227, 24, 55);
    }

    // NFL
    if name.contains("CARDINALS") || name == "ARI" {
        return Color::Rgb(200, 60, 90);
    }
    if name.contains("FALCONS") {
        return Color::Rgb(167, 25, 48);
    }
    if name.contains("RAVENS") || name == "BAL" {
        return Color::Rgb(186, 85, 211);
    }
    if name.contains("BILLS") || name == "BUF" {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("PANTHERS") || name == "CAR" {
        return Color::Cyan;
    }
    if name.contains("BEARS") {
        return Color::Rgb(135, 206, 235);
    }
    if name.contains("BENGALS") || name == "CIN" {
        return Color::Rgb(255, 140, 0);
    }
    if name.contains("BROWNS") {
        return Color::Rgb(215, 130, 60);
    }
    if name.contains("COWBOYS") {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("BRONCOS") {
        return Color::Rgb(251, 79, 20);
    }
    if name.contains("LIONS") {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("PACKERS") || name == "GB" {
        return Color::Rgb(50, 205, 50);
    }
    if name.contains("TEXANS") {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("COLTS") {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("JAGUARS") || name == "JAX" {
        return Color::Rgb(0, 255, 220);
    }
    if name.contains("CHIEFS") || name == "KC" {
        return Color::Rgb(227, 24, 55);
    }
    if name.contains("RAIDERS") || name == "LV" {
        return Color::Rgb(200, 200, 200);
    }
    if name.contains("CHARGERS") {
        return Color::Rgb(100, 220, 255);
    }
    if name.contains("RAMS") {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("DOLPHINS") {
        return Color::Rgb(0, 255, 230);
    }
    if name.contains("VIKINGS") {
        return Color::Rgb(170, 120, 220);
    }
    if name.contains("PATRIOTS") || name == "NE" {
        return Color::Rgb(100, 180, 255);
    }
    if name.contains("SAINTS") || name == "NO" {
        return Color::Rgb(211, 188, 141);
    }
    if name.contains("GIANTS") || name == "NYG" {
        return Color::Rgb(100, 200, 255);
    }
    if name.contains("JETS") || name == "NYJ" {
        return Color::Rgb(60, 190, 130);
    }
    if name.contains("EAGLES") {
        return Color::Rgb(0, 250, 200);
    }
    if name.contains("STEELERS") || name == "PIT" {
        return Color::Rgb(255, 182, 18);
    }
    if name.contains("49ERS") || name == "SF" {
        return Color::Rgb(230, 80, 60);
    }
    if name.contains("SEAHAWKS") || name == "SEA" {
        return Color::Cyan;
    }
    if name.contains("BUCCANEERS") || name == "TB" {
        return Color::Rgb(213, 10, 10);
    }
    if name.contains("TITANS") || name == "TEN" {
        return Color::Cyan;
    }
    if name.contains("COMMANDERS") {
        return Color::Rgb(200, 90, 110);
    }

    // MLB
    if name.contains("YANKEES") || name == "NYY" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("RED SOX") || name == "BOS" {
        return Color::Rgb(189, 48, 57);
    }
    if name.contains("DODGERS") || name == "LAD" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("CUBS") || name == "CHC" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("GIANTS") || name == "SFG" {
        return Color::Rgb(253, 90, 30);
    }
    if name.contains("METS") || name == "NYM" {
        return Color::Rgb(135, 206, 250);
    }
    if name.contains("ASTROS") || name == "HOU" {
        return Color::Rgb(255, 140, 0);
    }
    if name.contains("BRAVES") || name == "ATL" {
        return Color::Rgb(206, 17, 65);
    }
    if name.contains("PHILLIES") || name == "PHI" {
        return Color::Rgb(230, 40, 70);
    }
    if name.contains("PADRES") || name == "SD" {
        return Color::Rgb(255, 196, 37);
    }
    if name.contains("MARINERS") || name == "SEA" {
        return Color::Rgb(0, 255, 220);
    }
    if name.contains("ORIOLES") || name == "BAL" {
        return Color::Rgb(255, 140, 0);
    }
    if name.contains("GUARDIANS") || name == "CLE" {
        return Color::Rgb(230, 50, 70);
    }
    if name.contains("BREWERS") || name == "MIL" {
        return Color::Rgb(255, 196, 37);
    }
    if name.contains("RANGERS") || name == "TEX" {
        return Color::Rgb(100, 180, 255);
    }
    if name.contains("BLUE JAYS") || name == "TOR" {
        return Color::Rgb(100, 180, 255);
    }
    if name.contains("DIAMONDBACKS") || name == "AZ" {
        return Color::Rgb(220, 80, 60);
    }
    if name.contains("TIGERS") || name == "DET" {
        return Color::Rgb(250, 120, 60);
    }

    // Fallback
    Color::Reset
}

/// Lightens a color for better visibility on dark terminals.
/// Boosts RGB values closer to 255 while preserving hue.
fn lighten_color(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let luminance = (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0;

            if luminance < 0.5 {
                let boost = 1.7 + (0.5 - luminance);
                let new_r = ((r as f32 * boost).min(255.0)) as u8;
                let new_g = ((g as f32 * boost).min(255.0)) as u8;
                let new_b = ((b as f32 * boost).min(255.0)) as u8;
                Color::Rgb(new_r.max(100), new_g.max(100), new_b.max(100))
            } else {
                Color::Rgb(r, g, b)
            }
        }
        other => other,
    }
}

/// Team color with a readable fallback for unknown teams.
pub fn get_team_color_with_fallback(name: &str) -> Color {
    let specific = get_team_color(name);
    if specific != Color::Reset {
        lighten_color(specific)
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_league_nba() {
        assert_eq!(detect_league("show me NBA picks"), Some(League::Nba));
        assert_eq!(detect_league("nba tonight?"), Some(League::Nba));
        assert_eq!(detect_league("who wins in the nBa"), Some(League::Nba));
    }

    #[test]
    fn test_detect_league_priority_order() {
        // "nfl" outranks "nba" outranks "mlb" regardless of word order
        assert_eq!(detect_league("nba or nfl picks?"), Some(League::Nfl));
        assert_eq!(detect_league("mlb and nba today"), Some(League::Nba));
        assert_eq!(detect_league("MLB MLB MLB"), Some(League::Mlb));
    }

    #[test]
    fn test_detect_league_none() {
        assert_eq!(detect_league("what is a parlay?"), None);
        assert_eq!(detect_league(""), None);
        assert_eq!(detect_league("tell me about hockey"), None);
    }

    #[test]
    fn test_league_from_str() {
        assert_eq!("NFL".parse::<League>(), Ok(League::Nfl));
        assert_eq!(" mlb ".parse::<League>(), Ok(League::Mlb));
        assert!("nhl".parse::<League>().is_err());
    }

    #[test]
    fn test_team_colors() {
        assert_ne!(get_team_color("Los Angeles Lakers"), Color::Reset);
        assert_ne!(get_team_color("Chiefs"), Color::Reset);
        assert_ne!(get_team_color("New York Yankees"), Color::Reset);
        assert_eq!(get_team_color("Some Unknown Club"), Color::Reset);
        assert_eq!(
            get_team_color_with_fallback("Some Unknown Club"),
            Color::White
        );
    }
}
