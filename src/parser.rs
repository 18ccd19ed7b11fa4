use regex::Regex;

/// Placeholder used when the model supplies fewer reasons than games.
pub const NO_REASONING: &str = "No reasoning provided.";
/// Placeholder used when the model supplies fewer winner lines than games.
pub const NO_PICK: &str = "No pick available.";

/// Split a model reply into one string per logical item.
///
/// Replies normally carry one item per line. Some replies come back as a
/// single prose blob instead, so when one or zero lines survive trimming
/// the raw text is re-split on sentence punctuation or whitespace runs.
pub fn split_items(reply: &str) -> Vec<String> {
    let lines: Vec<String> = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    if lines.len() > 1 {
        return lines;
    }

    let re = Regex::new(r"[.;]\s*|\s{2,}").unwrap();
    re.split(reply)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Keep only the text after the last "Winner:" label, or the trimmed line
/// verbatim when no label is present.
pub fn extract_winner(line: &str) -> String {
    match line.rfind("Winner:") {
        Some(idx) => line[idx + "Winner:".len()..].trim().to_string(),
        None => line.trim().to_string(),
    }
}

/// Cut a reason down to its first sentence. Web-search replies tend to
/// append citation markers after the sentence, so everything past the
/// first period is dropped. Text without a period passes through trimmed.
pub fn trim_reason(text: &str) -> String {
    match text.find('.') {
        Some(idx) => text[..=idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Force `items` to exactly `target` entries, truncating extras and
/// padding shortfalls with `placeholder`.
pub fn align_to(mut items: Vec<String>, target: usize, placeholder: &str) -> Vec<String> {
    items.resize(target, placeholder.to_string());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multiline_keeps_order() {
        let reply = "Jets at Bills - 2025-11-02\n  Eagles at Cowboys - 2025-11-03  \n\nMets at Braves - 2025-11-04\n";
        assert_eq!(
            split_items(reply),
            vec![
                "Jets at Bills - 2025-11-02",
                "Eagles at Cowboys - 2025-11-03",
                "Mets at Braves - 2025-11-04",
            ]
        );
    }

    #[test]
    fn test_split_single_line_keeps_item() {
        assert_eq!(split_items("1) Winner: Team B"), vec!["1) Winner: Team B"]);
    }

    #[test]
    fn test_split_falls_back_on_sentences() {
        let reply = "Bills have the stronger defense. Cowboys dominate at home; Braves swept the series.";
        assert_eq!(
            split_items(reply),
            vec![
                "Bills have the stronger defense",
                "Cowboys dominate at home",
                "Braves swept the series",
            ]
        );
    }

    #[test]
    fn test_split_falls_back_on_whitespace_runs() {
        assert_eq!(
            split_items("Team B wins  Team D wins   Team F wins"),
            vec!["Team B wins", "Team D wins", "Team F wins"]
        );
    }

    #[test]
    fn test_split_empty_reply() {
        assert!(split_items("").is_empty());
        assert!(split_items("   \n  \n").is_empty());
    }

    #[test]
    fn test_extract_winner_strips_label() {
        assert_eq!(extract_winner("1) Winner: Lakers"), "Lakers");
        assert_eq!(extract_winner("Winner:   Boston Celtics  "), "Boston Celtics");
    }

    #[test]
    fn test_extract_winner_uses_last_label() {
        assert_eq!(extract_winner("Winner: ignored Winner: Chiefs"), "Chiefs");
    }

    #[test]
    fn test_extract_winner_without_label() {
        assert_eq!(extract_winner("  Dallas Cowboys  "), "Dallas Cowboys");
    }

    #[test]
    fn test_trim_reason_drops_citations() {
        assert_eq!(
            trim_reason("Team A is favored due to strong defense. [1] source.com"),
            "Team A is favored due to strong defense."
        );
    }

    #[test]
    fn test_trim_reason_without_period() {
        assert_eq!(
            trim_reason("  stronger bullpen this season  "),
            "stronger bullpen this season"
        );
    }

    #[test]
    fn test_align_pads_short_list() {
        let aligned = align_to(vec!["first reason.".to_string()], 3, NO_REASONING);
        assert_eq!(aligned, vec!["first reason.", NO_REASONING, NO_REASONING]);
    }

    #[test]
    fn test_align_truncates_long_list() {
        let aligned = align_to(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            2,
            NO_REASONING,
        );
        assert_eq!(aligned, vec!["a", "b"]);
    }

    #[test]
    fn test_align_empty_input() {
        assert_eq!(align_to(Vec::new(), 2, NO_PICK), vec![NO_PICK, NO_PICK]);
        assert!(align_to(Vec::new(), 0, NO_PICK).is_empty());
    }

    #[test]
    fn test_winner_lines_end_to_end() {
        let reply = "1) Winner: Team B\n2) Winner: Team D";
        let winners: Vec<String> = split_items(reply)
            .iter()
            .map(|line| extract_winner(line))
            .collect();
        assert_eq!(winners, vec!["Team B", "Team D"]);
    }
}
