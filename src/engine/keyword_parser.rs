use crate::model::keyword::KeywordEntry;

pub fn parse_keywords(text: &str) -> Vec<KeywordEntry> {
    let mut entries = Vec::new();

    for line in text.lines() {
        let line = strip_decoration(line);
        if line.is_empty() {
            continue;
        }

        // Markdown tables wrap rows in pipes: | word | translation |
        let row = line.trim_matches('|').trim();

        let Some((word, translation)) = row.split_once('|') else {
            continue;
        };

        let word = strip_decoration(word);
        let translation = strip_decoration(translation.split('|').next().unwrap_or(""));

        if word.is_empty() || translation.is_empty() {
            continue;
        }

        // |---|---| separator rows
        if word.chars().all(|c| c == '-' || c == ':') {
            continue;
        }

        // Header row echoed back from the prompt
        if word.to_lowercase().starts_with("word")
            && translation.to_lowercase().contains("translation")
        {
            continue;
        }

        entries.push(KeywordEntry {
            word: word.to_string(),
            translation: translation.to_string(),
        });
    }

    entries
}

fn strip_decoration(s: &str) -> &str {
    let mut s = s.trim();

    // Bullets: "- ", "* ", "• "
    for bullet in ["- ", "* ", "• "] {
        if let Some(rest) = s.strip_prefix(bullet) {
            s = rest.trim_start();
        }
    }

    // Numbering: "1. ", "12) "
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &s[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            s = rest.trim_start();
        }
    }

    s.trim_matches('*').trim_matches('_').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(word: &str, translation: &str) -> KeywordEntry {
        KeywordEntry { word: word.into(), translation: translation.into() }
    }

    #[test]
    fn parses_plain_pipe_lines() {
        let entries = parse_keywords("engine | 发动机\nfailure | 故障\n");
        assert_eq!(entries, vec![pair("engine", "发动机"), pair("failure", "故障")]);
    }

    #[test]
    fn skips_header_and_markdown_noise() {
        let text = "**Word (English) | Translation (Chinese)**\n\
                    \n\
                    | Word | Translation |\n\
                    |------|-------------|\n\
                    1. **curious** | 好奇的\n\
                    - *whisper* | 低语\n\
                    | ancient | 古老的 |\n\
                    Here are the words you asked for:";

        let entries = parse_keywords(text);
        assert_eq!(
            entries,
            vec![pair("curious", "好奇的"), pair("whisper", "低语"), pair("ancient", "古老的")]
        );
    }

    #[test]
    fn header_row_is_skipped_in_any_case() {
        let text = "| word | translation |\nWORD (ENGLISH) | TRANSLATION (CHINESE)\nbrave | 勇敢的";
        assert_eq!(parse_keywords(text), vec![pair("brave", "勇敢的")]);
    }

    #[test]
    fn lines_without_a_separator_yield_nothing() {
        assert!(parse_keywords("engine - 发动机\nno pairs here").is_empty());
    }
}
