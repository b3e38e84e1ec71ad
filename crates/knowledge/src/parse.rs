use serde::Serialize;

use crate::base::KnowledgeBase;
use crate::entry::{classify_line, LineOutcome};

const BOM: char = '\u{feff}';

/// Counters describing how a knowledge resource was parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Physical lines seen.
    pub lines: usize,
    /// Distinct questions in the resulting knowledge base.
    pub entries: usize,
    pub skipped_blank: usize,
    pub skipped_no_delimiter: usize,
    pub skipped_empty_question: usize,
    /// Lines whose question was already present; the later answer won.
    pub duplicates: usize,
}

impl LoadStats {
    /// Lines that did not produce a new or replacing entry.
    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_no_delimiter + self.skipped_empty_question
    }
}

/// Parses the contents of a knowledge resource.
pub fn parse_knowledge(text: &str) -> KnowledgeBase {
    parse_knowledge_with_stats(text).0
}

/// Parses the contents of a knowledge resource and reports what was skipped.
pub fn parse_knowledge_with_stats(text: &str) -> (KnowledgeBase, LoadStats) {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut kb = KnowledgeBase::new();
    let mut stats = LoadStats::default();

    for line in text.lines() {
        stats.lines += 1;
        match classify_line(line) {
            LineOutcome::Entry(entry) => {
                if kb.insert(entry).is_some() {
                    stats.duplicates += 1;
                }
            }
            LineOutcome::Blank => stats.skipped_blank += 1,
            LineOutcome::NoDelimiter => stats.skipped_no_delimiter += 1,
            LineOutcome::EmptyQuestion => stats.skipped_empty_question += 1,
        }
    }

    stats.entries = kb.len();
    (kb, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
what is your name|I am highxbot.
how are you|Doing well, thanks!

this line has no delimiter
   |orphan answer
What is your NAME?|My name is highxbot.
who made you|A hobbyist | with a keyboard
";

    #[test]
    fn parses_sample_with_stats() {
        let (kb, stats) = parse_knowledge_with_stats(SAMPLE);

        assert_eq!(kb.len(), 3);
        assert_eq!(kb.get("what is your name"), Some("My name is highxbot."));
        assert_eq!(kb.get("how are you"), Some("Doing well, thanks!"));
        assert_eq!(kb.get("who made you"), Some("A hobbyist | with a keyboard"));

        assert_eq!(
            stats,
            LoadStats {
                lines: 7,
                entries: 3,
                skipped_blank: 1,
                skipped_no_delimiter: 1,
                skipped_empty_question: 1,
                duplicates: 1,
            }
        );
        assert_eq!(stats.skipped(), 3);
    }

    #[test]
    fn handles_crlf_and_bom() {
        let text = "\u{feff}hello world|Hi!\r\nbye now|See you.\r\n";
        let kb = parse_knowledge(text);
        let pairs: Vec<(&str, &str)> = kb.iter().collect();
        assert_eq!(pairs, vec![("hello world", "Hi!"), ("bye now", "See you.")]);
    }

    #[test]
    fn empty_text_yields_empty_base() {
        let (kb, stats) = parse_knowledge_with_stats("");
        assert!(kb.is_empty());
        assert_eq!(stats, LoadStats::default());
    }

    #[test]
    fn stored_keys_equal_normalized_raw_questions() {
        let lines = [
            "  Where do you LIVE?  |In RAM.",
            "what's 2+2|4",
            "Tabs\tand  spaces|ok",
        ];
        let kb = parse_knowledge(&lines.join("\n"));

        for line in lines {
            let (raw_question, _) = line.split_once('|').unwrap();
            let key = canonical::normalize(raw_question);
            assert!(kb.contains(&key), "missing key {key:?}");
        }
    }
}
