use canonical::normalize;
use serde::Serialize;

/// Field separator of the knowledge format. Only the first one on a line
/// counts; later ones belong to the answer.
pub const DELIMITER: char = '|';

/// One (normalized question, answer) pair.
///
/// The question is always the output of [`canonical::normalize`] and never
/// empty; [`KnowledgeEntry::new`] and [`KnowledgeEntry::parse_line`] are the
/// only ways to build one. The answer is trimmed but otherwise verbatim, so it
/// can be a natural sentence with case and punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    question: String,
    answer: String,
}

impl KnowledgeEntry {
    /// Builds an entry from raw question and answer text.
    ///
    /// Returns `None` when the question normalizes to the empty string.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = normalize(question.trim());
        if question.is_empty() {
            return None;
        }
        Some(Self {
            question,
            answer: answer.trim().to_string(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.question, self.answer)
    }

    /// Parses one `question|answer` line.
    ///
    /// Blank lines, lines without a `|` and lines whose question normalizes to
    /// nothing all yield `None`.
    ///
    /// ```rust
    /// use knowledge::KnowledgeEntry;
    ///
    /// let entry = KnowledgeEntry::parse_line("What is your name?|I am highxbot.").unwrap();
    /// assert_eq!(entry.question(), "what is your name");
    /// assert_eq!(entry.answer(), "I am highxbot.");
    ///
    /// assert!(KnowledgeEntry::parse_line("no delimiter here").is_none());
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        match classify_line(line) {
            LineOutcome::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// What a single source line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    Entry(KnowledgeEntry),
    Blank,
    NoDelimiter,
    EmptyQuestion,
}

pub(crate) fn classify_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }
    let Some((question, answer)) = line.split_once(DELIMITER) else {
        return LineOutcome::NoDelimiter;
    };
    match KnowledgeEntry::new(question, answer) {
        Some(entry) => LineOutcome::Entry(entry),
        None => LineOutcome::EmptyQuestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_delimiter_only() {
        let entry = KnowledgeEntry::parse_line("pipe test|a | b | c").unwrap();
        assert_eq!(entry.question(), "pipe test");
        assert_eq!(entry.answer(), "a | b | c");
    }

    #[test]
    fn question_is_normalized_answer_is_not() {
        let entry = KnowledgeEntry::parse_line("  How ARE you?  |  Fine, THANKS!  ").unwrap();
        assert_eq!(entry.question(), "how are you");
        assert_eq!(entry.answer(), "Fine, THANKS!");
    }

    #[test]
    fn empty_answer_is_allowed() {
        let entry = KnowledgeEntry::parse_line("silence|").unwrap();
        assert_eq!(entry.question(), "silence");
        assert_eq!(entry.answer(), "");
    }

    #[test]
    fn classifies_skipped_lines() {
        assert_eq!(classify_line(""), LineOutcome::Blank);
        assert_eq!(classify_line("  \t "), LineOutcome::Blank);
        assert_eq!(classify_line("just text"), LineOutcome::NoDelimiter);
        assert_eq!(classify_line("|answer"), LineOutcome::EmptyQuestion);
        assert_eq!(classify_line("?!?|answer"), LineOutcome::EmptyQuestion);
    }

    #[test]
    fn new_normalizes_raw_question() {
        let entry = KnowledgeEntry::new("  What Is Rust?  ", " A language. ").unwrap();
        assert_eq!(entry.question(), "what is rust");
        assert_eq!(entry.answer(), "A language.");
        assert!(KnowledgeEntry::new("?!", "nothing left").is_none());
    }
}
