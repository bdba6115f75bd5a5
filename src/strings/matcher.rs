use regex::Regex;
use std::ops::Range;

/// Byte spans of the key and value capture groups within a template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueMatch {
    pub key: Range<usize>,
    pub value: Range<usize>,
}

/// Classifies a single template line. Lines without a match pass through the
/// merge untouched. The trait keeps the merge algorithm independent of how
/// lines are recognized, so the regex could be swapped for a hand-rolled
/// parser without touching the merger.
pub trait LineMatcher {
    fn match_key_value(&self, line: &str) -> Option<KeyValueMatch>;
}

/// Matches `"key" = "value";` lines. First match in the line wins.
pub struct RegexLineMatcher {
    pattern: Regex,
}

impl RegexLineMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = Regex::new(r#""(.*)" = "(.*)";"#)?;
        Ok(Self { pattern })
    }
}

impl LineMatcher for RegexLineMatcher {
    fn match_key_value(&self, line: &str) -> Option<KeyValueMatch> {
        let caps = self.pattern.captures(line)?;
        let key = caps.get(1)?;
        let value = caps.get(2)?;
        Some(KeyValueMatch {
            key: key.start()..key.end(),
            value: value.start()..value.end(),
        })
    }
}
