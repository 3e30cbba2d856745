//! Roster model and the free-text name parser.
//!
//! # Invariants
//! - `Roster::parse` output never contains empty or untrimmed names.
//! - Relative order of names is the order they were typed.

use serde::Serialize;

/// Grade level a roster belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Third,
    Second,
}

impl Grade {
    pub const ALL: [Grade; 2] = [Grade::Third, Grade::Second];

    /// Field name used in the persisted record.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Third => "third",
            Self::Second => "second",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Third => "3rd grade",
            Self::Second => "2nd grade",
        }
    }
}

/// Ordered list of student names for one grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Parses multi-line input: one name per line, trimmed, blank lines dropped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .split('\n')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Wraps already-split names without re-parsing them.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Text shown in a roster input box: names joined by newlines.
    pub fn to_input_text(&self) -> String {
        self.names.join("\n")
    }
}

/// The two rosters persisted together as one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterPair {
    pub third: Roster,
    pub second: Roster,
}

impl RosterPair {
    pub fn new(third: Roster, second: Roster) -> Self {
        Self { third, second }
    }

    pub fn roster(&self, grade: Grade) -> &Roster {
        match grade {
            Grade::Third => &self.third,
            Grade::Second => &self.second,
        }
    }

    /// True when neither grade has a single name.
    pub fn is_empty(&self) -> bool {
        self.third.is_empty() && self.second.is_empty()
    }

    /// Combined pool: third-grade names first, then second-grade names.
    pub fn combined(&self) -> Vec<&str> {
        self.third
            .names()
            .iter()
            .chain(self.second.names())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, Roster, RosterPair};

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let roster = Roster::parse("  Alice \n\nBob\n");
        assert_eq!(roster.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn parse_handles_crlf_and_whitespace_only_input() {
        assert_eq!(Roster::parse("Ann\r\nBo\r\n").names(), ["Ann", "Bo"]);
        assert!(Roster::parse("").is_empty());
        assert!(Roster::parse(" \n\t\n").is_empty());
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let roster = Roster::parse("Cy\nAnn\nCy");
        assert_eq!(roster.names(), ["Cy", "Ann", "Cy"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn input_text_round_trips_through_parse() {
        let roster = Roster::from_names(["Ann", "Bo"]);
        assert_eq!(roster.to_input_text(), "Ann\nBo");
        assert_eq!(Roster::parse(&roster.to_input_text()), roster);
    }

    #[test]
    fn combined_pool_lists_third_grade_first() {
        let pair = RosterPair::new(Roster::from_names(["Ann", "Bo"]), Roster::from_names(["Cy"]));
        assert_eq!(pair.combined(), ["Ann", "Bo", "Cy"]);
        assert_eq!(pair.roster(Grade::Second).names(), ["Cy"]);
        assert!(!pair.is_empty());
        assert!(RosterPair::default().is_empty());
    }
}
