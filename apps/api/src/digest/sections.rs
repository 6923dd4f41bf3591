//! Section Parser — splits a raw reply into the three named regions.
//!
//! Header policy (one policy, applied to all three headers):
//! - the header sits alone on its own line, case-insensitive;
//! - it may be preceded by markdown heading hashes, bold markers and an
//!   ordinal such as `2.`;
//! - it may be followed by a colon and/or a closing bold marker;
//! - words inside the phrase may be separated by any run of spaces or tabs.
//!
//! A line such as `Why it matters: because...` is not a header because text
//! follows the colon. The first occurrence of "In a Nutshell" and "The
//! Essentials" wins. "Why it Matters" takes the last occurrence, since each
//! essential carries a `Why it matters:` label that can stand alone on its
//! line when the model wraps the value. Missing headers leave their section
//! empty; nothing here ever fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One of the three display regions of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Nutshell,
    Essentials,
    WhyItMatters,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Nutshell,
        SectionKind::Essentials,
        SectionKind::WhyItMatters,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Nutshell => "In a Nutshell",
            SectionKind::Essentials => "The Essentials",
            SectionKind::WhyItMatters => "Why it Matters",
        }
    }

    fn locate(self, raw: &str) -> Option<regex::Match<'_>> {
        let re = self.header_regex();
        match self {
            SectionKind::WhyItMatters => re.find_iter(raw).last(),
            SectionKind::Nutshell | SectionKind::Essentials => re.find(raw),
        }
    }

    fn header_regex(self) -> &'static Regex {
        match self {
            SectionKind::Nutshell => &NUTSHELL_RE,
            SectionKind::Essentials => &ESSENTIALS_RE,
            SectionKind::WhyItMatters => &WHY_IT_MATTERS_RE,
        }
    }
}

fn header_regex(phrase: &str) -> Regex {
    let pattern = format!(
        r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*)?(?:\*\*)?[ \t]*(?:\d+\.[ \t]*)?(?:\*\*)?[ \t]*{phrase}[ \t]*:?[ \t]*(?:\*\*)?[ \t]*:?[ \t]*\r?$"
    );
    Regex::new(&pattern).expect("section header pattern is valid")
}

static NUTSHELL_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"in[ \t]+a[ \t]+nutshell"));
static ESSENTIALS_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"the[ \t]+essentials"));
static WHY_IT_MATTERS_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"why[ \t]+it[ \t]+matters"));

/// The three sections of a reply. Each is empty when its header was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSections {
    pub nutshell: String,
    pub essentials: String,
    pub why_it_matters: String,
}

impl ParsedSections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Nutshell => &self.nutshell,
            SectionKind::Essentials => &self.essentials,
            SectionKind::WhyItMatters => &self.why_it_matters,
        }
    }

    fn slot(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::Nutshell => &mut self.nutshell,
            SectionKind::Essentials => &mut self.essentials,
            SectionKind::WhyItMatters => &mut self.why_it_matters,
        }
    }

    /// Sections whose body came out empty.
    pub fn missing(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.missing().len() == SectionKind::ALL.len()
    }
}

/// Position of a located header within the reply.
struct HeaderMatch {
    kind: SectionKind,
    start: usize,
    end: usize,
}

/// Splits `raw` into sections. Each body runs from the end of its header line
/// to the start of the next located header (or end of text), trimmed.
pub fn parse_sections(raw: &str) -> ParsedSections {
    let mut headers: Vec<HeaderMatch> = SectionKind::ALL
        .into_iter()
        .filter_map(|kind| {
            kind.locate(raw).map(|m| HeaderMatch {
                kind,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect();
    headers.sort_by_key(|h| h.start);

    let mut sections = ParsedSections::default();
    for (i, header) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(raw.len(), |next| next.start);
        let body = raw.get(header.end..body_end.max(header.end)).unwrap_or("");
        *sections.slot(header.kind) = body.trim().to_string();
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "In a Nutshell\nBitcoin is a decentralized digital currency.\n\nThe Essentials\n1. Satoshi Nakamoto\nVibe: mysterious, foundational, pseudonymous\n\nWhy it Matters\nIt reshaped how people think about money.";

    #[test]
    fn test_canonical_reply_recovers_three_bodies() {
        let sections = parse_sections(CANONICAL);
        assert_eq!(
            sections.nutshell,
            "Bitcoin is a decentralized digital currency."
        );
        assert_eq!(
            sections.essentials,
            "1. Satoshi Nakamoto\nVibe: mysterious, foundational, pseudonymous"
        );
        assert_eq!(
            sections.why_it_matters,
            "It reshaped how people think about money."
        );
        assert!(sections.missing().is_empty());
    }

    #[test]
    fn test_internal_whitespace_is_preserved() {
        let raw = "In a Nutshell\n\n  First line.\n\n\n   Second   line.  \n\nThe Essentials\nA\n\nWhy it Matters\nB";
        let sections = parse_sections(raw);
        assert_eq!(sections.nutshell, "First line.\n\n\n   Second   line.");
    }

    #[test]
    fn test_ordinal_prefixed_headers() {
        let raw = "1. In a Nutshell\nOverview.\n2. The Essentials\n1. Item\n3. Why it Matters\nReflection.";
        let sections = parse_sections(raw);
        assert_eq!(sections.nutshell, "Overview.");
        assert_eq!(sections.essentials, "1. Item");
        assert_eq!(sections.why_it_matters, "Reflection.");
    }

    #[test]
    fn test_headers_match_case_insensitively_with_markdown_decoration() {
        let raw = "## 1. IN A NUTSHELL\nOverview.\n**2. the essentials:**\n1. Item\n### Why It Matters:\r\nReflection.";
        let sections = parse_sections(raw);
        assert_eq!(sections.nutshell, "Overview.");
        assert_eq!(sections.essentials, "1. Item");
        assert_eq!(sections.why_it_matters, "Reflection.");
    }

    #[test]
    fn test_no_headers_yields_empty_sections_without_error() {
        let sections = parse_sections("Sorry, I can't help with that.");
        assert_eq!(sections, ParsedSections::default());
        assert!(sections.is_empty());
        assert_eq!(sections.missing(), SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_input_yields_empty_sections() {
        assert!(parse_sections("").is_empty());
    }

    #[test]
    fn test_missing_middle_header_extends_previous_section() {
        let raw = "In a Nutshell\nOverview.\n1. Orphan item\nWhy it Matters\nReflection.";
        let sections = parse_sections(raw);
        assert_eq!(sections.nutshell, "Overview.\n1. Orphan item");
        assert_eq!(sections.essentials, "");
        assert_eq!(sections.why_it_matters, "Reflection.");
        assert_eq!(sections.missing(), vec![SectionKind::Essentials]);
    }

    #[test]
    fn test_inline_label_is_not_mistaken_for_header() {
        let raw = "In a Nutshell\nOverview.\nThe Essentials\n1. Item\nWhy it matters: it changed things.\nWhy it Matters\nReflection.";
        let sections = parse_sections(raw);
        assert_eq!(
            sections.essentials,
            "1. Item\nWhy it matters: it changed things."
        );
        assert_eq!(sections.why_it_matters, "Reflection.");
    }

    #[test]
    fn test_out_of_order_headers_are_bounded_by_position() {
        let raw = "Why it Matters\nReflection.\nIn a Nutshell\nOverview.";
        let sections = parse_sections(raw);
        assert_eq!(sections.why_it_matters, "Reflection.");
        assert_eq!(sections.nutshell, "Overview.");
        assert_eq!(sections.essentials, "");
    }

    #[test]
    fn test_first_occurrence_of_a_header_wins() {
        let raw = "In a Nutshell\nOne.\nIn a Nutshell\nTwo.";
        let sections = parse_sections(raw);
        assert_eq!(sections.nutshell, "One.\nIn a Nutshell\nTwo.");
    }

    #[test]
    fn test_wrapped_item_label_does_not_close_essentials() {
        let raw = "In a Nutshell\nOverview.\nThe Essentials\n1. Item\nWhy it matters:\nIt was first.\nVibe: a, b, c\nWhy it Matters\nReflection.";
        let sections = parse_sections(raw);
        assert_eq!(
            sections.essentials,
            "1. Item\nWhy it matters:\nIt was first.\nVibe: a, b, c"
        );
        assert_eq!(sections.why_it_matters, "Reflection.");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_sections(CANONICAL), parse_sections(CANONICAL));
    }
}
