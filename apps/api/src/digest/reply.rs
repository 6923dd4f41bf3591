//! Combines section and item parsing into one outcome for a raw reply.
//!
//! Any deviation from the requested layout collapses into a single
//! `Degraded` state carrying warnings. Parsing never fails.

use serde::Serialize;

use crate::digest::items::{parse_items, RankedItem};
use crate::digest::prompts::EXPECTED_ITEM_COUNT;
use crate::digest::sections::{parse_sections, ParsedSections, SectionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    MissingSection { section: SectionKind },
    UnexpectedItemCount { expected: usize, found: usize },
}

impl ParseWarning {
    pub fn message(&self) -> String {
        match self {
            ParseWarning::MissingSection { section } => {
                format!("The \"{}\" section was not found.", section.title())
            }
            ParseWarning::UnexpectedItemCount { expected, found } => {
                format!("Expected {expected} essentials but found {found}.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    Complete,
    Degraded { warnings: Vec<ParseWarning> },
}

impl ParseOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, ParseOutcome::Complete)
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        match self {
            ParseOutcome::Complete => &[],
            ParseOutcome::Degraded { warnings } => warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub sections: ParsedSections,
    pub items: Vec<RankedItem>,
    pub outcome: ParseOutcome,
}

pub fn parse_reply(raw: &str) -> ParsedReply {
    let sections = parse_sections(raw);
    let items = parse_items(&sections.essentials);

    let mut warnings: Vec<ParseWarning> = sections
        .missing()
        .into_iter()
        .map(|section| ParseWarning::MissingSection { section })
        .collect();
    if items.len() != EXPECTED_ITEM_COUNT {
        warnings.push(ParseWarning::UnexpectedItemCount {
            expected: EXPECTED_ITEM_COUNT,
            found: items.len(),
        });
    }

    let outcome = if warnings.is_empty() {
        ParseOutcome::Complete
    } else {
        ParseOutcome::Degraded { warnings }
    };

    ParsedReply {
        sections,
        items,
        outcome,
    }
}

/// A well-formed reply used across the digest tests.
#[cfg(test)]
pub(crate) fn sample_reply() -> String {
    let essentials: String = (1..=10)
        .map(|n| {
            format!(
                "{n}. Essential {n}\nWhat is it?: Part {n} of the story.\nWhy it matters: It explains {n}.\nVibe: sharp, nerdy, early\n\n"
            )
        })
        .collect();
    format!(
        "1. In a Nutshell\nBitcoin is a decentralized digital currency secured by cryptography.\n\n2. The Essentials\n{essentials}3. Why it Matters\nIt forced the world to rethink what money can be."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reply_is_complete() {
        let parsed = parse_reply(&sample_reply());
        assert!(parsed.outcome.is_complete());
        assert_eq!(parsed.items.len(), 10);
        assert_eq!(
            parsed.sections.why_it_matters,
            "It forced the world to rethink what money can be."
        );
    }

    #[test]
    fn test_unstructured_reply_is_degraded_with_all_warnings() {
        let parsed = parse_reply("Just a paragraph.");
        assert_eq!(
            parsed.outcome.warnings(),
            &[
                ParseWarning::MissingSection {
                    section: SectionKind::Nutshell
                },
                ParseWarning::MissingSection {
                    section: SectionKind::Essentials
                },
                ParseWarning::MissingSection {
                    section: SectionKind::WhyItMatters
                },
                ParseWarning::UnexpectedItemCount {
                    expected: 10,
                    found: 0
                },
            ]
        );
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_short_list_is_degraded_but_keeps_items() {
        let raw = "In a Nutshell\nA.\nThe Essentials\n1. One\n2. Two\nWhy it Matters\nC.";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(
            parsed.outcome.warnings(),
            &[ParseWarning::UnexpectedItemCount {
                expected: 10,
                found: 2
            }]
        );
    }

    #[test]
    fn test_wrapped_why_it_matters_label_stays_with_its_item() {
        let raw = "In a Nutshell\nOverview.\nThe Essentials\n1. Item\nWhy it matters:\nIt was first.\nVibe: a, b, c\nWhy it Matters\nReflection.";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.sections.why_it_matters, "Reflection.");
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].attributes.len(), 2);
        assert_eq!(parsed.items[0].attributes[1].label, "Vibe");
    }

    #[test]
    fn test_warning_messages_name_the_problem() {
        let missing = ParseWarning::MissingSection {
            section: SectionKind::WhyItMatters,
        };
        assert_eq!(missing.message(), "The \"Why it Matters\" section was not found.");
    }

    #[test]
    fn test_parse_reply_is_idempotent() {
        let raw = sample_reply();
        assert_eq!(parse_reply(&raw), parse_reply(&raw));
    }
}
