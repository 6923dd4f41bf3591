//! View model consumed by the single-page UI.

use serde::Serialize;

use crate::digest::items::{AttributeValue, RankedItem};
use crate::digest::reply::ParsedReply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardField {
    Pair { label: String, value: String },
    Tags { label: String, tags: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    pub rank: u32,
    pub title: String,
    pub fields: Vec<CardField>,
}

impl From<&RankedItem> for ItemCard {
    fn from(item: &RankedItem) -> Self {
        let fields = item
            .attributes
            .iter()
            .map(|a| match &a.value {
                AttributeValue::Text(value) => CardField::Pair {
                    label: a.label.clone(),
                    value: value.clone(),
                },
                AttributeValue::Tags(tags) => CardField::Tags {
                    label: a.label.clone(),
                    tags: tags.clone(),
                },
            })
            .collect();

        ItemCard {
            rank: item.rank,
            title: item.title.clone(),
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestView {
    pub nutshell: String,
    pub items: Vec<ItemCard>,
    pub why_it_matters: String,
    /// Set when no section header was recognised; the UI shows it verbatim.
    pub raw_fallback: Option<String>,
    pub complete: bool,
    pub warnings: Vec<String>,
}

impl DigestView {
    pub fn build(raw: &str, parsed: &ParsedReply) -> Self {
        let raw_fallback = parsed.sections.is_empty().then(|| raw.trim().to_string());

        DigestView {
            nutshell: parsed.sections.nutshell.clone(),
            items: parsed.items.iter().map(ItemCard::from).collect(),
            why_it_matters: parsed.sections.why_it_matters.clone(),
            raw_fallback,
            complete: parsed.outcome.is_complete(),
            warnings: parsed
                .outcome
                .warnings()
                .iter()
                .map(|w| w.message())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::reply::{parse_reply, sample_reply};
    use serde_json::json;

    #[test]
    fn test_complete_reply_builds_ten_cards_without_fallback() {
        let raw = sample_reply();
        let view = DigestView::build(&raw, &parse_reply(&raw));

        assert!(view.complete);
        assert!(view.raw_fallback.is_none());
        assert!(view.warnings.is_empty());
        assert_eq!(view.items.len(), 10);
        assert_eq!(
            view.items[0].fields.last(),
            Some(&CardField::Tags {
                label: "Vibe".to_string(),
                tags: vec!["sharp".to_string(), "nerdy".to_string(), "early".to_string()],
            })
        );
    }

    #[test]
    fn test_unrecognised_reply_falls_back_to_raw_text() {
        let raw = "  I could not structure this one.  ";
        let view = DigestView::build(raw, &parse_reply(raw));

        assert_eq!(
            view.raw_fallback.as_deref(),
            Some("I could not structure this one.")
        );
        assert!(view.items.is_empty());
        assert!(!view.complete);
        assert_eq!(view.warnings.len(), 4);
    }

    #[test]
    fn test_partial_reply_has_no_fallback() {
        let raw = "In a Nutshell\nOnly an overview.";
        let view = DigestView::build(raw, &parse_reply(raw));
        assert_eq!(view.nutshell, "Only an overview.");
        assert!(view.raw_fallback.is_none());
        assert!(!view.complete);
    }

    #[test]
    fn test_card_fields_serialize_with_kind_tag() {
        let pair = CardField::Pair {
            label: "What is it?".to_string(),
            value: "A coin.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(pair).unwrap(),
            json!({"kind": "pair", "label": "What is it?", "value": "A coin."})
        );
    }
}
