//! Item Parser — splits the Essentials section into ranked entries.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line that opens a new entry: `<integer>. <title>` at the start of a line.
static ITEM_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\.\s+(.*)$").expect("item pattern is valid"));

const VIBE_LABEL: &str = "vibe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub label: String,
    pub value: AttributeValue,
}

/// One ranked entry. `rank` is the ordinal the model wrote, which may skip
/// or repeat numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    pub rank: u32,
    pub title: String,
    pub attributes: Vec<Attribute>,
}

/// Parses every numbered block in `essentials`. Text before the first
/// numbered line is ignored. No count is enforced.
pub fn parse_items(essentials: &str) -> Vec<RankedItem> {
    let mut items: Vec<RankedItem> = Vec::new();

    for line in essentials.lines() {
        if let Some(caps) = ITEM_START_RE.captures(line) {
            // An ordinal too large for u32 is still a block boundary.
            let rank = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            items.push(RankedItem {
                rank,
                title: clean_title(&caps[2]),
                attributes: Vec::new(),
            });
            continue;
        }

        let Some(current) = items.last_mut() else {
            continue;
        };
        if let Some(attribute) = parse_attribute(line) {
            current.attributes.push(attribute);
        } else {
            fill_wrapped_value(current, line);
        }
    }

    items
}

fn clean_title(raw: &str) -> String {
    strip_bold(raw)
}

fn strip_bold(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// A label written alone on its line (`Why it matters:`) takes the next
/// non-empty line as its value.
fn fill_wrapped_value(item: &mut RankedItem, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let Some(last) = item.attributes.last_mut() else {
        return;
    };
    match &mut last.value {
        AttributeValue::Text(value) if value.is_empty() => *value = line.to_string(),
        AttributeValue::Tags(tags) if tags.is_empty() => *tags = split_tags(line),
        _ => {}
    }
}

/// `Label: value` with the value kept whole after the first colon.
/// Leading list bullets and bold markers around the label are dropped.
fn parse_attribute(line: &str) -> Option<Attribute> {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line)
        .trim();
    if line.is_empty() {
        return None;
    }

    let (label, value) = line.split_once(':')?;
    let label = label.trim().trim_matches('*').trim();
    if label.is_empty() {
        return None;
    }
    let value = value.trim().trim_start_matches('*').trim();

    let value = if label.eq_ignore_ascii_case(VIBE_LABEL) {
        AttributeValue::Tags(split_tags(value))
    } else {
        AttributeValue::Text(value.to_string())
    };

    Some(Attribute {
        label: label.to_string(),
        value,
    })
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(strip_bold)
        .filter(|t| !t.is_empty())
        .collect()
}
