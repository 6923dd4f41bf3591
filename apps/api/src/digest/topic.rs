//! Input gate for user-supplied topics.

use std::fmt;

use thiserror::Error;

/// Maximum topic length, counted in characters rather than bytes.
pub const MAX_TOPIC_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("Please enter a topic.")]
    Empty,

    #[error("Topic must be {} characters or fewer (got {len}).", MAX_TOPIC_CHARS)]
    TooLong { len: usize },
}

/// A validated, trimmed topic. Content is not filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, TopicError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }

        let len = trimmed.chars().count();
        if len > MAX_TOPIC_CHARS {
            return Err(TopicError::TooLong { len });
        }

        Ok(Topic(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
