use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Local};

use crate::api::Message;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// How card timestamps are printed. `offset: None` uses the system zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampStyle {
    pub pattern: String,
    pub offset: Option<FixedOffset>,
}

impl Default for TimestampStyle {
    fn default() -> Self {
        Self { pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(), offset: None }
    }
}

impl TimestampStyle {
    /// Style with `pattern`, or the default pattern when chrono cannot parse it.
    pub fn new(pattern: &str, offset: Option<FixedOffset>) -> Self {
        let pattern = if is_valid_pattern(pattern) {
            pattern.to_string()
        } else {
            log::warn!("invalid timestamp format {:?}, using {:?}", pattern, DEFAULT_TIMESTAMP_FORMAT);
            DEFAULT_TIMESTAMP_FORMAT.to_string()
        };
        Self { pattern, offset }
    }

    pub fn utc(pattern: &str) -> Self {
        Self::new(pattern, FixedOffset::east_opt(0))
    }

    pub fn format(&self, message: &Message) -> String {
        let mut out = String::new();
        let written = match self.offset {
            Some(offset) => write!(out, "{}", message.created_at.with_timezone(&offset).format(&self.pattern)),
            None => write!(out, "{}", message.created_at.with_timezone(&Local).format(&self.pattern)),
        };
        // Styles built by hand can still carry a bad pattern.
        if written.is_err() {
            return message.created_at.to_rfc3339();
        }
        out
    }
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Display form of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub timestamp: String,
}

impl Card {
    pub fn from_message(message: &Message, style: &TimestampStyle) -> Self {
        Self {
            id: message.id,
            title: message.author.clone(),
            text: message.content.clone(),
            timestamp: style.format(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Message {
        Message {
            id: 1,
            author: "A".into(),
            content: "hi".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn card_carries_author_content_and_date() {
        let card = Card::from_message(&sample(), &TimestampStyle::utc(DEFAULT_TIMESTAMP_FORMAT));
        assert_eq!(card.id, 1);
        assert_eq!(card.title, "A");
        assert_eq!(card.text, "hi");
        assert_eq!(card.timestamp, "2024/1/1 00:00:00");
    }

    #[test]
    fn fixed_offset_shifts_the_clock() {
        let style = TimestampStyle {
            pattern: DEFAULT_TIMESTAMP_FORMAT.into(),
            offset: FixedOffset::east_opt(8 * 3600),
        };
        assert_eq!(style.format(&sample()), "2024/1/1 08:00:00");
    }

    #[test]
    fn bad_pattern_falls_back_to_default() {
        assert!(!is_valid_pattern("%Q"));
        let style = TimestampStyle::utc("%Q");
        assert_eq!(style.pattern, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(Card::from_message(&sample(), &style).timestamp, "2024/1/1 00:00:00");
    }

    #[test]
    fn hand_built_bad_style_formats_without_panicking() {
        let style = TimestampStyle { pattern: "%Q".into(), offset: FixedOffset::east_opt(0) };
        assert_eq!(style.format(&sample()), "2024-01-01T00:00:00+00:00");
    }
}
