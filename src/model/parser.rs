// File: ./src/model/parser.rs
// Handles smart text input parsing
use crate::model::item::Task;
use chrono::{Duration, Local, NaiveDate};

/// The two form fields recovered from one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmartInput {
    pub name: String,
    pub deadline: String,
}

/// Split an input line into name and deadline.
///
/// `@`-prefixed tokens set the deadline: `@today` and `@tomorrow` resolve to
/// concrete dates, `@YYYY-MM-DD` is normalized, and anything else is taken
/// verbatim (deadlines are free-form). Every other token belongs to the
/// name. The last `@` token wins. No validation happens here; empty fields
/// are the store's rejection to make.
pub fn parse_smart_input(input: &str) -> SmartInput {
    let mut name_words = Vec::new();
    let mut deadline = String::new();

    for word in input.split_whitespace() {
        if let Some(val) = word.strip_prefix('@')
            && !val.is_empty()
        {
            let now = Local::now().date_naive();
            if val == "today" {
                deadline = now.format("%Y-%m-%d").to_string();
                continue;
            }
            if val == "tomorrow" {
                let d = now + Duration::days(1);
                deadline = d.format("%Y-%m-%d").to_string();
                continue;
            }
            if let Ok(date) = NaiveDate::parse_from_str(val, "%Y-%m-%d") {
                deadline = date.format("%Y-%m-%d").to_string();
                continue;
            }
            deadline = val.to_string();
            continue;
        }
        name_words.push(word);
    }

    SmartInput {
        name: name_words.join(" "),
        deadline,
    }
}

impl Task {
    /// Render the task back into the form syntax, for edit prefill.
    pub fn to_smart_string(&self) -> String {
        let mut s = self.name.clone();
        if !self.deadline.is_empty() {
            s.push_str(&format!(" @{}", self.deadline));
        }
        s
    }
}
