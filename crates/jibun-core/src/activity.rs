//! Activity domain model.
//!
//! An activity is one user-entered row of the daily time log: a name, a
//! duration, and a category from a closed set.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The closed set of activity categories.
///
/// The categories are serialized with their Japanese labels so that
/// persisted data stays compatible with the key-value store format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Category {
    /// 仕事 - work
    #[serde(rename = "仕事")]
    Work,
    /// 勉強 - study
    #[serde(rename = "勉強")]
    Study,
    /// 家事 - housework
    #[serde(rename = "家事")]
    Housework,
    /// 休憩 - rest
    #[serde(rename = "休憩")]
    Rest,
    /// その他 - other
    #[serde(rename = "その他")]
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Work
    }
}

impl Category {
    /// Returns the Japanese label used in prompts and rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "仕事",
            Category::Study => "勉強",
            Category::Housework => "家事",
            Category::Rest => "休憩",
            Category::Other => "その他",
        }
    }

    /// Parses a category from its Japanese label.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "仕事" => Some(Category::Work),
            "勉強" => Some(Category::Study),
            "家事" => Some(Category::Housework),
            "休憩" => Some(Category::Rest),
            "その他" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single logged activity.
///
/// Created on an explicit "add" action in the input screen and immutable
/// thereafter. Lives in the working list until the session is committed to
/// history or discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Creation timestamp in milliseconds, unique within a session
    pub id: i64,
    /// User-entered activity name
    pub name: String,
    /// Hours spent
    pub hour: u32,
    /// Minutes spent (serialized as `min` for storage compatibility)
    #[serde(rename = "min")]
    pub minute: u32,
    /// Category from the closed set
    pub category: Category,
}

impl Activity {
    /// Creates a new activity stamped with the current time.
    pub fn new(name: impl Into<String>, hour: u32, minute: u32, category: Category) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            name: name.into(),
            hour,
            minute,
            category,
        }
    }

    /// Total duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Formats the activity as a single prompt line, e.g. `Work(仕事): 8時間0分`.
    pub fn prompt_line(&self) -> String {
        format!(
            "{}({}): {}時間{}分",
            self.name,
            self.category.label(),
            self.hour,
            self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        use strum::IntoEnumIterator;
        for category in Category::iter() {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_category_from_unknown_label() {
        assert_eq!(Category::from_label("運動"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Work).unwrap();
        assert_eq!(json, "\"仕事\"");
        let back: Category = serde_json::from_str("\"休憩\"").unwrap();
        assert_eq!(back, Category::Rest);
    }

    #[test]
    fn test_duration_minutes() {
        let activity = Activity::new("Work", 8, 30, Category::Work);
        assert_eq!(activity.duration_minutes(), 510);
    }

    #[test]
    fn test_prompt_line() {
        let activity = Activity::new("Work", 8, 0, Category::Work);
        assert_eq!(activity.prompt_line(), "Work(仕事): 8時間0分");
    }

    #[test]
    fn test_minute_serialized_as_min() {
        let activity = Activity::new("読書", 0, 45, Category::Other);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["min"], 45);
        assert!(json.get("minute").is_none());
    }
}
