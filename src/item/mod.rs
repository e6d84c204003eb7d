pub mod view;

use iced::Element;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Item {
    id: Uuid,
    text: String,
}

#[derive(Debug, Clone)]
pub enum ItemMessage {
    Edit,
    Remove,
}

impl Item {
    pub fn new(text: String) -> Self {
        Item {
            id: Uuid::new_v4(),
            text,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, filter: &str) -> bool {
        self.text.to_lowercase().contains(&filter.to_lowercase())
    }

    pub fn view(&self, selected: bool) -> Element<'_, ItemMessage> {
        view::item_view(self, selected)
    }
}

// Items persist as their bare text; ids only name rows within a session.
impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::new(text)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_match_is_case_insensitive_substring() {
        let item = Item::new("Milk".to_string());

        assert!(item.matches("mi"));
        assert!(item.matches("MILK"));
        assert!(item.matches("il"));
        assert!(!item.matches("bread"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Item::new("Eggs".to_string()).matches(""));
    }

    #[test]
    fn serializes_as_bare_text() {
        let item = Item::new("Milk".to_string());

        assert_eq!(serde_json::to_string(&item).expect("serialize"), r#""Milk""#);
    }

    #[test]
    fn deserializes_from_bare_text_with_fresh_id() {
        let a: Item = serde_json::from_str(r#""Milk""#).expect("deserialize");
        let b: Item = serde_json::from_str(r#""Milk""#).expect("deserialize");

        assert_eq!(a.text(), "Milk");
        assert_ne!(a.id(), b.id());
    }
}
