use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::Item;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Items(Vec<Item>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedItem {
    Empty,
    AlreadyExists,
}

impl Items {
    pub fn exists(&self, text: &str) -> bool {
        self.0.iter().any(|item| item.text() == text)
    }

    pub fn append(&mut self, text: String) -> Result<(), RejectedItem> {
        if text.is_empty() {
            return Err(RejectedItem::Empty);
        }

        if self.exists(&text) {
            return Err(RejectedItem::AlreadyExists);
        }

        self.0.push(Item::new(text));

        Ok(())
    }

    // Replacement is remove-then-append: the new text always lands at the
    // end of the list, and uniqueness is not re-checked.
    pub fn replace(&mut self, id: Uuid, text: String) -> bool {
        if self.remove(id).is_none() {
            return false;
        }

        self.0.push(Item::new(text));

        true
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Item> {
        let index = self.0.iter().position(|item| item.id() == id)?;

        Some(self.0.remove(index))
    }

    pub fn remove_by_text(&mut self, text: &str) -> bool {
        if let Some(index) = self.0.iter().position(|item| item.text() == text) {
            self.0.remove(index);
            true
        } else {
            false
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.0.iter().find(|item| item.id() == id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}
