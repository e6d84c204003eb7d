pub mod dialog;
pub mod items;
pub mod persistence;

use uuid::Uuid;

use crate::i18n::Language;

pub use dialog::{Dialog, Notice};
pub use items::{Items, RejectedItem};

#[derive(Debug, Default)]
pub struct State {
    pub input_value: String,
    pub filter_value: String,
    pub items: Items,
    pub editing: Option<Uuid>,
    pub dialog: Option<Dialog>,
    pub dirty: bool,
    pub saving: bool,
    pub input_hovered: bool,
    pub language: Language,
}

impl State {
    pub fn controls_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn submit(&mut self) {
        if let Some(id) = self.editing {
            if self.input_value.is_empty() {
                self.dialog = Some(Dialog::Alert(Notice::EmptyInput));
                return;
            }

            let text = std::mem::take(&mut self.input_value);

            if self.items.replace(id, text) {
                self.dirty = true;
            }

            self.editing = None;
        } else {
            match self.items.append(self.input_value.clone()) {
                Ok(()) => {
                    self.input_value.clear();
                    self.dirty = true;
                }
                Err(RejectedItem::Empty) => {
                    self.dialog = Some(Dialog::Alert(Notice::EmptyInput));
                }
                Err(RejectedItem::AlreadyExists) => {
                    self.dialog = Some(Dialog::Alert(Notice::DuplicateItem));
                }
            }
        }
    }

    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        let Some(item) = self.items.get(id) else {
            return false;
        };

        self.input_value = item.text().to_string();
        self.editing = Some(id);

        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input_value.clear();
    }

    pub fn request_remove(&mut self, id: Uuid) {
        self.dialog = Some(Dialog::ConfirmRemove(id));
    }

    pub fn confirm_remove(&mut self) {
        let Some(Dialog::ConfirmRemove(id)) = self.dialog.take() else {
            return;
        };

        let Some(text) = self.items.get(id).map(|item| item.text().to_owned()) else {
            return;
        };

        if self.items.remove_by_text(&text) {
            self.dirty = true;
        }

        if self.editing == Some(id) {
            self.cancel_edit();
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.cancel_edit();
        self.dialog = None;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn state_with(texts: &[&str]) -> State {
        let mut state = State::default();

        for text in texts {
            state.input_value = text.to_string();
            state.submit();
        }

        state.dirty = false;
        state
    }

    fn texts(state: &State) -> Vec<&str> {
        state.items.iter().map(Item::text).collect()
    }

    fn id_of(state: &State, text: &str) -> Uuid {
        state
            .items
            .iter()
            .find(|item| item.text() == text)
            .map(Item::id)
            .expect("item present")
    }

    #[test]
    fn submit_appends_and_clears_the_input() {
        let mut state = State::default();
        state.input_value = "Milk".to_string();

        state.submit();

        assert_eq!(texts(&state), ["Milk"]);
        assert!(state.input_value.is_empty());
        assert!(state.dirty);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn empty_submission_is_rejected_with_an_alert() {
        let mut state = State::default();

        state.submit();

        assert_eq!(state.dialog, Some(Dialog::Alert(Notice::EmptyInput)));
        assert!(state.items.is_empty());
        assert!(!state.dirty);
    }

    #[test]
    fn duplicate_submission_is_rejected_with_an_alert() {
        let mut state = state_with(&["Milk"]);
        state.input_value = "Milk".to_string();

        state.submit();

        assert_eq!(state.dialog, Some(Dialog::Alert(Notice::DuplicateItem)));
        assert_eq!(texts(&state), ["Milk"]);
        assert!(!state.dirty);
        assert_eq!(state.input_value, "Milk");
    }

    #[test]
    fn selecting_a_row_primes_the_input() {
        let mut state = state_with(&["Milk", "Bread"]);
        let id = id_of(&state, "Bread");

        assert!(state.begin_edit(id));

        assert_eq!(state.editing, Some(id));
        assert_eq!(state.input_value, "Bread");
    }

    #[test]
    fn selecting_another_row_retargets_the_edit() {
        let mut state = state_with(&["Milk", "Bread"]);
        let milk = id_of(&state, "Milk");
        let bread = id_of(&state, "Bread");

        state.begin_edit(milk);
        state.begin_edit(bread);

        assert_eq!(state.editing, Some(bread));
        assert_eq!(state.input_value, "Bread");
    }

    #[test]
    fn editing_replaces_the_text_and_keeps_the_length() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.begin_edit(id);
        state.input_value = "Oat Milk".to_string();
        state.submit();

        assert_eq!(texts(&state), ["Oat Milk"]);
        assert!(!state.items.exists("Milk"));
        assert_eq!(state.editing, None);
        assert!(state.input_value.is_empty());
        assert!(state.dirty);
    }

    #[test]
    fn editing_moves_the_entry_to_the_end() {
        let mut state = state_with(&["Milk", "Bread"]);
        let id = id_of(&state, "Milk");

        state.begin_edit(id);
        state.input_value = "Oat Milk".to_string();
        state.submit();

        assert_eq!(texts(&state), ["Bread", "Oat Milk"]);
    }

    #[test]
    fn editing_can_introduce_a_duplicate() {
        let mut state = state_with(&["Milk", "Bread"]);
        let id = id_of(&state, "Bread");

        state.begin_edit(id);
        state.input_value = "Milk".to_string();
        state.submit();

        assert_eq!(texts(&state), ["Milk", "Milk"]);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn empty_submission_keeps_the_edit_selection() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.begin_edit(id);
        state.input_value.clear();
        state.submit();

        assert_eq!(state.dialog, Some(Dialog::Alert(Notice::EmptyInput)));
        assert_eq!(state.editing, Some(id));
        assert_eq!(texts(&state), ["Milk"]);
    }

    #[test]
    fn cancelling_an_edit_restores_the_form_chrome() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.begin_edit(id);
        state.cancel_edit();

        assert_eq!(state.editing, None);
        assert!(state.input_value.is_empty());
        assert_eq!(texts(&state), ["Milk"]);
    }

    #[test]
    fn removal_waits_for_confirmation() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.request_remove(id);

        assert_eq!(state.dialog, Some(Dialog::ConfirmRemove(id)));
        assert_eq!(texts(&state), ["Milk"]);
        assert!(!state.dirty);
    }

    #[test]
    fn declining_a_removal_changes_nothing() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.request_remove(id);
        state.dismiss_dialog();

        assert_eq!(state.dialog, None);
        assert_eq!(texts(&state), ["Milk"]);
        assert!(!state.dirty);
    }

    #[test]
    fn confirming_a_removal_drops_the_entry() {
        let mut state = state_with(&["Milk", "Bread"]);
        let id = id_of(&state, "Milk");

        state.request_remove(id);
        state.confirm_remove();

        assert_eq!(state.dialog, None);
        assert_eq!(texts(&state), ["Bread"]);
        assert!(!state.items.exists("Milk"));
        assert!(state.dirty);
    }

    #[test]
    fn removing_the_edited_row_leaves_edit_mode() {
        let mut state = state_with(&["Milk"]);
        let id = id_of(&state, "Milk");

        state.begin_edit(id);
        state.request_remove(id);
        state.confirm_remove();

        assert_eq!(state.editing, None);
        assert!(state.input_value.is_empty());
        assert!(state.items.is_empty());
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut state = state_with(&["Milk", "Bread"]);
        state.begin_edit(id_of(&state, "Milk"));

        state.clear_all();

        assert!(state.items.is_empty());
        assert_eq!(state.editing, None);
        assert!(state.input_value.is_empty());
        assert!(!state.dirty);
        assert!(!state.controls_visible());
    }

    #[test]
    fn controls_follow_the_item_count() {
        let mut state = State::default();
        assert!(!state.controls_visible());

        state.input_value = "Milk".to_string();
        state.submit();
        assert!(state.controls_visible());

        state.request_remove(id_of(&state, "Milk"));
        state.confirm_remove();
        assert!(!state.controls_visible());
    }

    #[test]
    fn filtering_does_not_touch_the_store() {
        let state = state_with(&["Milk", "Bread", "Eggs"]);

        let visible: Vec<&str> = state
            .items
            .iter()
            .filter(|item| item.matches("mi"))
            .map(Item::text)
            .collect();

        assert_eq!(visible, ["Milk"]);
        assert_eq!(texts(&state), ["Milk", "Bread", "Eggs"]);
    }
}
