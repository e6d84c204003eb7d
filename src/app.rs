use iced::keyboard::{self, key};
use iced::widget::{center_x, column, keyed_column, mouse_area, scrollable, text_input};
use iced::{window, Element, Fill, Function, Subscription, Task as Command, Theme};
use uuid::Uuid;

use crate::i18n::{translate, Language};
use crate::item::ItemMessage;
use crate::state::persistence::{LoadError, SaveError, SavedState};
use crate::state::State;
use crate::ui::{controls::view_controls, dialog::dialog_view, styles::subtle};

#[derive(Debug)]
pub enum ShoppingList {
    Loading,
    Loaded(State),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<SavedState, LoadError>),
    Saved(Result<(), SaveError>),
    InputChanged(String),
    InputHovered,
    InputUnhovered,
    Submit,
    FilterChanged(String),
    ItemMessage(Uuid, ItemMessage),
    ConfirmRemove,
    DismissDialog,
    ClearAll,
    EscapePressed,
    TabPressed { shift: bool },
    ToggleFullscreen(window::Mode),
    LanguageChanged(Language),
}

impl ShoppingList {
    pub fn new() -> (Self, Command<Message>) {
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("items stored at {:?}", SavedState::path());

        (
            Self::Loading,
            Command::perform(SavedState::load(), Message::Loaded),
        )
    }

    pub fn title(&self) -> String {
        let (dirty, language) = match self {
            ShoppingList::Loading => (false, Language::default()),
            ShoppingList::Loaded(state) => (state.dirty, state.language),
        };

        format!(
            "{}{}",
            translate("app-title", language),
            if dirty { "..." } else { "" }
        )
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match self {
            ShoppingList::Loading => {
                match message {
                    Message::Loaded(Ok(saved)) => {
                        *self = ShoppingList::Loaded(State {
                            items: saved.items,
                            ..State::default()
                        });
                    }
                    Message::Loaded(Err(error)) => {
                        // An absent or undecodable slot degrades to an empty list.
                        tracing::warn!("starting with an empty list: {error:?}");
                        *self = ShoppingList::Loaded(State::default());
                    }
                    _ => {}
                }

                iced::widget::operation::focus("new-item")
            }
            ShoppingList::Loaded(state) => {
                let command = match message {
                    Message::InputChanged(value) => {
                        state.input_value = value;
                        Command::none()
                    }
                    Message::InputHovered => {
                        state.input_hovered = true;
                        Command::none()
                    }
                    Message::InputUnhovered => {
                        state.input_hovered = false;
                        Command::none()
                    }
                    Message::Submit => {
                        state.submit();
                        Command::none()
                    }
                    Message::FilterChanged(value) => {
                        state.filter_value = value;
                        Command::none()
                    }
                    Message::ItemMessage(id, ItemMessage::Edit) => {
                        if state.begin_edit(id) {
                            Command::batch(vec![
                                iced::widget::operation::focus("new-item"),
                                iced::widget::operation::select_all("new-item"),
                            ])
                        } else {
                            Command::none()
                        }
                    }
                    Message::ItemMessage(id, ItemMessage::Remove) => {
                        state.request_remove(id);
                        Command::none()
                    }
                    Message::ConfirmRemove => {
                        state.confirm_remove();
                        Command::none()
                    }
                    Message::DismissDialog => {
                        state.dismiss_dialog();
                        Command::none()
                    }
                    Message::ClearAll => {
                        state.clear_all();
                        Command::perform(SavedState::wipe(), Message::Saved)
                    }
                    Message::EscapePressed => {
                        if state.dialog.is_some() {
                            state.dismiss_dialog();
                        } else {
                            state.cancel_edit();
                        }
                        Command::none()
                    }
                    Message::Saved(result) => {
                        state.saving = false;
                        if let Err(error) = result {
                            tracing::warn!("failed to persist items: {error:?}");
                        }
                        Command::none()
                    }
                    Message::TabPressed { shift } => {
                        if shift {
                            iced::widget::operation::focus_previous()
                        } else {
                            iced::widget::operation::focus_next()
                        }
                    }
                    Message::ToggleFullscreen(mode) => {
                        window::latest().and_then(move |window| window::set_mode(window, mode))
                    }
                    Message::LanguageChanged(language) => {
                        state.language = language;
                        crate::i18n::update_language(language);
                        Command::none()
                    }
                    Message::Loaded(_) => Command::none(),
                };

                let save = if state.dirty && !state.saving {
                    state.dirty = false;
                    state.saving = true;

                    Command::perform(
                        SavedState {
                            items: state.items.clone(),
                        }
                        .save(),
                        Message::Saved,
                    )
                } else {
                    Command::none()
                };

                Command::batch(vec![command, save])
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            ShoppingList::Loading => self.loading_view(),
            ShoppingList::Loaded(state) => self.loaded_view(state),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed {
                key, modifiers, ..
            } = event
            else {
                return None;
            };

            let keyboard::Key::Named(key) = key else {
                return None;
            };

            match (key, modifiers) {
                (key::Named::Escape, _) => Some(Message::EscapePressed),
                (key::Named::Tab, _) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                (key::Named::ArrowUp, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Fullscreen))
                }
                (key::Named::ArrowDown, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Windowed))
                }
                _ => None,
            }
        })
    }

    fn loading_view(&self) -> Element<'_, Message> {
        iced::widget::center(
            iced::widget::text(translate("loading", Language::default()))
                .width(Fill)
                .align_x(iced::Center)
                .size(50),
        )
        .into()
    }

    fn loaded_view<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        let input = self.create_input(state);
        let input_container = self.create_input_container(input, state);
        let items_view = self.create_items_view(state);

        let footer_input = mouse_area(input_container)
            .on_enter(Message::InputHovered)
            .on_exit(Message::InputUnhovered);

        let controls = state
            .controls_visible()
            .then(|| view_controls(&state.items, &state.filter_value, state.language));

        let content = match controls {
            Some(controls) => column![controls],
            None => column![],
        }
            .push(items_view)
            .push(footer_input)
            .spacing(20)
            .height(Fill);

        let base = center_x(content).padding(iced::Padding {
            top: 24.0,
            left: 16.0,
            bottom: 32.0,
            right: 16.0,
        });

        match &state.dialog {
            Some(dialog) => dialog_view(base.into(), dialog, state.language),
            None => base.into(),
        }
    }

    fn create_input<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        text_input(
            &translate("add-item-placeholder", state.language),
            &state.input_value,
        )
        .id("new-item")
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(iced::Padding {
            top: 8.0,
            left: 0.0,
            bottom: 8.0,
            right: 0.0,
        })
        .size(16)
        .style(|theme: &Theme, status| {
            let default_style = text_input::default(theme, status);

            text_input::Style {
                background: iced::Color::TRANSPARENT.into(),
                border: iced::Border {
                    color: iced::Color::TRANSPARENT,
                    width: 0.0,
                    radius: 0.0.into(),
                },
                icon: default_style.icon,
                placeholder: default_style.placeholder,
                value: default_style.value,
                selection: default_style.selection,
            }
        })
        .width(Fill)
        .into()
    }

    fn create_input_container<'a>(
        &'a self,
        input: Element<'a, Message>,
        state: &'a State,
    ) -> Element<'a, Message> {
        use iced::widget::{button, container, row, text};

        use crate::ui::icons::{pen_icon, plus_icon};

        let editing = state.editing.is_some();
        let is_hovered = state.input_hovered;

        let submit_label = translate(
            if editing { "update-item" } else { "add-item" },
            state.language,
        );
        let submit = button(text(submit_label).size(14))
            .on_press(Message::Submit)
            .padding(iced::Padding {
                top: 6.0,
                left: 14.0,
                bottom: 6.0,
                right: 14.0,
            })
            .style(if editing {
                button::success
            } else {
                button::primary
            });

        let glyph: Element<'a, Message> = if editing {
            pen_icon().into()
        } else {
            plus_icon().into()
        };

        let input_row = row![glyph, input, submit].spacing(8).align_y(iced::Center);

        container(input_row)
            .padding(iced::Padding {
                top: 8.0,
                left: 16.0,
                bottom: 8.0,
                right: 4.0,
            })
            .style(move |theme| {
                let background_color = if is_hovered {
                    theme.extended_palette().background.strong.color
                } else {
                    theme.extended_palette().background.weak.color
                };

                container::Style {
                    background: Some(background_color.into()),
                    border: iced::Border {
                        color: background_color,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    ..Default::default()
                }
            })
            .width(Fill)
            .into()
    }

    fn create_items_view<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        if state.items.is_empty() {
            return self.empty_message("empty-no-items", state.language);
        }

        let visible = || {
            state
                .items
                .iter()
                .filter(|item| item.matches(&state.filter_value))
        };

        if visible().count() == 0 {
            return self.empty_message("empty-no-matches", state.language);
        }

        let rows = keyed_column(visible().map(|item| {
            let selected = state.editing == Some(item.id());

            (
                item.id(),
                item.view(selected).map(Message::ItemMessage.with(item.id())),
            )
        }))
        .spacing(10)
        .height(Fill);

        scrollable(rows).height(Fill).into()
    }

    fn empty_message<'a>(&'a self, key: &str, language: Language) -> Element<'a, Message> {
        iced::widget::center(
            iced::widget::text(translate(key, language))
                .width(Fill)
                .size(25)
                .align_x(iced::Center)
                .style(subtle),
        )
        .height(Fill)
        .into()
    }
}
