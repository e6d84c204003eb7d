use iced::widget::{button, column, row, text, text_input};
use iced::{Center, Element, Fill};

use crate::i18n::{translate, translate_item_count, Language};
use crate::state::Items;

pub fn view_controls<'a>(
    items: &'a Items,
    filter_value: &'a str,
    language: Language,
) -> Element<'a, crate::app::Message> {
    let clear = button(text(translate("clear-all", language)).size(14))
        .on_press(crate::app::Message::ClearAll)
        .padding(iced::Padding {
            top: 5.0,
            left: 16.0,
            bottom: 5.0,
            right: 16.0,
        })
        .style(button::danger);

    let language_toggle = button(text(translate("language-toggle", language)).size(12))
        .on_press(crate::app::Message::LanguageChanged(match language {
            Language::Portuguese => Language::English,
            Language::English => Language::Portuguese,
        }))
        .padding(iced::Padding {
            top: 5.0,
            left: 8.0,
            bottom: 5.0,
            right: 8.0,
        })
        .style(button::text);

    let top = row![
        text(translate_item_count(items.len(), language)).width(Fill),
        row![clear, language_toggle].spacing(10).align_y(Center),
    ]
    .spacing(20)
    .align_y(Center);

    let filter = text_input(&translate("filter-placeholder", language), filter_value)
        .id("filter")
        .on_input(crate::app::Message::FilterChanged)
        .padding(iced::Padding {
            top: 5.0,
            left: 10.0,
            bottom: 5.0,
            right: 10.0,
        })
        .size(14)
        .width(Fill);

    column![top, filter].spacing(10).into()
}
