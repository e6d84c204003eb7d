use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Center, Element};

use crate::app::Message;
use crate::i18n::{translate, Language};
use crate::state::{Dialog, Notice};
use crate::ui::styles::dialog_card;

// The surface beneath stays rendered but inert until the dialog is answered;
// clicking the backdrop counts as dismissing.
pub fn dialog_view<'a>(
    base: Element<'a, Message>,
    dialog: &Dialog,
    language: Language,
) -> Element<'a, Message> {
    let card: Element<'a, Message> = match dialog {
        Dialog::Alert(notice) => alert_card(*notice, language),
        Dialog::ConfirmRemove(_) => confirm_card(language),
    };

    let card = container(card).padding(24).width(320).style(dialog_card);

    stack![
        base,
        opaque(mouse_area(center(opaque(card))).on_press(Message::DismissDialog)),
    ]
    .into()
}

fn alert_card<'a>(notice: Notice, language: Language) -> Element<'a, Message> {
    column![
        text(translate(notice.message_key(), language)).size(16),
        button(text(translate("ok", language)).size(14))
            .on_press(Message::DismissDialog)
            .padding(iced::Padding {
                top: 5.0,
                left: 24.0,
                bottom: 5.0,
                right: 24.0,
            })
            .style(button::primary),
    ]
    .spacing(20)
    .align_x(Center)
    .into()
}

fn confirm_card<'a>(language: Language) -> Element<'a, Message> {
    let choices = row![
        button(text(translate("confirm-yes", language)).size(14))
            .on_press(Message::ConfirmRemove)
            .padding(iced::Padding {
                top: 5.0,
                left: 20.0,
                bottom: 5.0,
                right: 20.0,
            })
            .style(button::danger),
        button(text(translate("confirm-no", language)).size(14))
            .on_press(Message::DismissDialog)
            .padding(iced::Padding {
                top: 5.0,
                left: 20.0,
                bottom: 5.0,
                right: 20.0,
            })
            .style(button::secondary),
    ]
    .spacing(10);

    column![
        text(translate("confirm-remove", language)).size(16),
        choices,
    ]
    .spacing(20)
    .align_x(Center)
    .into()
}
