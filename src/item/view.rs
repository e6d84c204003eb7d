use iced::widget::{button, container, mouse_area, row, text};
use iced::{Center, Element, Fill, Theme};

use crate::ui::icons::remove_icon;

use super::{Item, ItemMessage};

pub fn item_view(item: &Item, selected: bool) -> Element<'_, ItemMessage> {
    let label = text(item.text())
        .width(Fill)
        .size(16)
        .shaping(iced::widget::text::Shaping::Advanced);

    let content = row![
        label,
        button(remove_icon())
            .on_press(ItemMessage::Remove)
            .padding(4)
            .style(button::text),
    ]
    .spacing(20)
    .align_y(Center);

    let card = container(content)
        .padding(12)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let border_color = if selected {
                palette.success.strong.color
            } else {
                palette.background.weakest.color
            };

            container::Style {
                background: Some(palette.background.weakest.color.into()),
                border: iced::Border {
                    color: border_color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            }
        });

    mouse_area(card).on_press(ItemMessage::Edit).into()
}
