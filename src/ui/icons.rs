use iced::widget::{text, Text};
use iced::{Center, Theme};

fn glyph(symbol: &'static str) -> Text<'static> {
    text(symbol)
        .size(16)
        .width(20)
        .align_x(Center)
        .shaping(text::Shaping::Advanced)
}

pub fn remove_icon() -> Text<'static> {
    glyph("✕").style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    })
}

pub fn pen_icon() -> Text<'static> {
    glyph("✎")
}

pub fn plus_icon() -> Text<'static> {
    text("+").size(20).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    })
}
