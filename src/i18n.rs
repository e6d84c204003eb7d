use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester,
};
use i18n_embed_fl::fl;
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    let _result = i18n_embed::select(&loader, &Localizations, &requested_languages);
    loader
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Portuguese,
}

impl Default for Language {
    fn default() -> Self {
        let requested_languages = DesktopLanguageRequester::requested_languages();
        if requested_languages
            .iter()
            .any(|lang| lang.language.as_str() == "pt")
        {
            Language::Portuguese
        } else {
            Language::English
        }
    }
}

pub fn translate(key: &str, language: Language) -> String {
    if key == "language-toggle" {
        return match language {
            Language::Portuguese => "En".to_string(),
            Language::English => "Pt".to_string(),
        };
    }

    match key {
        "app-title" => fl!(LANGUAGE_LOADER, "app-title"),
        "loading" => fl!(LANGUAGE_LOADER, "loading"),
        "add-item-placeholder" => fl!(LANGUAGE_LOADER, "add-item-placeholder"),
        "filter-placeholder" => fl!(LANGUAGE_LOADER, "filter-placeholder"),
        "add-item" => fl!(LANGUAGE_LOADER, "add-item"),
        "update-item" => fl!(LANGUAGE_LOADER, "update-item"),
        "clear-all" => fl!(LANGUAGE_LOADER, "clear-all"),
        "empty-no-items" => fl!(LANGUAGE_LOADER, "empty-no-items"),
        "empty-no-matches" => fl!(LANGUAGE_LOADER, "empty-no-matches"),
        "alert-empty-input" => fl!(LANGUAGE_LOADER, "alert-empty-input"),
        "alert-duplicate-item" => fl!(LANGUAGE_LOADER, "alert-duplicate-item"),
        "confirm-remove" => fl!(LANGUAGE_LOADER, "confirm-remove"),
        "confirm-yes" => fl!(LANGUAGE_LOADER, "confirm-yes"),
        "confirm-no" => fl!(LANGUAGE_LOADER, "confirm-no"),
        "ok" => fl!(LANGUAGE_LOADER, "ok"),
        _ => key.to_string(),
    }
}

pub fn translate_item_count(count: usize, _language: Language) -> String {
    fl!(LANGUAGE_LOADER, "item-count", count = count)
}

pub fn update_language(language: Language) {
    let lang_ids = match language {
        Language::Portuguese => vec!["pt-BR".parse::<LanguageIdentifier>().unwrap()],
        Language::English => vec!["en-US".parse::<LanguageIdentifier>().unwrap()],
    };
    let _result = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &lang_ids);
}
