#![windows_subsystem = "windows"]

mod app;
mod i18n;
mod item;
mod state;
mod ui;

use iced::window;

fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();

    // Initialize i18n by accessing the lazy static
    std::sync::LazyLock::force(&i18n::LANGUAGE_LOADER);

    iced::application(
        app::ShoppingList::new,
        app::ShoppingList::update,
        app::ShoppingList::view,
    )
    .subscription(app::ShoppingList::subscription)
    .title(app::ShoppingList::title)
    .window(window::Settings {
        size: (480.0, 720.0).into(),
        min_size: Some((420.0, 560.0).into()),
        ..window::Settings::default()
    })
    .run()
}
