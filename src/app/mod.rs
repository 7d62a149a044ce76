// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced run loop.
//!
//! The `App` struct wires together the gallery store, localization and
//! settings, and translates messages into store operations.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::AssetSource;
use crate::application::projection::ProjectionOptions;
use crate::application::store::{Change, GalleryStore, ViewState};
use crate::domain::gallery::Collection;
use crate::i18n::fluent::I18n;
use crate::infrastructure::EmbeddedAssets;
use crate::ui::gallery::{self, ImageHandles};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    store: GalleryStore,
    projection: ProjectionOptions,
    keyboard_navigation: bool,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved once at startup.
    theme: Theme,
    handles: ImageHandles,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view_state", &self.store.view_state())
            .field("theme_mode", &self.theme_mode)
            .field("images", &self.handles.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, collection: Collection) -> iced::Result {
    let collection = Arc::new(collection);
    let assets: Arc<dyn AssetSource> = Arc::new(EmbeddedAssets);

    // iced 0.14 requires an `Fn` boot closure
    let boot = move || App::new(flags.clone(), Arc::clone(&collection), &*assets);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn log_change(change: Change, state: &ViewState) {
    match change {
        Change::Navigated { from, to } => {
            tracing::debug!(from, to, "navigated");
        }
        Change::DescriptionToggled { visible } => {
            tracing::debug!(
                visible,
                index = state.current_index(),
                "description toggled"
            );
        }
    }
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(
        flags: Flags,
        collection: Arc<Collection>,
        assets: &dyn AssetSource,
    ) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::default();

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let app = Self::with_config(flags, &config, collection, assets, i18n);
        (app, Task::none())
    }

    /// Builds the state from an already loaded configuration.
    fn with_config(
        flags: Flags,
        config: &Config,
        collection: Arc<Collection>,
        assets: &dyn AssetSource,
        i18n: I18n,
    ) -> Self {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let handles = ImageHandles::preload(&collection, assets);

        let mut store = GalleryStore::new(collection);
        store.subscribe(log_change);

        tracing::info!(
            items = store.len(),
            images = handles.len(),
            ?theme_mode,
            "gallery ready"
        );

        Self {
            i18n,
            store,
            projection: ProjectionOptions {
                show_position: config.show_position_indicator(),
            },
            keyboard_navigation: config.keyboard_navigation(),
            theme_mode,
            theme: theme_mode.resolve(),
            handles,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.store.current_item().title())
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.keyboard_navigation)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                gallery::update(&mut self.store, gallery_message);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                tracing::debug!(?id, "window close requested");
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: self.store.project(&self.projection),
            handles: &self.handles,
        })
    }
}
