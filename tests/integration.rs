// SPDX-License-Identifier: MPL-2.0
use car_gallery::app::config::{self, Config};
use car_gallery::application::projection::{self, ProjectionOptions, ToggleLabel};
use car_gallery::application::{Change, GalleryStore};
use car_gallery::domain::gallery::{catalog, Collection, ImageRef, Item, ItemId};
use car_gallery::error::Error;
use car_gallery::i18n::fluent::I18n;
use car_gallery::ui::gallery;
use car_gallery::ui::theming::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

fn item(id: u32, title: &str) -> Item {
    Item::new(
        ItemId::new(id),
        ImageRef::new(format!("{title}.svg")),
        title,
        "Maker",
        "2024",
    )
}

#[test]
fn test_catalog_wraps_in_both_directions() {
    let mut store = GalleryStore::new(catalog::cars().expect("valid catalog"));

    store.previous();
    assert_eq!(store.view_state().current_index(), 3);
    assert_eq!(store.current_item().title(), "Lexus NX");

    store.next();
    assert_eq!(store.view_state().current_index(), 0);
    assert_eq!(store.current_item().title(), "Mercedes-Maybach GLS");
}

#[test]
fn test_description_is_hidden_after_navigation() {
    let mut store = GalleryStore::new(catalog::cars().unwrap());

    store.toggle_description();
    let view = store.project(&ProjectionOptions::default());
    let section = view.info.description.expect("catalog items have descriptions");
    assert_eq!(section.toggle, ToggleLabel::Hide);
    assert!(section.text.is_some());

    store.next();
    assert_eq!(store.view_state().current_index(), 1);
    assert!(!store.view_state().description_visible());

    let view = store.project(&ProjectionOptions::default());
    let section = view.info.description.unwrap();
    assert_eq!(section.toggle, ToggleLabel::Show);
    assert_eq!(section.text, None);
}

#[test]
fn test_item_without_description_never_offers_toggle() {
    let collection = Collection::new(vec![
        item(1, "Alpha").with_description("Alpha text"),
        item(2, "Beta"),
    ])
    .unwrap();
    let mut store = GalleryStore::new(collection);
    store.next();

    // The store flips the flag regardless; the projection still hides the control.
    store.toggle_description();
    assert!(store.view_state().description_visible());
    assert!(!store
        .project(&ProjectionOptions::default())
        .has_description_toggle());
}

#[test]
fn test_shortcut_toggle_is_ignored_without_description() {
    let collection = Collection::new(vec![item(1, "Alpha")]).unwrap();
    let mut store = GalleryStore::new(collection);

    gallery::update(&mut store, gallery::Message::ToggleDescription);
    assert!(!store.view_state().description_visible());
}

#[test]
fn test_single_item_navigation_stays_put() {
    let collection = Collection::new(vec![item(1, "Solo").with_description("Only one")]).unwrap();
    let mut store = GalleryStore::new(collection);

    store.toggle_description();
    store.next();
    assert_eq!(store.view_state().current_index(), 0);
    assert!(!store.view_state().description_visible());

    store.previous();
    assert_eq!(store.view_state().current_index(), 0);
}

#[test]
fn test_subscribers_observe_every_change_in_order() {
    let mut store = GalleryStore::new(catalog::cars().unwrap());
    let log = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&log);
    let id = store.subscribe(move |change, state| {
        sink.borrow_mut().push((change, state.current_index()));
    });

    store.toggle_description();
    store.previous();
    assert!(store.unsubscribe(id));
    store.next();

    assert_eq!(
        *log.borrow(),
        vec![
            (Change::DescriptionToggled { visible: true }, 0),
            (Change::Navigated { from: 0, to: 3 }, 3),
        ]
    );
}

#[test]
fn test_projection_matches_store_shortcut() {
    let mut store = GalleryStore::new(catalog::cars().unwrap());
    store.next();

    let options = ProjectionOptions::default();
    let direct = projection::project(store.collection(), &store.view_state(), &options);
    assert_eq!(direct, store.project(&options));
    assert_eq!(direct.navigation.position.unwrap().to_string(), "2/4");
    assert_eq!(direct.info.byline, "Nissan (2024)");
}

#[test]
fn test_empty_and_duplicate_collections_are_rejected() {
    assert_eq!(Collection::new(Vec::new()), Err(Error::EmptyCollection));
    assert_eq!(
        Collection::new(vec![item(7, "A"), item(7, "B")]),
        Err(Error::DuplicateItemId(7))
    );
}

#[test]
fn test_toggle_labels_are_localized() {
    let i18n = I18n::default();
    assert_eq!(i18n.tr(ToggleLabel::Show.i18n_key()), "Voir la description");
    assert_eq!(i18n.tr(ToggleLabel::Hide.i18n_key()), "Masquer la description");
    assert_eq!(i18n.tr("gallery-previous-button"), "Précédent");
    assert_eq!(i18n.tr("gallery-next-button"), "Suivant");
    assert_eq!(i18n.tr("gallery-banner"), "Car Gallery");
}

#[test]
fn test_config_round_trip_via_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.gallery.show_position_indicator = Some(false);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, saved);
    assert!(!loaded.show_position_indicator());
    assert!(loaded.keyboard_navigation());
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[gallery]\nkeyboard_navigation = false\n")
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("valid partial config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    assert!(loaded.show_position_indicator());
    assert!(!loaded.keyboard_navigation());
}
