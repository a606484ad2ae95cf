//! End-user scenarios on the form controller, without any network.

use std::io::Cursor;
use std::sync::Arc;

use cvforge_core::theme::{find_theme, themes};
use cvforge_core::{
    decode_preview, Attachment, AttachmentSlot, ClientConfig, FormController, MemoryPreferences,
    PreferenceStore, Preferences, PreviewState,
};
use tempfile::tempdir;

fn form_with(store: impl PreferenceStore + 'static) -> FormController {
    FormController::new(ClientConfig::default(), Arc::new(store))
}

fn png(name: &str) -> Attachment {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 120, 200]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    Attachment::new(name, buffer)
}

#[test]
fn test_theme_survives_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("preferences.redb");

    {
        let mut form = form_with(Preferences::open(&db_path).unwrap());
        assert!(form.select_theme("Sunset Coral"));
    }

    let form = form_with(Preferences::open(&db_path).unwrap());
    assert_eq!(form.theme(), find_theme("Sunset Coral").unwrap());
}

#[test]
fn test_every_theme_round_trips() {
    for theme in themes() {
        let store = MemoryPreferences::new();
        let mut form = form_with(store.clone());
        form.apply_theme(theme);

        let reloaded = form_with(store);
        assert_eq!(reloaded.theme().name, theme.name);
    }
}

#[test]
fn test_unknown_persisted_theme_falls_back() {
    let store = MemoryPreferences::new();
    store.save_theme_name("Retired Theme").unwrap();
    let form = form_with(store);
    assert_eq!(form.theme().name, themes()[0].name);
}

#[test]
fn test_select_then_deselect_toggles_submit() {
    let mut form = form_with(MemoryPreferences::new());

    for slot in AttachmentSlot::ALL {
        assert!(!form.submit_enabled());
        form.on_file_selected(slot, Some(png("photo.png")));
    }
    assert!(form.submit_enabled());

    form.on_file_selected(AttachmentSlot::Face, None);
    assert!(!form.submit_enabled());
}

#[test]
fn test_add_row_four_times() {
    let mut form = form_with(MemoryPreferences::new());

    for i in 0..4 {
        let added = form.add_row();
        if i < 3 {
            assert!(added.is_some());
        } else {
            assert!(added.is_none());
        }
        assert_eq!(form.experiences().can_add(), i < 2);
    }
    assert_eq!(form.experiences().len(), 3);
}

#[tokio::test]
async fn test_previews_complete_out_of_order() {
    let mut form = form_with(MemoryPreferences::new());

    let passport = form
        .on_file_selected(AttachmentSlot::Passport, Some(png("p.png")))
        .unwrap();
    let face = form
        .on_file_selected(AttachmentSlot::Face, Some(png("f.png")))
        .unwrap();

    let face_uri = decode_preview(face.attachment.clone()).await;
    assert!(form.complete_preview(&face, face_uri));
    assert_eq!(form.attachments().preview(AttachmentSlot::Passport), &PreviewState::Decoding);

    let passport_uri = decode_preview(passport.attachment.clone()).await;
    assert!(form.complete_preview(&passport, passport_uri));

    for slot in [AttachmentSlot::Passport, AttachmentSlot::Face] {
        assert!(matches!(form.attachments().preview(slot), PreviewState::Ready(_)));
    }
}
