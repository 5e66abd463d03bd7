use eframe_drawing::{Command, CommandOutcome, Document};
use egui::{Color32, Pos2};

fn sample_document() -> Document {
    let mut doc = Document::default();
    doc.change_background_color(Color32::from_rgb(250, 240, 230));
    doc.choose_color(Color32::from_rgb(12, 34, 56));
    doc.paint(Pos2::new(10.0, 10.0));
    doc.paint(Pos2::new(200.0, 150.0));
    doc
}

#[test]
fn test_save_appends_png_and_roundtrips_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let doc = sample_document();

    let saved = doc.save_image(&dir.path().join("out")).unwrap();
    assert_eq!(saved, dir.path().join("out.png"));
    assert!(saved.exists());
    assert!(!dir.path().join("out").exists());

    let decoded = image::open(&saved).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (600, 400));
    assert_eq!(decoded.as_raw(), doc.bitmap().image().as_raw());
}

#[test]
fn test_save_keeps_existing_extension() {
    let dir = tempfile::tempdir().unwrap();
    let doc = Document::default();
    let saved = doc.save_image(&dir.path().join("picture.png")).unwrap();
    assert_eq!(saved, dir.path().join("picture.png"));
}

#[test]
fn test_save_command_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = sample_document();
    let outcome = Command::SaveImage(dir.path().join("drawing"))
        .execute(&mut doc)
        .unwrap();
    assert_eq!(outcome, CommandOutcome::Saved(dir.path().join("drawing.png")));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = sample_document();
    let result = Command::SaveImage(dir.path().join("missing").join("out")).execute(&mut doc);
    assert!(result.is_err());
}
