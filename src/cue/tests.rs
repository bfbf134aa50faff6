use super::*;
use crate::disc::{Track, TrackType};
use std::fs;
use tempfile::tempdir;

fn t(filename: &str, number: u32, kind: TrackType) -> Track {
    Track {
        filename: filename.into(),
        number,
        kind,
    }
}

#[test]
fn msf_renders_pregap_seconds() {
    assert_eq!(Msf::from_seconds(0).to_string(), "00:00:00");
    assert_eq!(Msf::from_seconds(59).to_string(), "00:59:00");
    assert_eq!(Msf::from_seconds(90).to_string(), "01:30:00");
    assert_eq!(Msf::ZERO, Msf::default());
}

#[test]
fn msf_minutes_widen_past_two_digits() {
    assert_eq!(Msf::from_seconds(6000).to_string(), "100:00:00");
}

#[test]
fn sheet_without_tracks_has_only_the_data_track() {
    let sheet = CueSheet::new("game.iso", 2, Vec::new());
    assert_eq!(
        sheet.to_string(),
        "FILE \"game.iso\" BINARY\n  TRACK 01 MODE1/2048\n\tINDEX 01 00:00:00\n"
    );
}

#[test]
fn sheet_renders_tracks_in_number_order() {
    let tracks = vec![
        t("track2.bin", 3, TrackType::Binary),
        t("track01.wav", 2, TrackType::Wave),
    ];
    let sheet = CueSheet::new("Panzer Dragoon.iso", 90, tracks);

    let expected = "\
FILE \"Panzer Dragoon.iso\" BINARY
  TRACK 01 MODE1/2048
\tINDEX 01 00:00:00
FILE \"track01.wav\" WAVE
  TRACK 02 AUDIO
\tINDEX 00 00:00:00
\tINDEX 01 01:30:00
FILE \"track2.bin\" BINARY
  TRACK 03 AUDIO
\tINDEX 00 00:00:00
\tINDEX 01 01:30:00
";
    assert_eq!(sheet.to_string(), expected);
    assert_eq!(sheet.image(), "Panzer Dragoon.iso");
    assert_eq!(sheet.pregap(), Msf::from_seconds(90));
}

#[test]
fn data_track_ignores_configured_pregap() {
    let sheet = CueSheet::new("game.iso", 45, vec![t("track1.bin", 2, TrackType::Binary)]);
    let text = sheet.to_string();
    let mut lines = text.lines();
    assert_eq!(lines.nth(2), Some("\tINDEX 01 00:00:00"));
    assert!(text.ends_with("\tINDEX 01 00:45:00\n"));
}

#[test]
fn duplicate_numbers_keep_listing_order() {
    let tracks = vec![
        t("track1.bin", 2, TrackType::Binary),
        t("track01.wav", 2, TrackType::Wave),
        t("track0.raw", 1, TrackType::Binary),
    ];
    let sheet = CueSheet::new("game.iso", 1, tracks);
    let names: Vec<&str> = sheet.tracks().iter().map(|t| t.filename.as_str()).collect();
    assert_eq!(names, vec!["track0.raw", "track1.bin", "track01.wav"]);
    assert_eq!(sheet.to_string().matches("  TRACK 02 AUDIO").count(), 2);
}

#[test]
fn track_number_ten_is_two_digits() {
    let sheet = CueSheet::new("game.iso", 1, vec![t("track9.bin", 10, TrackType::Binary)]);
    assert!(sheet.to_string().contains("  TRACK 10 AUDIO\n"));
}

#[test]
fn write_sheet_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.cue");
    fs::write(&path, b"stale contents that are longer than the new sheet").unwrap();

    let sheet = CueSheet::new("game.iso", 1, Vec::new());
    write_sheet(&path, &sheet).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), sheet.to_string());
}

#[cfg(unix)]
#[test]
fn write_sheet_creates_file_readable_by_all() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("game.cue");
    write_sheet(&path, &CueSheet::new("game.iso", 1, Vec::new())).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    // umask may strip bits but never adds them
    assert_eq!(mode & !0o644, 0);
    assert_eq!(mode & 0o600, 0o600);
}

#[test]
fn write_sheet_reports_the_target_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("game.cue");

    let err = write_sheet(&path, &CueSheet::new("game.iso", 1, Vec::new())).unwrap_err();
    assert_eq!(err.exit_code(), 5);
    assert!(err.to_string().contains("game.cue"));
}
