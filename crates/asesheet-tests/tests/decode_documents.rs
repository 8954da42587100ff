//! Document decoding tests against checked-in Aseprite exports.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p asesheet-tests --test decode_documents
//! ```

use asesheet_core::{decode_path, ErrorKind, Frame};
use asesheet_tests::fixtures::testdata_dir;
use pretty_assertions::assert_eq;

#[test]
fn test_decode_valid_file() {
    let doc = decode_path(testdata_dir().join("file_valid.json")).unwrap();
    assert_eq!(doc.frame_count().unwrap(), 2);
}

#[test]
fn test_decode_missing_file_is_io_error() {
    let err = decode_path(testdata_dir().join("file_not_exists.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_decode_invalid_json_is_malformed() {
    let path = testdata_dir().join("file_with_invalid.json");
    let err = decode_path(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_ball_bounce_frame_count() {
    let doc = decode_path(testdata_dir().join("level0").join("ball-bounce.json")).unwrap();
    assert_eq!(doc.frame_count().unwrap(), 9);
    assert_eq!(doc.frames().unwrap().len(), 9);
}

#[test]
fn test_ball_bounce_frame_at() {
    let doc = decode_path(testdata_dir().join("level0").join("ball-bounce.json")).unwrap();
    assert_eq!(
        doc.frame_at(1).unwrap(),
        Some(Frame::new(100.0, 32.0, 0.0, 32.0, 32.0))
    );
    assert_eq!(doc.frame_at(0).unwrap().map(|f| f.duration_ms), Some(200.0));
}

#[test]
fn test_ball_bounce_frame_past_end() {
    let doc = decode_path(testdata_dir().join("level0").join("ball-bounce.json")).unwrap();
    assert_eq!(doc.frame_at(9).unwrap(), None);
    assert_eq!(doc.frame_at(10).unwrap(), None);
}

#[test]
fn test_ball_bounce_image_name() {
    let doc = decode_path(testdata_dir().join("level0").join("ball-bounce.json")).unwrap();
    assert_eq!(doc.image_name().unwrap(), "ball-bounce.png");
}

#[test]
fn test_ball_bounce_frames_in_playback_order() {
    let doc = decode_path(testdata_dir().join("level0").join("ball-bounce.json")).unwrap();
    let xs: Vec<f32> = doc.frames().unwrap().iter().map(|f| f.pos_x).collect();
    let expected: Vec<f32> = (0..9).map(|i| (i * 32) as f32).collect();
    assert_eq!(xs, expected);
}
