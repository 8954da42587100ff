#![no_main]

use asesheet_core::SpriteDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = SpriteDocument::from_slice(data) else {
        return;
    };

    // Decoding must fail cleanly, never panic, whatever the document shape.
    let count = doc.frame_count();
    let frames = doc.frames();
    if let (Ok(count), Ok(frames)) = (&count, &frames) {
        assert_eq!(*count, frames.len());
        assert!(doc.frame_at(*count).unwrap().is_none());
    }
    let _ = doc.image_name();
});
