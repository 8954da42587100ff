//! Sprite tree embedded from `assets/sprites/` at build time.
//!
//! # Example
//!
//! ```
//! use asesheet_cli::embedded::SPRITES;
//! use asesheet_core::load_spritesheet_embedded;
//!
//! let sheet = load_spritesheet_embedded(&SPRITES, "").unwrap();
//! assert!(sheet.contains("player-idle-down"));
//! ```

// Include the generated code from build.rs
include!(concat!(env!("OUT_DIR"), "/embedded_sprites.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use asesheet_core::load_spritesheet_embedded;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_tree_not_empty() {
        assert!(!SPRITES.entries().is_empty());
    }

    #[test]
    fn test_embedded_subdirectories_present() {
        let enemies = SPRITES.get_dir("enemies").expect("enemies directory embedded");
        assert!(enemies.get_file("bat-fly.json").is_some());
        assert!(SPRITES.get_file("player-idle-down.json").is_some());
        assert!(SPRITES.get_file("enemies").is_none());
    }

    #[test]
    fn test_embedded_catalog() {
        let sheet = load_spritesheet_embedded(&SPRITES, "").unwrap();
        assert_eq!(sheet.len(), 8);
        assert_eq!(sheet.get("player-idle-down").map(|f| f.len()), Some(4));
        assert_eq!(sheet.get("enemies/bat-fly").map(|f| f.len()), Some(4));
        assert_eq!(sheet.get("fx/coin-spin").map(|f| f.len()), Some(8));
    }

    #[test]
    fn test_embedded_matches_assets_on_disk() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("sprites");
        let on_disk = asesheet_core::load_spritesheet_from_dir(assets).unwrap();
        let embedded = load_spritesheet_embedded(&SPRITES, "").unwrap();
        assert_eq!(embedded, on_disk);
    }
}
