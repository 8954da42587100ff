//! Build script for asesheet-cli.
//!
//! Walks `assets/sprites/` and generates Rust code describing the tree as a
//! static `EmbeddedDir`, with every file pulled in through `include_bytes!`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let sprites_dir = PathBuf::from(&manifest_dir).join("assets").join("sprites");

    // Tell Cargo to rerun if anything under the sprite tree changes
    println!("cargo:rerun-if-changed={}", sprites_dir.display());

    let mut code = String::new();
    code.push_str("// @generated by build.rs from assets/sprites. Do not edit.\n\n");
    code.push_str("/// Sprite tree embedded at build time.\n");
    code.push_str("pub static SPRITES: ::asesheet_core::EmbeddedDir = ");
    let mut files = 0usize;
    if sprites_dir.is_dir() {
        generate_dir(&mut code, "", &sprites_dir, 0, &mut files);
    } else {
        code.push_str("::asesheet_core::EmbeddedDir::new(\"\", &[])");
    }
    code.push_str(";\n");

    // Write to OUT_DIR
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = PathBuf::from(&out_dir).join("embedded_sprites.rs");
    fs::write(&out_path, code).unwrap_or_else(|e| {
        panic!(
            "Failed to write embedded_sprites.rs to {:?}: {}",
            out_path, e
        )
    });

    println!(
        "cargo:warning=Embedded {} sprite file(s) from {}",
        files,
        sprites_dir.display()
    );
}

/// Emits an `EmbeddedDir` expression for `dir`, recursing into subdirectories.
fn generate_dir(code: &mut String, name: &str, dir: &Path, indent: usize, files: &mut usize) {
    let pad = "    ".repeat(indent + 1);
    let _ = writeln!(code, "::asesheet_core::EmbeddedDir::new({:?}, &[", name);

    let children = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for child in children {
        let child = child.unwrap_or_else(|e| panic!("Failed to walk {:?}: {}", dir, e));
        let child_name = child.file_name().to_string_lossy().into_owned();
        let child_path = child.path();

        if child.file_type().is_dir() {
            let _ = write!(code, "{}::asesheet_core::EmbeddedEntry::Dir(", pad);
            generate_dir(code, &child_name, child_path, indent + 1, files);
            code.push_str("),\n");
        } else if child.file_type().is_file() {
            let absolute = child_path
                .canonicalize()
                .unwrap_or_else(|e| panic!("Failed to canonicalize {:?}: {}", child_path, e));
            let _ = writeln!(
                code,
                "{}::asesheet_core::EmbeddedEntry::File(::asesheet_core::EmbeddedFile::new({:?}, include_bytes!({:?}))),",
                pad,
                child_name,
                absolute.to_string_lossy()
            );
            *files += 1;
        }
    }

    let _ = write!(code, "{}])", "    ".repeat(indent));
}
