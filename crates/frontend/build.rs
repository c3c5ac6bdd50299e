//! Build script for generating the portfolio asset table
//!
//! Scans `assets/portfolio/<Category>/Done/` for finished work images and
//! generates `portfolio_assets.rs` in OUT_DIR with one
//! `(category, path, locator)` row per image.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PORTFOLIO_DIR: &str = "assets/portfolio";
const DONE_DIR: &str = "done";
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

struct AssetRow {
    category: String,
    path: String,
    locator: String,
}

fn main() {
    println!("cargo:rerun-if-changed={}", PORTFOLIO_DIR);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is not set"));
    let rows = discover(Path::new(PORTFOLIO_DIR));

    let output_rs = out_dir.join("portfolio_assets.rs");
    fs::write(&output_rs, generate_rust_code(&rows))
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", output_rs.display(), e));
}

// ============================================================================
// Discovery
// ============================================================================

fn discover(root: &Path) -> Vec<AssetRow> {
    if !root.exists() {
        println!(
            "cargo:warning=Portfolio directory {} not found, no portfolio items generated",
            root.display()
        );
        return Vec::new();
    }

    let mut rows = Vec::new();
    for category_dir in sorted_entries(root) {
        if !category_dir.is_dir() {
            continue;
        }
        let Some(category_name) = file_name(&category_dir) else {
            continue;
        };

        let done_dir = sorted_entries(&category_dir).into_iter().find(|p| {
            p.is_dir()
                && file_name(p)
                    .map(|n| n.eq_ignore_ascii_case(DONE_DIR))
                    .unwrap_or(false)
        });
        let Some(done_dir) = done_dir else {
            println!(
                "cargo:warning=No Done directory under {}, category left empty",
                category_dir.display()
            );
            continue;
        };
        let done_name = file_name(&done_dir).unwrap_or_default();

        for image in sorted_entries(&done_dir) {
            if !image.is_file() || !is_image(&image) {
                continue;
            }
            let Some(image_name) = file_name(&image) else {
                continue;
            };
            rows.push(AssetRow {
                category: category_name.to_ascii_lowercase(),
                path: format!("{}/{}/{}", category_name, done_name, image_name),
                locator: format!(
                    "{}/{}/{}/{}",
                    PORTFOLIO_DIR,
                    urlencoding::encode(&category_name),
                    urlencoding::encode(&done_name),
                    urlencoding::encode(&image_name)
                ),
            });
        }
    }
    rows
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir.filter_map(|e| e.ok().map(|e| e.path())).collect(),
        Err(e) => {
            println!("cargo:warning=Failed to read {}: {}", dir.display(), e);
            Vec::new()
        }
    };
    entries.sort();
    entries
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|n| n.to_str()).map(str::to_string)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_rust_code(rows: &[AssetRow]) -> String {
    let mut code = String::from(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM assets/portfolio - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n\
         /// Discovered portfolio images: (category directory, asset path, locator)\n\
         pub const PORTFOLIO_ASSETS: &[(&str, &str, &str)] = &[\n",
    );

    for row in rows {
        code.push_str(&format!(
            "    (\"{}\", \"{}\", \"{}\"),\n",
            escape_string(&row.category),
            escape_string(&row.path),
            escape_string(&row.locator)
        ));
    }

    code.push_str("];\n");
    code
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
