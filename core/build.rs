use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CATALOG_ENV: &str = "PORTFOLIO_CATALOG_PATH";
const DEFAULT_CATALOG: &str = "content/portfolio.toml";
const FORWARDED_ENV: &[&str] = &["SAMCREATIVE_SITE_ORIGIN", "SAMCREATIVE_ASSET_ORIGIN"];

#[derive(Deserialize)]
struct CatalogFile {
    projects: Vec<ProjectRow>,
}

#[derive(Deserialize)]
struct ProjectRow {
    id: u32,
    title: String,
    category: String,
    display: String,
    year: String,
    description: String,
    images: Vec<String>,
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    load_dotenv(workspace_root);
    forward_site_env();

    let catalog_path = catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());
    let source = fs::read_to_string(&catalog_path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", catalog_path.display()));
    let catalog: CatalogFile = toml::from_str(&source)
        .unwrap_or_else(|err| panic!("cannot parse {}: {err}", catalog_path.display()));

    let generated = check_rows(&catalog.projects)
        .and_then(|()| render_catalog(&catalog.projects))
        .unwrap_or_else(|problem| panic!("{problem} in {}", catalog_path.display()));

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_catalog.rs");
    fs::write(&out_path, generated)
        .unwrap_or_else(|err| panic!("cannot write {}: {err}", out_path.display()));
}

/// `.env.local` wins over `.env`; both are optional.
fn load_dotenv(workspace_root: &Path) {
    for name in [".env.local", ".env"] {
        let path = workspace_root.join(name);
        println!("cargo:rerun-if-changed={}", path.display());
        let _ = dotenvy::from_filename(&path);
    }
}

fn forward_site_env() {
    for key in FORWARDED_ENV {
        println!("cargo:rerun-if-env-changed={key}");
        let Ok(value) = env::var(key) else {
            continue;
        };
        let value = value.trim();
        if !value.is_empty() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}

fn catalog_path(workspace_root: &Path) -> PathBuf {
    println!("cargo:rerun-if-env-changed={CATALOG_ENV}");
    let configured = env::var(CATALOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));
    if configured.is_absolute() {
        configured
    } else {
        workspace_root.join(configured)
    }
}

fn check_rows(rows: &[ProjectRow]) -> Result<(), String> {
    if rows.is_empty() {
        return Err("portfolio catalog has no projects".to_string());
    }
    let mut seen = HashSet::new();
    for row in rows {
        let id = row.id;
        if !seen.insert(id) {
            return Err(format!("duplicate project id {id}"));
        }
        if row.title.trim().is_empty() {
            return Err(format!("project {id} has an empty title"));
        }
        if row.images.is_empty() {
            return Err(format!("project {id} has no images"));
        }
        if row.images.iter().any(|src| src.trim().is_empty()) {
            return Err(format!("project {id} has an empty image url"));
        }
        if row.display.trim() == "single" && row.images.len() != 1 {
            return Err(format!(
                "project {id} is a single-image entry but lists {} images",
                row.images.len()
            ));
        }
    }
    Ok(())
}

fn category_variant(slug: &str) -> Option<&'static str> {
    Some(match slug.trim() {
        "web" => "Web",
        "saas" => "Saas",
        "ecommerce" => "Ecommerce",
        "design" => "Design",
        "logo" => "Logo",
        _ => return None,
    })
}

fn display_variant(value: &str) -> Option<&'static str> {
    Some(match value.trim() {
        "single" => "Single",
        "slider" => "Slider",
        _ => return None,
    })
}

fn render_catalog(rows: &[ProjectRow]) -> Result<String, String> {
    let mut out = String::from("pub const PORTFOLIO_CATALOG: &[ProjectEntry] = &[\n");
    for row in rows {
        let category = category_variant(&row.category)
            .ok_or_else(|| format!("project {} has unknown category {:?}", row.id, row.category))?;
        let display = display_variant(&row.display)
            .ok_or_else(|| format!("project {} has unknown display {:?}", row.id, row.display))?;
        let images = row
            .images
            .iter()
            .map(|src| format!("{src:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "    ProjectEntry {{\n        id: {},\n        title: {:?},\n        category: Category::{category},\n        display: DisplayKind::{display},\n        year: {:?},\n        description: {:?},\n        images: &[{images}],\n    }},\n",
            row.id, row.title, row.year, row.description,
        );
    }
    out.push_str("];\n");
    Ok(out)
}
