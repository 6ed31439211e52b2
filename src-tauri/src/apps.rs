// Installed application catalog for the launcher

use log::{debug, warn};
use plist::{Dictionary, Value};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub bundle_id: String,
    pub path: String,
    pub icon_path: Option<String>,
    pub category: Option<String>,
    pub version: Option<String>,
}

/// List installed applications, sorted by name
#[tauri::command]
pub fn list_apps() -> Result<Vec<AppInfo>, String> {
    let bundles = discover_bundles()?;
    debug!("🔍 Found {} application bundles", bundles.len());
    Ok(catalog(bundles))
}

/// Launch an application by bundle identifier
#[tauri::command]
pub fn open_app(bundle_id: String) -> Result<(), String> {
    validate_bundle_id(&bundle_id)?;
    launch(&bundle_id)
}

fn catalog(bundles: impl IntoIterator<Item = PathBuf>) -> Vec<AppInfo> {
    let mut apps: Vec<AppInfo> = bundles.into_iter().filter_map(|p| read_bundle(&p)).collect();
    apps.sort_by_key(|app| app.name.to_lowercase());
    apps
}

#[cfg(target_os = "macos")]
fn discover_bundles() -> Result<Vec<PathBuf>, String> {
    let output = std::process::Command::new("mdfind")
        .arg("kMDItemContentType == 'com.apple.application-bundle'")
        .output()
        .map_err(|e| format!("Failed to run mdfind: {}", e))?;

    if !output.status.success() {
        return Err("mdfind command failed".to_string());
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

#[cfg(not(target_os = "macos"))]
fn discover_bundles() -> Result<Vec<PathBuf>, String> {
    Err("Listing applications is only supported on macOS".to_string())
}

#[cfg(target_os = "macos")]
fn launch(bundle_id: &str) -> Result<(), String> {
    let output = std::process::Command::new("open")
        .arg("-b")
        .arg(bundle_id)
        .output()
        .map_err(|e| format!("Failed to execute open command: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Failed to open app '{}': {}", bundle_id, stderr.trim()));
    }
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn launch(bundle_id: &str) -> Result<(), String> {
    Err(format!("Opening '{}' is only supported on macOS", bundle_id))
}

fn validate_bundle_id(bundle_id: &str) -> Result<(), String> {
    if bundle_id.trim().is_empty() {
        return Err("Bundle ID cannot be empty".to_string());
    }
    // Passed straight to `open -b`; an option-looking value would change its meaning
    if bundle_id.starts_with('-') {
        return Err(format!("Invalid bundle ID: {}", bundle_id));
    }
    Ok(())
}

/// Read `Contents/Info.plist` of an `.app` bundle. Bundles without an
/// identifier are skipped.
fn read_bundle(app_path: &Path) -> Option<AppInfo> {
    let plist_path = app_path.join("Contents").join("Info.plist");
    let info = match Value::from_file(&plist_path) {
        Ok(info) => info,
        Err(e) => {
            if plist_path.exists() {
                warn!("⚠️  Unreadable Info.plist {:?}: {}", plist_path, e);
            }
            return None;
        }
    };
    let dict = info.as_dictionary()?;

    let bundle_id = string_field(dict, &["CFBundleIdentifier"])?;
    let name = string_field(dict, &["CFBundleDisplayName", "CFBundleName"])
        .unwrap_or_else(|| "Unnamed".to_string());
    let version = string_field(dict, &["CFBundleShortVersionString", "CFBundleVersion"]);
    let category = string_field(dict, &["LSApplicationCategoryType"])
        .map(|c| category_label(&c).to_string())
        .or_else(|| category_from_path(app_path).map(str::to_string));

    Some(AppInfo {
        name,
        bundle_id,
        path: app_path.to_string_lossy().to_string(),
        icon_path: icon_path(dict, app_path),
        category,
        version,
    })
}

/// First non-empty string among `keys`
fn string_field(dict: &Dictionary, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| dict.get(key).and_then(Value::as_string))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn category_label(uti: &str) -> &'static str {
    match uti {
        "public.app-category.productivity" => "Productivity",
        "public.app-category.graphics-design" => "Graphics & Design",
        "public.app-category.developer-tools" => "Developer Tools",
        "public.app-category.entertainment" => "Entertainment",
        "public.app-category.education" => "Education",
        "public.app-category.lifestyle" => "Lifestyle",
        "public.app-category.utilities" => "Utilities",
        "public.app-category.games" => "Games",
        "public.app-category.social-networking" => "Social Networking",
        "public.app-category.finance" => "Finance",
        "public.app-category.photography" => "Photography",
        "public.app-category.music" => "Music",
        "public.app-category.video" => "Video",
        _ => "Other",
    }
}

fn category_from_path(app_path: &Path) -> Option<&'static str> {
    let path = app_path.to_string_lossy();
    if path.contains("Utilities") {
        Some("Utilities")
    } else if path.contains("Games") {
        Some("Games")
    } else if path.contains("Graphics") || path.contains("Design") {
        Some("Graphics & Design")
    } else {
        None
    }
}

/// Declared icon if it exists, otherwise any `.icns` in Resources
fn icon_path(dict: &Dictionary, app_path: &Path) -> Option<String> {
    let resources = app_path.join("Contents").join("Resources");

    let declared = string_field(dict, &["CFBundleIconFile", "CFBundleIconName"]).map(|name| {
        if name.ends_with(".icns") {
            resources.join(name)
        } else {
            resources.join(format!("{}.icns", name))
        }
    });
    if let Some(path) = declared.filter(|p| p.exists()) {
        return Some(path.to_string_lossy().to_string());
    }

    std::fs::read_dir(&resources)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "icns"))
        .map(|p| p.to_string_lossy().to_string())
}
