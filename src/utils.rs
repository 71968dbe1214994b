//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;
use tracing::{debug, warn};

// Square star mark on black, for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#000"/><path d="M32 8l6.9 15.6L56 25.4 43.2 37l3.6 16.8L32 45.3l-14.8 8.5L20.8 37 8 25.4l17.1-1.8z" fill="#c8dcff" fill-opacity=".9"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default())
        .map_err(|e| warn!(error = %e, "Failed to parse icon SVG"))
        .ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the image cache directory path
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("cache").join("images")
}

/// Cache file name derived from the URL itself, so it never changes between builds.
/// The scheme is dropped and anything outside `[A-Za-z0-9.-]` becomes `_`.
pub fn cache_file_name(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let name: String = rest
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .take(MAX_CACHE_NAME)
        .collect();
    format!("{name}.img")
}

const MAX_CACHE_NAME: usize = 150;

/// Hand a link to the system handler (browser, mail client)
pub fn open_link(url: &str) {
    debug!(url, "Opening link");
    if let Err(e) = open::that(url) {
        warn!(error = %e, url, "Failed to open link");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_icon(32).expect("icon renders");
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        // Opaque background in the middle of the mark
        assert_eq!(pixels[(16 * 32 + 16) * 4 + 3], 255);
    }

    #[test]
    fn cache_names_are_stable_and_distinct() {
        let a = cache_file_name("https://example.com/a.png");
        assert_eq!(a, cache_file_name("https://example.com/a.png"));
        assert_ne!(a, cache_file_name("https://example.com/b.png"));
        assert!(a.ends_with(".img"));
    }

    #[test]
    fn cache_name_is_readable_and_fixed() {
        assert_eq!(
            cache_file_name("https://img.icons8.com/ios-filled/50/FFFFFF/discord-logo.png"),
            "img.icons8.com_ios-filled_50_FFFFFF_discord-logo.png.img"
        );
        assert_eq!(cache_file_name("https://a.b/x?y=1"), "a.b_x_y_1.img");
    }

    #[test]
    fn long_urls_are_capped() {
        let url = format!("https://example.com/{}", "a".repeat(400));
        assert_eq!(cache_file_name(&url).len(), MAX_CACHE_NAME + ".img".len());
    }
}
