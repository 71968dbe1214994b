//! Remote avatar/icon loading
//!
//! Images are downloaded in the background into the cache directory and
//! turned into textures on the UI thread the first time a view asks for them.
//! A failed download or decode leaves a placeholder; nothing is retried.

use crate::constants::{IMAGE_FETCH_CONCURRENCY, MAX_IMAGE_BYTES};
use crate::utils::cache_file_name;
use anyhow::{bail, Context as _};
use eframe::egui;
use futures::StreamExt;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Clone)]
pub enum ImageState {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

pub struct RemoteImages {
    cache_dir: PathBuf,
    // None = decode failed
    textures: HashMap<String, Option<egui::TextureHandle>>,
    requested: HashSet<String>,
    failed: Arc<Mutex<HashSet<String>>>,
    cancel: CancellationToken,
}

impl RemoteImages {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            textures: HashMap::new(),
            requested: HashSet::new(),
            failed: Arc::new(Mutex::new(HashSet::new())),
            cancel: CancellationToken::new(),
        }
    }

    fn path_for(&self, url: &str) -> PathBuf {
        self.cache_dir.join(cache_file_name(url))
    }

    /// Start downloading every URL not requested before and not already cached.
    pub fn prefetch<'a>(
        &mut self,
        runtime: &tokio::runtime::Runtime,
        ctx: &egui::Context,
        urls: impl IntoIterator<Item = &'a str>,
    ) {
        let mut pending = Vec::new();
        for url in urls {
            if !self.requested.insert(url.to_owned()) {
                continue;
            }
            let path = self.path_for(url);
            if !path.exists() {
                pending.push((url.to_owned(), path));
            }
        }
        if pending.is_empty() {
            return;
        }

        debug!(count = pending.len(), "Starting image prefetch");

        let cache_dir = self.cache_dir.clone();
        let failed = self.failed.clone();
        let cancel = self.cancel.clone();
        let ctx = ctx.clone();

        runtime.spawn(async move {
            if let Err(e) = tokio::fs::create_dir_all(&cache_dir).await {
                warn!(error = %e, dir = %cache_dir.display(), "Failed to create image cache");
                if let Ok(mut set) = failed.lock() {
                    set.extend(pending.into_iter().map(|(url, _)| url));
                }
                ctx.request_repaint();
                return;
            }

            let client = reqwest::Client::new();
            let work = futures::stream::iter(pending).for_each_concurrent(
                IMAGE_FETCH_CONCURRENCY,
                |(url, path)| {
                    let client = &client;
                    let failed = &failed;
                    let ctx = &ctx;
                    async move {
                        match fetch_to_cache(client, &url, &path).await {
                            Ok(()) => debug!(url = %url, "Image cached"),
                            Err(e) => {
                                warn!(error = %e, url = %url, "Image fetch failed");
                                if let Ok(mut set) = failed.lock() {
                                    set.insert(url);
                                }
                            }
                        }
                        ctx.request_repaint();
                    }
                },
            );

            tokio::select! {
                _ = cancel.cancelled() => debug!("Image prefetch cancelled"),
                _ = work => {}
            }
        });
    }

    /// Current state of an image; decodes into a texture once the file is cached.
    pub fn get(&mut self, ctx: &egui::Context, url: &str) -> ImageState {
        if let Some(cached) = self.textures.get(url) {
            return match cached {
                Some(texture) => ImageState::Ready(texture.clone()),
                None => ImageState::Failed,
            };
        }

        let path = self.path_for(url);
        if path.exists() {
            let texture = match load_color_image(&path) {
                Ok(image) => Some(ctx.load_texture(url, image, egui::TextureOptions::LINEAR)),
                Err(e) => {
                    warn!(error = %e, url, "Failed to decode cached image");
                    None
                }
            };
            self.textures.insert(url.to_owned(), texture.clone());
            return texture.map_or(ImageState::Failed, ImageState::Ready);
        }

        let failed = self
            .failed
            .lock()
            .map(|set| set.contains(url))
            .unwrap_or(false);
        if failed {
            self.textures.insert(url.to_owned(), None);
            ImageState::Failed
        } else {
            ImageState::Loading
        }
    }

    /// Stop outstanding downloads. Idempotent.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn fetch_to_cache(client: &reqwest::Client, url: &str, path: &Path) -> anyhow::Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .context("request failed")?
        .error_for_status()?;

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("body read failed")?;
        if body.len() + chunk.len() > MAX_IMAGE_BYTES {
            bail!("image exceeds {MAX_IMAGE_BYTES} bytes");
        }
        body.extend_from_slice(&chunk);
    }
    decode(&body)?;

    // Write then rename so the UI thread never reads a partial file
    let part = path.with_extension("part");
    tokio::fs::write(&part, &body)
        .await
        .with_context(|| format!("writing {}", part.display()))?;
    tokio::fs::rename(&part, path).await?;
    Ok(())
}

fn load_color_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode(&bytes)
}

/// Decode any format the `image` crate recognises by content.
pub fn decode(bytes: &[u8]) -> anyhow::Result<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)
        .context("unsupported or corrupt image")?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 220, 255, 230]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    fn temp_cache(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "jovanstar-portfolio-images-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    #[test]
    fn decodes_png_by_content() {
        let image = decode(&png_bytes(3, 2)).expect("decodes");
        assert_eq!(image.size, [3, 2]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode(b"<html>404</html>").is_err());
    }

    #[test]
    fn uncached_unknown_image_is_loading() {
        let ctx = egui::Context::default();
        let mut images = RemoteImages::new(temp_cache("loading"));
        assert!(matches!(
            images.get(&ctx, "https://example.invalid/none.png"),
            ImageState::Loading
        ));
    }

    #[test]
    fn failed_fetch_degrades_to_placeholder() {
        let ctx = egui::Context::default();
        let mut images = RemoteImages::new(temp_cache("failed"));
        let url = "https://example.invalid/broken.png";
        images
            .failed
            .lock()
            .expect("lock")
            .insert(url.to_owned());
        assert!(matches!(images.get(&ctx, url), ImageState::Failed));
    }

    #[test]
    fn failure_is_remembered_without_rechecking() {
        let ctx = egui::Context::default();
        let dir = temp_cache("remembered");
        let url = "https://example.invalid/gone.png";
        let mut images = RemoteImages::new(dir.clone());
        images.failed.lock().expect("lock").insert(url.to_owned());

        assert!(matches!(images.get(&ctx, url), ImageState::Failed));
        assert!(matches!(images.textures.get(url), Some(None)));

        // A later cache file is not picked up once the failure is recorded
        std::fs::write(dir.join(cache_file_name(url)), png_bytes(2, 2)).expect("write");
        assert!(matches!(images.get(&ctx, url), ImageState::Failed));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn cached_file_becomes_texture_once() {
        let ctx = egui::Context::default();
        let dir = temp_cache("ready");
        let url = "https://example.invalid/ok.png";
        std::fs::write(dir.join(cache_file_name(url)), png_bytes(4, 4)).expect("write");

        let mut images = RemoteImages::new(dir.clone());
        match images.get(&ctx, url) {
            ImageState::Ready(texture) => assert_eq!(texture.size(), [4, 4]),
            _ => panic!("expected texture"),
        }
        assert_eq!(images.textures.len(), 1);
        assert!(matches!(images.get(&ctx, url), ImageState::Ready(_)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_cached_file_is_failed() {
        let ctx = egui::Context::default();
        let dir = temp_cache("corrupt");
        let url = "https://example.invalid/corrupt.png";
        std::fs::write(dir.join(cache_file_name(url)), b"not an image").expect("write");

        let mut images = RemoteImages::new(dir.clone());
        assert!(matches!(images.get(&ctx, url), ImageState::Failed));
        std::fs::remove_dir_all(&dir).ok();
    }
}
