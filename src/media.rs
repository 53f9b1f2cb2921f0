//! Background loading of images and documents
//!
//! Each load runs on its own short-lived thread and reports back over a
//! channel that the UI polls once per frame. Dropping an [`AssetLoad`] drops
//! the receiver, so a load that finishes after its overlay closed is simply
//! discarded.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use tracing::{debug, warn};

use crate::constants::media::{DECODABLE_EXTENSIONS, RGBA_CHANNELS, RGB_CHANNELS};

/// Decoded RGBA pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// What a finished load produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedAsset {
    Image(DecodedImage),
    /// The file exists but is shown by the host (PDF, video)
    External(PathBuf),
}

pub enum AssetState {
    Loading,
    Image(egui::TextureHandle),
    External(PathBuf),
    Failed(String),
}

pub struct AssetLoad {
    path: PathBuf,
    receiver: Option<Receiver<Result<LoadedAsset, String>>>,
    state: AssetState,
}

impl AssetLoad {
    /// Start loading `path` in the background
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        let spawned = thread::Builder::new()
            .name("asset-load".to_string())
            .spawn(move || {
                let result = load_asset(&worker_path).map_err(|err| format!("{err:#}"));
                // Receiver is gone when the overlay closed first
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => Self {
                path,
                receiver: Some(rx),
                state: AssetState::Loading,
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to spawn asset loader");
                Self {
                    path,
                    receiver: None,
                    state: AssetState::Failed(err.to_string()),
                }
            }
        }
    }

    /// Pick up a finished load, uploading images as textures
    pub fn poll(&mut self, ctx: &egui::Context) -> &AssetState {
        let Some(receiver) = &self.receiver else {
            return &self.state;
        };

        match receiver.try_recv() {
            Ok(Ok(LoadedAsset::Image(image))) => {
                debug!(path = %self.path.display(), width = image.width, height = image.height, "Asset decoded");
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                let texture = ctx.load_texture(
                    self.path.to_string_lossy(),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.state = AssetState::Image(texture);
                self.receiver = None;
            }
            Ok(Ok(LoadedAsset::External(path))) => {
                self.state = AssetState::External(path);
                self.receiver = None;
            }
            Ok(Err(reason)) => {
                warn!(path = %self.path.display(), %reason, "Asset failed to load");
                self.state = AssetState::Failed(reason);
                self.receiver = None;
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint();
            }
            Err(TryRecvError::Disconnected) => {
                self.state = AssetState::Failed("loader exited without a result".to_string());
                self.receiver = None;
            }
        }
        &self.state
    }
}

/// Resolve a content path against the asset root. Absolute paths pass through.
pub fn resolve_asset(root: &Path, asset: &str) -> PathBuf {
    let candidate = Path::new(asset);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// `file://` URI for handing a local asset to the host
pub fn file_uri(path: &Path) -> String {
    let absolute = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

fn is_decodable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DECODABLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read `path`, decoding it when it is an image we can show in-process
pub fn load_asset(path: &Path) -> Result<LoadedAsset> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if is_decodable(path) {
        let image = decode_png(&bytes).with_context(|| format!("Failed to decode {}", path.display()))?;
        Ok(LoadedAsset::Image(image))
    } else {
        Ok(LoadedAsset::External(path.to_path_buf()))
    }
}

/// Decode PNG bytes into RGBA
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![
        0;
        reader
            .output_buffer_size()
            .ok_or_else(|| anyhow!("PNG output buffer size overflows"))?
    ];
    let info = reader.next_frame(&mut buf)?;
    let pixels = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => pixels.to_vec(),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(pixels.len() / RGB_CHANNELS * RGBA_CHANNELS);
            for chunk in pixels.chunks_exact(RGB_CHANNELS) {
                rgba.extend_from_slice(chunk);
                rgba.push(0xFF);
            }
            rgba
        }
        png::ColorType::Grayscale => pixels.iter().flat_map(|&g| [g, g, g, 0xFF]).collect(),
        png::ColorType::GrayscaleAlpha => pixels
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        other => {
            return Err(anyhow!(
                "Unsupported PNG color type {:?} (expected RGB, RGBA or grayscale)",
                other
            ))
        }
    };

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        rgba,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_decode_rgb_adds_alpha() {
        let bytes = encode_png(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 255, 0]);
        let image = decode_png(&bytes).unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.rgba, vec![255, 0, 0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_decode_rgba_passthrough() {
        let data = [1, 2, 3, 4];
        let bytes = encode_png(1, 1, png::ColorType::Rgba, &data);
        assert_eq!(decode_png(&bytes).unwrap().rgba, data.to_vec());
    }

    #[test]
    fn test_decode_grayscale() {
        let bytes = encode_png(1, 1, png::ColorType::Grayscale, &[7]);
        assert_eq!(decode_png(&bytes).unwrap().rgba, vec![7, 7, 7, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_png(b"not a png").is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_asset(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_document_is_external() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF-1.7").unwrap();
        assert_eq!(load_asset(&path).unwrap(), LoadedAsset::External(path.clone()));
    }

    #[test]
    fn test_load_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.PNG");
        fs::write(&path, encode_png(1, 1, png::ColorType::Rgb, &[9, 9, 9])).unwrap();
        match load_asset(&path).unwrap() {
            LoadedAsset::Image(image) => assert_eq!(image.rgba, vec![9, 9, 9, 255]),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_asset() {
        let root = Path::new("/srv/folio/assets");
        assert_eq!(
            resolve_asset(root, "gallery/a.png"),
            PathBuf::from("/srv/folio/assets/gallery/a.png")
        );
        assert_eq!(resolve_asset(root, "/tmp/b.png"), PathBuf::from("/tmp/b.png"));
    }
}
