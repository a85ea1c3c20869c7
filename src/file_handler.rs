use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;
use futures::channel::oneshot;

use crate::error::ImageIoError;
use crate::image_io;
use crate::picture::Picture;

type DecodeResult = Result<Picture, ImageIoError>;

/// An image decode running off the UI thread
struct PendingImport {
    name: String,
    receiver: oneshot::Receiver<DecodeResult>,
}

/// Finished import, successful or not
pub enum ImportOutcome {
    Loaded { name: String, picture: Picture },
    Failed { name: String, error: String },
}

/// Turns dropped or opened image files into pictures.
///
/// Decoding happens on a background thread; [`FileHandler::poll`] hands
/// finished pictures back to the UI thread, which dispatches them like any
/// other picture change.
pub struct FileHandler {
    max_size: u32,
    pending: Vec<PendingImport>,
}

impl FileHandler {
    pub fn new(max_size: u32) -> Self {
        Self {
            max_size,
            pending: Vec::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Start importing every file dropped onto the window this frame.
    /// Returns true if any import started.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut started = false;

        for file in dropped {
            let name = file_name(&file);
            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", name);
                continue;
            }

            if let Some(bytes) = file.bytes {
                log::info!("Importing image from memory: {} ({} bytes)", name, bytes.len());
                self.spawn_decode(name, ImageSource::Bytes(bytes));
                started = true;
            } else if let Some(path) = file.path {
                self.spawn_decode(name, ImageSource::Path(path));
                started = true;
            } else {
                log::warn!("Dropped file has no accessible data: {}", name);
            }
        }
        started
    }

    /// Start importing the image at `path`
    pub fn open(&mut self, path: &Path) {
        log::info!("Importing image from path: {}", path.display());
        self.spawn_decode(path.display().to_string(), ImageSource::Path(path.to_path_buf()));
    }

    /// Collect imports that finished since the last call
    pub fn poll(&mut self) -> Vec<ImportOutcome> {
        let mut finished = Vec::new();
        self.pending.retain_mut(|import| match import.receiver.try_recv() {
            Ok(None) => true,
            Ok(Some(Ok(picture))) => {
                finished.push(ImportOutcome::Loaded {
                    name: import.name.clone(),
                    picture,
                });
                false
            }
            Ok(Some(Err(err))) => {
                log::error!("Failed to import {}: {}", import.name, err);
                finished.push(ImportOutcome::Failed {
                    name: import.name.clone(),
                    error: err.to_string(),
                });
                false
            }
            Err(oneshot::Canceled) => {
                log::error!("Import of {} was abandoned", import.name);
                finished.push(ImportOutcome::Failed {
                    name: import.name.clone(),
                    error: "decoder stopped".to_owned(),
                });
                false
            }
        });
        finished
    }

    fn spawn_decode(&mut self, name: String, source: ImageSource) {
        let (sender, receiver) = oneshot::channel();
        let max_size = self.max_size;
        let decode = move || {
            // The receiver is gone only if the handler was dropped.
            let _ = sender.send(source.decode(max_size));
        };

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(decode);

        // No threads on the web: decode inline, still delivered through poll().
        #[cfg(target_arch = "wasm32")]
        decode();

        self.pending.push(PendingImport { name, receiver });
    }
}

enum ImageSource {
    Bytes(Arc<[u8]>),
    Path(PathBuf),
}

impl ImageSource {
    fn decode(&self, max_size: u32) -> DecodeResult {
        match self {
            ImageSource::Bytes(bytes) => image_io::import_image(bytes, max_size),
            ImageSource::Path(path) => image_io::load_picture(path, max_size),
        }
    }
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = file
        .path
        .as_deref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| {
            Path::new(&file.name)
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
        });
    matches!(
        name.as_deref(),
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::time::{Duration, Instant};

    fn wait_for(handler: &mut FileHandler) -> Vec<ImportOutcome> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let finished = handler.poll();
            if !finished.is_empty() || Instant::now() > deadline {
                return finished;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_background_decode_delivers_picture() {
        let picture = Picture::empty(2, 3, Color::rgb(9, 8, 7)).unwrap();
        let bytes = image_io::export_png(&picture).unwrap();

        let mut handler = FileHandler::new(100);
        handler.spawn_decode("test.png".to_owned(), ImageSource::Bytes(bytes.into()));
        assert!(handler.is_busy());

        match wait_for(&mut handler).pop() {
            Some(ImportOutcome::Loaded { name, picture: loaded }) => {
                assert_eq!(name, "test.png");
                assert_eq!(loaded, picture);
            }
            _ => panic!("expected a decoded picture"),
        }
        assert!(!handler.is_busy());
    }

    #[test]
    fn test_background_decode_reports_failure() {
        let mut handler = FileHandler::new(100);
        handler.spawn_decode("junk.png".to_owned(), ImageSource::Bytes(Arc::from(&b"not an image"[..])));

        assert!(matches!(
            wait_for(&mut handler).pop(),
            Some(ImportOutcome::Failed { .. })
        ));
    }

    #[test]
    fn test_image_file_detection() {
        let by_mime = egui::DroppedFile {
            mime: "image/png".to_owned(),
            ..Default::default()
        };
        let by_name = egui::DroppedFile {
            name: "sprite.PNG".to_owned(),
            ..Default::default()
        };
        let text = egui::DroppedFile {
            name: "notes.txt".to_owned(),
            ..Default::default()
        };
        assert!(is_image_file(&by_mime));
        assert!(is_image_file(&by_name));
        assert!(!is_image_file(&text));
    }
}
