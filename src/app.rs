use std::path::Path;

use eframe::egui;

use crate::config::EditorConfig;
use crate::error::PictureError;
use crate::file_handler::{FileHandler, ImportOutcome};
use crate::image_io;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The native shell: panels, canvas, shortcuts and file import/export
/// around an [`EditorContext`]
pub struct PixelPaintApp {
    editor: EditorContext,
    renderer: Renderer,
    file_handler: FileHandler,
    config: EditorConfig,
    import_path: String,
    status: Option<String>,
}

impl PixelPaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Result<Self, PictureError> {
        let editor = EditorContext::new(&config)?;
        Ok(Self {
            editor,
            renderer: Renderer::new(&cc.egui_ctx),
            file_handler: FileHandler::new(config.import_max_size),
            config,
            import_path: String::new(),
            status: None,
        })
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn cell_scale(&self) -> f32 {
        self.config.cell_scale
    }

    pub fn import_path_mut(&mut self) -> &mut String {
        &mut self.import_path
    }

    pub fn is_importing(&self) -> bool {
        self.file_handler.is_busy()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Write the current picture to the configured export path
    pub fn save(&mut self) {
        let path = &self.config.export_path;
        self.status = Some(match image_io::save_png(&self.editor.state().picture, path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Failed to save {}: {}", path.display(), err);
                format!("Save failed: {}", err)
            }
        });
    }

    /// Start importing the file named in the path box
    pub fn open_import_path(&mut self) {
        let path = self.import_path.trim();
        if path.is_empty() {
            self.status = Some("Enter an image path first".to_owned());
            return;
        }
        self.file_handler.open(Path::new(path));
        self.status = Some(format!("Loading {}…", path));
    }

    fn handle_imports(&mut self, ctx: &egui::Context) {
        self.file_handler.check_for_dropped_files(ctx);

        for outcome in self.file_handler.poll() {
            self.status = Some(match outcome {
                ImportOutcome::Loaded { name, picture } => {
                    self.editor.load_picture(picture);
                    format!("Loaded {}", name)
                }
                ImportOutcome::Failed { name, error } => format!("Could not load {}: {}", name, error),
            });
        }

        // Keep polling while a decode is running
        if self.file_handler.is_busy() {
            ctx.request_repaint();
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let keys: Vec<(char, bool, bool)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => {
                        let mut name = key.name().chars();
                        match (name.next(), name.next()) {
                            (Some(letter), None) => Some((letter, modifiers.command, modifiers.alt)),
                            _ => None,
                        }
                    }
                    _ => None,
                })
                .collect()
        });

        for (key, command, alt) in keys {
            if self.editor.handle_shortcut(key, command, alt) {
                log::debug!("Shortcut {:?} handled", key);
            }
        }
    }
}

impl eframe::App for PixelPaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_imports(ctx);
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
