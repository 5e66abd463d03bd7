use crate::command::{Command, CommandOutcome};
use crate::document::Document;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, dialogs, tools_panel};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::state::{ColorTarget, EditorState};

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DrawingApp {
    settings: Settings,
    // The drawing itself is not persisted, only the settings it was made with
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    state: EditorState,
}

impl DrawingApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        let restored: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(restored.settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let settings = settings.sanitized();
        log::info!(
            "Starting with a {}x{} canvas",
            settings.canvas_width,
            settings.canvas_height
        );
        Self {
            document: Document::from_settings(&settings),
            settings,
            renderer: Renderer::new(),
            input: InputHandler::default(),
            state: EditorState::Idle,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    /// Run a command against the document and surface its result
    pub fn execute_command(&mut self, command: Command) {
        match command.execute(&mut self.document) {
            Ok(CommandOutcome::Saved(path)) => {
                self.state = EditorState::notice(
                    "Information",
                    format!("Image saved to {}", path.display()),
                );
            }
            Ok(_) => {}
            Err(err) => {
                self.state = EditorState::notice("Error", err.to_string());
            }
        }
    }

    /// Open a modal prompt, ending any stroke in progress
    pub fn open_dialog(&mut self, state: EditorState) {
        self.document.reset_stroke();
        self.state = state;
    }

    pub fn open_color_dialog(&mut self, target: ColorTarget) {
        let state = EditorState::choose_color(target, &self.document);
        self.open_dialog(state);
    }

    /// Ask for a destination with the native save dialog and export there.
    ///
    /// Cancelling the dialog leaves everything as it was.
    pub fn request_save(&mut self) {
        self.document.reset_stroke();
        let path = rfd::FileDialog::new()
            .add_filter("PNG files", &["png"])
            .set_file_name("drawing.png")
            .save_file();
        match path {
            Some(path) => self.execute_command(Command::SaveImage(path)),
            None => log::debug!("Save cancelled"),
        }
    }

    /// Route one input event to its command or dialog
    pub fn handle_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::SaveShortcut => self.request_save(),
            InputEvent::ChooseColorShortcut => self.open_color_dialog(ColorTarget::Pen),
            other => {
                if let Some(command) = other.to_command() {
                    self.execute_command(command);
                }
            }
        }
    }

    pub(crate) fn renderer_and_document(&mut self) -> (&mut Renderer, &Document) {
        (&mut self.renderer, &self.document)
    }

    pub(crate) fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }
}

impl eframe::App for DrawingApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings = self.document.settings();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.state.is_modal() {
            for event in self.input.process_shortcuts(ctx) {
                self.handle_input_event(event);
            }
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(command) = dialogs::show(ctx, &mut self.state, &self.document) {
            self.execute_command(command);
        }
    }
}
