use iced::{Element, Size, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info, Level};

mod config;
mod state;
mod transform;
mod ui;

use config::Config;
use state::form::{FormError, FormState};
use state::selection::SelectedFile;
use transform::{TransformError, TransformReport};

/// Extensions offered by the file picker
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Anything that stops a "Process" click from producing a file
#[derive(Error, Debug)]
enum ShellError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Main application state
///
/// iced calls `update` for one message at a time on the UI thread, so the
/// picker and the process button never run concurrently and the selected
/// file needs no locking. The transform runs inline and blocks the window
/// until it returns.
struct ImageShrink {
    config: Config,
    /// Last file committed in the picker
    selected: SelectedFile,
    /// Current widget values
    form: FormState,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Import image"
    ImportImage,
    /// A file was chosen in the picker
    FileSelected(PathBuf),
    ScaleChanged(String),
    QualityChanged(u8),
    UseDefaultsToggled(bool),
    /// User clicked "Process"
    Process,
}

impl ImageShrink {
    fn new() -> (Self, Task<Message>) {
        (Self::with_config(Config::default()), Task::none())
    }

    fn with_config(config: Config) -> Self {
        debug!("Config: {:?}", config);

        let form = FormState::new(&config.default_bundle());
        ImageShrink {
            config,
            selected: SelectedFile::new(),
            form,
            status: "Ready. Import an image to begin.".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImportImage => {
                let picked = FileDialog::new()
                    .set_title("Select an image")
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file();

                // Cancelling keeps the previous selection
                if let Some(path) = picked {
                    return self.update(Message::FileSelected(path));
                }
                Task::none()
            }
            Message::FileSelected(path) => {
                info!("Selected {}", path.display());
                self.status = format!("Selected {}", path.display());
                self.selected.set(path);
                Task::none()
            }
            Message::ScaleChanged(value) => {
                self.form.scale_input = value;
                Task::none()
            }
            Message::QualityChanged(quality) => {
                self.form.set_quality(quality);
                Task::none()
            }
            Message::UseDefaultsToggled(checked) => {
                self.form.use_defaults = checked;
                Task::none()
            }
            Message::Process => {
                self.status = match self.process() {
                    Ok(report) => format!(
                        "✅ Saved {}x{} JPEG ({} KB) to {}",
                        report.width,
                        report.height,
                        report.bytes / 1024,
                        report.output_path.display()
                    ),
                    Err(e) => {
                        error!("Processing failed: {}", e);
                        format!("❌ {}", e)
                    }
                };
                Task::none()
            }
        }
    }

    /// Read the form and run the transform once.
    ///
    /// An empty selection is passed through as-is; the transform reports it
    /// as a decode error.
    fn process(&self) -> Result<TransformReport, ShellError> {
        let params = self
            .form
            .params(self.selected.path(), &self.config.default_bundle())?;

        info!(
            "Processing '{}' (scale {}, quality {}, optimize {})",
            params.source_path.display(),
            params.scale_factor,
            params.quality,
            params.optimize
        );

        Ok(transform::run(&params, &self.config.output_path)?)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::form::view(
            &self.form,
            &self.selected,
            &self.status,
            self.config.default_scale,
        )
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stdout)
        .compact()
        .init();

    info!("=== Image Shrink starting ===");

    iced::application("Low quality image", ImageShrink::update, ImageShrink::view)
        .theme(ImageShrink::theme)
        .window_size(Size::new(800.0, 360.0))
        .centered()
        .run_with(ImageShrink::new)
}
