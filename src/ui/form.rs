/// The single form window: import button, scale field, quality slider,
/// defaults checkbox and the process button, plus a status line.
use iced::widget::{button, checkbox, column, row, slider, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::state::form::{FormState, QUALITY_MAX, QUALITY_MIN, SCALE_HINT_MAX, SCALE_HINT_MIN};
use crate::state::selection::SelectedFile;
use crate::Message;

/// Label text width so the inputs line up
const LABEL_WIDTH: f32 = 200.0;

pub fn view<'a>(
    form: &'a FormState,
    selected: &'a SelectedFile,
    status: &'a str,
    default_scale: f64,
) -> Element<'a, Message> {
    let selected_label = if selected.is_empty() {
        "No image selected".to_string()
    } else {
        selected.path().display().to_string()
    };

    let import_row = row![
        button("Import image")
            .on_press(Message::ImportImage)
            .padding(8),
        text(selected_label).size(14),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    // Plain multiplier despite the "%" wording: 0.63 means 63%
    let scale_row = row![
        text(format!(
            "Scale factor in % ({:.2} - {:.2})",
            SCALE_HINT_MIN, SCALE_HINT_MAX
        ))
        .width(Length::Fixed(LABEL_WIDTH)),
        text_input(&scale_placeholder(default_scale), &form.scale_input)
            .on_input(Message::ScaleChanged)
            .width(Length::Fixed(120.0)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let quality_row = row![
        text("Quality in %").width(Length::Fixed(LABEL_WIDTH)),
        slider(QUALITY_MIN..=QUALITY_MAX, form.quality, Message::QualityChanged)
            .width(Length::Fill),
        text(form.quality.to_string()).width(Length::Fixed(40.0)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let content: Column<Message> = column![
        text("Shrink an image into a small JPEG").size(24),
        import_row,
        scale_row,
        quality_row,
        checkbox("Use default values", form.use_defaults)
            .on_toggle(Message::UseDefaultsToggled),
        button("Process").on_press(Message::Process).padding(10),
        text(status).size(14),
    ]
    .spacing(16)
    .padding(24);

    content.into()
}

/// Hint shown in an empty scale field
fn scale_placeholder(default_scale: f64) -> String {
    default_scale.to_string()
}
