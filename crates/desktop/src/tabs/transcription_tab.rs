use iced::widget::{button, checkbox, column, pick_list, row, slider, text, Space};
use iced::Element;

use crate::app::{scaled, Message};
use crate::settings::{Language, ModelSize, Settings};

pub fn view<'a>(settings: &Settings) -> Element<'a, Message> {
    let fs = settings.font_scale;

    column![
        text("Model").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            text("Whisper model").size(scaled(13.0, fs)),
            pick_list(ModelSize::ALL, Some(settings.model), Message::ModelChanged)
                .text_size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(4),
        text("Larger models are more accurate but slower and use more memory")
            .size(scaled(11.0, fs)),
        Space::new().height(20),
        text("Speech").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            text("Language").size(scaled(13.0, fs)),
            pick_list(
                Language::ALL,
                Some(settings.language),
                Message::LanguageChanged
            )
            .text_size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(12),
        checkbox(settings.translate)
            .label("Translate to English")
            .on_toggle(Message::TranslateChanged)
            .text_size(scaled(13.0, fs)),
        Space::new().height(20),
        text("Batch").size(scaled(16.0, fs)),
        Space::new().height(8),
        checkbox(settings.recursive_scan)
            .label("Search folders recursively")
            .on_toggle(Message::RecursiveChanged)
            .text_size(scaled(13.0, fs)),
        Space::new().height(12),
        row![
            text("Parallel files").size(scaled(13.0, fs)),
            slider(1..=8u32, settings.workers, Message::WorkersChanged),
            text(format!("{}", settings.workers)).size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(24),
        button(text("Restore Defaults").size(scaled(13.0, fs)))
            .on_press(Message::RestoreDefaults)
            .padding([8, 16])
            .style(button::secondary),
    ]
    .spacing(0)
    .into()
}
