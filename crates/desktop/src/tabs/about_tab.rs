use iced::widget::{button, column, text, Space};
use iced::Element;

use crate::app::{scaled, Message};

pub fn view(fs: f32) -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION");

    column![
        text("EchoScribe").size(scaled(22.0, fs)),
        Space::new().height(4),
        text(format!("Version {version}")).size(scaled(13.0, fs)),
        Space::new().height(12),
        text(
            "Batch transcription for audio and video files. Everything runs \
             locally: your recordings never leave this computer."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(8),
        text(
            "Speech recognition by whisper.cpp; media decoding by FFmpeg. \
             Transcriptions are saved as text files next to your media."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(16),
        button(text("Project page").size(scaled(13.0, fs)))
            .on_press(Message::OpenWebsite)
            .padding([8, 16]),
    ]
    .spacing(0)
    .into()
}
