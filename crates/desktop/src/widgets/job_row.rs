use std::path::Path;

use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use echoscribe_core::pipeline::job::JobStatus;

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

/// One row in the file queue: file name plus a colored status label.
pub fn job_row<'a>(
    fs: f32,
    path: &Path,
    status: &JobStatus,
    theme: &Theme,
) -> Element<'a, Message> {
    let palette = theme.palette();
    let tertiary = tertiary_color(theme);

    let (label, color) = status_display(status, theme);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let name_text = text(name).size(scaled(14.0, fs));
    let status_text = text(label).size(scaled(12.0, fs)).color(color);

    let detail: Element<'a, Message> = match status {
        JobStatus::Failed(message) => text(truncate(message, 90))
            .size(scaled(11.0, fs))
            .color(tertiary)
            .into(),
        _ => Space::new().height(0).into(),
    };

    let content = row![
        column![name_text, detail].width(Length::Fill),
        status_text,
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(content)
        .padding([8, 12])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.04,
                ..palette.text
            })),
            border: iced::border::Border {
                radius: 8.0.into(),
                ..iced::border::Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn status_display(status: &JobStatus, theme: &Theme) -> (&'static str, Color) {
    let palette = theme.palette();
    match status {
        JobStatus::Pending => ("Waiting", tertiary_color(theme)),
        JobStatus::Running => ("Transcribing\u{2026}", palette.primary),
        JobStatus::Done => ("Done", palette.success),
        JobStatus::Failed(_) => ("Failed", palette.danger),
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }
    let short: String = message.chars().take(max_chars).collect();
    format!("{short}\u{2026}")
}
