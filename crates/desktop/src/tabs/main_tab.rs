use iced::widget::{button, column, container, progress_bar, row, text, Space};
use iced::{Color, Element, Length, Theme};

use crate::app::{scaled, FileEntry, Message, ProcessingState};
use crate::theme::tertiary_color;
use crate::widgets::job_row::job_row;

pub fn view<'a>(
    fs: f32,
    files: &[FileEntry],
    processing: &ProcessingState,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    if files.is_empty() {
        return empty_state(fs, tertiary, theme);
    }

    if let ProcessingState::Complete { done, failed } = processing {
        return complete_state(fs, tertiary, *done, *failed);
    }

    if let ProcessingState::Error(ref e) = processing {
        return error_state(fs, tertiary, e);
    }

    workflow_view(fs, files, processing, theme)
}

fn empty_state(fs: f32, tertiary: Color, _theme: &Theme) -> Element<'static, Message> {
    let icon_circle = container(
        text("\u{1F399}")
            .size(scaled(22.0, fs))
            .align_x(iced::Alignment::Center)
            .align_y(iced::Alignment::Center),
    )
    .width(scaled(56.0, fs))
    .height(scaled(56.0, fs))
    .center_x(Length::Shrink)
    .center_y(Length::Shrink)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.12,
                ..palette.primary.base.color
            })),
            border: iced::border::Border {
                radius: 100.0.into(),
                ..iced::border::Border::default()
            },
            text_color: Some(palette.primary.base.color),
            ..container::Style::default()
        }
    });

    let content = column![
        icon_circle,
        Space::new().height(16),
        text("Add audio or video files to transcribe")
            .size(scaled(17.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(6),
        text("Transcriptions are saved next to each file")
            .size(scaled(14.0, fs))
            .color(tertiary),
        Space::new().height(20),
        row![
            button(text("Add Files").size(scaled(14.0, fs)))
                .on_press(Message::AddFiles)
                .padding([10, 24]),
            button(text("Add Folder").size(scaled(14.0, fs)))
                .on_press(Message::AddFolder)
                .padding([10, 24])
                .style(button::secondary),
        ]
        .spacing(10),
        Space::new().height(16),
        text("MP3, WAV, M4A, FLAC, OGG, MP4, MOV, MKV, WEBM")
            .size(scaled(12.0, fs))
            .color(tertiary),
    ]
    .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn complete_state<'a>(fs: f32, tertiary: Color, done: usize, failed: usize) -> Element<'a, Message> {
    let detail = if failed == 0 {
        format!("{done} file(s) transcribed")
    } else {
        format!("{done} transcribed, {failed} failed")
    };

    centered(
        column![
            text("All done!").size(scaled(20.0, fs)),
            Space::new().height(6),
            text(detail).size(scaled(14.0, fs)).color(tertiary),
            Space::new().height(28),
            button(text("Show in Folder").size(scaled(15.0, fs)))
                .on_press(Message::ShowInFolder)
                .padding([14, 24])
                .width(Length::Fill),
            Space::new().height(10),
            button(text("Transcribe More Files").size(scaled(14.0, fs)))
                .on_press(Message::StartOver)
                .padding([14, 20])
                .width(Length::Fill)
                .style(button::secondary),
        ]
        .align_x(iced::Alignment::Center)
        .width(280)
        .into(),
    )
}

fn error_state<'a>(fs: f32, tertiary: Color, error: &str) -> Element<'a, Message> {
    centered(
        column![
            text("Something went wrong").size(scaled(18.0, fs)),
            Space::new().height(8),
            text(error.to_owned()).size(scaled(14.0, fs)).color(tertiary),
            Space::new().height(20),
            button(text("Try Again").size(scaled(14.0, fs)))
                .on_press(Message::StartTranscription)
                .padding([14, 24])
                .width(Length::Fill),
            Space::new().height(10),
            button(text("Start Over").size(scaled(14.0, fs)))
                .on_press(Message::StartOver)
                .padding([14, 20])
                .width(Length::Fill)
                .style(button::secondary),
        ]
        .align_x(iced::Alignment::Center)
        .width(280)
        .into(),
    )
}

fn workflow_view<'a>(
    fs: f32,
    files: &[FileEntry],
    processing: &ProcessingState,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let header = row![
        text(format!("{} file(s) queued", files.len()))
            .size(scaled(13.0, fs))
            .color(tertiary)
            .width(Length::Fill),
    ];

    let mut list = column![].spacing(6);
    for entry in files {
        list = list.push(job_row(fs, &entry.path, &entry.status, theme));
    }

    let mut col = column![header, Space::new().height(8), list, Space::new().height(16)].spacing(0);

    match processing {
        ProcessingState::Idle => {
            col = col
                .push(
                    row![
                        button(text("Add Files").size(scaled(13.0, fs)))
                            .on_press(Message::AddFiles)
                            .padding([8, 16])
                            .style(button::secondary),
                        button(text("Add Folder").size(scaled(13.0, fs)))
                            .on_press(Message::AddFolder)
                            .padding([8, 16])
                            .style(button::secondary),
                        button(text("Clear List").size(scaled(13.0, fs)))
                            .on_press(Message::ClearList)
                            .padding([8, 16])
                            .style(button::secondary),
                    ]
                    .spacing(10),
                )
                .push(Space::new().height(12))
                .push(
                    button(text("Start Transcription").size(scaled(15.0, fs)))
                        .on_press(Message::StartTranscription)
                        .padding([14, 24])
                        .width(Length::Fill),
                );
        }
        ProcessingState::Downloading(downloaded, total) => {
            let status = if *total > 0 {
                let pct = (*downloaded as f64 / *total as f64 * 100.0) as u32;
                format!("Downloading model \u{2014} {pct}%")
            } else {
                format!("Downloading model\u{2026} {downloaded} bytes")
            };
            let pct = if *total > 0 {
                (*downloaded as f64 / *total as f64 * 100.0) as f32
            } else {
                0.0
            };
            col = col.push(progress_panel(fs, tertiary, &status, Some(pct)));
        }
        ProcessingState::LoadingModel => {
            col = col.push(progress_panel(fs, tertiary, "Loading Whisper model\u{2026}", None));
        }
        ProcessingState::Running { completed, total } => {
            let pct = if *total > 0 {
                *completed as f32 / *total as f32 * 100.0
            } else {
                0.0
            };
            let status = format!("Transcribing \u{2014} {completed} of {total} done");
            col = col.push(progress_panel(fs, tertiary, &status, Some(pct)));
        }
        _ => {}
    }

    col.into()
}

fn progress_panel<'a>(
    fs: f32,
    tertiary: Color,
    status: &str,
    progress: Option<f32>,
) -> Element<'a, Message> {
    let mut col = column![text(status.to_owned()).size(scaled(15.0, fs))]
        .spacing(8)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill);

    if let Some(pct) = progress {
        col = col.push(progress_bar(0.0..=100.0, pct));
    }

    col = col.push(
        text("Finished transcripts are already saved next to their files")
            .size(scaled(12.0, fs))
            .color(tertiary),
    );
    col = col.push(Space::new().height(12));
    col = col.push(
        button(text("Cancel").size(scaled(13.0, fs)))
            .on_press(Message::CancelWork)
            .padding([8, 20])
            .style(button::secondary),
    );

    container(col)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([24, 40])
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
