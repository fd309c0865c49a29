use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use echoscribe_core::pipeline::job::JobStatus;
use echoscribe_core::shared::constants::{AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
use echoscribe_core::shared::media_paths;
use echoscribe_core::transcription::domain::model_size::ModelSize as CoreModelSize;

use crate::settings::{Appearance, Language, ModelSize, Settings};
use crate::tabs;
use crate::theme;
use crate::workers::model_cache::ModelCache;
use crate::workers::transcribe_worker::{self, TranscribeParams, WorkerMessage};

const WEBSITE_URL: &str = "https://github.com/echoscribe/echoscribe";

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    Transcription,
    Appearance,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Main, Tab::Transcription, Tab::Appearance, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Main => "Main",
            Tab::Transcription => "Transcription",
            Tab::Appearance => "Appearance",
            Tab::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Processing state
// ---------------------------------------------------------------------------

/// One file in the queue, mirrored into the list view.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub status: JobStatus,
}

#[derive(Debug, Clone)]
pub enum ProcessingState {
    Idle,
    Downloading(u64, u64),
    LoadingModel,
    Running { completed: usize, total: usize },
    Complete { done: usize, failed: usize },
    Error(String),
}

impl ProcessingState {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            ProcessingState::Downloading(..)
                | ProcessingState::LoadingModel
                | ProcessingState::Running { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    OpenWebsite,
    AddFiles,
    FilesSelected(Option<Vec<PathBuf>>),
    AddFolder,
    FolderSelected(Option<PathBuf>),
    ClearList,
    StartTranscription,
    CancelWork,
    PollWorker,
    StartOver,
    ShowInFolder,
    ModelChanged(ModelSize),
    LanguageChanged(Language),
    TranslateChanged(bool),
    RecursiveChanged(bool),
    WorkersChanged(u32),
    RestoreDefaults,
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub files: Vec<FileEntry>,
    pub processing: ProcessingState,
    worker_rx: Option<Receiver<WorkerMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
    model_cache: Arc<ModelCache>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let model_cache = ModelCache::new();
        // Start fetching the selected model right away so it is usually
        // ready before the first batch starts.
        model_cache.prefetch(core_model(settings.model));

        (
            Self {
                active_tab: Tab::Main,
                settings,
                files: Vec::new(),
                processing: ProcessingState::Idle,
                worker_rx: None,
                cancel_flag: None,
                model_cache,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::OpenWebsite => {
                let _ = open::that(WEBSITE_URL);
            }
            Message::AddFiles => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select audio or video files")
                            .add_filter("Media Files", &media_extensions())
                            .pick_files()
                            .await
                            .map(|handles| {
                                handles
                                    .iter()
                                    .map(|h| h.path().to_path_buf())
                                    .collect::<Vec<PathBuf>>()
                            })
                    },
                    Message::FilesSelected,
                );
            }
            Message::FilesSelected(Some(paths)) => {
                self.add_files(paths);
            }
            Message::FilesSelected(None) => {}
            Message::AddFolder => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select a folder")
                            .pick_folder()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::FolderSelected,
                );
            }
            Message::FolderSelected(Some(folder)) => {
                match media_paths::scan_folder(&folder, self.settings.recursive_scan) {
                    Ok(found) => self.add_files(found),
                    Err(e) => log::warn!("Failed to scan {}: {e}", folder.display()),
                }
            }
            Message::FolderSelected(None) => {}
            Message::ClearList => {
                if !self.processing.is_busy() {
                    self.files.clear();
                    self.processing = ProcessingState::Idle;
                }
            }
            Message::StartTranscription => {
                self.start_transcription();
            }
            Message::CancelWork => {
                if let Some(ref flag) = self.cancel_flag {
                    flag.store(true, Ordering::Relaxed);
                }
            }
            Message::PollWorker => {
                self.drain_worker_messages();
            }
            Message::StartOver => {
                self.processing = ProcessingState::Idle;
                for entry in &mut self.files {
                    entry.status = JobStatus::Pending;
                }
            }
            Message::ShowInFolder => {
                if let Some(dir) = self.files.first().and_then(|f| f.path.parent()) {
                    let _ = open::that(dir);
                }
            }
            Message::ModelChanged(model) => {
                self.settings.model = model;
                self.settings.save();
                self.model_cache.prefetch(core_model(model));
            }
            Message::LanguageChanged(language) => {
                self.settings.language = language;
                self.settings.save();
            }
            Message::TranslateChanged(enabled) => {
                self.settings.translate = enabled;
                self.settings.save();
            }
            Message::RecursiveChanged(enabled) => {
                self.settings.recursive_scan = enabled;
                self.settings.save();
            }
            Message::WorkersChanged(workers) => {
                self.settings.workers = workers.clamp(1, 8);
                self.settings.save();
            }
            Message::RestoreDefaults => {
                let defaults = Settings::default();
                self.settings.model = defaults.model;
                self.settings.language = defaults.language;
                self.settings.translate = defaults.translate;
                self.settings.recursive_scan = defaults.recursive_scan;
                self.settings.workers = defaults.workers;
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        // Tab content
        let content: Element<'_, Message> = match self.active_tab {
            Tab::Main => tabs::main_tab::view(fs, &self.files, &self.processing, &self.theme()),
            Tab::Transcription => tabs::transcription_tab::view(&self.settings),
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
            Tab::About => tabs::about_tab::view(fs),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        // Footer
        let footer = container(
            button(text("echoscribe on GitHub").size(scaled(11.0, fs)))
                .on_press(Message::OpenWebsite)
                .style(button::text),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0]);

        column![tab_bar, tab_content, footer]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();
        if self.worker_rx.is_some() {
            subs.push(iced::time::every(Duration::from_millis(100)).map(|_| Message::PollWorker));
        }
        if self.settings.appearance == Appearance::System {
            subs.push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subs)
    }

    /// Append paths that aren't queued yet (re-adding a file is a no-op).
    fn add_files(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            if self.files.iter().any(|f| f.path == path) {
                continue;
            }
            self.files.push(FileEntry {
                path,
                status: JobStatus::Pending,
            });
        }
    }

    fn start_transcription(&mut self) {
        if self.files.is_empty() || self.processing.is_busy() {
            return;
        }

        for entry in &mut self.files {
            entry.status = JobStatus::Pending;
        }

        let params = TranscribeParams {
            files: self.files.iter().map(|f| f.path.clone()).collect(),
            model: core_model(self.settings.model),
            language: self.settings.language.code().map(str::to_string),
            translate: self.settings.translate,
            workers: self.settings.workers as usize,
            model_cache: self.model_cache.clone(),
        };

        let (rx, cancel_flag) = transcribe_worker::spawn(params);
        self.worker_rx = Some(rx);
        self.cancel_flag = Some(cancel_flag);
        self.processing = ProcessingState::LoadingModel;
    }

    fn drain_worker_messages(&mut self) {
        // Clone the handle so the borrow doesn't block status updates below.
        let Some(rx) = self.worker_rx.clone() else {
            return;
        };

        let mut finished = false;
        while let Ok(message) = rx.try_recv() {
            match message {
                WorkerMessage::DownloadProgress(downloaded, total) => {
                    self.processing = ProcessingState::Downloading(downloaded, total);
                }
                WorkerMessage::LoadingModel => {
                    self.processing = ProcessingState::LoadingModel;
                }
                WorkerMessage::FileStatus(index, status) => {
                    if let Some(entry) = self.files.get_mut(index) {
                        entry.status = status;
                    }
                }
                WorkerMessage::BatchProgress(completed, total) => {
                    self.processing = ProcessingState::Running { completed, total };
                }
                WorkerMessage::Complete { done, failed } => {
                    self.processing = ProcessingState::Complete { done, failed };
                    finished = true;
                }
                WorkerMessage::Error(message) => {
                    self.processing = ProcessingState::Error(message);
                    finished = true;
                }
                WorkerMessage::Cancelled => {
                    self.processing = ProcessingState::Idle;
                    finished = true;
                }
            }
        }

        if finished {
            self.worker_rx = None;
            self.cancel_flag = None;
        }
    }
}

fn core_model(model: ModelSize) -> CoreModelSize {
    match model {
        ModelSize::Tiny => CoreModelSize::Tiny,
        ModelSize::Base => CoreModelSize::Base,
        ModelSize::Small => CoreModelSize::Small,
        ModelSize::Medium => CoreModelSize::Medium,
        ModelSize::Large => CoreModelSize::Large,
    }
}

fn media_extensions() -> Vec<&'static str> {
    AUDIO_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .copied()
        .collect()
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
