use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use echoscribe_core::shared::model_resolver;
use echoscribe_core::transcription::domain::model_size::ModelSize;

/// Shared model cache that resolves Whisper models in the background.
/// The worker can grab a pre-resolved path or wait for an in-progress
/// download, forwarding its progress to the UI.
pub struct ModelCache {
    slots: Mutex<HashMap<ModelSize, Arc<ModelSlot>>>,
}

struct ModelSlot {
    result: Mutex<Option<Result<PathBuf, String>>>,
    ready: Condvar,
    progress: Arc<Mutex<(u64, u64)>>,
}

impl ModelCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            slots: Mutex::new(HashMap::new()),
        })
    }

    /// Begin resolving a model in the background if it isn't already.
    /// Called at startup and whenever the user switches sizes, so the
    /// download usually finishes before Start is pressed.
    pub fn prefetch(&self, model: ModelSize) {
        self.slot(model);
    }

    /// Wait for the model path. Calls `on_progress(downloaded, total)`
    /// while a download is in progress. Returns early if `cancelled` is set.
    pub fn wait_for(
        &self,
        model: ModelSize,
        on_progress: &dyn Fn(u64, u64),
        cancelled: &AtomicBool,
    ) -> Result<PathBuf, String> {
        self.slot(model).wait(on_progress, cancelled)
    }

    fn slot(&self, model: ModelSize) -> Arc<ModelSlot> {
        let mut slots = self.slots.lock().unwrap();
        if let Some(slot) = slots.get(&model) {
            return slot.clone();
        }

        let slot = Arc::new(ModelSlot::new());
        slots.insert(model, slot.clone());

        let resolving = slot.clone();
        thread::spawn(move || resolving.resolve(model));
        slot
    }
}

impl ModelSlot {
    fn new() -> Self {
        Self {
            result: Mutex::new(None),
            ready: Condvar::new(),
            progress: Arc::new(Mutex::new((0, 0))),
        }
    }

    fn resolve(&self, model: ModelSize) {
        let progress_mutex = self.progress.clone();
        let result = model_resolver::resolve(
            model,
            Some(Box::new(move |downloaded, total| {
                *progress_mutex.lock().unwrap() = (downloaded, total);
            })),
        );
        *self.result.lock().unwrap() = Some(result.map_err(|e| e.to_string()));
        self.ready.notify_all();
    }

    fn wait(
        &self,
        on_progress: &dyn Fn(u64, u64),
        cancelled: &AtomicBool,
    ) -> Result<PathBuf, String> {
        let mut guard = self.result.lock().unwrap();
        loop {
            if cancelled.load(Ordering::Relaxed) {
                return Err("Cancelled".into());
            }
            if let Some(ref result) = *guard {
                return result.clone();
            }
            // Forward download progress while waiting
            if let Ok(progress) = self.progress.try_lock() {
                let (downloaded, total) = *progress;
                if total > 0 {
                    on_progress(downloaded, total);
                }
            }
            let (new_guard, _) = self
                .ready
                .wait_timeout(guard, Duration::from_millis(100))
                .unwrap();
            guard = new_guard;
        }
    }
}
