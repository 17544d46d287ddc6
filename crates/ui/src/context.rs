use std::sync::{Arc, Mutex, MutexGuard};

use services::GameLoopService;

/// Surface the composition root (`crates/app`) implements for the UI.
pub trait UiApp: Send + Sync {
    fn game(&self) -> Arc<Mutex<GameLoopService>>;
}

#[derive(Clone)]
pub struct AppContext {
    game: Arc<Mutex<GameLoopService>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { game: app.game() }
    }

    /// Lock the game loop for a state transition.
    ///
    /// Every transition runs on the UI event loop, one gesture at a time,
    /// so the lock is uncontended. A poisoned lock yields the inner state
    /// instead of panicking the whole UI.
    #[must_use]
    pub fn game(&self) -> MutexGuard<'_, GameLoopService> {
        match self.game.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
