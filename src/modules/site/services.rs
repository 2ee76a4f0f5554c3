use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{interval_at, Instant};
use tracing::debug;

use crate::client::{
    api::ContentApi, notice::Notice, scope::ScreenScope, screen_state::ScreenState,
};
use crate::content::application::domain::{Record, ServiceEntry};

/// Position within a fixed number of slides, wrapping both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Returns `false` and stays put for an index past the end.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Public services page. While mounted, the carousel advances on its own.
pub struct ServicesPage<A: ContentApi> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<Vec<Record<ServiceEntry>>>,
    carousel: Arc<Mutex<Carousel>>,
    period: Duration,
    timer_running: bool,
}

impl<A: ContentApi> ServicesPage<A> {
    pub const AUTO_ADVANCE: Duration = Duration::from_secs(8);

    pub fn new(api: Arc<A>) -> Self {
        Self::with_period(api, Self::AUTO_ADVANCE)
    }

    pub fn with_period(api: Arc<A>, period: Duration) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
            carousel: Arc::new(Mutex::new(Carousel::default())),
            period,
            timer_running: false,
        }
    }

    pub async fn mount(api: Arc<A>) -> Self {
        let mut page = Self::new(api);
        page.load().await;
        page
    }

    /// Loads the services and starts the timer once there is something to rotate.
    pub async fn load(&mut self) {
        let Ok(result) = self.scope.run(self.api.list::<ServiceEntry>()).await else {
            return;
        };

        match result {
            Ok(services) => {
                *self.lock() = Carousel::new(services.len());
                let start_timer = !services.is_empty() && !self.timer_running;
                self.state = ScreenState::Ready(services);
                if start_timer {
                    self.start_timer();
                }
            }
            Err(e) => {
                self.state =
                    ScreenState::LoadError(Notice::from_error("Failed to load services data", &e))
            }
        }
    }

    fn start_timer(&mut self) {
        let carousel = Arc::clone(&self.carousel);
        let period = self.period;
        let first_tick = Instant::now() + period;
        self.timer_running = true;

        // Detached; the scope aborts it on unmount.
        drop(self.scope.spawn(async move {
            let mut ticks = interval_at(first_tick, period);
            loop {
                ticks.tick().await;
                carousel.lock().unwrap_or_else(PoisonError::into_inner).next();
            }
        }));
        debug!(period_ms = period.as_millis() as u64, "Carousel timer started");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Carousel> {
        self.carousel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> &ScreenState<Vec<Record<ServiceEntry>>> {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.lock().current()
    }

    pub fn current(&self) -> Option<&Record<ServiceEntry>> {
        let index = self.current_index();
        self.state.ready().and_then(|services| services.get(index))
    }

    // Manual moves leave the timer's schedule alone.
    pub fn next(&self) {
        self.lock().next();
    }

    pub fn prev(&self) {
        self.lock().prev();
    }

    pub fn jump(&self, index: usize) -> bool {
        self.lock().jump(index)
    }

    pub fn has_timer(&self) -> bool {
        self.timer_running && !self.scope.is_closed()
    }

    /// Stops the timer and any pending fetch.
    pub fn unmount(&mut self) {
        self.scope.close();
        self.timer_running = false;
    }
}
