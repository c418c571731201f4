//! Carousel index state and the timer that advances it.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(5000);

/// Index of the image currently on display.
///
/// `generation` changes whenever the running timer is retired, so a tick
/// from an older timer can tell it lost the race and must not advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    generation: u64,
}

impl CarouselState {
    pub fn initialize(&mut self) {
        self.current_index = 0;
    }

    /// Moves to the next image, wrapping to the first. No-op without images.
    pub fn advance(&mut self, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % image_count;
    }

    /// Jumps to `index`. Returns `false` and leaves the state untouched when
    /// `index` is not below `image_count`.
    pub fn select(&mut self, index: usize, image_count: usize) -> bool {
        if index >= image_count {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Resets to the first image when the index no longer fits `image_count`.
    /// Returns whether the index changed.
    pub fn fit_to(&mut self, image_count: usize) -> bool {
        if self.current_index < image_count.max(1) {
            return false;
        }
        self.current_index = 0;
        true
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Advances only when `generation` is still the live one.
    pub(crate) fn advance_for(&mut self, generation: u64, image_count: usize) -> bool {
        if generation != self.generation {
            return false;
        }
        self.advance(image_count);
        true
    }

    /// Invalidates every timer started before this call.
    pub(crate) fn retire_timer(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    Idle,
    Cycling,
}

impl CarouselMode {
    pub fn for_image_count(image_count: usize) -> Self {
        if image_count >= 2 {
            CarouselMode::Cycling
        } else {
            CarouselMode::Idle
        }
    }
}

/// Aborts the advance task when dropped. Abort alone does not stop a tick
/// already running on another worker; see [`CarouselState::retire_timer`].
struct AdvanceTimer {
    task: JoinHandle<()>,
}

impl AdvanceTimer {
    fn start(
        state: Arc<watch::Sender<CarouselState>>,
        generation: u64,
        image_count: usize,
        period: Duration,
    ) -> Self {
        let first_tick = Instant::now() + period;
        let task = tokio::spawn(async move {
            let mut ticks = time::interval_at(first_tick, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                // checked under the channel lock: a retired timer whose tick
                // is already running elsewhere must not touch the index
                if !state.send_if_modified(|s| s.advance_for(generation, image_count)) {
                    debug!(generation, "carousel: stale tick dropped");
                    return;
                }
                debug!(
                    index = state.borrow().current_index(),
                    image_count, "carousel: advanced"
                );
            }
        });
        Self { task }
    }
}

impl Drop for AdvanceTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owns the displayed index and the repeating advance timer.
///
/// With two or more images a single timer advances the index every
/// `period`; with fewer no timer exists. Changing the image count always
/// cancels the running timer before another is started, and dropping the
/// controller cancels it for good. Must be created and reconfigured from
/// within a tokio runtime.
pub struct CarouselController {
    state: Arc<watch::Sender<CarouselState>>,
    image_count: usize,
    period: Duration,
    timer: Option<AdvanceTimer>,
}

impl CarouselController {
    /// Starts at the first image, cycling right away if `image_count >= 2`.
    /// A zero `period` falls back to [`DEFAULT_ROTATION_INTERVAL`].
    pub fn mount(image_count: usize, period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_ROTATION_INTERVAL
        } else {
            period
        };
        let mut state = CarouselState::default();
        state.initialize();
        let (tx, _rx) = watch::channel(state);

        let mut controller = Self {
            state: Arc::new(tx),
            image_count,
            period,
            timer: None,
        };
        controller.restart_timer();
        controller
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn mode(&self) -> CarouselMode {
        if self.timer.is_some() {
            CarouselMode::Cycling
        } else {
            CarouselMode::Idle
        }
    }

    /// Receiver that observes every index change, from ticks and selections.
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state.subscribe()
    }

    /// Shows image `index` immediately. The advance cadence is unaffected.
    ///
    /// An index outside the current images is ignored and `false` returned.
    pub fn select(&self, index: usize) -> bool {
        let image_count = self.image_count;
        let accepted = self
            .state
            .send_if_modified(|state| state.select(index, image_count));
        if accepted {
            debug!(index, image_count, "carousel: selected");
        } else {
            warn!(index, image_count, "carousel: ignoring out-of-range selection");
        }
        accepted
    }

    /// Applies a new image count after the content was re-derived.
    ///
    /// An unchanged count keeps the running timer. Otherwise the old timer
    /// is cancelled, an index that no longer fits resets to the first image,
    /// and cycling restarts when at least two images remain.
    pub fn set_image_count(&mut self, image_count: usize) {
        if image_count == self.image_count {
            return;
        }

        self.stop_timer();
        self.image_count = image_count;
        if self.state.send_if_modified(|state| state.fit_to(image_count)) {
            debug!(image_count, "carousel: index reset after image count change");
        }
        self.restart_timer();
    }

    /// Stops cycling. Equivalent to dropping the controller.
    pub fn teardown(self) {
        drop(self);
    }

    /// Retires the running timer under the channel lock, then aborts its task.
    /// Returns whether a timer was running.
    fn stop_timer(&mut self) -> bool {
        let Some(timer) = self.timer.take() else {
            return false;
        };
        self.state.send_if_modified(|state| {
            state.retire_timer();
            false
        });
        drop(timer);
        true
    }

    fn restart_timer(&mut self) {
        self.stop_timer();
        if CarouselMode::for_image_count(self.image_count) == CarouselMode::Idle {
            debug!(image_count = self.image_count, "carousel: idle");
            return;
        }

        info!(
            image_count = self.image_count,
            period_ms = self.period.as_millis() as u64,
            "carousel: cycling"
        );
        let generation = self.state.borrow().generation;
        self.timer = Some(AdvanceTimer::start(
            Arc::clone(&self.state),
            generation,
            self.image_count,
            self.period,
        ));
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        if self.stop_timer() {
            info!(image_count = self.image_count, "carousel: stopped");
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
