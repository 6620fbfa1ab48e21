use std::time::Duration;

use dioxus::prelude::*;

use akson_core::pacing::PacingSnapshot;
use services::PacingDriver;

use crate::views::ViewError;
use crate::vm::SpeedPreset;

/// Create the screen's driver once; later renders reuse it.
pub fn use_pacing_driver(
    items: Vec<String>,
    preset: SpeedPreset,
) -> Result<PacingDriver, ViewError> {
    use_hook(move || {
        PacingDriver::new(items, preset.default_interval()).map_err(|err| {
            tracing::error!(error = %err, "pacing driver rejected its settings");
            ViewError::Unknown
        })
    })
}

/// A driver bound to this component: snapshots mirrored into a signal, the
/// session stopped when the component unmounts.
#[derive(Clone)]
pub struct Pacing {
    driver: PacingDriver,
    snapshot: Signal<PacingSnapshot>,
    seconds: Signal<u64>,
    preset: SpeedPreset,
}

pub fn use_pacing(driver: &PacingDriver, preset: SpeedPreset) -> Pacing {
    let mut snapshot = use_signal(|| driver.snapshot());
    let seconds = use_signal(|| preset.clamp(driver.snapshot().interval.as_secs()));

    let listener = driver.clone();
    use_future(move || {
        let driver = listener.clone();
        async move {
            let mut updates = driver.subscribe();
            snapshot.set(updates.borrow_and_update().clone());
            while updates.changed().await.is_ok() {
                snapshot.set(updates.borrow_and_update().clone());
            }
        }
    });

    let stopper = driver.clone();
    use_drop(move || stopper.stop());

    Pacing {
        driver: driver.clone(),
        snapshot,
        seconds,
        preset,
    }
}

impl Pacing {
    #[must_use]
    pub fn snapshot(&self) -> PacingSnapshot {
        (self.snapshot)()
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        (self.seconds)()
    }

    #[must_use]
    pub fn preset(&self) -> SpeedPreset {
        self.preset
    }

    pub fn start(&self) {
        if let Err(err) = self.driver.start() {
            tracing::warn!(error = %err, "pacing could not start");
        }
    }

    pub fn advance(&self) {
        self.driver.advance();
    }

    pub fn replace_items(&self, items: Vec<String>) {
        self.driver.replace_items(items);
    }

    pub fn set_seconds(&mut self, secs: u64) {
        let secs = self.preset.clamp(secs);
        self.seconds.set(secs);
        if let Err(err) = self.driver.set_interval(Duration::from_secs(secs)) {
            tracing::warn!(error = %err, "pacing interval rejected");
        }
    }
}
