use gloo::timers::callback::Interval;
use yew::prelude::*;

const TARGET: &str = "periodic-refresh-hook";

/// Configuration for periodic refresh behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshConfig {
    pub interval_ms: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 30_000, // 30 seconds
        }
    }
}

/// Call `refresh_fn` every `config.interval_ms` for as long as the component
/// is mounted.
///
/// Ticks fire on schedule whether or not the previous refresh has finished;
/// there is no pausing, retrying or coalescing.
#[hook]
pub fn use_periodic_refresh(config: RefreshConfig, refresh_fn: Callback<()>) {
    use_effect_with(config, move |config| {
        log::info!(target: TARGET, "Periodic refresh every {}ms", config.interval_ms);
        let interval = Interval::new(config.interval_ms, move || {
            log::debug!(target: TARGET, "Periodic refresh tick");
            refresh_fn.emit(());
        });

        move || {
            drop(interval);
            log::debug!(target: TARGET, "Periodic refresh stopped");
        }
    });
}
