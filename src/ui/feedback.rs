//! Single-shot timer for submit feedback
//!
//! Holds at most one pending browser timeout. Starting a new one drops (and
//! so cancels) the previous one, `cancel` drops it, and unmounting the owning
//! component drops it as well, so no callback outlives its view.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FeedbackTimer {
    #[cfg(not(feature = "ssr"))]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl FeedbackTimer {
    /// Create a timer owned by the current component
    pub fn new() -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
            on_cleanup(move || {
                pending.try_update_value(|timeout| timeout.take());
            });
            Self { pending }
        }
        #[cfg(feature = "ssr")]
        {
            Self {}
        }
    }

    /// Run `on_fire` after `delay_ms`, replacing any pending callback
    pub fn start(&self, delay_ms: u32, on_fire: impl FnOnce() + 'static) {
        #[cfg(not(feature = "ssr"))]
        {
            let timeout = gloo_timers::callback::Timeout::new(delay_ms, on_fire);
            self.pending.set_value(Some(timeout));
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (delay_ms, on_fire);
        }
    }

    /// Drop the pending callback, if any
    pub fn cancel(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            self.pending.try_update_value(|timeout| timeout.take());
        }
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new()
    }
}
