use gloo_timers::callback::Timeout;

/// One pending delayed callback.
///
/// Scheduling replaces (and cancels) whatever was pending. Dropping the timer
/// cancels it too, so a callback never outlives the view that owns it.
/// A callback must not reschedule the timer that is running it.
#[derive(Default)]
pub struct DelayTimer {
    pending: Option<Timeout>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, millis: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        // Dropping a `Timeout` clears it.
        self.pending = None;
    }
}
