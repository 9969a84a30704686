/// Cancellable trailing-edge debounce for resize events.
///
/// Each `schedule` pushes the deadline out; `poll` fires once the latest
/// deadline has passed and then disarms.
#[derive(Clone, Copy, Debug)]
pub struct ResizeDebounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl ResizeDebounce {
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms: delay_ms.max(0.0), deadline: None }
    }

    pub fn schedule(&mut self, now: f64) {
        self.deadline = Some(now + self.delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per quiet period.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
