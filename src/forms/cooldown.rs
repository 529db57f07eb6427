use chrono::{DateTime, Duration, Utc};

/// Minimum spacing between successful sends of one form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cooldown {
    period: Duration,
    last: Option<DateTime<Utc>>,
}

impl Cooldown {
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    pub fn ready(&self, now: DateTime<Utc>) -> bool {
        match self.last {
            Some(last) => now - last >= self.period,
            None => true,
        }
    }

    pub fn mark(&mut self, now: DateTime<Utc>) {
        self.last = Some(now);
    }
}
