use std::rc::Rc;

use crate::forms::storage::SessionKey;
use crate::forms::transport::{SimulatedTransport, SubmitTransport};
use crate::quote::wizard::ResumePolicy;

pub const QUOTE_DRAFT: SessionKey = SessionKey::new("quoteFormData");
pub const LOADER_SHOWN: SessionKey = SessionKey::new("loaderShown");

pub const QUOTE_RESUME_POLICY: ResumePolicy = ResumePolicy::FirstStep;

pub const CONTACT_COOLDOWN_SECS: i64 = 30;
pub const STATUS_HIDE_MS: u32 = 5_000;
pub const APPLICATION_CLOSE_MS: u32 = 2_000;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn submit_delay_ms() -> u32 {
    300 // Keep local iteration snappy
}

#[cfg(not(debug_assertions))]
pub fn submit_delay_ms() -> u32 {
    1_500
}

/// Transport used by every form on the site.
pub fn transport() -> Rc<dyn SubmitTransport> {
    Rc::new(SimulatedTransport { delay_ms: submit_delay_ms() })
}
