use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("classmate.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("classmate.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("classmate.client.request_duration_seconds");

pub(crate) static CHAT_SUBMITS: Counter = Counter::new("classmate.chat.submits");
pub(crate) static CHAT_EMPTY_SUBMITS: Counter = Counter::new("classmate.chat.empty_submits");
pub(crate) static CHAT_REPLIES: Counter = Counter::new("classmate.chat.replies");
pub(crate) static CHAT_RETRIES: Counter = Counter::new("classmate.chat.retries");
pub(crate) static CHAT_EXHAUSTED: Counter = Counter::new("classmate.chat.exhausted_dispatches");
pub(crate) static CHAT_STALE_APPENDS: Counter =
    Counter::new("classmate.chat.suppressed_stale_appends");
pub(crate) static CHAT_DISPATCH_DURATION: Moments =
    Moments::new("classmate.chat.dispatch_duration_seconds");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&CHAT_SUBMITS);
    collector.register_counter(&CHAT_EMPTY_SUBMITS);
    collector.register_counter(&CHAT_REPLIES);
    collector.register_counter(&CHAT_RETRIES);
    collector.register_counter(&CHAT_EXHAUSTED);
    collector.register_counter(&CHAT_STALE_APPENDS);
    collector.register_moments(&CHAT_DISPATCH_DURATION);
}
