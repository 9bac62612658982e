use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RateLimitDecision {
    Allow,
    Deny { retry_after_seconds: u64 },
}

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

pub struct FixedWindowRateLimiter {
    window: Duration,
    max: u32,
    clock: Arc<dyn Clock>,
    store: Mutex<HashMap<String, WindowEntry>>,
}

impl FixedWindowRateLimiter {
    pub fn new(window: Duration, max: u32) -> Self {
        Self::new_with_clock(window, max, Arc::new(SystemClock))
    }

    pub fn new_with_clock(window: Duration, max: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            window,
            max,
            clock,
            store: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, client_address: &str, route_path: &str) -> RateLimitDecision {
        let key = format!("{client_address}:{route_path}");
        let now = self.clock.now();
        let mut store = self.store.lock().expect("mutex poisoned");

        match store.get_mut(&key) {
            Some(entry) if now <= entry.reset_at => {
                if entry.count >= self.max {
                    let remaining = entry.reset_at.saturating_duration_since(now);
                    let retry_after_seconds =
                        remaining.as_secs() + u64::from(remaining.subsec_nanos() != 0);
                    return RateLimitDecision::Deny {
                        retry_after_seconds,
                    };
                }

                entry.count += 1;
                RateLimitDecision::Allow
            }
            _ => {
                store.insert(
                    key,
                    WindowEntry {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                RateLimitDecision::Allow
            }
        }
    }

    pub fn sweep_expired(&self) {
        let now = self.clock.now();
        let mut store = self.store.lock().expect("mutex poisoned");
        store.retain(|_, entry| entry.reset_at >= now);
    }

    pub fn tracked_keys(&self) -> usize {
        self.store.lock().expect("mutex poisoned").len()
    }
}
