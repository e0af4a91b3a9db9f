//! Trailing-edge debounce keyed by generation.
//!
//! Every call bumps the generation and sleeps; only a sleeper whose generation
//! is still current when it wakes runs its action. Earlier actions that are
//! already running are left alone.

use std::future::Future;

use leptos::{prelude::*, task};

use crate::timer::wait_for_timeout;

#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    generation: RwSignal<u64>,
    delay_ms: i32,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            generation: RwSignal::new(0),
            delay_ms,
        }
    }

    /// Start a new generation, superseding any pending one.
    pub fn bump(self) -> u64 {
        self.generation.update(|generation| {
            *generation = generation.saturating_add(1);
        });

        self.generation.get_untracked()
    }

    pub fn is_current(self, run_id: u64) -> bool {
        self.generation.get_untracked() == run_id
    }

    /// Run `action` once `delay_ms` pass without another call.
    pub fn call(self, action: impl FnOnce() + 'static) {
        task::spawn_local(self.settle(wait_for_timeout(self.delay_ms), action));
    }

    /// Claim a generation now; the future runs `action` after `wait` unless a
    /// later call has claimed a newer one.
    fn settle(
        self,
        wait: impl Future<Output = ()>,
        action: impl FnOnce(),
    ) -> impl Future<Output = ()> {
        let run_id = self.bump();

        async move {
            wait.await;

            if self.is_current(run_id) {
                action();
            }
        }
    }
}
