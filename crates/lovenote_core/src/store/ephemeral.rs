//! Ephemeral item store.
//!
//! # Responsibility
//! - Track transient tokens that are visible for a fixed time-to-live.
//! - Own the reveal/expiry tasks for every token it holds.
//!
//! # Invariants
//! - A token is removed exactly once, no earlier than `created_at + ttl`.
//! - `expire` is idempotent; unknown or already-removed ids are a no-op.
//! - After `cancel_pending` (or drop), no scheduled task mutates the store.
//! - Reveal of the token with ordinal `n` happens at `created_at + n * step`.

use crate::clock::{Clock, EpochMillis};
use crate::model::token::{Token, TokenId};
use crate::notify::ChangeNotifier;
use crate::schedule::timer::{TaskId, TimerQueue};
use log::debug;

/// Lifespan of a floating heart.
pub const DEFAULT_TOKEN_TTL_MS: u64 = 3_000;
/// Per-ordinal display delay for the floating heart cascade.
pub const DEFAULT_CASCADE_STEP_MS: u64 = 100;

/// Mutation reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenChange {
    Added(TokenId),
    Revealed(TokenId),
    Expired(TokenId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenTask {
    Reveal(TokenId),
    Expire(TokenId),
}

#[derive(Debug)]
struct Slot {
    token: Token,
    expiry: TaskId,
    reveal: Option<TaskId>,
}

/// Store of transient tokens with self-expiry.
///
/// Time only moves when the owner calls [`EphemeralStore::tick`]; the store
/// never spawns threads or sleeps.
#[derive(Debug)]
pub struct EphemeralStore<C: Clock> {
    clock: C,
    ttl_ms: u64,
    cascade_step_ms: u64,
    slots: Vec<Slot>,
    timers: TimerQueue<TokenTask>,
    changes: ChangeNotifier<TokenChange>,
}

impl<C: Clock> EphemeralStore<C> {
    /// Creates a store whose tokens live for `ttl_ms` and reveal immediately.
    pub fn new(clock: C, ttl_ms: u64) -> Self {
        Self {
            clock,
            ttl_ms,
            cascade_step_ms: 0,
            slots: Vec::new(),
            timers: TimerQueue::new(),
            changes: ChangeNotifier::new(),
        }
    }

    /// Staggers reveal of each new token by `step_ms` per visible ordinal.
    pub fn with_cascade(mut self, step_ms: u64) -> Self {
        self.cascade_step_ms = step_ms;
        self
    }

    /// Adds a token stamped with the current time and schedules its removal.
    ///
    /// Callers may ignore the returned id; removal happens on its own.
    pub fn add(&mut self) -> TokenId {
        let now = self.clock.now_ms();
        let mut token = Token::new(now, self.slots.len());
        let id = token.id;

        let reveal_delay = self.cascade_step_ms.saturating_mul(token.ordinal as u64);
        let reveal = if reveal_delay == 0 {
            token.revealed = true;
            None
        } else {
            Some(
                self.timers
                    .schedule_after(now, reveal_delay, TokenTask::Reveal(id)),
            )
        };
        let expiry = self
            .timers
            .schedule(token.expires_at(self.ttl_ms), TokenTask::Expire(id));

        debug!(
            "event=token_add module=ephemeral status=ok ordinal={} ttl_ms={} visible={}",
            token.ordinal,
            self.ttl_ms,
            self.slots.len() + 1
        );
        self.slots.push(Slot {
            token,
            expiry,
            reveal,
        });
        self.changes.notify(TokenChange::Added(id));
        id
    }

    /// Removes the token with `id` if it is still present.
    ///
    /// Returns `true` when a token was removed. Any pending task for the token
    /// is cancelled, so it is never removed twice.
    pub fn expire(&mut self, id: TokenId) -> bool {
        let Some(index) = self.slots.iter().position(|slot| slot.token.id == id) else {
            return false;
        };
        let slot = self.slots.remove(index);
        self.timers.cancel(slot.expiry);
        if let Some(reveal) = slot.reveal {
            self.timers.cancel(reveal);
        }

        debug!(
            "event=token_expire module=ephemeral status=ok age_ms={} visible={}",
            self.clock.now_ms().saturating_sub(slot.token.created_at),
            self.slots.len()
        );
        self.changes.notify(TokenChange::Expired(id));
        true
    }

    /// Fires every task due at the current time, in deadline order.
    ///
    /// Returns the number of tasks fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut fired = 0;
        while let Some((_, task)) = self.timers.pop_due(now) {
            fired += 1;
            match task {
                TokenTask::Reveal(id) => self.reveal(id),
                TokenTask::Expire(id) => {
                    self.expire(id);
                }
            }
        }
        fired
    }

    /// Cancels every scheduled reveal/expiry without touching visible tokens.
    ///
    /// Used on teardown; returns the number of cancelled tasks.
    pub fn cancel_pending(&mut self) -> usize {
        for slot in &mut self.slots {
            slot.reveal = None;
        }
        let cancelled = self.timers.clear();
        if cancelled > 0 {
            debug!(
                "event=token_timers_cancel module=ephemeral status=ok cancelled={}",
                cancelled
            );
        }
        cancelled
    }

    fn reveal(&mut self, id: TokenId) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.token.id == id) {
            slot.token.revealed = true;
            slot.reveal = None;
            self.changes.notify(TokenChange::Revealed(id));
        }
    }

    /// Visible tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.slots.iter().map(|slot| &slot.token)
    }

    /// Owned copy of the visible tokens for rendering.
    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens().cloned().collect()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens().find(|token| token.id == id)
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Earliest time at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<EpochMillis> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    /// Registers an observer for add/reveal/expire events.
    pub fn subscribe(&mut self, observer: impl FnMut(&TokenChange) + Send + 'static) {
        self.changes.subscribe(observer);
    }
}

impl<C: Clock> Drop for EphemeralStore<C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
