//! # Lecturer Access Gate
//!
//! A process-lifetime capability toggle guarding the operations that mutate
//! or list the prefix store. Unlocking is a plain equality check against a
//! shared secret, not authentication; the gate only decides whether the
//! lecturer surface is visible to the current session.

use thiserror::Error;

/// The shared lecturer secret. Checked by equality, never persisted.
const SHARED_SECRET: &str = "admin123";

/// A gated operation was attempted while the gate is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lecturer mode is locked")]
pub struct Unauthorized;

/// Session-scoped lecturer capability. Starts locked, never persisted.
#[derive(Debug, Default)]
pub struct AdminGate {
    unlocked: bool,
}

impl AdminGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlocks the gate iff `credential` matches the shared secret.
    ///
    /// Returns whether the credential matched. A wrong credential leaves
    /// the gate in its current state, so a failed attempt cannot relock an
    /// already unlocked session.
    pub fn attempt_unlock(&mut self, credential: &str) -> bool {
        if credential == SHARED_SECRET {
            self.unlocked = true;
            return true;
        }
        false
    }

    /// Relocks the gate unconditionally.
    pub fn lock(&mut self) {
        self.unlocked = false;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Fails with [`Unauthorized`] unless the gate is unlocked.
    pub fn ensure_unlocked(&self) -> Result<(), Unauthorized> {
        if self.unlocked {
            Ok(())
        } else {
            Err(Unauthorized)
        }
    }
}
