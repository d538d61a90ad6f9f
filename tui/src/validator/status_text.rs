// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::sync::Arc;

/// Outcome of the most recent validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationStatus {
    /// No run has completed yet.
    #[default]
    NotRun,
    Valid,
    Invalid(String),
}

impl ValidationStatus {
    /// Last error message, if the last run failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            ValidationStatus::Invalid(message) => Some(message),
            ValidationStatus::NotRun | ValidationStatus::Valid => None,
        }
    }
}

/// Everything the status bar shows that is not derived from the buffer. This is the
/// only state written by a background task (the validator) and read by the render path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusText {
    pub validation: ValidationStatus,
    /// Transient message, eg: the result of a save.
    pub message: Option<String>,
}

/// Handle to the one mutex that guards [`StatusText`].
///
/// Critical sections are kept minimal: writers replace one field, readers copy the
/// whole struct out with [`SharedStatus::snapshot`] and release the lock before doing
/// any I/O. A poisoned lock is recovered, since the guarded data is plain text and is
/// always left in a valid state.
#[derive(Debug, Clone, Default)]
pub struct SharedStatus {
    inner: Arc<StdMutex<StatusText>>,
}

impl SharedStatus {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn with_lock<R>(&self, f: impl FnOnce(&mut StatusText) -> R) -> R {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    #[must_use]
    pub fn snapshot(&self) -> StatusText { self.with_lock(|it| it.clone()) }

    pub fn set_validation(&self, validation: ValidationStatus) {
        self.with_lock(|it| it.validation = validation);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        let message = message.into();
        self.with_lock(|it| it.message = Some(message));
    }

    pub fn clear_message(&self) { self.with_lock(|it| it.message = None); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_is_a_copy() {
        let shared = SharedStatus::new();
        shared.set_message("Saved a.ql");
        let snapshot = shared.snapshot();
        shared.set_validation(ValidationStatus::Invalid("line 1: x".into()));
        shared.clear_message();

        assert_eq!(snapshot, StatusText {
            validation: ValidationStatus::NotRun,
            message: Some("Saved a.ql".into()),
        });
        assert_eq!(shared.snapshot().validation.last_error(), Some("line 1: x"));
        assert_eq!(shared.snapshot().message, None);
    }

    #[test]
    fn clones_share_state() {
        let shared = SharedStatus::new();
        let other = shared.clone();
        other.set_validation(ValidationStatus::Valid);
        assert_eq!(shared.snapshot().validation, ValidationStatus::Valid);
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let shared = SharedStatus::new();
        let clone = shared.clone();
        let _ = std::thread::spawn(move || {
            clone.with_lock::<()>(|_| panic!("poison"));
        })
        .join();
        shared.set_message("still works");
        assert_eq!(shared.snapshot().message.as_deref(), Some("still works"));
    }
}
