//! Outcome of a single sub-matcher: either a computed value or a neutral
//! default that stood in for a failure.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ScoringError;

/// A component that failed and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradedComponent {
    pub component: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scored<T> {
    Computed(T),
    Degraded { value: T, reason: ScoringError },
}

impl<T> Scored<T> {
    /// Resolves a sub-matcher result, substituting `fallback` on error.
    pub fn resolve(
        component: &'static str,
        result: Result<T, ScoringError>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(value) => Scored::Computed(value),
            Err(reason) => {
                warn!("{component} degraded to default: {reason}");
                Scored::Degraded {
                    value: fallback(),
                    reason,
                }
            }
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Scored::Computed(value) | Scored::Degraded { value, .. } => value,
        }
    }

    /// Appends a `DegradedComponent` entry to `sink` if this outcome was defaulted.
    pub fn record(&self, component: &str, sink: &mut Vec<DegradedComponent>) {
        if let Scored::Degraded { reason, .. } = self {
            sink.push(DegradedComponent {
                component: component.to_string(),
                reason: reason.to_string(),
            });
        }
    }
}

/// Rejects NaN/infinite intermediate scores.
pub fn ensure_finite(component: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite(component))
    }
}
