use serde::Serialize;

use crate::core::ProbeOutcome;

/// Keep only outcomes that failed or returned 4xx/5xx, in their original order.
pub fn filter_only_errors(results: &[ProbeOutcome]) -> Vec<ProbeOutcome> {
    results.iter().filter(|r| r.has_error()).cloned().collect()
}

/// Apply the only-errors filter when requested, otherwise pass results through.
pub fn apply_filter(results: Vec<ProbeOutcome>, only_errors: bool) -> Vec<ProbeOutcome> {
    if only_errors {
        results.into_iter().filter(ProbeOutcome::has_error).collect()
    } else {
        results
    }
}

/// Whether any outcome failed or returned 4xx/5xx.
pub fn has_errors(results: &[ProbeOutcome]) -> bool {
    results.iter().any(ProbeOutcome::has_error)
}

/// Aggregate counts over a result set.
///
/// `successful` counts 2xx/3xx responses; everything else, including
/// transport failures and any 1xx, lands in `errors`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_results(results: &[ProbeOutcome]) -> Self {
        let successful = results.iter().filter(|r| r.is_success()).count();
        Self {
            total: results.len(),
            successful,
            errors: results.len() - successful,
        }
    }

    pub fn all_successful(&self) -> bool {
        self.errors == 0
    }
}
