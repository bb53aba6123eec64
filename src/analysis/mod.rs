//! Row-wise best-category analysis.
//!
//! Two pipelines share the same shape: score every candidate category of a
//! row, select the extremal one, and tally how often each category wins
//! across the whole log.
//!
//! - [`direction`] picks the facade orientation with the lowest score and
//!   checks it against the north baseline.
//! - [`glazing`] picks the glazing tier whose score tracks the raw
//!   environment reading most closely.

pub mod direction;
pub mod glazing;

/// Index of the smallest defined score, ties broken by the first occurrence.
///
/// `None` when every score is missing. A missing or non-finite score never
/// wins; NaN in particular would slip past a `>=` retain-guard.
pub(crate) fn select_min(scores: &[Option<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.iter().enumerate() {
        let Some(value) = *score else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
