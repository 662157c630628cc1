//! Range guard shared by every sub-score.

/// Clamp a raw sub-score into `0.0..=1.0`.
///
/// Non-finite values become `0.0`, so a degenerate computation scores as
/// "no information" instead of poisoning the blend.
///
/// # Examples
/// ```
/// use giftwise_core::sanitise_score;
///
/// assert_eq!(sanitise_score(f32::NAN), 0.0);
/// assert_eq!(sanitise_score(1.7), 1.0);
/// assert_eq!(sanitise_score(0.25), 0.25);
/// ```
#[must_use]
pub const fn sanitise_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
