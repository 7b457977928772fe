//! Input mapping: drag offsets, keys and taps to [`Direction`]s.
//!
//! Drag, keyboard and tap input all end in the same [`Direction`], which the
//! caller hands to [`Game::decide`](crate::Game::decide). Nothing here looks
//! at the game state; the caller is expected to drop input while
//! [`Game::can_decide`](crate::Game::can_decide) says no.

use crate::game::Direction;
use crate::options::GestureOptions;

/// What a released drag amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The drag went far enough to commit a decision.
    Commit(Direction),
    /// The card springs back to neutral.
    SnapBack,
}

/// Keys the game responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
}

impl Key {
    /// Returns the direction bound to this key.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::ArrowLeft => Direction::Before,
            Self::ArrowRight => Direction::After,
        }
    }
}

/// Visual state of the card for a horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// Horizontal offset.
    pub offset: f32,
    /// Rotation in degrees, positive clockwise.
    pub rotation_deg: f32,
    /// Opacity of the "before" indicator, 0 to 1.
    pub before_opacity: f32,
    /// Opacity of the "after" indicator, 0 to 1.
    pub after_opacity: f32,
}

/// Maps drag offsets to card poses and release decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMapper {
    options: GestureOptions,
}

impl SwipeMapper {
    /// Creates a mapper with the given tuning.
    #[must_use]
    pub const fn new(options: GestureOptions) -> Self {
        Self { options }
    }

    /// Returns the card rotation for `offset`, clamped to the maximum.
    #[must_use]
    pub fn rotation(&self, offset: f32) -> f32 {
        let max = self.options.max_rotation_deg;
        ratio(offset, self.options.rotation_range).clamp(-1.0, 1.0) * max
    }

    /// Returns the "before" indicator opacity; it fades in as the card
    /// moves left.
    #[must_use]
    pub fn before_opacity(&self, offset: f32) -> f32 {
        ratio(-offset, self.options.indicator_range).clamp(0.0, 1.0)
    }

    /// Returns the "after" indicator opacity; it fades in as the card moves
    /// right.
    #[must_use]
    pub fn after_opacity(&self, offset: f32) -> f32 {
        ratio(offset, self.options.indicator_range).clamp(0.0, 1.0)
    }

    /// Returns the full pose for `offset`.
    #[must_use]
    pub fn pose(&self, offset: f32) -> CardPose {
        CardPose {
            offset,
            rotation_deg: self.rotation(offset),
            before_opacity: self.before_opacity(offset),
            after_opacity: self.after_opacity(offset),
        }
    }

    /// Decides what a drag released at horizontal displacement `dx` does.
    ///
    /// Displacements exactly at the threshold snap back.
    #[must_use]
    pub fn release(&self, dx: f32) -> Release {
        let threshold = self.options.commit_threshold;
        if dx > threshold {
            Release::Commit(Direction::After)
        } else if dx < -threshold {
            Release::Commit(Direction::Before)
        } else {
            Release::SnapBack
        }
    }
}

fn ratio(offset: f32, range: f32) -> f32 {
    if range > 0.0 {
        offset / range
    } else if offset > 0.0 {
        1.0
    } else if offset < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// The cosmetic swipe played for keyboard and tap decisions: out to the
/// peak in the chosen direction, then back to neutral.
///
/// The decision is made once the animation is done; the animation never
/// changes which direction is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeAnimation {
    direction: Direction,
    peak: f32,
    out_ms: u64,
    back_ms: u64,
}

impl SwipeAnimation {
    /// Creates the animation for `direction`.
    #[must_use]
    pub const fn new(direction: Direction, options: &GestureOptions) -> Self {
        Self {
            direction,
            peak: options.swipe_peak,
            out_ms: options.swipe_out_ms,
            back_ms: options.swipe_back_ms,
        }
    }

    /// Returns the direction this animation leads to.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the total duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.out_ms + self.back_ms
    }

    /// Returns whether the animation has run to completion.
    #[must_use]
    pub const fn is_done(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms()
    }

    /// Returns the horizontal offset `elapsed_ms` into the animation.
    #[must_use]
    pub fn offset_at(&self, elapsed_ms: u64) -> f32 {
        let peak = self.peak * self.direction.sign();
        if elapsed_ms < self.out_ms {
            peak * ease_out(progress(elapsed_ms, self.out_ms))
        } else if elapsed_ms < self.duration_ms() {
            let t = progress(elapsed_ms - self.out_ms, self.back_ms);
            peak * (1.0 - ease_out(t))
        } else {
            0.0
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "animation durations are far below f32 precision limits"
)]
fn progress(elapsed_ms: u64, span_ms: u64) -> f32 {
    if span_ms == 0 {
        1.0
    } else {
        (elapsed_ms as f32 / span_ms as f32).clamp(0.0, 1.0)
    }
}

fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> SwipeMapper {
        SwipeMapper::new(GestureOptions::default())
    }

    #[test]
    fn release_thresholds() {
        let m = mapper();
        assert_eq!(m.release(81.0), Release::Commit(Direction::After));
        assert_eq!(m.release(-81.0), Release::Commit(Direction::Before));
        assert_eq!(m.release(80.0), Release::SnapBack);
        assert_eq!(m.release(-80.0), Release::SnapBack);
        assert_eq!(m.release(0.0), Release::SnapBack);
    }

    #[test]
    fn rotation_is_proportional_and_clamped() {
        let m = mapper();
        assert!((m.rotation(90.0) - 6.0).abs() < 1e-5);
        assert!((m.rotation(-180.0) + 12.0).abs() < 1e-5);
        assert!((m.rotation(1000.0) - 12.0).abs() < 1e-5);
        assert!(m.rotation(0.0).abs() < 1e-5);
    }

    #[test]
    fn indicators_fade_by_side() {
        let m = mapper();
        let pose = m.pose(-40.0);
        assert!((pose.before_opacity - 0.5).abs() < 1e-5);
        assert!(pose.after_opacity.abs() < 1e-5);

        let pose = m.pose(120.0);
        assert!(pose.before_opacity.abs() < 1e-5);
        assert!((pose.after_opacity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(Key::ArrowLeft.direction(), Direction::Before);
        assert_eq!(Key::ArrowRight.direction(), Direction::After);
    }

    #[test]
    fn swipe_animation_peaks_and_returns() {
        let anim = SwipeAnimation::new(Direction::Before, &GestureOptions::default());
        assert_eq!(anim.duration_ms(), 300);
        assert!(anim.offset_at(0).abs() < 1e-5);
        assert!((anim.offset_at(120) + 110.0).abs() < 1e-3);
        assert!(anim.offset_at(60) < 0.0);
        assert!(anim.offset_at(300).abs() < 1e-5);
        assert!(anim.is_done(300));
        assert!(!anim.is_done(299));
        assert_eq!(anim.direction(), Direction::Before);
    }

    #[test]
    fn zero_length_swipe_is_immediately_done() {
        let options = GestureOptions::default().with_swipe_timing(0, 0);
        let anim = SwipeAnimation::new(Direction::After, &options);
        assert!(anim.is_done(0));
        assert!(anim.offset_at(0).abs() < 1e-5);
    }
}
