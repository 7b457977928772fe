//! Game configuration options.

/// Tuning for the swipe gesture and its animations.
///
/// Offsets are in the same units the front end reports drag distance in
/// (CSS pixels in a browser, columns in a terminal, and so on).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOptions {
    /// Horizontal displacement past which a release commits a decision.
    pub commit_threshold: f32,
    /// Offset at which a direction indicator becomes fully opaque.
    pub indicator_range: f32,
    /// Offset at which the card reaches its maximum rotation.
    pub rotation_range: f32,
    /// Maximum card rotation in degrees.
    pub max_rotation_deg: f32,
    /// Offset the card travels to when a decision is triggered without a drag.
    pub swipe_peak: f32,
    /// Duration of the outward swipe, in milliseconds.
    pub swipe_out_ms: u64,
    /// Duration of the return to neutral, in milliseconds.
    pub swipe_back_ms: u64,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            commit_threshold: 80.0,
            indicator_range: 80.0,
            rotation_range: 180.0,
            max_rotation_deg: 12.0,
            swipe_peak: 110.0,
            swipe_out_ms: 120,
            swipe_back_ms: 180,
        }
    }
}

impl GestureOptions {
    /// Sets the release threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::GestureOptions;
    ///
    /// let gesture = GestureOptions::default().with_commit_threshold(60.0);
    /// assert_eq!(gesture.commit_threshold, 60.0);
    /// ```
    #[must_use]
    pub const fn with_commit_threshold(mut self, threshold: f32) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Sets the offset at which indicators are fully visible.
    #[must_use]
    pub const fn with_indicator_range(mut self, range: f32) -> Self {
        self.indicator_range = range;
        self
    }

    /// Sets the rotation curve: `max_deg` is reached at offset `range`.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::GestureOptions;
    ///
    /// let gesture = GestureOptions::default().with_rotation(200.0, 15.0);
    /// assert_eq!(gesture.rotation_range, 200.0);
    /// assert_eq!(gesture.max_rotation_deg, 15.0);
    /// ```
    #[must_use]
    pub const fn with_rotation(mut self, range: f32, max_deg: f32) -> Self {
        self.rotation_range = range;
        self.max_rotation_deg = max_deg;
        self
    }

    /// Sets the peak offset of programmatic swipes.
    #[must_use]
    pub const fn with_swipe_peak(mut self, peak: f32) -> Self {
        self.swipe_peak = peak;
        self
    }

    /// Sets the outward and return durations of programmatic swipes.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::GestureOptions;
    ///
    /// let gesture = GestureOptions::default().with_swipe_timing(100, 150);
    /// assert_eq!(gesture.swipe_out_ms + gesture.swipe_back_ms, 250);
    /// ```
    #[must_use]
    pub const fn with_swipe_timing(mut self, out_ms: u64, back_ms: u64) -> Self {
        self.swipe_out_ms = out_ms;
        self.swipe_back_ms = back_ms;
        self
    }
}

/// Most lives a game can start with.
pub const MAX_LIVES: u8 = 3;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use artswipe::GameOptions;
///
/// let options = GameOptions::default()
///     .with_lives(2)
///     .with_settle_delay_ms(2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Lives at the start of a game, kept within `1..=MAX_LIVES`.
    pub lives: u8,
    /// How long outcome feedback stays up before the decision is committed,
    /// in milliseconds.
    pub settle_delay_ms: u64,
    /// Gesture tuning.
    pub gesture: GestureOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            lives: 3,
            settle_delay_ms: 650,
            gesture: GestureOptions::default(),
        }
    }
}

impl GameOptions {
    /// Sets the starting lives.
    ///
    /// Games clamp this to `1..=MAX_LIVES`.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::GameOptions;
    ///
    /// let options = GameOptions::default().with_lives(1);
    /// assert_eq!(options.lives, 1);
    /// ```
    #[must_use]
    pub const fn with_lives(mut self, lives: u8) -> Self {
        self.lives = lives;
        self
    }

    /// Sets the settle delay.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::GameOptions;
    ///
    /// let options = GameOptions::default().with_settle_delay_ms(2000);
    /// assert_eq!(options.settle_delay_ms, 2000);
    /// ```
    #[must_use]
    pub const fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    /// Sets the gesture tuning.
    #[must_use]
    pub const fn with_gesture(mut self, gesture: GestureOptions) -> Self {
        self.gesture = gesture;
        self
    }
}
