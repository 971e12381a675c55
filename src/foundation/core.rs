use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// A non-negative, finite span of time in seconds.
///
/// Negative or non-finite values are rejected at construction, so every delay, duration and
/// stagger interval held by the crate is known to be valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Seconds(f64);

impl Seconds {
    /// Zero seconds.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a value in seconds.
    pub fn new(secs: f64) -> RevealResult<Self> {
        if !secs.is_finite() {
            return Err(RevealError::validation(format!(
                "time value must be finite, got {secs}"
            )));
        }
        if secs < 0.0 {
            return Err(RevealError::validation(format!(
                "time value must be >= 0, got {secs}"
            )));
        }
        // -0.0 normalizes to 0.0
        Ok(Self(if secs == 0.0 { 0.0 } else { secs }))
    }

    /// Wrap a literal. Evaluated in const context, so an invalid literal fails the build.
    pub(crate) const fn from_literal(secs: f64) -> Self {
        assert!(secs.is_finite() && secs >= 0.0, "time literal must be finite and >= 0");
        Self(secs)
    }

    /// Raw value in seconds.
    pub fn get(self) -> f64 {
        self.0
    }

    /// `self + other`.
    pub fn offset(self, other: Seconds) -> Self {
        Self(self.0 + other.0)
    }

    /// `self * n`, used for stagger offsets.
    pub fn times(self, n: usize) -> Self {
        Self(self.0 * n as f64)
    }

    /// Time elapsed from `earlier` to `self`, saturating at zero.
    pub fn since(self, earlier: Seconds) -> Self {
        Self((self.0 - earlier.0).max(0.0))
    }
}

impl TryFrom<f64> for Seconds {
    type Error = RevealError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Seconds> for f64 {
    fn from(value: Seconds) -> Self {
        value.0
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

/// Per-edge adjustment in pixels.
///
/// Used as a root margin: positive values grow the observed viewport (fire early), negative
/// values shrink it (fire once the element is well inside).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Top edge in pixels.
    pub top: f64,
    /// Right edge in pixels.
    pub right: f64,
    /// Bottom edge in pixels.
    pub bottom: f64,
    /// Left edge in pixels.
    pub left: f64,
}

impl Edges {
    /// Same adjustment on every edge.
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Grow `rect` by these edges. Negative edges shrink it; the result never inverts.
    pub fn expand(self, rect: Rect) -> Rect {
        let x0 = rect.x0 - self.left;
        let y0 = rect.y0 - self.top;
        let x1 = (rect.x1 + self.right).max(x0);
        let y1 = (rect.y1 + self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Check every edge is finite.
    pub fn validate(self) -> RevealResult<()> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() {
                return Err(RevealError::validation(format!(
                    "margin.{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Frame rate of the host frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> RevealResult<Self> {
        if den == 0 {
            return Err(RevealError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RevealError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as `f64`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `frame`.
    pub fn frame_time(self, frame: u64) -> Seconds {
        Seconds((frame as f64) * self.frame_duration_secs())
    }

    /// Number of frames needed to cover `secs`.
    pub fn frames_covering(self, secs: Seconds) -> u64 {
        (secs.get() * self.as_f64()).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
