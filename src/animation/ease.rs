use crate::foundation::error::{RevealError, RevealResult};

/// Named interpolation curve applied to animation progress.
///
/// `EaseIn`, `EaseOut` and `EaseInOut` follow the CSS keyword curves; `CubicBezier` takes the
/// same four control values as CSS `cubic-bezier(x1, y1, x2, y2)`.
///
/// Deserializes from any name [`Ease::parse`] accepts, or from `{"cubic-bezier": [x1, y1, x2, y2]}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "EaseDef")]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary cubic bezier `[x1, y1, x2, y2]`; `x1`/`x2` must lie in `[0, 1]`.
    CubicBezier([f64; 4]),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum EaseDef {
    Name(String),
    Bezier {
        #[serde(rename = "cubic-bezier")]
        cubic_bezier: [f64; 4],
    },
}

impl TryFrom<EaseDef> for Ease {
    type Error = RevealError;

    fn try_from(def: EaseDef) -> Result<Self, Self::Error> {
        let ease = match def {
            EaseDef::Name(name) => Self::parse(&name)?,
            EaseDef::Bezier { cubic_bezier } => Self::CubicBezier(cubic_bezier),
        };
        ease.validate()?;
        Ok(ease)
    }
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// Reject bezier control points that would make the curve non-functional in `x`.
    pub fn validate(self) -> RevealResult<()> {
        if let Self::CubicBezier(points) = self {
            if points.iter().any(|v| !v.is_finite()) {
                return Err(RevealError::animation(
                    "cubic-bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&points[0]) || !(0.0..=1.0).contains(&points[2]) {
                return Err(RevealError::animation(
                    "cubic-bezier x1/x2 must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// Parse a curve by name. Accepts kebab-case (`ease-out`, `in-out-cubic`) and the
    /// camelCase names motion libraries use (`easeOut`, `easeInOut`).
    pub fn parse(name: &str) -> RevealResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let ease = match normalized.as_str() {
            "linear" => Self::Linear,
            "inquad" => Self::InQuad,
            "outquad" => Self::OutQuad,
            "inoutquad" => Self::InOutQuad,
            "incubic" => Self::InCubic,
            "outcubic" => Self::OutCubic,
            "inoutcubic" => Self::InOutCubic,
            "easein" => Self::EaseIn,
            "easeout" => Self::EaseOut,
            "easeinout" => Self::EaseInOut,
            _ => {
                return Err(RevealError::animation(format!(
                    "unknown easing curve '{name}'"
                )));
            }
        };
        Ok(ease)
    }
}

impl std::str::FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    let coord = |s: f64, p1: f64, p2: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |s: f64, p1: f64, p2: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = coord(s, x1, x2) - x;
        if err.abs() < 1e-7 {
            return coord(s, y1, y2);
        }
        let d = slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Newton stalled on a flat segment; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = coord(s, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    coord(s, y1, y2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
