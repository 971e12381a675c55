use std::collections::BTreeMap;

use crate::foundation::error::{RevealError, RevealResult};

/// Visual property an animation can drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    Rotate,
    /// Blur radius in pixels.
    Blur,
}

impl Property {
    /// Value an element shows when nothing animates this property.
    pub fn resting_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::X | Self::Y | Self::Rotate | Self::Blur => 0.0,
        }
    }
}

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (`t = 0`) and `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Mapping from [`Property`] to value describing how an element looks at one instant.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VisualState(BTreeMap<Property, f64>);

impl VisualState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: Property, value: f64) -> Self {
        self.0.insert(property, value);
        self
    }

    /// Value of `property`, if the state defines it.
    pub fn get(&self, property: Property) -> Option<f64> {
        self.0.get(&property).copied()
    }

    /// Value of `property`, falling back to its resting value.
    pub fn resolved(&self, property: Property) -> f64 {
        self.get(property)
            .unwrap_or_else(|| property.resting_value())
    }

    /// Properties defined by this state, in stable order.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.keys().copied()
    }

    /// `(property, value)` pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property is defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Both states define exactly the same properties.
    pub fn same_properties(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.keys().all(|k| other.0.contains_key(k))
    }

    pub(crate) fn validate(&self, label: &str) -> RevealResult<()> {
        for (property, value) in self.iter() {
            if !value.is_finite() {
                return Err(RevealError::animation(format!(
                    "{label} value for {property:?} must be finite"
                )));
            }
        }
        Ok(())
    }
}

impl Lerp for VisualState {
    /// Interpolates properties present in both states; keys only in `a` keep `a`'s value.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let map = a
            .0
            .iter()
            .map(|(p, va)| {
                let v = match b.0.get(p) {
                    Some(vb) => f64::lerp(va, vb, t),
                    None => *va,
                };
                (*p, v)
            })
            .collect();
        Self(map)
    }
}

impl FromIterator<(Property, f64)> for VisualState {
    fn from_iter<I: IntoIterator<Item = (Property, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
