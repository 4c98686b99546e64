use num_traits::Float;

use super::interp::{linstep, smoothstep, step};

/// Transition shapes between two edges, selectable from data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ramp {
    /// Hard switch at the upper edge.
    Step,
    /// Clamped linear ramp.
    #[default]
    Linear,
    /// Quintic smoothstep.
    Smooth,
}

impl Ramp {
    /// Evaluate this ramp for `x` between edges `a` and `b`.
    pub fn apply<T: Float + From<u8>>(self, a: T, b: T, x: T) -> T {
        match self {
            Self::Step => step(b, x),
            Self::Linear => linstep(a, b, x),
            Self::Smooth => smoothstep(a, b, x),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/ramp.rs"]
mod tests;
