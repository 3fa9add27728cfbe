// This file is part of Dimensional.
//
// Dimensional is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Dimensional is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Dimensional.  If not, see <http://www.gnu.org/licenses/>.
use crate::{AnyUnit, QuantityError, QuantityResult, Unit};

/// How a unit relates to the base unit of its quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conversion {
    /// `base = value * scale`
    Linear { scale: f64 },
    /// `base = value * scale + offset`, e.g. degrees Celsius over kelvin.
    Affine { scale: f64, offset: f64 },
}

impl Conversion {
    pub const fn linear(scale: f64) -> Self {
        Self::Linear { scale }
    }

    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self::Affine { scale, offset }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear { .. })
    }

    pub fn scale(&self) -> f64 {
        match *self {
            Self::Linear { scale } => scale,
            Self::Affine { scale, .. } => scale,
        }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Self::Linear { scale } => value * scale,
            Self::Affine { scale, offset } => value * scale + offset,
        }
    }

    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Self::Linear { scale } => base / scale,
            Self::Affine { scale, offset } => (base - offset) / scale,
        }
    }
}

pub fn to_base<U: Unit>(value: f64, unit: U) -> f64 {
    unit.conversion().to_base(value)
}

pub fn from_base<U: Unit>(base: f64, unit: U) -> f64 {
    unit.conversion().from_base(base)
}

/// Convert `value` from one unit to another of the same quantity. Converting
/// into the same unit returns `value` untouched.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    from_base(to_base(value, from), to)
}

/// Convert between runtime-selected units. Both units must belong to the same
/// quantity.
pub fn convert_any(value: f64, from: AnyUnit, to: AnyUnit) -> QuantityResult<f64> {
    if from.kind() != to.kind() {
        return Err(QuantityError::UnsupportedUnit {
            quantity: from.kind(),
            unit: to,
        });
    }
    if from == to {
        return Ok(value);
    }
    Ok(to.conversion().from_base(from.conversion().to_base(value)))
}
