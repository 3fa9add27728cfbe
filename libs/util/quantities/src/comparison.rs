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
use crate::{QuantityError, QuantityResult};
use std::{fmt, str::FromStr};

/// How a tolerance is interpreted when comparing two values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparisonType {
    /// The tolerance is a fraction of the reference (left) value.
    Relative,
    /// The tolerance is in the unit of the reference value.
    Absolute,
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Relative => f.write_str("relative"),
            Self::Absolute => f.write_str("absolute"),
        }
    }
}

impl FromStr for ComparisonType {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if unicase::eq_ascii(s, "relative") {
            Ok(Self::Relative)
        } else if unicase::eq_ascii(s, "absolute") {
            Ok(Self::Absolute)
        } else {
            Err(QuantityError::parse(s, "expected relative or absolute"))
        }
    }
}

/// Whether `other` is within `tolerance` of `reference`. Both values must
/// already be in the same unit.
pub fn equals(
    reference: f64,
    other: f64,
    tolerance: f64,
    comparison_type: ComparisonType,
) -> QuantityResult<bool> {
    if !(tolerance >= 0.0) {
        return Err(QuantityError::invalid_argument(
            "tolerance",
            format!("must be zero or positive, got {tolerance}"),
        ));
    }
    if reference == other {
        return Ok(true);
    }
    let delta = (reference - other).abs();
    Ok(match comparison_type {
        ComparisonType::Absolute => delta <= tolerance,
        ComparisonType::Relative => delta <= tolerance * reference.abs(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Length, LengthUnit, Quantity};

    #[test]
    fn test_negative_tolerance_rejected() {
        for t in [-1e-12, -1.0, f64::NAN] {
            assert!(matches!(
                equals(1.0, 1.0, t, ComparisonType::Absolute),
                Err(QuantityError::InvalidArgument {
                    name: "tolerance",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_zero_tolerance_is_exact() {
        assert!(equals(3.5, 3.5, 0.0, ComparisonType::Absolute).unwrap());
        assert!(equals(3.5, 3.5, 0.0, ComparisonType::Relative).unwrap());
        assert!(!equals(3.5, 3.5 + 1e-12, 0.0, ComparisonType::Absolute).unwrap());
        assert!(equals(f64::INFINITY, f64::INFINITY, 0.0, ComparisonType::Relative).unwrap());
    }

    #[test]
    fn test_nan_never_equal() {
        assert!(!equals(f64::NAN, f64::NAN, 1.0, ComparisonType::Absolute).unwrap());
        assert!(!equals(1.0, f64::NAN, 1e9, ComparisonType::Relative).unwrap());
    }

    #[test]
    fn test_relative_reference_is_left() {
        // |100 - 110| = 10 is 10% of 100 but only ~9.1% of 110.
        assert!(equals(100.0, 110.0, 0.1, ComparisonType::Relative).unwrap());
        assert!(!equals(110.0, 100.0, 0.09, ComparisonType::Relative).unwrap());
        assert!(equals(110.0, 100.0, 0.091, ComparisonType::Relative).unwrap());
    }

    #[test]
    fn test_quantities_convert_before_comparing() {
        let two_m = Length::from_meters(2.0);
        let fifty_in = Length::from_inches(50.0);
        assert!(!two_m
            .equals_with_tolerance(&fifty_in, 0.01, ComparisonType::Relative)
            .unwrap());
        assert!(two_m
            .equals_with_tolerance(&fifty_in, 0.75, ComparisonType::Absolute)
            .unwrap());
        assert!(two_m
            .equals_with_tolerance(&two_m.to_unit(LengthUnit::Foot), 1e-12, ComparisonType::Relative)
            .unwrap());
    }

    #[test]
    fn test_parse_comparison_type() {
        assert_eq!(
            "Relative".parse::<ComparisonType>().unwrap(),
            ComparisonType::Relative
        );
        assert_eq!(
            "absolute".parse::<ComparisonType>().unwrap(),
            ComparisonType::Absolute
        );
        assert!("fuzzy".parse::<ComparisonType>().is_err());
    }
}
