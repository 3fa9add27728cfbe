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
use std::f64::consts::PI;

quantity! {
    /// Change in rotational speed over time. Base unit: radian per second
    /// squared.
    RotationalAcceleration(RotationalAccelerationUnit) {
        dimensions: [0, 0, -2, 0, 0, 0, 0],
        base: RadianPerSecondSquared,
        units: {
            RadianPerSecondSquared(radians_per_second_squared) = linear(1.0) ["rad/s²", "rad/s^2"],
            DegreePerSecondSquared(degrees_per_second_squared) = linear(PI / 180.0) ["°/s²", "deg/s²", "deg/s^2"],
            RevolutionPerMinutePerSecond(revolutions_per_minute_per_second) = linear(2.0 * PI / 60.0) ["rpm/s"],
        }
    }
}
supports_shift_ops!(RotationalAcceleration);
supports_scalar_ops!(RotationalAcceleration);
supports_cancellation!(RotationalAcceleration);
supports_absdiffeq!(RotationalAcceleration);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ComparisonType, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_to_degrees() {
        let a = RotationalAcceleration::from_radians_per_second_squared(4.0);
        assert_relative_eq!(a.degrees_per_second_squared(), 229.183, epsilon = 0.001);
        assert_relative_eq!(
            a.as_unit(RotationalAccelerationUnit::RevolutionPerMinutePerSecond),
            4.0 * 60.0 / (2.0 * PI),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_identity() {
        let a = RotationalAcceleration::from_degrees_per_second_squared(0.1 + 0.2);
        assert_eq!(a.degrees_per_second_squared(), 0.1 + 0.2);
        assert_eq!(a.to_unit(a.unit()).value(), a.value());
    }

    #[test]
    fn test_limits() {
        assert_eq!(RotationalAcceleration::zero().value(), 0.0);
        assert_eq!(
            RotationalAcceleration::zero().unit(),
            RotationalAccelerationUnit::RadianPerSecondSquared
        );
        assert_eq!(RotationalAcceleration::max_value().value(), f64::MAX);
        assert_eq!(RotationalAcceleration::min_value().value(), f64::MIN);
    }

    #[test]
    fn test_equals_with_tolerance() {
        let a = RotationalAcceleration::from_radians_per_second_squared(1.0);
        let b = RotationalAcceleration::from_degrees_per_second_squared(57.3);
        assert!(a
            .equals_with_tolerance(&b, 1e-3, ComparisonType::Relative)
            .unwrap());
        assert!(!a
            .equals_with_tolerance(&b, 1e-5, ComparisonType::Relative)
            .unwrap());
        assert!(a
            .equals_with_tolerance(&b, -1.0, ComparisonType::Absolute)
            .is_err());
    }

    #[test]
    fn test_parse_and_format() {
        let a: RotationalAcceleration = "12.5 rpm/s".parse().unwrap();
        assert_eq!(a.unit(), RotationalAccelerationUnit::RevolutionPerMinutePerSecond);
        assert_eq!(a.to_string(), "12.5 rpm/s");
    }
}
