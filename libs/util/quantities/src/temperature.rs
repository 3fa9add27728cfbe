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
quantity! {
    /// Absolute temperature. Celsius and Fahrenheit are offset from kelvin, so
    /// two temperatures cannot be added; subtracting them gives a
    /// `TemperatureDelta`, which can in turn be added to a temperature.
    Temperature(TemperatureUnit) {
        dimensions: [0, 0, 0, 0, 1, 0, 0],
        base: Kelvin,
        units: {
            Kelvin(kelvins) = linear(1.0) ["K"],
            DegreeCelsius(degrees_celsius) = affine(1.0, 273.15) ["°C"],
            DegreeFahrenheit(degrees_fahrenheit) = affine(5.0 / 9.0, 459.67 * 5.0 / 9.0) ["°F"],
            DegreeRankine(degrees_rankine) = linear(5.0 / 9.0) ["°R"],
        }
    }
}
supports_absdiffeq!(Temperature);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ComparisonType, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_scales() {
        let body = Temperature::from_degrees_fahrenheit(98.6);
        assert_relative_eq!(body.degrees_celsius(), 37.0, epsilon = 1e-9);
        assert_relative_eq!(body.kelvins(), 310.15, epsilon = 1e-9);
        assert_relative_eq!(
            Temperature::from_kelvins(0.0).degrees_fahrenheit(),
            -459.67,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            Temperature::from_degrees_rankine(491.67).degrees_celsius(),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_temperature_comparison() {
        assert!(Temperature::from_degrees_celsius(20.0) > Temperature::from_degrees_fahrenheit(60.0));
        assert!(Temperature::from_degrees_celsius(-40.0)
            .equals_with_tolerance(
                &Temperature::from_degrees_fahrenheit(-40.0),
                1e-9,
                ComparisonType::Absolute
            )
            .unwrap());
    }

    #[test]
    fn test_zero_is_absolute_zero() {
        assert_eq!(Temperature::zero().unit(), TemperatureUnit::Kelvin);
        assert_eq!(Temperature::zero().value(), 0.0);
    }
}
