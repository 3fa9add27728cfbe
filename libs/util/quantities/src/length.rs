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
    /// Distance along one axis. Base unit: meter.
    Length(LengthUnit) {
        dimensions: [1, 0, 0, 0, 0, 0, 0],
        base: Meter,
        units: {
            Meter(meters) = linear(1.0) ["m"],
            Kilometer(kilometers) = linear(1e3) ["km"],
            Centimeter(centimeters) = linear(1e-2) ["cm"],
            Millimeter(millimeters) = linear(1e-3) ["mm"],
            Micrometer(micrometers) = linear(1e-6) ["µm", "um"],
            Inch(inches) = linear(0.0254) ["in"],
            Foot(feet) = linear(0.3048) ["ft"],
            Yard(yards) = linear(0.9144) ["yd"],
            Mile(miles) = linear(1_609.344) ["mi"],
            NauticalMile(nautical_miles) = linear(1_852.0) ["NM", "nmi"],
        }
    }
}
supports_shift_ops!(Length);
supports_scalar_ops!(Length);
supports_cancellation!(Length);
supports_absdiffeq!(Length);

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_length_conversions() {
        let mi = Length::from_miles(1.0);
        assert_relative_eq!(mi.meters(), 1_609.344);
        assert_relative_eq!(mi.feet(), 5_280.0, epsilon = 1e-9);
        assert_relative_eq!(Length::from_feet(1.0).inches(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(Length::from_nautical_miles(1.0).kilometers(), 1.852);
    }

    #[test]
    fn test_length_shift() {
        let l = Length::from_meters(1.0) + Length::from_centimeters(50.0);
        assert_eq!(l.unit(), LengthUnit::Meter);
        assert_abs_diff_eq!(l, Length::from_meters(1.5), epsilon = 1e-12);

        let mut l = Length::from_feet(3.0);
        l -= Length::from_inches(12.0);
        assert_eq!(l.unit(), LengthUnit::Foot);
        assert_abs_diff_eq!(l.value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_scalar() {
        let l = 2.0 * Length::from_yards(3.0) / 4.0;
        assert_eq!(l.unit(), LengthUnit::Yard);
        assert_eq!(l.value(), 1.5);
        assert_eq!((-l).value(), -1.5);
    }

    #[test]
    fn test_length_cancel() {
        assert_relative_eq!(Length::from_feet(6.0) / Length::from_inches(36.0), 2.0, epsilon = 1e-12);
    }
}
