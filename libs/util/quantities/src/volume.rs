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
    Volume(VolumeUnit) {
        dimensions: [3, 0, 0, 0, 0, 0, 0],
        base: CubicMeter,
        units: {
            CubicMeter(cubic_meters) = linear(1.0) ["m³", "m^3"],
            Liter(liters) = linear(1e-3) ["L", "l"],
            Milliliter(milliliters) = linear(1e-6) ["mL", "ml"],
            CubicCentimeter(cubic_centimeters) = linear(1e-6) ["cm³", "cm^3", "cc"],
            CubicFoot(cubic_feet) = linear(0.028_316_846_592) ["ft³", "ft^3"],
            CubicInch(cubic_inches) = linear(1.638_706_4e-5) ["in³", "in^3"],
            UsGallon(us_gallons) = linear(0.003_785_411_784) ["gal (U.S.)", "gal"],
            ImperialGallon(imperial_gallons) = linear(0.004_546_09) ["gal (imp.)"],
        }
    }
}
supports_shift_ops!(Volume);
supports_scalar_ops!(Volume);
supports_cancellation!(Volume);
supports_absdiffeq!(Volume);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume() {
        assert_relative_eq!(Volume::from_cubic_meters(1.0).liters(), 1_000.0);
        assert_relative_eq!(Volume::from_us_gallons(1.0).cubic_inches(), 231.0, epsilon = 1e-9);
        assert_relative_eq!(Volume::from_imperial_gallons(1.0).liters(), 4.546_09, epsilon = 1e-12);
        assert_relative_eq!(
            Volume::from_milliliters(1.0).cubic_centimeters(),
            1.0
        );
    }

    #[test]
    fn test_volume_sum_keeps_left_unit() {
        let v = Volume::from_liters(1.0) + Volume::from_milliliters(250.0);
        assert_eq!(v.unit(), VolumeUnit::Liter);
        assert_relative_eq!(v.value(), 1.25, epsilon = 1e-12);
    }
}
