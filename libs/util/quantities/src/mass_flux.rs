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
    MassFlux(MassFluxUnit) {
        dimensions: [-2, 1, -1, 0, 0, 0, 0],
        base: KilogramPerSecondPerSquareMeter,
        units: {
            KilogramPerSecondPerSquareMeter(kilograms_per_second_per_square_meter) = linear(1.0) ["kg/(s·m²)", "kg/s/m²"],
            GramPerSecondPerSquareMeter(grams_per_second_per_square_meter) = linear(1e-3) ["g/(s·m²)", "g/s/m²"],
            KilogramPerHourPerSquareMeter(kilograms_per_hour_per_square_meter) = linear(1.0 / 3_600.0) ["kg/(h·m²)", "kg/h/m²"],
        }
    }
}
supports_shift_ops!(MassFlux);
supports_scalar_ops!(MassFlux);
supports_cancellation!(MassFlux);
supports_absdiffeq!(MassFlux);

#[cfg(test)]
mod test {
    use crate::{Density, Speed};
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_flux() {
        let flux = Density::from_kilograms_per_cubic_meter(1.2) * Speed::from_meters_per_second(10.0);
        assert_relative_eq!(flux.kilograms_per_second_per_square_meter(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(flux.kilograms_per_hour_per_square_meter(), 43_200.0, epsilon = 1e-9);
    }
}
