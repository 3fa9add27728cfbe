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
    MolarMass(MolarMassUnit) {
        dimensions: [0, 1, 0, 0, 0, -1, 0],
        base: KilogramPerMole,
        units: {
            KilogramPerMole(kilograms_per_mole) = linear(1.0) ["kg/mol"],
            GramPerMole(grams_per_mole) = linear(1e-3) ["g/mol"],
        }
    }
}
supports_shift_ops!(MolarMass);
supports_scalar_ops!(MolarMass);
supports_cancellation!(MolarMass);
supports_absdiffeq!(MolarMass);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_molar_mass() {
        assert_relative_eq!(MolarMass::from_kilograms_per_mole(0.018).grams_per_mole(), 18.0, epsilon = 1e-12);
    }
}
