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
use crate::{MolarMass, Molarity};

quantity! {
    Density(DensityUnit) {
        dimensions: [-3, 1, 0, 0, 0, 0, 0],
        base: KilogramPerCubicMeter,
        units: {
            KilogramPerCubicMeter(kilograms_per_cubic_meter) = linear(1.0) ["kg/m³", "kg/m^3"],
            GramPerCubicMeter(grams_per_cubic_meter) = linear(1e-3) ["g/m³", "g/m^3"],
            GramPerCubicCentimeter(grams_per_cubic_centimeter) = linear(1e3) ["g/cm³", "g/cm^3"],
            GramPerLiter(grams_per_liter) = linear(1.0) ["g/L", "g/l"],
            KilogramPerLiter(kilograms_per_liter) = linear(1e3) ["kg/L", "kg/l"],
            PoundPerCubicFoot(pounds_per_cubic_foot) = linear(16.018_463_373_960_14) ["lb/ft³", "lb/ft^3"],
            SlugPerCubicFoot(slugs_per_cubic_foot) = linear(515.378_818_486_5) ["slug/ft³", "slug/ft^3"],
        }
    }
}
supports_shift_ops!(Density);
supports_scalar_ops!(Density);
supports_cancellation!(Density);
supports_absdiffeq!(Density);

impl Density {
    /// Amount concentration of a substance with this mass concentration.
    pub fn to_molarity(&self, molar_mass: MolarMass) -> Molarity {
        *self / molar_mass
    }

    pub fn from_molarity(molarity: Molarity, molar_mass: MolarMass) -> Self {
        molarity * molar_mass
    }
}
