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
    /// Amount of substance per volume.
    Molarity(MolarityUnit) {
        dimensions: [-3, 0, 0, 0, 0, 1, 0],
        base: MolePerCubicMeter,
        units: {
            MolePerCubicMeter(moles_per_cubic_meter) = linear(1.0) ["mol/m³", "mol/m^3"],
            MolePerLiter(moles_per_liter) = linear(1e3) ["mol/L", "M"],
            MillimolePerLiter(millimoles_per_liter) = linear(1.0) ["mmol/L", "mM"],
        }
    }
}
supports_shift_ops!(Molarity);
supports_scalar_ops!(Molarity);
supports_cancellation!(Molarity);
supports_absdiffeq!(Molarity);
