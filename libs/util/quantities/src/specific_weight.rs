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
    SpecificWeight(SpecificWeightUnit) {
        dimensions: [-2, 1, -2, 0, 0, 0, 0],
        base: NewtonPerCubicMeter,
        units: {
            NewtonPerCubicMeter(newtons_per_cubic_meter) = linear(1.0) ["N/m³", "N/m^3"],
            KilonewtonPerCubicMeter(kilonewtons_per_cubic_meter) = linear(1e3) ["kN/m³", "kN/m^3"],
            PoundForcePerCubicFoot(pounds_force_per_cubic_foot) = linear(157.087_463_844) ["lbf/ft³", "lbf/ft^3"],
        }
    }
}
supports_shift_ops!(SpecificWeight);
supports_scalar_ops!(SpecificWeight);
supports_cancellation!(SpecificWeight);
supports_absdiffeq!(SpecificWeight);
