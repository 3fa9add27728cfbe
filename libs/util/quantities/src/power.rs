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
    Power(PowerUnit) {
        dimensions: [2, 1, -3, 0, 0, 0, 0],
        base: Watt,
        units: {
            Watt(watts) = linear(1.0) ["W"],
            Kilowatt(kilowatts) = linear(1e3) ["kW"],
            Megawatt(megawatts) = linear(1e6) ["MW"],
            MechanicalHorsepower(mechanical_horsepower) = linear(745.699_871_582_270_22) ["hp(I)", "hp"],
            BritishThermalUnitPerHour(british_thermal_units_per_hour) = linear(0.293_071_070_172_222) ["BTU/h"],
        }
    }
}
supports_shift_ops!(Power);
supports_scalar_ops!(Power);
supports_cancellation!(Power);
supports_absdiffeq!(Power);
