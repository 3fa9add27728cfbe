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
    Energy(EnergyUnit) {
        dimensions: [2, 1, -2, 0, 0, 0, 0],
        base: Joule,
        units: {
            Joule(joules) = linear(1.0) ["J"],
            Kilojoule(kilojoules) = linear(1e3) ["kJ"],
            Megajoule(megajoules) = linear(1e6) ["MJ"],
            WattHour(watt_hours) = linear(3_600.0) ["Wh"],
            KilowattHour(kilowatt_hours) = linear(3.6e6) ["kWh"],
            Calorie(calories) = linear(4.184) ["cal"],
            Kilocalorie(kilocalories) = linear(4_184.0) ["kcal"],
            BritishThermalUnit(british_thermal_units) = linear(1_055.055_852_62) ["BTU"],
        }
    }
}
supports_shift_ops!(Energy);
supports_scalar_ops!(Energy);
supports_cancellation!(Energy);
supports_absdiffeq!(Energy);
