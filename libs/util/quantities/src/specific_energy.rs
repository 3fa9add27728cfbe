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
    SpecificEnergy(SpecificEnergyUnit) {
        dimensions: [2, 0, -2, 0, 0, 0, 0],
        base: JoulePerKilogram,
        units: {
            JoulePerKilogram(joules_per_kilogram) = linear(1.0) ["J/kg"],
            KilojoulePerKilogram(kilojoules_per_kilogram) = linear(1e3) ["kJ/kg"],
            MegajoulePerKilogram(megajoules_per_kilogram) = linear(1e6) ["MJ/kg"],
            WattHourPerKilogram(watt_hours_per_kilogram) = linear(3_600.0) ["Wh/kg"],
            KilowattHourPerKilogram(kilowatt_hours_per_kilogram) = linear(3.6e6) ["kWh/kg"],
            BtuPerPound(btu_per_pound) = linear(2_326.0) ["btu/lb", "BTU/lb"],
        }
    }
}
supports_shift_ops!(SpecificEnergy);
supports_scalar_ops!(SpecificEnergy);
supports_cancellation!(SpecificEnergy);
supports_absdiffeq!(SpecificEnergy);
