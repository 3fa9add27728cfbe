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
    Speed(SpeedUnit) {
        dimensions: [1, 0, -1, 0, 0, 0, 0],
        base: MeterPerSecond,
        units: {
            MeterPerSecond(meters_per_second) = linear(1.0) ["m/s"],
            KilometerPerHour(kilometers_per_hour) = linear(1.0 / 3.6) ["km/h"],
            FootPerSecond(feet_per_second) = linear(0.3048) ["ft/s"],
            MilePerHour(miles_per_hour) = linear(0.447_04) ["mph"],
            Knot(knots) = linear(1_852.0 / 3_600.0) ["kn", "kt"],
        }
    }
}
supports_shift_ops!(Speed);
supports_scalar_ops!(Speed);
supports_cancellation!(Speed);
supports_absdiffeq!(Speed);
