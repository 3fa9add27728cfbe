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
    Acceleration(AccelerationUnit) {
        dimensions: [1, 0, -2, 0, 0, 0, 0],
        base: MeterPerSecondSquared,
        units: {
            MeterPerSecondSquared(meters_per_second_squared) = linear(1.0) ["m/s²", "m/s^2"],
            KilometerPerSecondSquared(kilometers_per_second_squared) = linear(1e3) ["km/s²", "km/s^2"],
            FootPerSecondSquared(feet_per_second_squared) = linear(0.3048) ["ft/s²", "ft/s^2"],
            StandardGravity(standard_gravity) = linear(9.806_65) ["g"],
        }
    }
}
supports_shift_ops!(Acceleration);
supports_scalar_ops!(Acceleration);
supports_cancellation!(Acceleration);
supports_absdiffeq!(Acceleration);
