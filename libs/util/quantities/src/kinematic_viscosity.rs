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
    KinematicViscosity(KinematicViscosityUnit) {
        dimensions: [2, 0, -1, 0, 0, 0, 0],
        base: SquareMeterPerSecond,
        units: {
            SquareMeterPerSecond(square_meters_per_second) = linear(1.0) ["m²/s", "m^2/s"],
            Stokes(stokes) = linear(1e-4) ["St"],
            Centistokes(centistokes) = linear(1e-6) ["cSt"],
        }
    }
}
supports_shift_ops!(KinematicViscosity);
supports_scalar_ops!(KinematicViscosity);
supports_cancellation!(KinematicViscosity);
supports_absdiffeq!(KinematicViscosity);
