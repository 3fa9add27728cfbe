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
    Pressure(PressureUnit) {
        dimensions: [-1, 1, -2, 0, 0, 0, 0],
        base: Pascal,
        units: {
            Pascal(pascals) = linear(1.0) ["Pa"],
            Kilopascal(kilopascals) = linear(1e3) ["kPa"],
            Megapascal(megapascals) = linear(1e6) ["MPa"],
            Bar(bars) = linear(1e5) ["bar"],
            Millibar(millibars) = linear(1e2) ["mbar"],
            PoundForcePerSquareInch(pounds_force_per_square_inch) = linear(6_894.757_293_168) ["psi", "lb/in²"],
            Atmosphere(atmospheres) = linear(101_325.0) ["atm"],
        }
    }
}
supports_shift_ops!(Pressure);
supports_scalar_ops!(Pressure);
supports_cancellation!(Pressure);
supports_absdiffeq!(Pressure);
