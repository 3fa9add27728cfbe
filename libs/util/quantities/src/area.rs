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
    Area(AreaUnit) {
        dimensions: [2, 0, 0, 0, 0, 0, 0],
        base: SquareMeter,
        units: {
            SquareMeter(square_meters) = linear(1.0) ["m²", "m^2"],
            SquareKilometer(square_kilometers) = linear(1e6) ["km²", "km^2"],
            SquareCentimeter(square_centimeters) = linear(1e-4) ["cm²", "cm^2"],
            SquareMillimeter(square_millimeters) = linear(1e-6) ["mm²", "mm^2"],
            SquareInch(square_inches) = linear(0.000_645_16) ["in²", "in^2"],
            SquareFoot(square_feet) = linear(0.092_903_04) ["ft²", "ft^2"],
            SquareYard(square_yards) = linear(0.836_127_36) ["yd²", "yd^2"],
            SquareMile(square_miles) = linear(2_589_988.110_336) ["mi²", "mi^2"],
            Acre(acres) = linear(4_046.856_422_4) ["ac"],
            Hectare(hectares) = linear(1e4) ["ha"],
        }
    }
}
supports_shift_ops!(Area);
supports_scalar_ops!(Area);
supports_cancellation!(Area);
supports_absdiffeq!(Area);
