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
use std::f64::consts::PI;

quantity! {
    RotationalSpeed(RotationalSpeedUnit) {
        dimensions: [0, 0, -1, 0, 0, 0, 0],
        base: RadianPerSecond,
        units: {
            RadianPerSecond(radians_per_second) = linear(1.0) ["rad/s"],
            DegreePerSecond(degrees_per_second) = linear(PI / 180.0) ["°/s", "deg/s"],
            RevolutionPerMinute(revolutions_per_minute) = linear(2.0 * PI / 60.0) ["rpm", "r/min"],
            RevolutionPerSecond(revolutions_per_second) = linear(2.0 * PI) ["r/s"],
        }
    }
}
supports_shift_ops!(RotationalSpeed);
supports_scalar_ops!(RotationalSpeed);
supports_cancellation!(RotationalSpeed);
supports_absdiffeq!(RotationalSpeed);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotational_speed() {
        assert_relative_eq!(
            RotationalSpeed::from_revolutions_per_second(1.0).revolutions_per_minute(),
            60.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            RotationalSpeed::from_degrees_per_second(360.0).radians_per_second(),
            2.0 * PI,
            epsilon = 1e-12
        );
    }
}
