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
use crate::{QuantityError, QuantityResult};

quantity! {
    /// Elapsed time. Base unit: second.
    ///
    /// Converts from `std::time::Duration` and `chrono::Duration`, so rates can
    /// be multiplied by either; see `Duration::to_std` for the way back.
    Duration(DurationUnit) {
        dimensions: [0, 0, 1, 0, 0, 0, 0],
        base: Second,
        units: {
            Second(seconds) = linear(1.0) ["s", "sec"],
            Millisecond(milliseconds) = linear(1e-3) ["ms"],
            Microsecond(microseconds) = linear(1e-6) ["µs", "us"],
            Nanosecond(nanoseconds) = linear(1e-9) ["ns"],
            Minute(minutes) = linear(60.0) ["min"],
            Hour(hours) = linear(3_600.0) ["h", "hr"],
            Day(days) = linear(86_400.0) ["d", "day"],
            Week(weeks) = linear(604_800.0) ["wk", "week"],
        }
    }
}
supports_shift_ops!(Duration);
supports_scalar_ops!(Duration);
supports_cancellation!(Duration);
supports_absdiffeq!(Duration);

impl Duration {
    /// Convert into a `std::time::Duration`, which cannot be negative or
    /// non-finite.
    pub fn to_std(&self) -> QuantityResult<std::time::Duration> {
        let seconds = self.seconds();
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(QuantityError::invalid_argument(
                "duration",
                format!("{seconds} s has no std::time::Duration equivalent"),
            ));
        }
        std::time::Duration::try_from_secs_f64(seconds)
            .map_err(|e| QuantityError::invalid_argument("duration", e))
    }
}

impl From<std::time::Duration> for Duration {
    fn from(elapsed: std::time::Duration) -> Self {
        Self::from_seconds(elapsed.as_secs_f64())
    }
}

impl From<chrono::Duration> for Duration {
    fn from(elapsed: chrono::Duration) -> Self {
        match elapsed.num_nanoseconds() {
            Some(ns) => Self::from_seconds(ns as f64 / 1e9),
            // Too long for nanosecond precision.
            None => Self::from_seconds(elapsed.num_milliseconds() as f64 / 1e3),
        }
    }
}
