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

// Grams in one pound.
const LB: f64 = 453.592_37;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

quantity! {
    /// Mass passing per unit of time. The base unit is the gram per second,
    /// not the SI-coherent kilogram per second; rules combining mass flow with
    /// other quantities account for the factor of a thousand.
    MassFlow(MassFlowUnit) {
        dimensions: [0, 1, -1, 0, 0, 0, 0],
        base: GramPerSecond,
        units: {
            GramPerSecond(grams_per_second) = linear(1.0) ["g/s"],
            NanogramPerSecond(nanograms_per_second) = linear(1e-9) ["ng/s"],
            MicrogramPerSecond(micrograms_per_second) = linear(1e-6) ["µg/s"],
            MilligramPerSecond(milligrams_per_second) = linear(1e-3) ["mg/s"],
            CentigramPerSecond(centigrams_per_second) = linear(1e-2) ["cg/s"],
            DecigramPerSecond(decigrams_per_second) = linear(1e-1) ["dg/s"],
            DecagramPerSecond(decagrams_per_second) = linear(1e1) ["dag/s"],
            HectogramPerSecond(hectograms_per_second) = linear(1e2) ["hg/s"],
            KilogramPerSecond(kilograms_per_second) = linear(1e3) ["kg/s"],
            KilogramPerMinute(kilograms_per_minute) = linear(1e3 / MINUTE) ["kg/min"],
            GramPerHour(grams_per_hour) = linear(1.0 / HOUR) ["g/h"],
            KilogramPerHour(kilograms_per_hour) = linear(1e3 / HOUR) ["kg/h"],
            TonnePerHour(tonnes_per_hour) = linear(1e6 / HOUR) ["t/h"],
            ShortTonPerHour(short_tons_per_hour) = linear(2_000.0 * LB / HOUR) ["short tn/h"],
            NanogramPerDay(nanograms_per_day) = linear(1e-9 / DAY) ["ng/d"],
            MicrogramPerDay(micrograms_per_day) = linear(1e-6 / DAY) ["µg/d"],
            MilligramPerDay(milligrams_per_day) = linear(1e-3 / DAY) ["mg/d"],
            CentigramPerDay(centigrams_per_day) = linear(1e-2 / DAY) ["cg/d"],
            DecigramPerDay(decigrams_per_day) = linear(1e-1 / DAY) ["dg/d"],
            GramPerDay(grams_per_day) = linear(1.0 / DAY) ["g/d"],
            DecagramPerDay(decagrams_per_day) = linear(1e1 / DAY) ["dag/d"],
            HectogramPerDay(hectograms_per_day) = linear(1e2 / DAY) ["hg/d"],
            KilogramPerDay(kilograms_per_day) = linear(1e3 / DAY) ["kg/d"],
            MegagramPerDay(megagrams_per_day) = linear(1e6 / DAY) ["Mg/d"],
            TonnePerDay(tonnes_per_day) = linear(1e6 / DAY) ["t/d"],
            PoundPerMinute(pounds_per_minute) = linear(LB / MINUTE) ["lb/min"],
            PoundPerHour(pounds_per_hour) = linear(LB / HOUR) ["lb/h"],
            PoundPerDay(pounds_per_day) = linear(LB / DAY) ["lb/d"],
            MegapoundPerMinute(megapounds_per_minute) = linear(1e6 * LB / MINUTE) ["Mlb/min"],
            MegapoundPerHour(megapounds_per_hour) = linear(1e6 * LB / HOUR) ["Mlb/h"],
            MegapoundPerDay(megapounds_per_day) = linear(1e6 * LB / DAY) ["Mlb/d"],
        }
    }
}
supports_shift_ops!(MassFlow);
supports_scalar_ops!(MassFlow);
supports_cancellation!(MassFlow);
supports_absdiffeq!(MassFlow);
