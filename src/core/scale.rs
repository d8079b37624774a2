use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ScatterError, ScatterResult};

/// Inline storage for one axis worth of tick values.
pub type TickValues = SmallVec<[f64; 16]>;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical axis plots larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ScatterError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value onto the range. Values outside the domain
    /// extrapolate linearly.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back onto the domain.
    ///
    /// A collapsed range (`range_start == range_end`) has no inverse and
    /// yields the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns a copy with the same range and a new domain.
    pub fn with_domain(self, domain_start: f64, domain_end: f64) -> ScatterResult<Self> {
        Self::new(
            (domain_start, domain_end),
            (self.range_start, self.range_end),
        )
    }

    /// Human-friendly tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        ticks(self.domain_start, self.domain_end, count as f64)
    }

    /// Step between consecutive ticks for `count`, signed like the domain.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count as f64)
    }
}

struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec {
        first,
        last,
        increment,
    }
}

fn ticks(start: f64, stop: f64, count: f64) -> TickValues {
    let mut values = TickValues::new();
    if !start.is_finite() || !stop.is_finite() || count <= 0.0 {
        return values;
    }
    if start == stop {
        values.push(start);
        return values;
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(low, high, count);
    if !(spec.last >= spec.first) || !spec.increment.is_finite() {
        return values;
    }

    let n = (spec.last - spec.first + 1.0) as usize;
    for i in 0..n {
        let index = spec.first + i as f64;
        let value = if spec.increment < 0.0 {
            index / -spec.increment
        } else {
            index * spec.increment
        };
        values.push(value);
    }
    if reverse {
        values.reverse();
    }
    values
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(low, high, count);
    let step = if spec.increment < 0.0 {
        1.0 / -spec.increment
    } else {
        spec.increment
    };
    if reverse { -step } else { step }
}

/// Formats a tick value with the fixed precision implied by `step` and
/// thousands separators, matching the usual axis label convention.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = step_precision(step);
    let mut text = format!("{value:.precision$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    group_thousands(&text)
}

fn step_precision(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let step = step.abs();
    (0..=15)
        .find(|&digits| {
            let scaled = step * 10f64.powi(digits as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(15)
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_pick_round_steps() {
        let scale = LinearScale::new((0.0, 13.0), (0.0, 1100.0)).expect("valid scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.as_slice(), &[
            0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0
        ]);
    }

    #[test]
    fn ticks_handle_fractional_domains() {
        let ticks = ticks(0.0, 1.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(tick_step(0.0, 1.0, 10.0), 0.1);
    }

    #[test]
    fn ticks_follow_reversed_domain() {
        let ticks = ticks(4.0, 0.0, 4.0);
        assert_eq!(ticks.as_slice(), &[4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn tick_format_groups_and_trims() {
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-1234567.0, 1.0), "-1,234,567");
    }

    #[test]
    fn invert_collapsed_range_returns_domain_start() {
        let scale = LinearScale::new((2.0, 5.0), (10.0, 10.0)).expect("valid scale");
        assert_eq!(scale.invert(42.0), 2.0);
    }
}
