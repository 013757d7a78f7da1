// File: crates/timeline-core/src/grid.rs
// Summary: Tick layout helpers ("nice" round-number ticks, d3-compatible).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Returns `(i1, i2, inc)`; a negative `inc` means ticks are `i / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (i1, i2, inc) = if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let mut i1 = (start * inv).round();
        let mut i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        (i1, i2, -inv)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        (i1, i2, inc)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Approximately `count` round-numbered ticks covering `[start, stop]`.
/// `[1980, 2017]` with 38 requested yields every year.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) || !inc.is_finite() || inc == 0.0 { return Vec::new(); }
    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { ticks.reverse(); }
    ticks
}
