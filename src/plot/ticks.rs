//! Tick placement and default tick text.

/// Evenly spaced group positions `0, 1, .., n-1`.
pub fn arange(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Default numeric tick text: up to 4 decimals, trailing zeros and dot trimmed.
pub fn format_tick(v: f64) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // "-0" after trimming
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Y tick text: one decimal for the usual unit range, more for finer steps.
pub fn format_value_tick(v: f64, step: f64) -> String {
    let prec = if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

/// "Nice" tick positions covering `lo..=hi`, at most `max_ticks` of them.
///
/// Steps are drawn from 1, 2, 2.5, 5 times a power of ten.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi <= lo || max_ticks < 2 {
        return vec![];
    }
    let step = nice_step(lo, hi, max_ticks);
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let mut out = Vec::new();
    let mut k = first;
    while k <= last + 1e-9 {
        // snap to avoid 0.30000000000000004
        let v = (k * step * 1e9).round() / 1e9;
        out.push(v);
        k += 1.0;
    }
    out
}

/// The step chosen by [`nice_ticks`] for the same inputs.
pub fn nice_step(lo: f64, hi: f64, max_ticks: usize) -> f64 {
    let span = hi - lo;
    let slots = (max_ticks.max(2) - 1) as f64;
    let mag = 10f64.powf((span / slots).log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = m * mag;
        if span / step <= slots + 1e-9 {
            return step;
        }
    }
    10.0 * mag
}
