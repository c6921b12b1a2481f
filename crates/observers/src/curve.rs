//! Sampling of reference curves for cobweb diagrams.

use cobweb_core::Model;

/// Returns `count` evenly spaced values from `start` to `end`, inclusive.
///
/// A count of one yields `[start]`; a count of zero yields nothing.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the last sample so rounding never overshoots the range.
            values[count - 1] = end;
            values
        }
    }
}

/// Samples `y = f(x)` at `count` evenly spaced points over `range`.
///
/// Points where `f` fails or returns a non-finite value are skipped, so a
/// curve can be drawn over a range that extends past the domain of `f`.
#[must_use]
pub fn sample<M>(f: &M, range: [f64; 2], count: usize) -> Vec<[f64; 2]>
where
    M: Model<Input = f64, Output = f64>,
{
    linspace(range[0], range[1], count)
        .into_iter()
        .filter_map(|x| match f.call(&x) {
            Ok(y) if y.is_finite() => Some([x, y]),
            _ => None,
        })
        .collect()
}

/// Returns the identity line `y = x` sampled over `range`.
#[must_use]
pub fn identity(range: [f64; 2], count: usize) -> Vec<[f64; 2]> {
    linspace(range[0], range[1], count)
        .into_iter()
        .map(|x| [x, x])
        .collect()
}
