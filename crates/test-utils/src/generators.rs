//! Test data generators for creating synthetic gridded climate data.
//!
//! These generators create predictable, verifiable data patterns used
//! across the test suites. They return raw coordinate/value vectors so any
//! crate can wrap them in its own types.

/// Ascending coordinate vector with `n` points starting at `first` with the
/// given spacing.
pub fn coord_vector(n: usize, first: f64, step: f64) -> Vec<f64> {
    (0..n).map(|i| first + step * i as f64).collect()
}

/// Flat value vector where entry `i` equals `i as f64`.
///
/// This makes it easy to verify that data survives a write/read round trip:
/// the flat index is the value.
pub fn sequential_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}

/// Flat value vector with `value = i as f64` except NaN at the given flat
/// indices.
pub fn values_with_missing(len: usize, missing: &[usize]) -> Vec<f64> {
    let mut data = sequential_values(len);
    for &idx in missing {
        if idx < len {
            data[idx] = f64::NAN;
        }
    }
    data
}

/// Flat `[nlat, nlon]` trend grid with a smooth latitude-dependent pattern,
/// resembling a real warming-rate product.
pub fn trend_values(nlon: usize, nlat: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nlon * nlat);
    for row in 0..nlat {
        let lat_factor = 1.0 - (2.0 * row as f64 / nlat.max(1) as f64 - 1.0).abs();
        for col in 0..nlon {
            let lon_factor = col as f64 / nlon.max(1) as f64;
            data.push(0.005 + 0.03 * lat_factor + 0.002 * lon_factor);
        }
    }
    data
}

/// Flat `[t, nlat, nlon]` SST cube where each cell warms linearly in time:
/// `value = base(row, col) + slope * t`.
pub fn warming_cube(nlon: usize, nlat: usize, t: usize, slope: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(t * nlat * nlon);
    for step in 0..t {
        for row in 0..nlat {
            for col in 0..nlon {
                let base = (row * nlon + col) as f64 / 10.0;
                data.push(base + slope * step as f64);
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_vector() {
        let lon = coord_vector(4, -177.5, 5.0);
        assert_eq!(lon, vec![-177.5, -172.5, -167.5, -162.5]);
    }

    #[test]
    fn test_sequential_values() {
        let data = sequential_values(5);
        assert_eq!(data, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_values_with_missing() {
        let data = values_with_missing(4, &[1, 3, 99]);
        assert_eq!(data[0], 0.0);
        assert!(data[1].is_nan());
        assert_eq!(data[2], 2.0);
        assert!(data[3].is_nan());
    }

    #[test]
    fn test_trend_values_peak_at_equator() {
        let data = trend_values(2, 5);
        // Middle row has the largest latitude factor
        assert!(data[2 * 2] > data[0]);
        assert!(data[2 * 2] > data[4 * 2]);
    }

    #[test]
    fn test_warming_cube_is_linear_in_time() {
        let data = warming_cube(2, 2, 3, 0.5);
        assert_eq!(data.len(), 12);
        // Same cell, consecutive steps
        let cell = |t: usize| data[t * 4 + 3];
        assert!((cell(1) - cell(0) - 0.5).abs() < 1e-12);
        assert!((cell(2) - cell(1) - 0.5).abs() < 1e-12);
    }
}
