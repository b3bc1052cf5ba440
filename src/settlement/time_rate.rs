use crate::StrError;
use std::f64::consts::PI;

/// Number of terms of the series solution of Terzaghi's equation
pub const N_TERMS_CONSOLIDATION: usize = 50;

/// Returns the average degree of consolidation U for a given time factor Tv
///
/// ```text
/// U = 1 - Σ 2/M²·exp(-M²·Tv)    with M = π·(2m + 1)/2
/// ```
pub fn degree_of_consolidation(tv: f64) -> f64 {
    if tv <= 0.0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for m in 0..N_TERMS_CONSOLIDATION {
        let mm = PI * (2 * m + 1) as f64 / 2.0;
        sum += 2.0 / (mm * mm) * f64::exp(-mm * mm * tv);
    }
    1.0 - sum
}

/// Calculates the settlement along time due to primary consolidation
///
/// # Input
///
/// * `sc` -- final consolidation settlement
/// * `cv` -- coefficient of consolidation (m²/year)
/// * `h_drainage` -- length of the drainage path (m)
/// * `times` -- times (years)
///
/// # Output
///
/// Returns the pairs `(t, St)` with St in the units of `sc`
pub fn time_rate_settlement(sc: f64, cv: f64, h_drainage: f64, times: &[f64]) -> Result<Vec<(f64, f64)>, StrError> {
    if cv <= 0.0 {
        return Err("coefficient of consolidation must be > 0.0");
    }
    if h_drainage <= 0.0 {
        return Err("drainage length must be > 0.0");
    }
    let results = times
        .iter()
        .map(|t| {
            let tv = cv * t / (h_drainage * h_drainage);
            (*t, sc * degree_of_consolidation(tv))
        })
        .collect();
    Ok(results)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
