/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    TooFewHits,
    ZeroXVariance,
    NonFinite,
}

impl Degeneracy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Degeneracy::TooFewHits => "fewer than 2 hits",
            Degeneracy::ZeroXVariance => "zero variance in X",
            Degeneracy::NonFinite => "non-finite coordinate or fitted parameter",
        }
    }
}

impl LineFit {
    /// Fits over the rows `rows` of the `x`/`y` columns.
    pub fn ols(x: &[f64], y: &[f64], rows: &[usize]) -> Result<Self, Degeneracy> {
        if rows.iter().any(|&r| !x[r].is_finite() || !y[r].is_finite()) {
            return Err(Degeneracy::NonFinite);
        }
        if rows.len() < 2 {
            return Err(Degeneracy::TooFewHits);
        }
        let n = rows.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for &r in rows {
            sum_x += x[r];
            sum_y += y[r];
        }
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for &r in rows {
            let dx = x[r] - mean_x;
            sxx += dx * dx;
            sxy += dx * (y[r] - mean_y);
        }
        if !sxx.is_finite() {
            return Err(Degeneracy::NonFinite);
        }
        if sxx <= 0.0 {
            return Err(Degeneracy::ZeroXVariance);
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(Degeneracy::NonFinite);
        }
        Ok(Self { slope, intercept })
    }

    /// Horizontal line through the mean of `y`: slope 0, intercept mean(y).
    /// Stands in for a fit with fewer than 2 hits or no spread in X.
    pub fn flat(y: &[f64], rows: &[usize]) -> Result<Self, Degeneracy> {
        if rows.is_empty() {
            return Err(Degeneracy::TooFewHits);
        }
        let mean_y = rows.iter().map(|&r| y[r]).sum::<f64>() / rows.len() as f64;
        if !mean_y.is_finite() {
            return Err(Degeneracy::NonFinite);
        }
        Ok(Self {
            slope: 0.0,
            intercept: mean_y,
        })
    }

    pub fn matches(&self, other: &LineFit, delta_k: f64, delta_b: f64) -> bool {
        (self.slope - other.slope).abs() <= delta_k
            && (self.intercept - other.intercept).abs() <= delta_b
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/fit.rs"]
mod tests;
