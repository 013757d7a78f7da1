// File: crates/timeline-core/src/scale.rs
// Summary: Linear and square-root scales mapping data values to pixels.

/// Continuous linear map from `domain` onto `range`. Either interval may be
/// reversed; the year scale uses a reversed range so later years sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

/// Month index (1.0 = start of January, 13.0 = end of December) to x pixels.
pub type MonthScale = LinearScale;
/// Year to y pixels, first year at the bottom of the plot.
pub type YearScale = LinearScale;

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// A zero-width domain maps everything to the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < 1e-12 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

/// Power scale with exponent 0.5: glyph area grows linearly with the value
/// when the domain and range both start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    linear: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let linear = LinearScale::new((sqrt0(domain.0), sqrt0(domain.1)), range);
        Self { domain, linear }
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range
    }

    /// Negative inputs are treated as zero.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        self.linear.map(sqrt0(v))
    }

    pub fn invert(&self, px: f64) -> f64 {
        let s = self.linear.invert(px);
        s * s
    }
}

#[inline]
fn sqrt0(v: f64) -> f64 {
    v.max(0.0).sqrt()
}
