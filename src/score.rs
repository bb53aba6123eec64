//! Row-level scoring of a (temperature, humidity) sensor pair.
//!
//! Three interchangeable scoring methods are provided:
//!
//! - **Mean**: arithmetic mean of temperature [°C] and relative humidity [%].
//!   Dimensionally inconsistent, but this is the methodology the glassbox
//!   study used; it is preserved exactly.
//!
//! - **HeatIndexLinear**: the simplified linear heat index
//!   `t + 0.33*h - 0.7`, operating directly on Celsius input.
//!
//! - **HeatIndexFull**: the NOAA nine-coefficient regression polynomial.
//!   The polynomial is fitted for Fahrenheit temperatures, so the Celsius
//!   input is converted before evaluation. The result stays on the
//!   Fahrenheit scale; it is only ever compared against other values of
//!   itself.
//!
//! All methods are total over missing inputs: if either reading is absent
//! the score is `None`, never a default and never a panic.

/// Coefficients of the NOAA heat-index regression polynomial.
///
/// `HI = c1 + c2*T + c3*H + c4*T*H + c5*T² + c6*H² + c7*T²*H + c8*T*H² + c9*T²*H²`
/// with `T` in °F and `H` in % relative humidity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatIndexCoefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub c7: f64,
    pub c8: f64,
    pub c9: f64,
}

/// The published NOAA regression coefficients used by the glassbox study.
pub const NOAA_HEAT_INDEX: HeatIndexCoefficients = HeatIndexCoefficients {
    c1: -42.379,
    c2: 2.04901523,
    c3: 10.14333127,
    c4: -0.22475541,
    c5: -0.0068783,
    c6: -0.05481717,
    c7: 0.00122874,
    c8: 0.00085282,
    c9: -0.00000199,
};

/// Converts a temperature from Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Scoring method applied uniformly to every (row, category) pair of a run.
///
/// The method is chosen once per run and passed down; the per-row code never
/// branches on anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    /// Arithmetic mean of temperature and humidity.
    Mean,
    /// Linear heat index `t + 0.33*h - 0.7` on Celsius input.
    HeatIndexLinear,
    /// NOAA polynomial heat index on Fahrenheit-converted input.
    HeatIndexFull,
}

impl ScoringMethod {
    /// Scores one temperature/humidity pair. `None` if either input is missing.
    pub fn score(&self, temp_c: Option<f64>, humidity: Option<f64>) -> Option<f64> {
        let (t, h) = (temp_c?, humidity?);
        let value = match self {
            ScoringMethod::Mean => (t + h) / 2.0,
            ScoringMethod::HeatIndexLinear => t + 0.33 * h - 0.7,
            ScoringMethod::HeatIndexFull => heat_index_full(t, h, &NOAA_HEAT_INDEX),
        };
        Some(value)
    }

    /// Directory-friendly name, used to separate output per method.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ScoringMethod::Mean => "mean",
            ScoringMethod::HeatIndexLinear => "heat_index_linear",
            ScoringMethod::HeatIndexFull => "heat_index_full",
        }
    }
}

/// Evaluates the full heat-index polynomial for a Celsius temperature.
///
/// The coefficient table is passed in explicitly so the fit in use is visible
/// at the call site. The Celsius→Fahrenheit conversion happens here; callers
/// must not pre-convert.
pub fn heat_index_full(temp_c: f64, humidity: f64, k: &HeatIndexCoefficients) -> f64 {
    let t = celsius_to_fahrenheit(temp_c);
    let h = humidity;
    k.c1 + k.c2 * t
        + k.c3 * h
        + k.c4 * t * h
        + k.c5 * t * t
        + k.c6 * h * h
        + k.c7 * t * t * h
        + k.c8 * t * h * h
        + k.c9 * t * t * h * h
}
