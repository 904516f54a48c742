//! Configuration types for the divider search

use crate::search::candidate::{REFDIV_MAX, REFDIV_MIN};

/// Direction of the feedback divider sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VcoPreference {
    /// Try the highest VCO frequency first (lower jitter)
    #[default]
    High,
    /// Try the lowest VCO frequency first (lower power, more jitter)
    Low,
}

impl VcoPreference {
    pub fn from_low_vco(low_vco: bool) -> Self {
        if low_vco {
            VcoPreference::Low
        } else {
            VcoPreference::High
        }
    }
}

impl std::fmt::Display for VcoPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VcoPreference::High => write!(f, "high"),
            VcoPreference::Low => write!(f, "low"),
        }
    }
}

/// Inputs of one divider search. All frequencies are in MHz.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Input (reference) frequency
    pub input: f64,
    /// Requested output frequency
    pub output: f64,
    /// Minimum frequency allowed after the reference divider
    pub ref_min: f64,
    /// Lowest VCO frequency the PLL can lock at
    pub vco_min: f64,
    /// Highest VCO frequency the PLL can lock at
    pub vco_max: f64,
    /// Which end of the VCO range to try first
    pub vco_preference: VcoPreference,
    /// Verbose output around the search
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input: 12.0,
            output: 0.0,
            ref_min: 5.0,
            vco_min: 750.0,
            vco_max: 1600.0,
            vco_preference: VcoPreference::default(),
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn with_input(mut self, input: f64) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: f64) -> Self {
        self.output = output;
        self
    }

    pub fn with_ref_min(mut self, ref_min: f64) -> Self {
        self.ref_min = ref_min;
        self
    }

    pub fn with_vco_min(mut self, vco_min: f64) -> Self {
        self.vco_min = vco_min;
        self
    }

    pub fn with_vco_max(mut self, vco_max: f64) -> Self {
        self.vco_max = vco_max;
        self
    }

    pub fn with_low_vco(mut self, low_vco: bool) -> Self {
        self.vco_preference = VcoPreference::from_low_vco(low_vco);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn prefers_low_vco(&self) -> bool {
        self.vco_preference == VcoPreference::Low
    }

    /// Largest reference divider worth trying.
    ///
    /// The divided reference must stay at or above `ref_min`, so the bound is
    /// `input / ref_min` truncated, clamped to the hardware range. A float to
    /// int cast saturates, so an infinite quotient lands on the upper limit
    /// and NaN on the lower one.
    pub fn refdiv_limit(&self) -> u32 {
        let limit = (self.input / self.ref_min).trunc() as i64;
        limit.clamp(REFDIV_MIN as i64, REFDIV_MAX as i64) as u32
    }

    /// Whether `vco` lies inside the configured VCO window
    pub fn vco_in_range(&self, vco: f64) -> bool {
        !(vco < self.vco_min || vco > self.vco_max)
    }
}
