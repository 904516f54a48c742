//! Search result types and statistics

use crate::search::candidate::Candidate;
use std::time::Duration;

/// Best configuration found by a divider search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Requested output frequency (MHz)
    pub requested: f64,
    /// Input frequency the dividers apply to (MHz)
    pub input: f64,
    /// Closest configuration, `None` when nothing satisfied the VCO bounds
    pub best: Option<Candidate>,
    /// Output frequency of `best`, 0 when there is none
    pub achieved: f64,
    /// `abs(achieved - requested)`, equal to `requested` when there is no candidate
    pub margin: f64,
    /// Every accepted candidate in the order the search took it
    pub improvements: Vec<Improvement>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Result before any candidate has been accepted
    pub fn no_solution(requested: f64, input: f64) -> Self {
        Self {
            requested,
            input,
            best: None,
            achieved: 0.0,
            margin: requested,
            improvements: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }

    /// Replace the current best if `margin` is strictly smaller.
    ///
    /// Returns whether the candidate was taken. Equal margins keep the
    /// earlier candidate.
    pub fn offer(&mut self, candidate: Candidate, output: f64, margin: f64) -> bool {
        if margin < self.margin {
            self.best = Some(candidate);
            self.achieved = output;
            self.margin = margin;
            self.improvements.push(Improvement {
                candidate,
                output,
                margin,
            });
            self.statistics.improvements_found += 1;
            true
        } else {
            false
        }
    }

    pub fn found_solution(&self) -> bool {
        self.best.is_some()
    }

    pub fn is_exact(&self) -> bool {
        self.found_solution() && self.margin == 0.0
    }

    /// VCO frequency of the best candidate, 0 when there is none
    pub fn vco(&self) -> f64 {
        self.best.map_or(0.0, |c| c.vco(self.input))
    }

    /// `(output, fbdiv, pd1, pd2, refdiv)`, all zero when nothing was found
    pub fn as_tuple(&self) -> (f64, u32, u32, u32, u32) {
        match self.best {
            Some(c) => (self.achieved, c.fbdiv, c.pd1, c.pd2, c.refdiv),
            None => (0.0, 0, 0, 0, 0),
        }
    }

    /// Render the best configuration as a `PLLConfig` constant for RP2040 HAL code.
    ///
    /// Fails when nothing was found or when the VCO does not fit the `u32`
    /// Hz count of `HertzU32`.
    pub fn to_pll_config(&self) -> Result<String, String> {
        let best = self.best.ok_or_else(|| {
            format!(
                "No PLL configuration for {} MHz: no candidate closer than the requested value",
                format_mhz(self.requested)
            )
        })?;
        let vco_freq = hertz_literal(self.vco()).ok_or_else(|| {
            format!(
                "No PLL configuration for {} MHz: VCO of {} MHz does not fit in HertzU32",
                format_mhz(self.requested),
                format_mhz(self.vco())
            )
        })?;
        Ok(format!(
            "pub const SYS_PLL_CONFIG_{}MHZ: PLLConfig = PLLConfig {{\n    \
             vco_freq: {},\n    \
             refdiv: {},\n    \
             post_div1: {},\n    \
             post_div2: {},\n\
             }};\n",
            const_frequency_suffix(self.requested),
            vco_freq,
            best.refdiv,
            best.pd1,
            best.pd2
        ))
    }
}

/// A candidate that beat every earlier one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Improvement {
    pub candidate: Candidate,
    pub output: f64,
    pub margin: f64,
}

/// Shortest round-trip form with at least one fractional digit (`1200.0`).
///
/// Extreme values switch to exponent form without padding (`1e-5`).
pub fn format_mhz(value: f64) -> String {
    format!("{:?}", value)
}

/// `76.8` becomes `76P8`, `125.0` becomes `125`
fn const_frequency_suffix(mhz: f64) -> String {
    let text = format_mhz(mhz);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    text.chars()
        .map(|c| match c {
            '.' => 'P',
            c if c.is_ascii_alphanumeric() => c.to_ascii_uppercase(),
            _ => '_',
        })
        .collect()
}

/// Coarsest `HertzU32` constructor that holds `mhz` exactly, to the nearest Hz.
///
/// `None` when the Hz count is outside `u32`.
fn hertz_literal(mhz: f64) -> Option<String> {
    let hz = (mhz * 1_000_000.0).round();
    if !(0.0..=u32::MAX as f64).contains(&hz) {
        return None;
    }
    let hz = hz as u32;
    Some(if hz % 1_000_000 == 0 {
        format!("HertzU32::MHz({})", hz / 1_000_000)
    } else if hz % 1_000 == 0 {
        format!("HertzU32::kHz({})", hz / 1_000)
    } else {
        format!("HertzU32::Hz({})", hz)
    })
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of reference dividers swept
    pub refdivs_scanned: u64,
    /// Number of feedback dividers skipped for a VCO outside the bounds
    pub vco_rejected: u64,
    /// Number of (refdiv, fbdiv, pd1, pd2) combinations evaluated
    pub candidates_evaluated: u64,
    /// Number of times the search improved the current best
    pub improvements_found: u64,
}

impl SearchStatistics {
    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Reference dividers: {}\n", self.refdivs_scanned));
        s.push_str(&format!("VCO rejected: {}\n", self.vco_rejected));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        s.push_str(&format!(
            "Improvements found: {}\n",
            self.improvements_found
        ));
        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (achieved, fbdiv, pd1, pd2, refdiv) = self.as_tuple();
        writeln!(f, "Requested: {} MHz", format_mhz(self.requested))?;
        writeln!(f, "Achieved: {} MHz", format_mhz(achieved))?;
        writeln!(f, "REFDIV: {}", refdiv)?;
        writeln!(f, "FBDIV: {} (VCO = {} MHz)", fbdiv, format_mhz(self.vco()))?;
        writeln!(f, "PD1: {}", pd1)?;
        writeln!(f, "PD2: {}", pd2)
    }
}
