//! Divider search for PLL configuration
//!
//! Every reference divider, feedback divider and post-divider pair inside the
//! hardware ranges is tried, and the combination whose output lands closest
//! to the requested frequency wins. The first combination to reach a given
//! margin is kept, so the visiting order decides ties:
//! - reference divider ascending
//! - feedback divider ascending (low VCO first) or descending (high VCO first)
//! - `pd2` ascending, then `pd1` ascending inside it

pub mod candidate;
pub mod config;
pub mod result;

pub use candidate::Candidate;
pub use config::SearchConfig;
pub use result::{Improvement, SearchResult, SearchStatistics};

use candidate::{fbdiv_sweep, output_frequency, postdiv_pairs, refdiv_sweep, vco_frequency};
use std::time::Instant;

/// Trait for searches that pick a PLL configuration
pub trait SearchAlgorithm {
    /// Search for the configuration closest to `config.output`
    ///
    /// # Arguments
    /// * `config` - Input frequency, target and hardware bounds
    ///
    /// # Returns
    /// A SearchResult holding the best candidate (if any), the improvements
    /// that led to it and statistics
    fn search(&mut self, config: &SearchConfig) -> SearchResult;
}

/// Exhaustive search over all divider combinations
#[derive(Debug, Default)]
pub struct DividerSearch;

impl DividerSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for DividerSearch {
    fn search(&mut self, config: &SearchConfig) -> SearchResult {
        let start = Instant::now();
        let mut result = SearchResult::no_solution(config.output, config.input);

        for refdiv in refdiv_sweep(config.refdiv_limit()) {
            result.statistics.refdivs_scanned += 1;

            for fbdiv in fbdiv_sweep(config.prefers_low_vco()) {
                let vco = vco_frequency(config.input, refdiv, fbdiv);
                if !config.vco_in_range(vco) {
                    result.statistics.vco_rejected += 1;
                    continue;
                }

                for (pd1, pd2) in postdiv_pairs() {
                    result.statistics.candidates_evaluated += 1;

                    let output = output_frequency(vco, pd1, pd2);
                    let margin = (output - config.output).abs();
                    result.offer(Candidate::new(refdiv, fbdiv, pd1, pd2), output, margin);
                }
            }
        }

        debug_assert!(result.best.map_or(true, |c| c.is_within_hardware_limits()));
        result.statistics.elapsed_time = start.elapsed();
        result
    }
}

/// Run a fresh `DividerSearch` with `config`
pub fn find_dividers(config: &SearchConfig) -> SearchResult {
    DividerSearch::new().search(config)
}
