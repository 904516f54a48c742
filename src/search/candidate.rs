//! Divider candidates and the order in which the search visits them

/// Smallest reference divider the hardware accepts
pub const REFDIV_MIN: u32 = 1;
/// Largest reference divider the hardware accepts
pub const REFDIV_MAX: u32 = 63;
/// Smallest feedback divider the hardware accepts
pub const FBDIV_MIN: u32 = 16;
/// Largest feedback divider the hardware accepts
pub const FBDIV_MAX: u32 = 320;
/// Smallest value of either post-divider
pub const POSTDIV_MIN: u32 = 1;
/// Largest value of either post-divider
pub const POSTDIV_MAX: u32 = 7;

/// One trial PLL configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub refdiv: u32,
    pub fbdiv: u32,
    pub pd1: u32,
    pub pd2: u32,
}

impl Candidate {
    pub fn new(refdiv: u32, fbdiv: u32, pd1: u32, pd2: u32) -> Self {
        Self {
            refdiv,
            fbdiv,
            pd1,
            pd2,
        }
    }

    /// VCO frequency for a given input frequency
    pub fn vco(&self, input: f64) -> f64 {
        vco_frequency(input, self.refdiv, self.fbdiv)
    }

    /// Whether every divider lies in its hardware range
    pub fn is_within_hardware_limits(&self) -> bool {
        (REFDIV_MIN..=REFDIV_MAX).contains(&self.refdiv)
            && (FBDIV_MIN..=FBDIV_MAX).contains(&self.fbdiv)
            && (POSTDIV_MIN..=POSTDIV_MAX).contains(&self.pd1)
            && (POSTDIV_MIN..=POSTDIV_MAX).contains(&self.pd2)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "refdiv={} fbdiv={} pd1={} pd2={}",
            self.refdiv, self.fbdiv, self.pd1, self.pd2
        )
    }
}

/// `input / refdiv * fbdiv`, evaluated left to right.
///
/// Changing the order changes the rounding, and with it which of several
/// near-equal candidates wins.
pub fn vco_frequency(input: f64, refdiv: u32, fbdiv: u32) -> f64 {
    input / refdiv as f64 * fbdiv as f64
}

/// `vco / pd1 / pd2`, evaluated left to right
pub fn output_frequency(vco: f64, pd1: u32, pd2: u32) -> f64 {
    vco / pd1 as f64 / pd2 as f64
}

/// Reference dividers to try, ascending from 1 to `limit`
pub fn refdiv_sweep(limit: u32) -> impl Iterator<Item = u32> {
    REFDIV_MIN..=limit
}

/// Feedback dividers to try.
///
/// Ascending visits low VCO frequencies first, descending visits high ones
/// first.
pub fn fbdiv_sweep(ascending: bool) -> Box<dyn Iterator<Item = u32>> {
    let range = FBDIV_MIN..=FBDIV_MAX;
    if ascending {
        Box::new(range)
    } else {
        Box::new(range.rev())
    }
}

/// Post-divider pairs as `(pd1, pd2)`.
///
/// `pd2` is the outer loop and `pd1` the inner one, both ascending. With a
/// strict improvement test this keeps the first of several equal outputs,
/// which favours higher pd1:pd2 ratios.
pub fn postdiv_pairs() -> impl Iterator<Item = (u32, u32)> {
    (POSTDIV_MIN..=POSTDIV_MAX)
        .flat_map(|pd2| (POSTDIV_MIN..=POSTDIV_MAX).map(move |pd1| (pd1, pd2)))
}
