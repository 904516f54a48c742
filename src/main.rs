use clap::Parser;
use std::io::{self, Write};

mod search;

use search::{Improvement, SearchConfig, SearchResult};

// --- Command Line Arguments ---

#[derive(Parser, Debug)]
#[command(name = "vcocalc")]
#[command(about = "PLL parameter calculator")]
#[command(version)]
struct Args {
    /// Output frequency in MHz.
    output: f64,

    /// Input (reference) frequency. Default 12 MHz
    #[arg(long, short, default_value = "12")]
    input: f64,

    /// Override minimum reference frequency. Default 5 MHz
    #[arg(long, default_value = "5")]
    ref_min: f64,

    /// Override maximum VCO frequency. Default 1600 MHz
    #[arg(long, default_value = "1600")]
    vco_max: f64,

    /// Override minimum VCO frequency. Default 750 MHz
    #[arg(long, default_value = "750")]
    vco_min: f64,

    /// Use a lower VCO frequency when possible. This reduces power consumption, at the cost of increased jitter
    #[arg(long, short)]
    low_vco: bool,

    /// Print the result as a rp2040-hal `PLLConfig` constant
    #[arg(long)]
    rust: bool,

    /// Print search parameters and statistics to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl From<&Args> for SearchConfig {
    fn from(args: &Args) -> Self {
        SearchConfig::default()
            .with_output(args.output)
            .with_input(args.input)
            .with_ref_min(args.ref_min)
            .with_vco_min(args.vco_min)
            .with_vco_max(args.vco_max)
            .with_low_vco(args.low_vco)
            .with_verbose(args.verbose)
    }
}

fn print_search_parameters(config: &SearchConfig) {
    eprintln!("Search parameters:");
    eprintln!("  Input: {} MHz", config.input);
    eprintln!("  Minimum reference: {} MHz", config.ref_min);
    eprintln!("  VCO range: {} - {} MHz", config.vco_min, config.vco_max);
    eprintln!("  VCO preference: {}", config.vco_preference);
    eprintln!("  Reference dividers: 1 - {}", config.refdiv_limit());
}

fn print_improvements(improvements: &[Improvement]) {
    eprintln!("\nImprovements:");
    for step in improvements {
        eprintln!(
            "  {} -> {} MHz (margin {})",
            step.candidate,
            search::result::format_mhz(step.output),
            step.margin
        );
    }
}

fn print_search_statistics(stats: &search::SearchStatistics) {
    eprintln!("\nSearch Statistics:");
    for line in stats.format_summary().lines() {
        eprintln!("  {}", line);
    }
}

fn write_report(
    out: &mut impl Write,
    result: &SearchResult,
    rust: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if rust {
        write!(out, "{}", result.to_pll_config()?)?;
    } else {
        write!(out, "{}", result)?;
    }
    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SearchConfig::from(args);

    if config.verbose {
        print_search_parameters(&config);
    }

    let result = search::find_dividers(&config);

    if !result.found_solution() && !args.rust {
        eprintln!("No solution found: no candidate closer than the requested value");
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &result, args.rust)?;

    if config.verbose {
        print_improvements(&result.improvements);
        if result.is_exact() {
            eprintln!("\nExact match");
        } else if result.found_solution() {
            eprintln!("\nMargin: {} MHz", result.margin);
        }
        print_search_statistics(&result.statistics);
    }

    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
