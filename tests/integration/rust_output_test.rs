use std::process::{Command, Output};

fn run_vcocalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vcocalc"))
        .args(args)
        .output()
        .expect("Failed to execute vcocalc")
}

#[test]
fn test_rust_output_125mhz() {
    let output = run_vcocalc(&["--rust", "125"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "pub const SYS_PLL_CONFIG_125MHZ: PLLConfig = PLLConfig {\n    \
         vco_freq: HertzU32::MHz(1500),\n    \
         refdiv: 1,\n    \
         post_div1: 6,\n    \
         post_div2: 2,\n\
         };\n"
    );
}

#[test]
fn test_rust_output_fractional_name() {
    // 76.8 * 20 = 1536, the highest multiple of 12 and 76.8 that fits
    let output = run_vcocalc(&["--rust", "76.8"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("pub const SYS_PLL_CONFIG_76P8MHZ: PLLConfig"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("vco_freq: HertzU32::MHz(1536),"));
    assert!(stdout.contains("post_div1: 5,"));
    assert!(stdout.contains("post_div2: 4,"));
}

#[test]
fn test_rust_output_without_solution_fails() {
    let output = run_vcocalc(&["--rust", "--vco-min", "2000", "125"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: No PLL configuration"), "stderr: {}", stderr);
}

#[test]
fn test_rust_output_vco_beyond_hertz_u32_fails() {
    // 6000 MHz is about 6e9 Hz, past u32::MAX
    let output = run_vcocalc(&[
        "--rust", "--input", "60", "--ref-min", "60", "--vco-max", "6000", "6000",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not fit in HertzU32"), "stderr: {}", stderr);
}
