//! Version command implementation.

use pointerkit::{AreaStrategy, ColorStrategy, PairStrategy, Strategy, SubstringStrategy};

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    let strategies = PairStrategy::ALL.len()
        + ColorStrategy::ALL.len()
        + AreaStrategy::ALL.len()
        + SubstringStrategy::ALL.len();

    println!("pointerkit {VERSION}");
    println!();
    println!("Two-pointer, hashing and sliding-window puzzle strategies.");
    println!();
    println!("Build info:");
    println!("  Problems:   4");
    println!("  Strategies: {strategies}");
    println!("  Target:     {}", std::env::consts::ARCH);
    println!("  OS:         {}", std::env::consts::OS);
}
