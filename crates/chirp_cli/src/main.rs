//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `chirp_core` linkage and that a
//!   fresh database bootstraps cleanly.
//! - Keep output deterministic for quick local sanity checks.

use chirp_core::db::open_db_in_memory;

fn main() {
    println!("chirp_core version={}", chirp_core::core_version());

    match open_db_in_memory() {
        Ok(_) => println!("chirp_core db_bootstrap=ok"),
        Err(err) => {
            eprintln!("chirp_core db_bootstrap=error {err}");
            std::process::exit(1);
        }
    }
}
