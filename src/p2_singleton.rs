//! Pattern 2: Singleton
//! Example: One shared Settings instance behind a global access point
//!
//! Run with: cargo run --bin p2_singleton

use creational_patterns::Settings;

fn main() {
    println!("=== Singleton Access ===");
    let first = Settings::global();
    let second = Settings::global();

    println!("app_name: {}", first.app_name());
    println!("verbose: {}", first.verbose());
    println!("Same instance: {}", std::ptr::eq(first, second));

    // There is no other way to get a Settings:
    // let copy = first.clone();            // Error: Settings is not Clone
    // let other = Settings { .. };         // Error: fields are private
}
