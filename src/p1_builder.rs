//! Pattern 1: Builder
//! Example: Fluent construction of a Product with runtime validation
//!
//! Run with: cargo run --bin p1_builder

use creational_patterns::Product;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fluent Builder ===");
    // Chain setters for readable configuration; build() validates and
    // moves the finished product out.
    let product = Product::builder("Widget")
        .description("A widget")
        .option("color", "red")
        .option("size", "L")
        .build()?;

    println!("name: {}", product.name());
    println!("description: {}", product.description().unwrap_or("(none)"));
    for (key, value) in product.options() {
        println!("option {} = {}", key, value);
    }

    println!("\n=== Last Write Wins ===");
    let repainted = Product::builder("Widget")
        .option("color", "red")
        .option("color", "blue")
        .build()?;
    println!(
        "color after two writes: {}",
        repainted.options()["color"]
    );

    println!("\n=== Heterogeneous Option Values ===");
    let stocked = Product::builder("Widget")
        .option("count", 3i64)
        .option("gift_wrap", true)
        .build()?;
    println!("as JSON:\n{}", serde_json::to_string_pretty(&stocked)?);

    println!("\n=== Missing Name ===");
    match Product::builder("").build() {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {}", e),
    }

    Ok(())
}
