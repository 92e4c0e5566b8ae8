//! Rover Patrol
//!
//! This example walks a rover through a short patrol route and shows the
//! state after every command.
//!
//! Key concepts:
//! - Pure transitions over an immutable state value
//! - Toroidal wraparound at the grid edges
//! - Boundary validation with a literal error message
//!
//! Run with: cargo run --example patrol

use gridrover::{execute, Command, Rover};

fn main() {
    println!("=== Rover Patrol ===\n");

    let route = "MMRMMLM";
    println!("Route: {route}");
    println!("Start: {}\n", Rover::INITIAL);

    let mut rover = Rover::INITIAL;
    for c in route.chars() {
        let command = Command::parse(c).unwrap();
        rover = rover.apply(command);
        println!("  {command} -> {rover}");
    }

    println!("\nFinal report: {}", execute(route).unwrap());

    // Wraparound: ten moves north bring the rover home.
    println!("Ten moves north: {}", execute(&"M".repeat(10)).unwrap());

    // Invalid characters abort the whole run with a descriptive error.
    match execute("MMXMM") {
        Ok(report) => println!("Unexpected success: {report}"),
        Err(err) => println!("Rejected route: {err}"),
    }

    println!("\n=== Example Complete ===");
}
