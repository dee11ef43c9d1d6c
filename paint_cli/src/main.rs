//! # Paintwell CLI Application
//!
//! Front end for the paint-can estimation engine.
//!
//! ## Usage
//!
//! JSON mode (file argument or piped stdin), wire contract in/out:
//!
//! ```text
//! paint_cli room.json
//! cat room.json | paint_cli
//! ```
//!
//! Input is `{"walls": [4 wall objects]}`; output is
//! `{"paint_cans": {"18.0": n, "3.6": n, "2.5": n, "0.5": n}}` on
//! success, or an `{"errors": {"Wall_N": [...]}}` report on exit 1.
//!
//! Interactive mode (no argument, terminal stdin): prompts for each
//! wall's dimensions and opening counts.

use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::process::ExitCode;

use paint_core::errors::PaintError;
use paint_core::geometry::{Room, Wall};
use paint_core::schema::{PaintCansNeeded, ValidationFailure};
use paint_core::PaintCansCoordinator;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1);
    if let Some(path) = path {
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(error) => {
                eprintln!("Error: cannot read '{}': {}", path, error);
                return ExitCode::FAILURE;
            }
        };
        return run_json(&json);
    }

    if !io::stdin().is_terminal() {
        let mut json = String::new();
        if let Err(error) = io::stdin().read_to_string(&mut json) {
            eprintln!("Error: cannot read stdin: {}", error);
            return ExitCode::FAILURE;
        }
        return run_json(&json);
    }

    run_interactive()
}

/// Parse the wire-contract room, run the engine, print an envelope.
fn run_json(json: &str) -> ExitCode {
    let room: Room = match serde_json::from_str(json) {
        Ok(room) => room,
        Err(error) => {
            eprintln!("Error: invalid room JSON: {}", error);
            return ExitCode::FAILURE;
        }
    };

    log::debug!(
        "parsed room: walls {:.2} m2, doors {:.2} m2, windows {:.2} m2",
        room.walls_area(),
        room.doors_area(),
        room.windows_area()
    );

    let coordinator = PaintCansCoordinator::for_room(room);
    match coordinator.paint_cans_needed() {
        Ok(plan) => {
            let envelope = PaintCansNeeded::new(plan);
            match serde_json::to_string_pretty(&envelope) {
                Ok(body) => println!("{}", body),
                Err(error) => {
                    eprintln!("Error: {}", error);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_engine_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn print_engine_error(error: &PaintError) {
    eprintln!("Error: {}", error);
    if let Some(envelope) = ValidationFailure::from_error(error) {
        if let Ok(body) = serde_json::to_string_pretty(&envelope) {
            println!("{}", body);
        }
    }
}

fn run_interactive() -> ExitCode {
    println!("Paintwell CLI - Paint-Can Estimator");
    println!("===================================");
    println!();
    println!("Describe the four walls of the room (meters).");
    println!();

    let mut walls = Vec::with_capacity(4);
    for index in 1..=4 {
        println!("Wall {}:", index);
        let width = prompt_f64("  width (m) [7.0]: ", 7.0);
        let height = prompt_f64("  height (m) [5.0]: ", 5.0);
        let doors = prompt_u32("  number of doors [0]: ", 0);
        let windows = prompt_u32("  number of windows [0]: ", 0);

        match Wall::new(width, height) {
            Ok(wall) => walls.push(wall.with_doors(doors).with_windows(windows)),
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        }
        println!();
    }

    let walls: [Wall; 4] = walls.try_into().expect("exactly four walls collected");
    let room = Room::new(walls);

    println!("═══════════════════════════════════════");
    println!("  ROOM SUMMARY");
    println!("═══════════════════════════════════════");
    println!("  Walls area:   {:.2} m2", room.walls_area());
    println!("  Doors area:   {:.2} m2", room.doors_area());
    println!("  Windows area: {:.2} m2", room.windows_area());
    println!(
        "  Free area:    {:.2} m2",
        room.walls_area() - (room.windows_area() + room.doors_area())
    );
    println!();

    let coordinator = PaintCansCoordinator::for_room(room);
    match coordinator.paint_cans_needed() {
        Ok(plan) => {
            println!("  PAINT CANS NEEDED");
            println!("═══════════════════════════════════════");
            for (size, count) in plan.iter() {
                println!("  {:>6}: {}", size.to_string(), count);
            }
            println!();
            println!(
                "  Total: {} can(s), {:.1} L, covers {:.1} m2",
                plan.total_cans(),
                plan.total_liters(),
                plan.coverage_m2()
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (wire contract):");
            if let Ok(json) = serde_json::to_string_pretty(&PaintCansNeeded::new(plan)) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_engine_error(&error);
            ExitCode::FAILURE
        }
    }
}
