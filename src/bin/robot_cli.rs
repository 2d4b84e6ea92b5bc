//! Minimal interactive presentation layer for the robot core.
//!
//! Reads commands from stdin, feeds them to the controller, and prints the
//! observer notifications. `reset` and `quit` are handled here, outside the
//! core command set, the way a UI button would be.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use gridbot::{RobotController, RobotObserver};

/// Observer that narrates state changes to stdout.
struct ConsoleObserver;

impl RobotObserver for ConsoleObserver {
    fn on_placed(&mut self) {
        println!("placed");
    }

    fn on_moved(&mut self) {
        println!("moved");
    }

    fn on_turned(&mut self, is_left: bool) {
        println!("turned {}", if is_left { "left" } else { "right" });
    }

    fn on_report(&mut self, message: &str) {
        println!("{message}");
    }
}

fn main() -> Result<()> {
    let mut robot = RobotController::new(ConsoleObserver);

    println!("gridbot - commands: place x,y,facing | move | left | right | report | reset | quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "reset" => {
                robot.reset();
                println!("reset");
            }
            _ => {
                robot.process_command(&line);
            }
        }
    }

    Ok(())
}
