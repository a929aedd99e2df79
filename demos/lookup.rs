//! Prints the hardware address of a named interface, or everything the OS
//! reported when no name is given.
//!
//! ```text
//! cargo run --example lookup -- eth0
//! ```

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match env::args().nth(1) {
        Some(interface) => match ifhwaddr::hardware_address_of(&interface) {
            Ok(mac) => {
                println!("{interface} {mac}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("lookup: {e}");
                ExitCode::FAILURE
            }
        },
        None => match ifhwaddr::enumerate() {
            Ok(map) => {
                for (name, addrs) in map.iter() {
                    match addrs.first() {
                        Some(mac) => println!("{name} {mac}"),
                        None => println!("{name} -"),
                    }
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("lookup: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
