use std::process;

use maze::config::Config;

fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Invalid configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    match viewer::run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: Failed to generate the maze.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    }
}
