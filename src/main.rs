use std::path::PathBuf;
use std::process;

pub mod config;
pub mod resources;
pub mod stack;
pub mod template;

fn main() {
    let config_path = PathBuf::from("./stack.yaml");
    let config = match config::parse(&config_path) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    let stack = match stack::TransformedStack::synth(&config) {
        Ok(stack) => stack,
        Err(error) => {
            eprintln!("Stack construction failed: {}", error);
            process::exit(1);
        }
    };

    match stack.template.to_yaml() {
        Ok(contents) => println!("{}", contents),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
