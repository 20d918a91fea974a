mod actuator;
mod cli;
mod config;
mod controller;
mod error;
mod metadata;
mod mpris;
mod player;
mod runtime;
mod scheduler;
mod sinks;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
