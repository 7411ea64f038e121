use std::process;

mod cfg;
mod cli;
mod gateways;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run() {
        log::error!("{err:#}");
        process::exit(1);
    }
}
