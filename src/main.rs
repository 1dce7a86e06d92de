use std::env;
use std::process;

use env_logger::Env;
use log::error;

use crate::cep::Cep;
use crate::config::Config;
use crate::race::race;

mod cep;
mod config;
mod fetch;
mod providers;
mod race;

fn fatal(msg: &dyn std::fmt::Display) -> ! {
    error!("{}", msg);
    process::exit(1);
}

#[actix_rt::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cep = Cep::from_args(env::args()).unwrap_or_else(|err| fatal(&err));
    let config = Config::from_env().unwrap_or_else(|err| fatal(&err));

    // Fetchers still in flight are abandoned when the runtime shuts down.
    let outcome = race(&cep, &config).await;
    println!("{}", outcome);
}
