use std::{io::stdout, process};

use common::actor::State;
use runner::{config::Config, render, run};

fn main() {
    env_logger::init();

    ctrlc::set_handler(move || {
        render::restore(&mut stdout()).ok();
        println!("Walker stopped.");
        std::process::exit(0);
    })
    .expect("error setting Ctrl-C handler");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(2);
        }
    };

    match run::run(&config) {
        Ok(summary) => {
            match summary.state {
                State::Freedom => println!("You Win!!!!"),
                State::Stuck => println!("There is No Solution."),
                State::Looking | State::Backtrack => {
                    println!("Gave up after {} steps.", summary.steps)
                }
            }
            println!(
                "{} steps, {} cells discovered, finished at {}.",
                summary.steps, summary.discovered, summary.position
            );
        }
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    }
}
