mod cli;

use std::{process, time::Instant};

use clap::Parser as _;
use prattle::{print, Lexer, Parser};

const SAMPLE: &str = "-sin(a+b) + f(g(x), h(-((1+2)*3)))";

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();
    let source = cli.expr.as_deref().unwrap_or(SAMPLE);

    let now = Instant::now();

    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    };

    if cli.tokens {
        for token in &tokens {
            println!("{token:?}");
        }
    }

    let expr = match Parser::new(tokens).parse() {
        Ok(expr) => expr,
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    };

    log::debug!("front end took {:.2?}", now.elapsed());

    println!("{source}");
    println!("{}", print(&expr));
}
