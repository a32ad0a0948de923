#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Parsing;

use Examples::parsing_examples::parsing_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();
    let task: usize = 0;
    parsing_examples(task);
}
