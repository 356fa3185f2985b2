//! Reads wikitext from a file argument (or stdin) and prints its token
//! stream, one token per line. Built behind the `demo-cli` feature; not
//! part of the library's public surface.

use std::{
    env, fs,
    io::{self, Read as _},
};

use wikitext_tokenizer::tokenize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    for token in tokenize(&text) {
        println!("{token:?}");
    }
    Ok(())
}
