#[macro_use]
extern crate clap;

use clap::Arg;
use sasm::preprocessor::Preprocessor;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
enum Error {
    Preprocess(sasm::preprocessor::Error),
    Parse(Box<sasm::Error>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Preprocess(err) => writeln!(f, "{}", err),
            Error::Parse(err) => {
                writeln!(f, "Parsing input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    // Parse command line arguments
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the assembly file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("include")
                .short("I")
                .long("include")
                .takes_value(true)
                .multiple(true)
                .value_name("DIR")
                .help("Adds a directory to the include search path"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let include_paths = matches
        .values_of("include")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_else(Vec::new);

    if let Err(err) = sasm_main(input, include_paths) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn sasm_main(input: &str, include_paths: Vec<PathBuf>) -> Result<(), Error> {
    // Expand preprocessor directives
    let mut preprocessor = Preprocessor::new(include_paths);
    let text = preprocessor.preprocess(input).map_err(Error::Preprocess)?;

    // Assemble and print one integer per instruction
    let words = sasm::assemble(&text).map_err(|err| Error::Parse(Box::new(err.with_path(input))))?;

    for word in words {
        println!("{}", word.value);
    }

    Ok(())
}
