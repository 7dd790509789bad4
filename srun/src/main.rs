#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
enum Error {
    Io(PathBuf, io::Error),
    Run(srun::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(path, err) => {
                write!(f, "Reading source file \"{}\" failed: {}", path.display(), err)
            }
            Error::Run(err) => write!(f, "{}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the source file to run")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .help("Treats the input as assembly instead of stre source"),
        )
        .arg(
            Arg::with_name("registers")
                .short("r")
                .long("registers")
                .takes_value(true)
                .value_name("LIST")
                .help("Prints the listed registers after the run (e.g. 0-3,7)"),
        )
        .arg(
            Arg::with_name("memory")
                .short("m")
                .long("memory")
                .takes_value(true)
                .value_name("LIST")
                .help("Prints the listed memory cells after the run (e.g. 0x20,0x30-0x38)"),
        )
        .get_matches();

    if let Err(err) = srun_main(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn srun_main(matches: &clap::ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("INPUT").unwrap();
    let source =
        fs::read_to_string(input).map_err(|err| Error::Io(PathBuf::from(input), err))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = if matches.is_present("assembly") {
        srun::run_assembly(&source, &mut out)
    } else {
        srun::run_source(&source, &mut out)
    }
    .map_err(Error::Run)?;

    if let Some(list) = matches.value_of("registers") {
        for index in srun::parse_register_list(list) {
            println!("R{}: {}", index, outcome.processor.register(index));
        }
    }

    if let Some(list) = matches.value_of("memory") {
        for address in srun::parse_address_list(list) {
            println!("[{:#x}]: {}", address, outcome.memory.read(address));
        }
    }

    Ok(())
}
