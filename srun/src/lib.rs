//! End-to-end driver: compile stre source (or assembly) to encoded words,
//! run them on the simulated processor, and report the machine state.
//!
//! All report output goes to a caller-supplied writer, so a shell can
//! mirror it verbatim.

mod query;


pub use crate::query::{parse_address_list, parse_register_list};

use scpu::{ExitCode, Memory, Processor};
use std::fmt;
use std::io::{self, Write};

/// Address programs are loaded at.
pub const LOAD_BASE: u64 = 0;

#[derive(Debug)]
pub enum Error {
    Compile(strec::Error),
    Assemble(Box<sasm::Error>),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile(err) => {
                writeln!(f, "Compilation failed:")?;
                write!(f, "{}", err)
            }
            Error::Assemble(err) => {
                writeln!(f, "Assembly failed:")?;
                write!(f, "{}", err)
            }
            Error::Io(err) => write!(f, "Writing output failed: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<strec::Error> for Error {
    fn from(err: strec::Error) -> Error {
        Error::Compile(err)
    }
}

impl From<sasm::Error> for Error {
    fn from(err: sasm::Error) -> Error {
        Error::Assemble(Box::new(err))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Final machine state of a completed run.
pub struct Outcome {
    pub processor: Processor,
    pub memory: Memory,
    pub exit_code: ExitCode,
}

/// Compiles, assembles and executes stre source, writing the assembly
/// listing, the encoded words, the final registers and the termination
/// status to `out`.
pub fn run_source<W: Write>(source: &str, out: &mut W) -> Result<Outcome, Error> {
    let lines = strec::compile(source)?;

    writeln!(out, "Assembly listing:")?;
    for line in &lines {
        writeln!(out, "    {}", line)?;
    }

    let words = sasm::assemble_lines(&lines)?;
    execute(&words, out)
}

/// Assembles and executes an assembly text, with the same report format
/// as [`run_source`].
pub fn run_assembly<W: Write>(input: &str, out: &mut W) -> Result<Outcome, Error> {
    let words = sasm::assemble(input)?;
    execute(&words, out)
}

fn execute<W: Write>(words: &[scpu::Word], out: &mut W) -> Result<Outcome, Error> {
    writeln!(out, "Encoded instructions:")?;
    for (index, word) in words.iter().enumerate() {
        writeln!(
            out,
            "    {:02}: {} ({}, {} bits)",
            index,
            word.value,
            word.bit_string(),
            word.bits
        )?;
    }

    let mut processor = Processor::default();
    let mut memory = Memory::new();
    processor.load(&mut memory, words, LOAD_BASE);
    let exit_code = processor.run(&mut memory);

    writeln!(out, "Final registers:")?;
    for (index, value) in processor.registers().iter().enumerate() {
        writeln!(out, "    R{}: {}", index, value)?;
    }

    match exit_code {
        ExitCode::Halted => writeln!(out, "Program finished successfully.")?,
        code => writeln!(out, "Program stopped: {:?}", code)?,
    }

    Ok(Outcome {
        processor,
        memory,
        exit_code,
    })
}
