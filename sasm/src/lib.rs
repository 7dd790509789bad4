//! Assembler for the [scpu](../scpu/index.html) simulated processor.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which accepts a
//! program written in a small line-oriented assembly language and outputs
//! one encoded [`Word`](../scpu/struct.Word.html) per instruction.
//!
//! Parsing is implemented with [pest]; the [`Error`](type.Error.html) type
//! is an alias of `pest::error::Error`, so every error points at the
//! offending line and span of the source.
//!
//! # Assembly language
//!
//! Each line holds either one instruction, a label, or nothing. Comments
//! start with a semicolon `;` and run to the end of the line. A label is
//! an identifier followed by a colon on a line of its own and names the
//! index of the next instruction.
//!
//! Operands are separated by commas. Registers are written `R0` to `R15`
//! (`R15` is the stack pointer). Integer literals can be signed decimal,
//! hexadecimal (`0x`), octal (`0o`) or binary (`0b`). Wherever an
//! immediate or jump target is expected, a label name may be used instead
//! and resolves to that label's instruction index.
//!
//! Quick reference for all mnemonics:
//!
//! Mnemonic | Short Description                  | Syntax
//! ---------|------------------------------------|----------------------
//! `NOP`    | No-op                              | `NOP`
//! `HALT`   | Stop the machine                   | `HALT`
//! `MOV`    | Copy register                      | `MOV rd, rs`
//! `LOADK`  | Load constant                      | `LOADK rd, value`
//! `LOADM`  | Load from memory address           | `LOADM rd, addr`
//! `LOADI`  | Load indirect (address in rs)      | `LOADI rd, rs`
//! `STOREM` | Store to memory address            | `STOREM rs, addr`
//! `STOREI` | Store indirect (address in rs2)    | `STOREI rs, rs2`
//! `ADD`    | Integer addition                   | `ADD rd, rs`
//! `SUB`    | Integer subtraction                | `SUB rd, rs`
//! `MUL`    | Integer multiplication             | `MUL rd, rs`
//! `DIV`    | Integer division                   | `DIV rd, rs`
//! `ADDI`   | Add immediate                      | `ADDI rd, value`
//! `SUBI`   | Subtract immediate                 | `SUBI rd, value`
//! `MULI`   | Multiply immediate                 | `MULI rd, value`
//! `DIVI`   | Divide immediate                   | `DIVI rd, value`
//! `CMP`    | Signed compare                     | `CMP rd, rs`
//! `CMPI`   | Signed compare immediate           | `CMPI rd, value`
//! `AND`    | Bitwise and                        | `AND rd, rs`
//! `OR`     | Bitwise or                         | `OR rd, rs`
//! `XOR`    | Bitwise exclusive-or               | `XOR rd, rs`
//! `NOT`    | Flip bits                          | `NOT rd`
//! `TEST`   | Flags from `rd & rs`               | `TEST rd, rs`
//! `SHL`    | Shift left                         | `SHL rd, rs, amount`
//! `SHR`    | Shift right                        | `SHR rd, rs, amount`
//! `INC`    | Increment (assembles as `ADDI`)    | `INC rd`
//! `DEC`    | Decrement (assembles as `SUBI`)    | `DEC rd`
//! `IN`     | Read integer from standard input   | `IN rd`
//! `OUT`    | Print register                     | `OUT rs`
//! `JMP`    | Jump                               | `JMP target`
//! `JZ`     | Jump if zero flag set              | `JZ target`
//! `JNZ`    | Jump if zero flag clear            | `JNZ target`
//! `JN`     | Jump if negative flag set          | `JN target`
//! `JNN`    | Jump if negative flag clear        | `JNN target`
//! `CALL`   | Push PC and jump                   | `CALL target`
//! `RET`    | Return to pushed address           | `RET`
//! `PUSH`   | Push register onto stack           | `PUSH rs`
//! `POP`    | Pop register from stack            | `POP rd`
//! `INT`    | Software interrupt                 | `INT`
//! `IRET`   | Return from interrupt              | `IRET`
//!
//! Immediates are truncated to their 32-bit field; negative values wrap to
//! their two's-complement representation.
//!
//! Source files can additionally use the [`preprocessor`](preprocessor/index.html)
//! directives `#define` and `#include` before assembly.
//!
//! [pest]: https://docs.rs/pest/

mod instructions;
mod int_util;
mod labels;
mod parser;
pub mod preprocessor;


pub use instructions::{Encoding, JumpTarget, Mnemonic, ParsedInstruction};

use parser::{AsmParser, Rule};
use pest::iterators::Pair;
use pest::{Parser, Span};
use scpu::Word;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles a complete source text into encoded instruction words.
pub fn assemble(input: &str) -> Result<Vec<Word>> {
    assemble_parsed(parse(input)?)
}

/// Assembles pre-split source lines, as produced by the compiler
/// front-end.
pub fn assemble_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Word>> {
    let joined = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    assemble(&joined)
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(AsmParser::parse(Rule::program, input)?.next().unwrap())
}

fn assemble_parsed(pair: Pair<Rule>) -> Result<Vec<Word>> {
    let (instr, labels) = instructions::process_statements(pair)?;
    instructions::assemble_instructions(&instr, &labels)
}
