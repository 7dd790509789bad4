//! Compiler front-end for the *stre* language.
//!
//! The language is a small statement-oriented toy: declarations
//! (`stre int x = 2 + 3;`), assignments, `while_stre (..) {{ .. }}`
//! loops, the process calls `procers(x);` and `colectavgB(x);`, and
//! `//` / `/* */` comments. Expressions combine variables, integer and
//! float literals (floats are truncated, the target machine is integral)
//! with `+ - * /`.
//!
//! Parsing builds an [instruction graph](struct.Graph.html): a tree of
//! statement nodes plus the ordered list of assembly lines produced by
//! [expression lowering](fn.compile_expr.html). Variables are bound to
//! registers in first-seen order and expression temporaries are allocated
//! after them, resetting at each statement (see
//! [`CompileContext`](struct.CompileContext.html)).
//!
//! [`compile`](fn.compile.html) runs the whole front-end and returns the
//! cleaned assembly line stream, ready for the `sasm` assembler.

mod ast;
mod context;
mod expr;
mod flatten;
mod graph;
mod parser;


pub use crate::ast::{BinOp, Expr};
pub use crate::context::CompileContext;
pub use crate::expr::compile_expr;
pub use crate::flatten::flatten;
pub use crate::graph::{Graph, Node, NodeId};

use parser::{Rule, StreParser};
use pest::iterators::Pair;
use pest::{Parser, Span};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Parse(Box<pest::error::Error<Rule>>),
    /// An expression needs more registers than the file provides.
    OutOfRegisters,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::OutOfRegisters => {
                write!(f, "Expression needs more than 16 registers")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<Rule>> for Error {
    fn from(err: pest::error::Error<Rule>) -> Error {
        Error::Parse(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn new_parser_error(span: Span, message: String) -> pest::error::Error<Rule> {
    pest::error::Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(StreParser::parse(Rule::program, input)
        .map_err(|err| Error::Parse(Box::new(err)))?
        .next()
        .unwrap())
}

/// Builds the instruction graph for `input` without flattening it.
pub fn build_graph(input: &str) -> Result<(Graph, CompileContext)> {
    parser::process_program(parse(input)?)
}

/// Compiles stre source into a cleaned assembly line stream.
///
/// The lowered expression code comes first, then the flattened graph
/// (which ends in `HALT`); blank and comment-only lines are dropped.
pub fn compile(input: &str) -> Result<Vec<String>> {
    let (graph, _context) = build_graph(input)?;

    let mut combined: Vec<String> = graph.instructions().to_vec();
    combined.extend(flatten(&graph));

    Ok(combined
        .into_iter()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .collect())
}
