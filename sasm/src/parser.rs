use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "sasm.pest"]
pub struct AsmParser;
