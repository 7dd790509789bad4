use crate::int_util::*;
use crate::labels::*;
use crate::*;
use matches::debug_assert_matches;
use pest::iterators::Pairs;
use scpu::{make_bare, make_imm, make_jump, make_reg, make_shift, make_unary, Mode, Opcode};
use std::collections::HashMap;
use std::str::FromStr;
use util::{EnumFromStr, ParseEnumError};
use util_derive::EnumFromStr;

type InstrVec<'i> = Vec<ParsedInstruction<'i>>;

/// Assembly mnemonics recognized by the assembler.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Mnemonic {
    NOP,
    HALT,
    MOV,
    LOADK,
    LOADM,
    LOADI,
    STOREM,
    STOREI,
    ADD,
    SUB,
    MUL,
    DIV,
    ADDI,
    SUBI,
    MULI,
    DIVI,
    CMP,
    CMPI,
    AND,
    OR,
    XOR,
    NOT,
    TEST,
    SHL,
    SHR,
    INC,
    DEC,
    IN,
    OUT,
    JMP,
    JZ,
    JNZ,
    JN,
    JNN,
    CALL,
    RET,
    PUSH,
    POP,
    INT,
    IRET,
}

/// Instruction table entry: the encoded opcode, the addressing mode (if
/// the mnemonic carries one) and the width of its immediate field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Encoding {
    pub opcode: Opcode,
    pub mode: Option<Mode>,
    pub imm_bits: u32,
}

impl Mnemonic {
    pub fn encoding(self) -> Encoding {
        let (opcode, mode, imm_bits) = match self {
            Mnemonic::NOP => (Opcode::NOP, None, 0),
            Mnemonic::HALT => (Opcode::HALT, None, 0),
            Mnemonic::MOV => (Opcode::LOAD, Some(Mode::Register), 0),
            Mnemonic::LOADK => (Opcode::LOAD, Some(Mode::Immediate), 32),
            Mnemonic::LOADM => (Opcode::LOAD, Some(Mode::Direct), 32),
            Mnemonic::LOADI => (Opcode::LOAD, Some(Mode::Indirect), 0),
            Mnemonic::STOREM => (Opcode::STORE, Some(Mode::Direct), 32),
            Mnemonic::STOREI => (Opcode::STORE, Some(Mode::Indirect), 0),
            Mnemonic::ADD => (Opcode::ADD, Some(Mode::Register), 0),
            Mnemonic::SUB => (Opcode::SUB, Some(Mode::Register), 0),
            Mnemonic::MUL => (Opcode::MUL, Some(Mode::Register), 0),
            Mnemonic::DIV => (Opcode::DIV, Some(Mode::Register), 0),
            Mnemonic::ADDI => (Opcode::ADD, Some(Mode::Immediate), 32),
            Mnemonic::SUBI => (Opcode::SUB, Some(Mode::Immediate), 32),
            Mnemonic::MULI => (Opcode::MUL, Some(Mode::Immediate), 32),
            Mnemonic::DIVI => (Opcode::DIV, Some(Mode::Immediate), 32),
            Mnemonic::CMP => (Opcode::CMP, Some(Mode::Register), 0),
            Mnemonic::CMPI => (Opcode::CMP, Some(Mode::Immediate), 32),
            Mnemonic::AND => (Opcode::AND, Some(Mode::Register), 0),
            Mnemonic::OR => (Opcode::OR, Some(Mode::Register), 0),
            Mnemonic::XOR => (Opcode::XOR, Some(Mode::Register), 0),
            Mnemonic::NOT => (Opcode::NOT, None, 0),
            Mnemonic::TEST => (Opcode::TEST, Some(Mode::Register), 0),
            Mnemonic::SHL => (Opcode::SHL, Some(Mode::Immediate), 32),
            Mnemonic::SHR => (Opcode::SHR, Some(Mode::Immediate), 32),
            Mnemonic::INC => (Opcode::ADD, Some(Mode::Immediate), 32),
            Mnemonic::DEC => (Opcode::SUB, Some(Mode::Immediate), 32),
            Mnemonic::IN => (Opcode::IN, None, 0),
            Mnemonic::OUT => (Opcode::OUT, None, 0),
            Mnemonic::JMP => (Opcode::JMP, None, 32),
            Mnemonic::JZ => (Opcode::JZ, None, 32),
            Mnemonic::JNZ => (Opcode::JNZ, None, 32),
            Mnemonic::JN => (Opcode::JN, None, 32),
            Mnemonic::JNN => (Opcode::JNN, None, 32),
            Mnemonic::CALL => (Opcode::CALL, None, 32),
            Mnemonic::RET => (Opcode::RET, None, 0),
            Mnemonic::PUSH => (Opcode::PUSH, Some(Mode::Register), 0),
            Mnemonic::POP => (Opcode::POP, Some(Mode::Register), 0),
            Mnemonic::INT => (Opcode::INT, None, 0),
            Mnemonic::IRET => (Opcode::IRET, None, 0),
        };
        Encoding {
            opcode,
            mode,
            imm_bits,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum JumpTarget<'i> {
    Address(i64),
    Label(Span<'i>),
}

#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(Word),

    /// Immediate-family instruction whose value may still be a label.
    Immediate {
        opcode: Opcode,
        mode: Mode,
        rd: u8,
        value: JumpTarget<'i>,
    },

    /// Branch or call whose target may still be a label.
    Jump {
        opcode: Opcode,
        target: JumpTarget<'i>,
    },
}

fn process_enum_inner<'i, T: FromStr<Err = ParseEnumError>>(pair: &Pair<'i, Rule>) -> Result<T> {
    pair.as_str()
        .to_uppercase()
        .parse()
        .map_err(|err| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn next_operand<'i>(pairs: &mut Pairs<'i, Rule>, span: &Span<'i>) -> Result<Pair<'i, Rule>> {
    pairs
        .next()
        .ok_or_else(|| new_parser_error(span.clone(), "Missing operand".to_owned()))
}

fn process_register(pair: Pair<Rule>) -> Result<u8> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let span = pair.as_span();
    let inner = pair.into_inner().next().unwrap();
    if inner.as_rule() != Rule::register {
        return Err(new_parser_error(span, "Expected a register".to_owned()));
    }
    let index: u64 = process_num_lit(inner.into_inner().next().unwrap(), 10)?;
    if index >= scpu::constants::REGISTER_COUNT as u64 {
        return Err(new_parser_error(
            span,
            format!("Register index out of range: R{}", index),
        ));
    }
    Ok(index as u8)
}

fn process_value<'i>(pair: Pair<'i, Rule>) -> Result<JumpTarget<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let span = pair.as_span();
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(JumpTarget::Address(process_int(inner)?)),
        Rule::identifier => Ok(JumpTarget::Label(inner.as_span())),
        _ => Err(new_parser_error(span, "Expected a value or label".to_owned())),
    }
}

fn process_amount(pair: Pair<Rule>) -> Result<i64> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let span = pair.as_span();
    let inner = pair.into_inner().next().unwrap();
    if inner.as_rule() != Rule::int {
        return Err(new_parser_error(span, "Expected an integer".to_owned()));
    }
    process_int(inner)
}

fn process_instruction<'i>(pair: Pair<'i, Rule>, instr: &mut InstrVec<'i>) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let span = pair.as_span();
    let mut pairs = pair.into_inner();
    let mnemonic: Mnemonic = process_enum_inner(&pairs.next().unwrap())?;
    let encoding = mnemonic.encoding();

    match mnemonic {
        Mnemonic::NOP | Mnemonic::HALT | Mnemonic::RET | Mnemonic::INT | Mnemonic::IRET => {
            instr.push(ParsedInstruction::Complete(make_bare(encoding.opcode)));
        }

        Mnemonic::PUSH | Mnemonic::POP | Mnemonic::NOT | Mnemonic::IN | Mnemonic::OUT => {
            let r1 = process_register(next_operand(&mut pairs, &span)?)?;
            // Mnemonics without a mode still emit two zero bits there.
            let mode = encoding.mode.unwrap_or(Mode::Register);
            instr.push(ParsedInstruction::Complete(make_unary(
                encoding.opcode,
                mode,
                r1,
            )));
        }

        Mnemonic::MOV
        | Mnemonic::ADD
        | Mnemonic::SUB
        | Mnemonic::MUL
        | Mnemonic::DIV
        | Mnemonic::CMP
        | Mnemonic::AND
        | Mnemonic::OR
        | Mnemonic::XOR
        | Mnemonic::TEST
        | Mnemonic::LOADI
        | Mnemonic::STOREI => {
            let r1 = process_register(next_operand(&mut pairs, &span)?)?;
            let r2 = process_register(next_operand(&mut pairs, &span)?)?;
            let mode = encoding.mode.unwrap_or(Mode::Register);
            instr.push(ParsedInstruction::Complete(make_reg(
                encoding.opcode,
                mode,
                r1,
                r2,
            )));
        }

        Mnemonic::LOADK
        | Mnemonic::LOADM
        | Mnemonic::STOREM
        | Mnemonic::ADDI
        | Mnemonic::SUBI
        | Mnemonic::MULI
        | Mnemonic::DIVI
        | Mnemonic::CMPI => {
            let rd = process_register(next_operand(&mut pairs, &span)?)?;
            let value = process_value(next_operand(&mut pairs, &span)?)?;
            instr.push(ParsedInstruction::Immediate {
                opcode: encoding.opcode,
                mode: encoding.mode.unwrap_or(Mode::Immediate),
                rd,
                value,
            });
        }

        Mnemonic::INC | Mnemonic::DEC => {
            // INC Rn and DEC Rn assemble as ADDI Rn, 1 and SUBI Rn, 1.
            let rd = process_register(next_operand(&mut pairs, &span)?)?;
            instr.push(ParsedInstruction::Immediate {
                opcode: encoding.opcode,
                mode: Mode::Immediate,
                rd,
                value: JumpTarget::Address(1),
            });
        }

        Mnemonic::SHL | Mnemonic::SHR => {
            let r1 = process_register(next_operand(&mut pairs, &span)?)?;
            let r2 = process_register(next_operand(&mut pairs, &span)?)?;
            let amount = process_amount(next_operand(&mut pairs, &span)?)?;
            instr.push(ParsedInstruction::Complete(make_shift(
                encoding.opcode,
                r1,
                r2,
                amount,
            )));
        }

        Mnemonic::JMP
        | Mnemonic::JZ
        | Mnemonic::JNZ
        | Mnemonic::JN
        | Mnemonic::JNN
        | Mnemonic::CALL => {
            let target = process_value(next_operand(&mut pairs, &span)?)?;
            instr.push(ParsedInstruction::Jump {
                opcode: encoding.opcode,
                target,
            });
        }
    }

    if let Some(extra) = pairs.next() {
        return Err(new_parser_error(
            extra.as_span(),
            "Too many operands".to_owned(),
        ));
    }

    Ok(())
}

pub fn process_statements(pair: Pair<Rule>) -> Result<(InstrVec, LabelMap)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = HashMap::new();

    for statement in pair.into_inner() {
        if statement.as_rule() == Rule::EOI {
            continue;
        }
        process_labeled_element(statement, &mut labels, instructions.len() as u64, |p| {
            process_instruction(p, &mut instructions)
        })?;
    }

    Ok((instructions, labels))
}

fn resolve_target(labels: &LabelMap, target: &JumpTarget) -> Result<i64> {
    match target {
        JumpTarget::Address(address) => Ok(*address),
        JumpTarget::Label(label) => labels
            .get(label.as_str())
            .map(|index| *index as i64)
            .ok_or_else(|| new_parser_error(label.clone(), "Label not found".to_owned())),
    }
}

fn finalize_instruction(labels: &LabelMap, instr: &ParsedInstruction) -> Result<Word> {
    Ok(match instr {
        ParsedInstruction::Complete(word) => *word,
        ParsedInstruction::Immediate {
            opcode,
            mode,
            rd,
            value,
        } => make_imm(*opcode, *mode, *rd, resolve_target(labels, value)?),
        ParsedInstruction::Jump { opcode, target } => {
            make_jump(*opcode, resolve_target(labels, target)? as u64)
        }
    })
}

pub fn assemble_instructions(instr: &[ParsedInstruction], labels: &LabelMap) -> Result<Vec<Word>> {
    instr
        .iter()
        .map(|pi| finalize_instruction(labels, pi))
        .collect()
}
