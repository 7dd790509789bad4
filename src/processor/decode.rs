use crate::constants;
use crate::instructions::{Mode, Opcode, Word};
use crate::processor::ExitCode;
use num::FromPrimitive;
use std::fmt;

/// Errors raised while recovering instruction fields from a word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecodeError {
    /// The word is narrower than the fields its opcode requires.
    TooShort { bits: u32, required: u32 },
    /// The opcode field matches no known instruction.
    UnknownOpcode(u64),
    /// The addressing mode is not defined for this opcode.
    UnknownMode { opcode: Opcode, mode: Mode },
}

impl DecodeError {
    pub fn exit_code(self) -> ExitCode {
        match self {
            DecodeError::TooShort { .. } => ExitCode::InstructionTooShort,
            DecodeError::UnknownOpcode(_) => ExitCode::InvalidOpcode,
            DecodeError::UnknownMode { .. } => ExitCode::InvalidMode,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::TooShort { bits, required } => write!(
                f,
                "Instruction too short ({} bits, needs {})",
                bits, required
            ),
            DecodeError::UnknownOpcode(opcode) => {
                write!(f, "Unknown opcode {:#04x}", opcode)
            }
            DecodeError::UnknownMode { opcode, mode } => {
                write!(f, "Mode {:?} is not defined for {:?}", mode, opcode)
            }
        }
    }
}

/// ALU operations sharing the register/immediate operand forms.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Cmp,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShiftOp {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BranchCond {
    Always,
    Zero,
    NotZero,
    Negative,
    NotNegative,
}

/// Second operand of an ALU instruction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    Reg(u8),
    Imm(i64),
}

/// A fully decoded instruction, dispatched on `(opcode, mode)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instr {
    Nop,
    Halt,
    Mov { rd: u8, rs: u8 },
    LoadImm { rd: u8, value: i64 },
    LoadDirect { rd: u8, address: u64 },
    LoadIndirect { rd: u8, base: u8, offset: u64 },
    StoreDirect { rs: u8, address: u64 },
    StoreIndirect { rs: u8, base: u8, offset: u64 },
    Alu { op: AluOp, rd: u8, operand: Operand },
    Not { rd: u8 },
    Test { rs1: u8, rs2: u8 },
    Shift { op: ShiftOp, rd: u8, rs: u8, amount: i64 },
    Inc { rd: u8 },
    Dec { rd: u8 },
    In { rd: u8 },
    Out { rs: u8 },
    Push { rs: u8 },
    Pop { rd: u8 },
    Call { target: u64 },
    Ret,
    Branch { cond: BranchCond, target: u64 },
    Int,
    Iret,
}

fn low_bits(value: u64, width: u32) -> u64 {
    if width >= constants::VALUE_WIDTH {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}

fn sign_extend(value: u64, width: u32) -> i64 {
    if width == 0 {
        return 0;
    }
    if width >= constants::VALUE_WIDTH {
        return value as i64;
    }
    let sign_bit = 1u64 << (width - 1);
    if value & sign_bit != 0 {
        (value | !((1u64 << width) - 1)) as i64
    } else {
        value as i64
    }
}

fn mode_field(value: u64, bits: u32) -> Mode {
    let raw = (value >> (bits - constants::OPCODE_WIDTH - constants::MODE_WIDTH))
        & constants::MODE_MASK;
    match raw {
        0 => Mode::Register,
        1 => Mode::Immediate,
        2 => Mode::Direct,
        3 => Mode::Indirect,
        _ => unreachable!(),
    }
}

fn reg_field(value: u64, bits: u32, end: u32) -> u8 {
    ((value >> (bits - end)) & constants::REG_ID_MASK) as u8
}

/// Recovers the instruction encoded in `word`.
///
/// The opcode occupies the top eight bits; for opcodes with several
/// addressing modes the two bits after it select the field layout, so
/// dispatch is effectively on the 10-bit `(opcode, mode)` tag. Fields
/// beyond a layout's declared width are ignored; words too narrow for
/// their opcode's layout are rejected.
pub fn decode(word: Word) -> Result<Instr, DecodeError> {
    let value = word.value;
    // A zero word carries no length of its own; treat it as the minimal
    // eight bits so it decodes as NOP.
    let bits = if word.bits == 0 {
        constants::OPCODE_WIDTH
    } else {
        word.bits
    };

    if bits < constants::OPCODE_WIDTH {
        return Err(DecodeError::TooShort {
            bits,
            required: constants::OPCODE_WIDTH,
        });
    }

    let require = |required: u32| {
        if bits >= required {
            Ok(())
        } else {
            Err(DecodeError::TooShort { bits, required })
        }
    };

    let opcode_value = value >> (bits - constants::OPCODE_WIDTH);
    let opcode = Opcode::from_u64(opcode_value)
        .ok_or_else(|| DecodeError::UnknownOpcode(opcode_value))?;

    match opcode {
        Opcode::NOP => Ok(Instr::Nop),
        Opcode::HALT => Ok(Instr::Halt),
        Opcode::RET => Ok(Instr::Ret),
        Opcode::INT => Ok(Instr::Int),
        Opcode::IRET => Ok(Instr::Iret),

        Opcode::JMP | Opcode::JZ | Opcode::JNZ | Opcode::JN | Opcode::JNN => {
            let cond = match opcode {
                Opcode::JMP => BranchCond::Always,
                Opcode::JZ => BranchCond::Zero,
                Opcode::JNZ => BranchCond::NotZero,
                Opcode::JN => BranchCond::Negative,
                _ => BranchCond::NotNegative,
            };
            let target = low_bits(value, bits - constants::OPCODE_WIDTH);
            Ok(Instr::Branch { cond, target })
        }

        Opcode::CALL => {
            let target = low_bits(value, bits - constants::OPCODE_WIDTH);
            Ok(Instr::Call { target })
        }

        Opcode::INC | Opcode::DEC => {
            require(constants::SHORT_WIDTH)?;
            let rd = (value & constants::REG_ID_MASK) as u8;
            Ok(if opcode == Opcode::INC {
                Instr::Inc { rd }
            } else {
                Instr::Dec { rd }
            })
        }

        Opcode::PUSH | Opcode::POP | Opcode::NOT | Opcode::IN | Opcode::OUT => {
            require(constants::UNARY_WIDTH)?;
            let r1 = reg_field(value, bits, constants::UNARY_WIDTH);
            Ok(match opcode {
                Opcode::PUSH => Instr::Push { rs: r1 },
                Opcode::POP => Instr::Pop { rd: r1 },
                Opcode::NOT => Instr::Not { rd: r1 },
                Opcode::IN => Instr::In { rd: r1 },
                _ => Instr::Out { rs: r1 },
            })
        }

        Opcode::LOAD => {
            require(constants::OPCODE_WIDTH + constants::MODE_WIDTH)?;
            let mode = mode_field(value, bits);
            let rd = {
                require(constants::UNARY_WIDTH)?;
                reg_field(value, bits, constants::UNARY_WIDTH)
            };
            match mode {
                Mode::Register => {
                    require(constants::REG_WIDTH)?;
                    let rs = reg_field(value, bits, constants::REG_WIDTH);
                    Ok(Instr::Mov { rd, rs })
                }
                Mode::Immediate => {
                    let width = bits - constants::UNARY_WIDTH;
                    let imm = sign_extend(low_bits(value, width), width);
                    Ok(Instr::LoadImm { rd, value: imm })
                }
                Mode::Direct => {
                    let address = low_bits(value, bits - constants::UNARY_WIDTH);
                    Ok(Instr::LoadDirect { rd, address })
                }
                Mode::Indirect => {
                    require(constants::REG_WIDTH)?;
                    let base = reg_field(value, bits, constants::REG_WIDTH);
                    let offset = low_bits(value, bits - constants::REG_WIDTH);
                    Ok(Instr::LoadIndirect { rd, base, offset })
                }
            }
        }

        Opcode::STORE => {
            require(constants::OPCODE_WIDTH + constants::MODE_WIDTH)?;
            let mode = mode_field(value, bits);
            let rs = {
                require(constants::UNARY_WIDTH)?;
                reg_field(value, bits, constants::UNARY_WIDTH)
            };
            match mode {
                Mode::Direct => {
                    let address = low_bits(value, bits - constants::UNARY_WIDTH);
                    Ok(Instr::StoreDirect { rs, address })
                }
                Mode::Indirect => {
                    require(constants::REG_WIDTH)?;
                    let base = reg_field(value, bits, constants::REG_WIDTH);
                    let offset = low_bits(value, bits - constants::REG_WIDTH);
                    Ok(Instr::StoreIndirect { rs, base, offset })
                }
                mode => Err(DecodeError::UnknownMode { opcode, mode }),
            }
        }

        Opcode::ADD
        | Opcode::SUB
        | Opcode::MUL
        | Opcode::DIV
        | Opcode::CMP
        | Opcode::AND
        | Opcode::OR
        | Opcode::XOR => {
            let op = match opcode {
                Opcode::ADD => AluOp::Add,
                Opcode::SUB => AluOp::Sub,
                Opcode::MUL => AluOp::Mul,
                Opcode::DIV => AluOp::Div,
                Opcode::CMP => AluOp::Cmp,
                Opcode::AND => AluOp::And,
                Opcode::OR => AluOp::Or,
                _ => AluOp::Xor,
            };
            require(constants::UNARY_WIDTH)?;
            let mode = mode_field(value, bits);
            let rd = reg_field(value, bits, constants::UNARY_WIDTH);
            let operand = match mode {
                Mode::Register => {
                    require(constants::REG_WIDTH)?;
                    Operand::Reg(reg_field(value, bits, constants::REG_WIDTH))
                }
                Mode::Immediate => {
                    let width = bits - constants::UNARY_WIDTH;
                    Operand::Imm(sign_extend(low_bits(value, width), width))
                }
                mode => return Err(DecodeError::UnknownMode { opcode, mode }),
            };
            Ok(Instr::Alu { op, rd, operand })
        }

        Opcode::TEST => {
            require(constants::REG_WIDTH)?;
            let mode = mode_field(value, bits);
            if mode != Mode::Register {
                return Err(DecodeError::UnknownMode { opcode, mode });
            }
            let rs1 = reg_field(value, bits, constants::UNARY_WIDTH);
            let rs2 = reg_field(value, bits, constants::REG_WIDTH);
            Ok(Instr::Test { rs1, rs2 })
        }

        Opcode::SHL | Opcode::SHR => {
            require(constants::REG_WIDTH)?;
            let mode = mode_field(value, bits);
            if mode != Mode::Immediate {
                return Err(DecodeError::UnknownMode { opcode, mode });
            }
            let op = if opcode == Opcode::SHL {
                ShiftOp::Left
            } else {
                ShiftOp::Right
            };
            let rd = reg_field(value, bits, constants::UNARY_WIDTH);
            let rs = reg_field(value, bits, constants::REG_WIDTH);
            let width = bits - constants::REG_WIDTH;
            let amount = sign_extend(low_bits(value, width), width);
            Ok(Instr::Shift { op, rd, rs, amount })
        }
    }
}
