use crate::memory::Memory;
use crate::processor::decode::{AluOp, BranchCond, Instr, Operand, ShiftOp};
use crate::processor::{ExitCode, Flags, TickResult};
use crate::{constants, Value};
use std::io;

fn set_flags(flags: &mut Flags, result: Value) {
    flags.zero = result == 0;
    flags.negative = (result >> (constants::VALUE_WIDTH - 1)) & 1 == 1;
}

fn operand_value(registers: &[Value], operand: Operand) -> Value {
    match operand {
        Operand::Reg(r) => registers[r as usize],
        Operand::Imm(k) => k as Value,
    }
}

/// Floor division, matching the arbitrary-precision semantics register
/// values were originally divided with. The dividend is an unsigned word;
/// an immediate divisor keeps its sign.
fn div_floor(dividend: i128, divisor: i128) -> i128 {
    let quotient = dividend / divisor;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quotient - 1
    } else {
        quotient
    }
}

fn push(registers: &mut [Value], memory: &mut Memory, value: Value) {
    let sp = constants::SP_INDEX;
    registers[sp] = registers[sp].wrapping_sub(1);
    memory.write(registers[sp], value);
}

fn pop(registers: &mut [Value], memory: &Memory) -> Value {
    let sp = constants::SP_INDEX;
    let value = memory.read(registers[sp]);
    registers[sp] = registers[sp].wrapping_add(1);
    value
}

fn read_input(registers: &mut [Value], rd: u8) -> TickResult {
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return TickResult::Stop(ExitCode::BadInput);
    }
    let text = line.trim();
    let parsed = text
        .parse::<u64>()
        .or_else(|_| text.parse::<i64>().map(|v| v as u64));
    match parsed {
        Ok(value) => {
            registers[rd as usize] = value;
            TickResult::Next
        }
        Err(_) => TickResult::Stop(ExitCode::BadInput),
    }
}

/// Executes one decoded instruction against the machine state.
///
/// `RET` and `IRET` write the popped address into the program counter by
/// jumping one past it, so control resumes after the `CALL`/`INT` that
/// pushed it.
pub fn execute(
    registers: &mut [Value],
    flags: &mut Flags,
    memory: &mut Memory,
    instr: Instr,
    program_counter: u64,
) -> TickResult {
    match instr {
        Instr::Nop => TickResult::Next,

        Instr::Halt => TickResult::Stop(ExitCode::Halted),

        Instr::Mov { rd, rs } => {
            registers[rd as usize] = registers[rs as usize];
            TickResult::Next
        }

        Instr::LoadImm { rd, value } => {
            registers[rd as usize] = value as Value;
            TickResult::Next
        }

        Instr::LoadDirect { rd, address } => {
            registers[rd as usize] = memory.read(address);
            TickResult::Next
        }

        Instr::LoadIndirect { rd, base, offset } => {
            let address = registers[base as usize].wrapping_add(offset);
            registers[rd as usize] = memory.read(address);
            TickResult::Next
        }

        Instr::StoreDirect { rs, address } => {
            memory.write(address, registers[rs as usize]);
            TickResult::Next
        }

        Instr::StoreIndirect { rs, base, offset } => {
            let address = registers[base as usize].wrapping_add(offset);
            memory.write(address, registers[rs as usize]);
            TickResult::Next
        }

        Instr::Alu { op, rd, operand } => {
            let lhs = registers[rd as usize];
            let rhs = operand_value(registers, operand);
            let result = match op {
                AluOp::Add => lhs.wrapping_add(rhs),
                AluOp::Sub => lhs.wrapping_sub(rhs),
                AluOp::Mul => lhs.wrapping_mul(rhs),
                AluOp::Div => {
                    let divisor = match operand {
                        Operand::Reg(r) => i128::from(registers[r as usize]),
                        Operand::Imm(k) => i128::from(k),
                    };
                    if divisor == 0 {
                        return TickResult::Stop(ExitCode::DivisionByZero);
                    }
                    div_floor(i128::from(lhs), divisor) as Value
                }
                AluOp::And => lhs & rhs,
                AluOp::Or => lhs | rhs,
                AluOp::Xor => lhs ^ rhs,
                AluOp::Cmp => {
                    let (s1, s2) = (lhs as i64, rhs as i64);
                    flags.zero = s1 == s2;
                    flags.negative = s1 < s2;
                    return TickResult::Next;
                }
            };
            registers[rd as usize] = result;
            set_flags(flags, result);
            TickResult::Next
        }

        Instr::Not { rd } => {
            let result = !registers[rd as usize];
            registers[rd as usize] = result;
            set_flags(flags, result);
            TickResult::Next
        }

        Instr::Test { rs1, rs2 } => {
            let result = registers[rs1 as usize] & registers[rs2 as usize];
            set_flags(flags, result);
            TickResult::Next
        }

        Instr::Shift { op, rd, rs, amount } => {
            let amount = amount as u64;
            let value = registers[rs as usize];
            let result = if amount >= u64::from(constants::VALUE_WIDTH) {
                0
            } else {
                match op {
                    ShiftOp::Left => value << amount,
                    ShiftOp::Right => value >> amount,
                }
            };
            registers[rd as usize] = result;
            set_flags(flags, result);
            TickResult::Next
        }

        Instr::Inc { rd } => {
            registers[rd as usize] = registers[rd as usize].wrapping_add(1);
            TickResult::Next
        }

        Instr::Dec { rd } => {
            registers[rd as usize] = registers[rd as usize].wrapping_sub(1);
            TickResult::Next
        }

        Instr::In { rd } => read_input(registers, rd),

        Instr::Out { rs } => {
            println!("R{}: {}", rs, registers[rs as usize]);
            TickResult::Next
        }

        Instr::Push { rs } => {
            let value = registers[rs as usize];
            push(registers, memory, value);
            TickResult::Next
        }

        Instr::Pop { rd } => {
            registers[rd as usize] = pop(registers, memory);
            TickResult::Next
        }

        Instr::Call { target } => {
            push(registers, memory, program_counter);
            TickResult::Jump(target)
        }

        Instr::Ret => {
            let target = pop(registers, memory);
            TickResult::Jump(target.wrapping_add(1))
        }

        Instr::Int => {
            push(registers, memory, program_counter);
            TickResult::Jump(constants::INT_VECTOR)
        }

        Instr::Iret => {
            let target = pop(registers, memory);
            TickResult::Jump(target.wrapping_add(1))
        }

        Instr::Branch { cond, target } => {
            let taken = match cond {
                BranchCond::Always => true,
                BranchCond::Zero => flags.zero,
                BranchCond::NotZero => !flags.zero,
                BranchCond::Negative => flags.negative,
                BranchCond::NotNegative => !flags.negative,
            };
            if taken {
                TickResult::Jump(target)
            } else {
                TickResult::Next
            }
        }
    }
}
