mod decode;
mod logic;

pub use self::decode::{
    decode, AluOp, BranchCond, DecodeError, Instr, Operand, ShiftOp,
};

use crate::instructions::Word;
use crate::memory::Memory;
use crate::{constants, Value};

/// Condition flags updated by arithmetic, logic and compare instructions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Flags {
    /// Result was zero (for `CMP`: operands were equal).
    pub zero: bool,
    /// Bit 63 of the result was set (for `CMP`: first operand was smaller).
    pub negative: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitCode {
    Halted,              // HALT instruction was executed (normal shutdown)
    DivisionByZero,      // Attempted integer division by zero
    InvalidOpcode,       // Opcode was not recognized
    InvalidMode,         // Addressing mode is not defined for the opcode
    InstructionTooShort, // Word does not cover the fields its opcode requires
    BadInput,            // IN could not parse a value from standard input
}

pub enum TickResult {
    Next,
    Jump(u64),
    Stop(ExitCode),
}

/// The processor core: sixteen 64-bit registers (register 15 is the stack
/// pointer), condition flags and the program counter. Memory is supplied
/// externally on every run.
pub struct Processor {
    registers: [Value; constants::REGISTER_COUNT],
    flags: Flags,
    program_counter: u64,
}

impl Processor {
    pub fn new() -> Processor {
        Processor {
            registers: [0; constants::REGISTER_COUNT],
            flags: Flags::default(),
            program_counter: 0,
        }
    }

    pub fn registers(&self) -> &[Value] {
        &self.registers[..]
    }

    pub fn register(&self, index: usize) -> Value {
        self.registers[index]
    }

    pub fn register_mut(&mut self, index: usize) -> &mut Value {
        &mut self.registers[index]
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn program_counter(&self) -> u64 {
        self.program_counter
    }

    /// Writes `words` to memory starting at `base` and points the program
    /// counter at the first one.
    pub fn load(&mut self, memory: &mut Memory, words: &[Word], base: u64) {
        for (i, word) in words.iter().enumerate() {
            memory.write_word(base + i as u64, *word);
        }
        self.program_counter = base;
    }

    /// Fetches, decodes and executes the instruction at the program counter.
    pub fn tick(&mut self, memory: &mut Memory) -> TickResult {
        let word = memory.fetch(self.program_counter);
        let instr = match decode(word) {
            Ok(instr) => instr,
            Err(err) => return TickResult::Stop(err.exit_code()),
        };

        logic::execute(
            &mut self.registers,
            &mut self.flags,
            memory,
            instr,
            self.program_counter,
        )
    }

    /// Runs until the machine stops. Instructions that do not transfer
    /// control advance the program counter by one word.
    pub fn run(&mut self, memory: &mut Memory) -> ExitCode {
        loop {
            match self.tick(memory) {
                TickResult::Next => {
                    self.program_counter = self.program_counter.wrapping_add(1);
                }
                TickResult::Jump(target) => {
                    self.program_counter = target;
                }
                TickResult::Stop(exit_code) => {
                    return exit_code;
                }
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
