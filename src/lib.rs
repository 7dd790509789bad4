//! Simulation of a small educational 64-bit processor.
//!
//! The machine has 16 general-purpose 64-bit registers (register 15 doubles
//! as the stack pointer), two condition flags (`Z` and `N`), a sparse
//! word-addressed memory, and a variable-length instruction encoding where
//! each word carries its own declared bit length (see [`Word`]).
//!
//! The usual way to drive it is to assemble a program (the `sasm` crate),
//! load the resulting words with [`Processor::load`] and call
//! [`Processor::run`]:
//!
//! ```
//! use scpu::{make_bare, make_imm, Memory, Mode, Opcode, Processor, ExitCode};
//!
//! let program = [
//!     make_imm(Opcode::LOAD, Mode::Immediate, 0, 42),
//!     make_bare(Opcode::HALT),
//! ];
//!
//! let mut processor = Processor::default();
//! let mut memory = Memory::new();
//! processor.load(&mut memory, &program, 0);
//!
//! assert_eq!(processor.run(&mut memory), ExitCode::Halted);
//! assert_eq!(processor.register(0), 42);
//! ```

pub mod constants;
mod instructions;
mod memory;
mod processor;

pub use crate::instructions::*;
pub use crate::memory::*;
pub use crate::processor::*;

/// Contents of a register or memory cell.
pub type Value = u64;
