use crate::constants;
use num::traits::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};

// Instruction layouts (fields listed most significant first)
//
//   bare     [opcode:8]
//   jump     [opcode:8][target:32]
//   short    [opcode:8][pad:2][r1:4]
//   unary    [opcode:8][mode:2][r1:4]
//   reg      [opcode:8][mode:2][r1:4][r2:4]
//   imm      [opcode:8][mode:2][r1:4][immediate:32]
//   shift    [opcode:8][mode:2][r1:4][r2:4][amount:32]
//
// Words are variable length; the declared length travels with the value
// (see `Word`), since the high opcode bits of several instructions are zero.

#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    //  Mnemonic(s)            | Family | Effect
    //-------------------------+--------+----------------------------------------------
    NOP   = 0x00, //           | bare   | Does nothing
    NOT   = 0x10, //           | unary  | R1 = ~R1
    AND   = 0x11, // AND/ANDI  | reg/imm| R1 = R1 & operand
    XOR   = 0x12, // XOR/XORI  | reg/imm| R1 = R1 ^ operand
    OR    = 0x13, // OR/ORI    | reg/imm| R1 = R1 | operand
    TEST  = 0x21, //           | reg    | flags from R1 & R2, registers untouched
    SHL   = 0x28, //           | shift  | R1 = R2 << amount
    SHR   = 0x29, //           | shift  | R1 = R2 >> amount
    INC   = 0x48, //           | short  | R1 = R1 + 1 (no flags)
    DEC   = 0x49, //           | short  | R1 = R1 - 1 (no flags)
    ADD   = 0x81, // ADD/ADDI  | reg/imm| R1 = R1 + operand
    SUB   = 0x82, // SUB/SUBI  | reg/imm| R1 = R1 - operand
    MUL   = 0x83, // MUL/MULI  | reg/imm| R1 = R1 * operand
    DIV   = 0x84, // DIV/DIVI  | reg/imm| R1 = R1 / operand; stops on divisor 0
    CMP   = 0x8A, // CMP/CMPI  | reg/imm| signed compare, Z = (a == b), N = (a < b)
    IN    = 0x90, //           | unary  | R1 = integer read from standard input
    OUT   = 0x91, //           | unary  | prints R1 on standard output
    LOAD  = 0xC2, // MOV/LOADK/LOADM/LOADI, dispatched on mode
    STORE = 0xC3, // STOREM/STOREI, dispatched on mode
    PUSH  = 0xD0, //           | unary  | SP -= 1; MEM[SP] = R1
    POP   = 0xD1, //           | unary  | R1 = MEM[SP]; SP += 1
    CALL  = 0xD8, //           | jump   | SP -= 1; MEM[SP] = PC; PC = target
    RET   = 0xD9, //           | bare   | PC = MEM[SP] + 1; SP += 1
    JMP   = 0xE0, //           | jump   | PC = target
    JZ    = 0xE1, //           | jump   | PC = target if Z
    JN    = 0xE2, //           | jump   | PC = target if N
    JNN   = 0xED, //           | jump   | PC = target if not N
    JNZ   = 0xEE, //           | jump   | PC = target if not Z
    INT   = 0xF0, //           | bare   | SP -= 1; MEM[SP] = PC; PC = 0x1000
    IRET  = 0xF1, //           | bare   | PC = MEM[SP] + 1; SP += 1
    HALT  = 0xFF, //           | bare   | Stops the machine
}

/// Addressing mode, a two-bit field directly after the opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Mode {
    /// Second operand is a register.
    Register = 0,
    /// Second operand is a sign-extended immediate.
    Immediate = 1,
    /// Operand is a direct memory address.
    Direct = 2,
    /// Effective address is `R2 + offset`.
    Indirect = 3,
}

/// An encoded instruction word together with its declared bit length.
///
/// The encoding is self-describing only for values whose most significant
/// opcode bit is set; opcodes below 0x80 would lose leading zero bits if the
/// length were recovered from the value, so it is stored alongside.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Word {
    pub value: u64,
    pub bits: u32,
}

impl Word {
    pub fn new(value: u64, bits: u32) -> Word {
        debug_assert!(bits >= constants::OPCODE_WIDTH && bits <= constants::VALUE_WIDTH);
        Word { value, bits }
    }

    /// Word holding a plain data value. The width is the value's own bit
    /// length, with the minimal eight bits for small values (a zero word
    /// still decodes as `NOP`).
    pub fn from_value(value: u64) -> Word {
        let bits = (constants::VALUE_WIDTH - value.leading_zeros()).max(constants::OPCODE_WIDTH);
        Word { value, bits }
    }

    /// The word as a binary string of its declared width.
    pub fn bit_string(&self) -> String {
        format!("{:0width$b}", self.value, width = self.bits as usize)
    }
}

#[inline]
pub fn enum_to_u64<T: ToPrimitive + Copy>(val: T) -> u64 {
    val.to_u64().unwrap()
}

/// Constructs a bare instruction (opcode only).
#[inline]
pub fn make_bare(oc: Opcode) -> Word {
    Word::new(enum_to_u64(oc), constants::BARE_WIDTH)
}

/// Constructs a jump instruction (opcode + 32-bit target).
#[inline]
pub fn make_jump(oc: Opcode, target: u64) -> Word {
    let value = (enum_to_u64(oc) << constants::IMMEDIATE_WIDTH)
        | (target & constants::IMMEDIATE_MASK);
    Word::new(value, constants::JUMP_WIDTH)
}

/// Constructs a short-form instruction (opcode + register in the low bits).
#[inline]
pub fn make_short(oc: Opcode, r1: u8) -> Word {
    let value = (enum_to_u64(oc) << (constants::MODE_WIDTH + constants::REG_ID_WIDTH))
        | (u64::from(r1) & constants::REG_ID_MASK);
    Word::new(value, constants::SHORT_WIDTH)
}

/// Constructs a single-register instruction (opcode + mode + register).
#[inline]
pub fn make_unary(oc: Opcode, mode: Mode, r1: u8) -> Word {
    let value = (enum_to_u64(oc) << (constants::MODE_WIDTH + constants::REG_ID_WIDTH))
        | (enum_to_u64(mode) << constants::REG_ID_WIDTH)
        | (u64::from(r1) & constants::REG_ID_MASK);
    Word::new(value, constants::UNARY_WIDTH)
}

/// Constructs a two-register instruction (opcode + mode + r1 + r2).
#[inline]
pub fn make_reg(oc: Opcode, mode: Mode, r1: u8, r2: u8) -> Word {
    let value = (enum_to_u64(oc)
        << (constants::MODE_WIDTH + constants::REG_ID_WIDTH + constants::REG_ID_WIDTH))
        | (enum_to_u64(mode) << (constants::REG_ID_WIDTH + constants::REG_ID_WIDTH))
        | ((u64::from(r1) & constants::REG_ID_MASK) << constants::REG_ID_WIDTH)
        | (u64::from(r2) & constants::REG_ID_MASK);
    Word::new(value, constants::REG_WIDTH)
}

/// Constructs an immediate instruction (opcode + mode + r1 + 32-bit value).
///
/// The immediate is truncated to its 32-bit field; negative values wrap to
/// their two's-complement representation.
#[inline]
pub fn make_imm(oc: Opcode, mode: Mode, r1: u8, immediate: i64) -> Word {
    let value = (enum_to_u64(oc)
        << (constants::MODE_WIDTH + constants::REG_ID_WIDTH + constants::IMMEDIATE_WIDTH))
        | (enum_to_u64(mode) << (constants::REG_ID_WIDTH + constants::IMMEDIATE_WIDTH))
        | ((u64::from(r1) & constants::REG_ID_MASK) << constants::IMMEDIATE_WIDTH)
        | (immediate as u64 & constants::IMMEDIATE_MASK);
    Word::new(value, constants::IMM_WIDTH)
}

/// Constructs a shift instruction (opcode + mode + r1 + r2 + 32-bit amount).
#[inline]
pub fn make_shift(oc: Opcode, r1: u8, r2: u8, amount: i64) -> Word {
    let value = (enum_to_u64(oc)
        << (constants::MODE_WIDTH
            + constants::REG_ID_WIDTH
            + constants::REG_ID_WIDTH
            + constants::IMMEDIATE_WIDTH))
        | (enum_to_u64(Mode::Immediate)
            << (constants::REG_ID_WIDTH + constants::REG_ID_WIDTH + constants::IMMEDIATE_WIDTH))
        | ((u64::from(r1) & constants::REG_ID_MASK)
            << (constants::REG_ID_WIDTH + constants::IMMEDIATE_WIDTH))
        | ((u64::from(r2) & constants::REG_ID_MASK) << constants::IMMEDIATE_WIDTH)
        | (amount as u64 & constants::IMMEDIATE_MASK);
    Word::new(value, constants::SHIFT_WIDTH)
}
