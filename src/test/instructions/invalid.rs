use super::*;

#[test]
fn unknown_opcode_stops() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    processor.load(&mut memory, &[Word::new(0xAB, 8)], 0);

    assert_eq!(ExitCode::InvalidOpcode, processor.run(&mut memory));
}

#[test]
fn too_short_word_is_rejected() {
    // An ADD word truncated below the register fields.
    let word = Word::new(0x81 << 2, 10);

    assert_eq!(
        Err(DecodeError::TooShort {
            bits: 10,
            required: constants::UNARY_WIDTH,
        }),
        decode(word)
    );
}

#[test]
fn store_register_mode_is_rejected() {
    let word = make_reg(Opcode::STORE, Mode::Register, 0, 1);

    assert_eq!(
        Err(DecodeError::UnknownMode {
            opcode: Opcode::STORE,
            mode: Mode::Register,
        }),
        decode(word)
    );
}
