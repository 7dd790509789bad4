use super::*;

#[test]
fn transfers_to_interrupt_vector() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    *processor.register_mut(15) = 0x200;
    processor.load(&mut memory, &[make_bare(Opcode::INT)], 0);
    memory.write_word(constants::INT_VECTOR, make_bare(Opcode::HALT));

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(0x1FF, processor.register(15));
    assert_eq!(0, memory.read(0x1FF));
}

#[test]
fn iret_resumes_after_int() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    *processor.register_mut(15) = 0x200;
    processor.load(
        &mut memory,
        &[
            make_bare(Opcode::INT),
            make_imm(Opcode::LOAD, Mode::Immediate, 0, 9),
            make_bare(Opcode::HALT),
        ],
        0,
    );
    memory.write_word(constants::INT_VECTOR, make_bare(Opcode::IRET));

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(9, processor.register(0));
    assert_eq!(0x200, processor.register(15));
}
