use super::*;

#[test]
fn reads_memory() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    memory.write(0x20, 42);
    processor.load(
        &mut memory,
        &[
            make_imm(Opcode::LOAD, Mode::Direct, 0, 0x20),
            make_bare(Opcode::HALT),
        ],
        0x100,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(42, processor.register(0));
}

#[test]
fn unwritten_address_reads_zero() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    *processor.register_mut(0) = 7;
    processor.load(
        &mut memory,
        &[
            make_imm(Opcode::LOAD, Mode::Direct, 0, 0x999),
            make_bare(Opcode::HALT),
        ],
        0,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(0, processor.register(0));
}
