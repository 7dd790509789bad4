use super::*;

#[test]
fn loads_and_postincrements() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    memory.write(0xFF, 7);
    *processor.register_mut(15) = 0xFF;
    processor.load(
        &mut memory,
        &[
            make_unary(Opcode::POP, Mode::Register, 1),
            make_bare(Opcode::HALT),
        ],
        0x10,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(7, processor.register(1));
    assert_eq!(0x100, processor.register(15));
}
