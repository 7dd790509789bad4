use super::*;

#[test]
fn reads_through_base_register() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    memory.write(0x30, 77);
    *processor.register_mut(1) = 0x30;
    processor.load(
        &mut memory,
        &[
            make_reg(Opcode::LOAD, Mode::Indirect, 0, 1),
            make_bare(Opcode::HALT),
        ],
        0x100,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(77, processor.register(0));
}
