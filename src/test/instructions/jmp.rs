use super::*;

#[test]
fn skips_over_instructions() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    processor.load(
        &mut memory,
        &[
            make_jump(Opcode::JMP, 2),
            make_imm(Opcode::LOAD, Mode::Immediate, 0, 1),
            make_bare(Opcode::HALT),
        ],
        0,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(0, processor.register(0));
}
