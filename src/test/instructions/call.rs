use super::*;

#[test]
fn pushes_own_address_and_jumps() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    *processor.register_mut(15) = 0x200;
    processor.load(
        &mut memory,
        &[
            make_jump(Opcode::CALL, 2),
            make_bare(Opcode::NOP),
            make_bare(Opcode::HALT),
        ],
        0,
    );

    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    assert_eq!(0x1FF, processor.register(15));
    assert_eq!(0, memory.read(0x1FF));
}
