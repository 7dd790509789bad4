use super::*;

#[test]
fn predecrements_and_stores() {
    let (_, memory) = instruction_runs! {
        make_unary(Opcode::PUSH, Mode::Register, 0),
        [0 => 7, 15 => 0x100] => [15 => 0xFF]
    };

    assert_eq!(7, memory.read(0xFF));
}
