use super::*;

#[test]
fn writes_through_base_register() {
    let (_, memory) = instruction_runs! {
        make_reg(Opcode::STORE, Mode::Indirect, 0, 1),
        [0 => 42, 1 => 0x30] => []
    };

    assert_eq!(42, memory.read(0x30));
}
