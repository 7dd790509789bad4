use super::*;

#[test]
fn writes_memory() {
    let (_, memory) = instruction_runs! {
        make_imm(Opcode::STORE, Mode::Direct, 0, 0x20),
        [0 => 42] => []
    };

    assert_eq!(42, memory.read(0x20));
}
