use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::XOR, Mode::Register, 0, 1),
        [0 => 0b1100, 1 => 0b1010] => [0 => 0b0110]
    };
}

#[test]
fn self_xor_clears() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::XOR, Mode::Register, 0, 0),
        [0 => 0xDEAD_BEEF] => [0 => 0]
    };

    assert!(processor.flags().zero);
}
