use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::OR, Mode::Register, 0, 1),
        [0 => 0b1100, 1 => 0b1010] => [0 => 0b1110]
    };
}

#[test]
fn negative_immediate_sets_high_bits() {
    let (processor, _) = instruction_runs! {
        make_imm(Opcode::OR, Mode::Immediate, 0, -1),
        [0 => 0b1010] => [0 => u64::max_value()]
    };

    assert!(processor.flags().negative);
}
