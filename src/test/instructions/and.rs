use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::AND, Mode::Register, 0, 1),
        [0 => 0b1100, 1 => 0b1010] => [0 => 0b1000]
    };
}

#[test]
fn disjoint_bits_set_zero_flag() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::AND, Mode::Register, 0, 1),
        [0 => 0b0101, 1 => 0b1010] => [0 => 0]
    };

    assert!(processor.flags().zero);
}
