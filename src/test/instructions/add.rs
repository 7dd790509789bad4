use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::ADD, Mode::Register, 0, 1),
        [0 => 5, 1 => 7] => [0 => 12]
    };
}

#[test]
fn wraps_to_zero() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::ADD, Mode::Register, 0, 1),
        [0 => u64::max_value(), 1 => 1] => [0 => 0]
    };

    assert!(processor.flags().zero);
    assert!(!processor.flags().negative);
}
