use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::SUB, Mode::Register, 0, 1),
        [0 => 9, 1 => 4] => [0 => 5]
    };
}

#[test]
fn wraps_below_zero() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::SUB, Mode::Register, 0, 1),
        [0 => 1, 1 => 4] => [0 => (-3i64) as u64]
    };

    assert!(processor.flags().negative);
    assert!(!processor.flags().zero);
}
