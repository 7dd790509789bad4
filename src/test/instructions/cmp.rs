use super::*;

#[test]
fn equal_operands() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::CMP, Mode::Register, 0, 1),
        [0 => 3, 1 => 3] => []
    };

    assert!(processor.flags().zero);
    assert!(!processor.flags().negative);
}

#[test]
fn smaller_first_operand() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::CMP, Mode::Register, 0, 1),
        [0 => 3, 1 => 9] => []
    };

    assert!(!processor.flags().zero);
    assert!(processor.flags().negative);
}

#[test]
fn comparison_is_signed() {
    // 2^64 - 1 compares as -1, which is smaller than 1.
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::CMP, Mode::Register, 0, 1),
        [0 => u64::max_value(), 1 => 1] => []
    };

    assert!(processor.flags().negative);
}
