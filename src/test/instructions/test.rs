use super::*;

#[test]
fn sets_flags_without_writing() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::TEST, Mode::Register, 0, 1),
        [0 => 0b0101, 1 => 0b1010] => []
    };

    assert!(processor.flags().zero);
}

#[test]
fn common_bits_clear_zero_flag() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::TEST, Mode::Register, 0, 1),
        [0 => 0b0111, 1 => 0b0010] => []
    };

    assert!(!processor.flags().zero);
}
