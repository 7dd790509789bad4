use super::*;

#[test]
fn positive() {
    instruction_runs! {
        make_imm(Opcode::SUB, Mode::Immediate, 0, 4),
        [0 => 16] => [0 => 12]
    };
}

#[test]
fn to_zero_sets_zero_flag() {
    let (processor, _) = instruction_runs! {
        make_imm(Opcode::SUB, Mode::Immediate, 0, 16),
        [0 => 16] => [0 => 0]
    };

    assert!(processor.flags().zero);
}
