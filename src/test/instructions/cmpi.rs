use super::*;

#[test]
fn equal_to_immediate() {
    let (processor, _) = instruction_runs! {
        make_imm(Opcode::CMP, Mode::Immediate, 0, 5),
        [0 => 5] => []
    };

    assert!(processor.flags().zero);
}

#[test]
fn negative_immediate() {
    let (processor, _) = instruction_runs! {
        make_imm(Opcode::CMP, Mode::Immediate, 0, -5),
        [0 => 0] => []
    };

    assert!(!processor.flags().zero);
    assert!(!processor.flags().negative);
}
