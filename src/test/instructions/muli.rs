use super::*;

#[test]
fn positive() {
    instruction_runs! {
        make_imm(Opcode::MUL, Mode::Immediate, 0, 4),
        [0 => 3] => [0 => 12]
    };
}

#[test]
fn negative_immediate() {
    let (processor, _) = instruction_runs! {
        make_imm(Opcode::MUL, Mode::Immediate, 0, -3),
        [0 => 5] => [0 => (-15i64) as u64]
    };

    assert!(processor.flags().negative);
}
