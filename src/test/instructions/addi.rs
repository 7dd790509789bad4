use super::*;

#[test]
fn positive() {
    instruction_runs! {
        make_imm(Opcode::ADD, Mode::Immediate, 0, 1234),
        [0 => 5678] => [0 => 6912]
    };
}

#[test]
fn negative_immediate() {
    instruction_runs! {
        make_imm(Opcode::ADD, Mode::Immediate, 0, -1234),
        [0 => 5678] => [0 => 4444]
    };
}
