use super::*;

#[test]
fn loads_constant() {
    instruction_runs! {
        make_imm(Opcode::LOAD, Mode::Immediate, 0, 1234),
        [] => [0 => 1234]
    };
}

#[test]
fn negative_constant_sign_extends() {
    instruction_runs! {
        make_imm(Opcode::LOAD, Mode::Immediate, 0, -1),
        [] => [0 => u64::max_value()]
    };
}
