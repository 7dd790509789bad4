use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::MUL, Mode::Register, 0, 1),
        [0 => 6, 1 => 7] => [0 => 42]
    };
}
