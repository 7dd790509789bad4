use super::*;

#[test]
fn copies_register() {
    instruction_runs! {
        make_reg(Opcode::LOAD, Mode::Register, 2, 3),
        [3 => 99] => [2 => 99]
    };
}

#[test]
fn leaves_flags_alone() {
    let (processor, _) = instruction_runs! {
        make_reg(Opcode::LOAD, Mode::Register, 2, 3),
        [3 => 0] => []
    };

    assert!(!processor.flags().zero);
}
