use super::*;

#[test]
fn registers() {
    instruction_runs! {
        make_reg(Opcode::DIV, Mode::Register, 0, 1),
        [0 => 42, 1 => 5] => [0 => 8]
    };
}

#[test]
fn by_zero_stops() {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    *processor.register_mut(0) = 10;
    processor.load(
        &mut memory,
        &[
            make_reg(Opcode::DIV, Mode::Register, 0, 1),
            make_bare(Opcode::HALT),
        ],
        0,
    );

    assert_eq!(ExitCode::DivisionByZero, processor.run(&mut memory));
}
