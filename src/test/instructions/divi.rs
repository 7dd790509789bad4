use super::*;

#[test]
fn positive() {
    instruction_runs! {
        make_imm(Opcode::DIV, Mode::Immediate, 0, 4),
        [0 => 22] => [0 => 5]
    };
}

#[test]
fn negative_divisor_floors() {
    // 10 / -4 floors to -3, as with arbitrary-precision division.
    instruction_runs! {
        make_imm(Opcode::DIV, Mode::Immediate, 0, -4),
        [0 => 10] => [0 => (-3i64) as u64]
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
            make_imm(Opcode::DIV, Mode::Immediate, 0, 0),
            make_bare(Opcode::HALT),
        ],
        0,
    );

    assert_eq!(ExitCode::DivisionByZero, processor.run(&mut memory));
}
