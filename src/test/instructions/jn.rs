use super::*;

fn run(compare_to: i64) -> Processor {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    processor.load(
        &mut memory,
        &[
            make_imm(Opcode::LOAD, Mode::Immediate, 0, 5),
            make_imm(Opcode::CMP, Mode::Immediate, 0, compare_to),
            make_jump(Opcode::JN, 5),
            make_imm(Opcode::LOAD, Mode::Immediate, 1, 1),
            make_bare(Opcode::HALT),
            make_bare(Opcode::HALT),
        ],
        0,
    );
    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    processor
}

#[test]
fn taken_when_smaller() {
    assert_eq!(0, run(10).register(1));
}

#[test]
fn not_taken_when_greater() {
    assert_eq!(1, run(3).register(1));
}
