use super::*;

fn branch_program(compare_to: i64) -> Vec<Word> {
    vec![
        make_imm(Opcode::LOAD, Mode::Immediate, 0, 5),
        make_imm(Opcode::CMP, Mode::Immediate, 0, compare_to),
        make_jump(Opcode::JZ, 5),
        make_imm(Opcode::LOAD, Mode::Immediate, 1, 1),
        make_bare(Opcode::HALT),
        make_bare(Opcode::HALT),
    ]
}

fn run(compare_to: i64) -> Processor {
    let mut processor = Processor::default();
    let mut memory = Memory::new();
    processor.load(&mut memory, &branch_program(compare_to), 0);
    assert_eq!(ExitCode::Halted, processor.run(&mut memory));
    processor
}

#[test]
fn taken_when_zero_flag_set() {
    assert_eq!(0, run(5).register(1));
}

#[test]
fn not_taken_otherwise() {
    assert_eq!(1, run(6).register(1));
}
