use super::*;

#[test]
fn shifts_source_into_destination() {
    instruction_runs! {
        make_shift(Opcode::SHR, 0, 1, 4),
        [1 => 48] => [0 => 3]
    };
}

#[test]
fn shift_is_logical() {
    instruction_runs! {
        make_shift(Opcode::SHR, 0, 1, 63),
        [1 => u64::max_value()] => [0 => 1]
    };
}
