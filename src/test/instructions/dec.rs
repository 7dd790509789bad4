use super::*;

#[test]
fn decrements() {
    instruction_runs! {
        make_short(Opcode::DEC, 0),
        [0 => 42] => [0 => 41]
    };
}

#[test]
fn wraps_below_zero() {
    instruction_runs! {
        make_short(Opcode::DEC, 0),
        [0 => 0] => [0 => u64::max_value()]
    };
}
