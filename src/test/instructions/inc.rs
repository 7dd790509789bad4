use super::*;

#[test]
fn increments() {
    instruction_runs! {
        make_short(Opcode::INC, 0),
        [0 => 41] => [0 => 42]
    };
}

#[test]
fn wraps_without_flags() {
    let (processor, _) = instruction_runs! {
        make_short(Opcode::INC, 0),
        [0 => u64::max_value()] => [0 => 0]
    };

    // The short form does not update flags.
    assert!(!processor.flags().zero);
}
