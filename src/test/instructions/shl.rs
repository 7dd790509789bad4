use super::*;

#[test]
fn shifts_source_into_destination() {
    instruction_runs! {
        make_shift(Opcode::SHL, 0, 1, 4),
        [1 => 3] => [0 => 48]
    };
}

#[test]
fn oversized_amount_clears() {
    let (processor, _) = instruction_runs! {
        make_shift(Opcode::SHL, 0, 1, 64),
        [1 => 3] => [0 => 0]
    };

    assert!(processor.flags().zero);
}
