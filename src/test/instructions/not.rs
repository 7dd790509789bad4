use super::*;

#[test]
fn flips_all_bits() {
    let (processor, _) = instruction_runs! {
        make_unary(Opcode::NOT, Mode::Register, 0),
        [0 => 0] => [0 => u64::max_value()]
    };

    assert!(processor.flags().negative);
    assert!(!processor.flags().zero);
}
