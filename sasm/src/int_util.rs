use crate::*;
use matches::debug_assert_matches;
use num::Num;
use std::num::ParseIntError;

pub fn process_num_lit<T>(pair: Pair<Rule>, radix: u32) -> Result<T>
where
    T: Num<FromStrRadixErr = ParseIntError>,
{
    let span = pair.as_span();
    T::from_str_radix(span.as_str(), radix)
        .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
}

pub fn process_uint(pair: Pair<Rule>) -> Result<u64> {
    debug_assert_matches!(pair.as_rule(), Rule::uint);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::hex_uint => process_num_lit(inner.into_inner().next().unwrap(), 16),
        Rule::oct_uint => process_num_lit(inner.into_inner().next().unwrap(), 8),
        Rule::bin_uint => process_num_lit(inner.into_inner().next().unwrap(), 2),
        Rule::dec_uint => process_num_lit(inner, 10),
        _ => unreachable!(),
    }
}

/// Parses an `int` pair: an optional sign followed by a radix-prefixed
/// magnitude.
pub fn process_int(pair: Pair<Rule>) -> Result<i64> {
    debug_assert_matches!(pair.as_rule(), Rule::int);
    let mut pairs = pair.into_inner();
    let first = pairs.next().unwrap();
    if first.as_rule() == Rule::sign {
        let magnitude: u64 = process_uint(pairs.next().unwrap())?;
        Ok((magnitude as i64).wrapping_neg())
    } else {
        Ok(process_uint(first)? as i64)
    }
}
