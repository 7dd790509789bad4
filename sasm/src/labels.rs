use crate::*;
use std::collections::HashMap;

pub type LabelMap<'i> = HashMap<&'i str, u64>;

/// Processes a `statement` pair: a label binds the current instruction
/// index without consuming one, anything else is handed to `op`.
pub fn process_labeled_element<'i, F>(
    pair: Pair<'i, Rule>,
    labels: &mut LabelMap<'i>,
    index: u64,
    op: F,
) -> Result<()>
where
    F: FnOnce(Pair<'i, Rule>) -> Result<()>,
{
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::label => {
            let name = inner.into_inner().next().unwrap();
            let span = name.as_span();
            if labels.insert(span.as_str(), index).is_some() {
                return Err(new_parser_error(span, "Label defined twice".to_owned()));
            }
        }
        Rule::instruction => op(inner)?,
        _ => unreachable!(),
    }

    Ok(())
}
