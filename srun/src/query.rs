//! Parsing for the shell's register and memory query lists.
//!
//! A list is comma-separated; each item is a single value or an
//! inclusive `a-b` range. Memory queries additionally accept `0x`
//! literals. Malformed items are skipped rather than reported, so a
//! half-typed query still shows what it can.

use scpu::constants::REGISTER_COUNT;

/// Parses a register query list like `0-3,7`, dropping malformed items
/// and indices outside the register file.
pub fn parse_register_list(text: &str) -> Vec<usize> {
    parse_list(text, false)
        .into_iter()
        .filter(|&index| index < REGISTER_COUNT as u64)
        .map(|index| index as usize)
        .collect()
}

/// Parses a memory query list like `0x20, 0x30-0x38`.
pub fn parse_address_list(text: &str) -> Vec<u64> {
    parse_list(text, true)
}

fn parse_list(text: &str, hex: bool) -> Vec<u64> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut items = Vec::new();

    for part in text.split(',') {
        if part.is_empty() {
            continue;
        }
        let mut bounds = part.splitn(2, '-');
        let start = bounds.next().and_then(|s| parse_value(s, hex));
        match (start, bounds.next()) {
            (Some(start), None) => items.push(start),
            (Some(start), Some(end)) => {
                if let Some(end) = parse_value(end, hex) {
                    for value in start..=end {
                        items.push(value);
                    }
                }
            }
            (None, _) => {}
        }
    }

    items
}

fn parse_value(text: &str, hex: bool) -> Option<u64> {
    if hex && (text.starts_with("0x") || text.starts_with("0X")) {
        u64::from_str_radix(&text[2..], 16).ok()
    } else {
        text.parse().ok()
    }
}
