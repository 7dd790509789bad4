use crate::instructions::Word;
use crate::Value;
use std::collections::HashMap;

/// Sparse word-addressed memory.
///
/// Each address holds one [`Word`]; unwritten addresses read as zero and
/// never fault. Plain data writes derive the stored width from the value,
/// while the loader stores assembled words verbatim so that instructions
/// keep their declared widths on the way back out of memory.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    cells: HashMap<u64, Word>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            cells: HashMap::new(),
        }
    }

    /// Reads the value at `address`; unwritten addresses yield 0.
    pub fn read(&self, address: u64) -> Value {
        self.cells.get(&address).map_or(0, |word| word.value)
    }

    /// Writes a plain data value.
    pub fn write(&mut self, address: u64, value: Value) {
        self.cells.insert(address, Word::from_value(value));
    }

    /// Writes an encoded instruction word, keeping its declared width.
    pub fn write_word(&mut self, address: u64, word: Word) {
        self.cells.insert(address, word);
    }

    /// Fetches the word at `address` for decoding.
    pub fn fetch(&self, address: u64) -> Word {
        self.cells
            .get(&address)
            .copied()
            .unwrap_or_else(|| Word::from_value(0))
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
