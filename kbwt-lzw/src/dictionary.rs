//! LZW dictionary (code table) management, without clear/EOI codes: the
//! table starts at the 256 single-byte entries and widens or resets purely
//! based on how full it is.

use std::collections::HashMap;

const INITIAL_CODE_SIZE: u8 = 9;
const MAX_CODE_SIZE: u8 = 16;
const INITIAL_DICTIONARY_SIZE: u32 = 256;

/// Encode-side dictionary: byte-sequence to code.
pub struct EncodeDictionary {
    table: HashMap<Vec<u8>, u32>,
    next_code: u32,
    current_bits: u8,
}

impl EncodeDictionary {
    /// Build a freshly reset dictionary.
    pub fn new() -> Self {
        let mut dict = Self {
            table: HashMap::new(),
            next_code: 0,
            current_bits: INITIAL_CODE_SIZE,
        };
        dict.reset();
        dict
    }

    fn reset(&mut self) {
        self.table.clear();
        for i in 0u32..INITIAL_DICTIONARY_SIZE {
            self.table.insert(vec![i as u8], i);
        }
        self.next_code = INITIAL_DICTIONARY_SIZE;
        self.current_bits = INITIAL_CODE_SIZE;
    }

    /// Look up the code for a byte sequence.
    pub fn find(&self, sequence: &[u8]) -> Option<u32> {
        self.table.get(sequence).copied()
    }

    /// Current code width in bits (unused by the core format, since codes
    /// are carried as a plain integer list, but kept for parity with the
    /// reference widening schedule and for callers that want to report it).
    pub fn current_bits(&self) -> u8 {
        self.current_bits
    }

    /// Insert a new sequence, widening the code size or resetting the whole
    /// table exactly as the reference encoder does: insert first if there
    /// is room, else drop the insert and reset.
    pub fn insert(&mut self, sequence: Vec<u8>) {
        let max_dictionary_size = 1u32 << MAX_CODE_SIZE;
        if self.next_code < max_dictionary_size {
            let code = self.next_code;
            self.table.insert(sequence, code);
            self.next_code += 1;
            let width_limit = 1u32 << self.current_bits;
            if self.next_code == width_limit && self.current_bits < MAX_CODE_SIZE {
                self.current_bits += 1;
            }
        } else {
            self.reset();
        }
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode-side dictionary: code to byte sequence.
pub struct DecodeDictionary {
    table: Vec<Vec<u8>>,
    next_code: u32,
    current_bits: u8,
}

impl DecodeDictionary {
    /// Build a freshly reset dictionary.
    pub fn new() -> Self {
        let mut dict = Self {
            table: Vec::new(),
            next_code: 0,
            current_bits: INITIAL_CODE_SIZE,
        };
        dict.reset();
        dict
    }

    fn reset(&mut self) {
        self.table.clear();
        for i in 0u32..INITIAL_DICTIONARY_SIZE {
            self.table.push(vec![i as u8]);
        }
        self.next_code = INITIAL_DICTIONARY_SIZE;
        self.current_bits = INITIAL_CODE_SIZE;
    }

    /// Look up the byte sequence for a code, if it is within the current
    /// table (the "known" case).
    pub fn get(&self, code: u32) -> Option<&[u8]> {
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// The code that would be assigned to the next new entry: if a decoded
    /// code equals this value, it refers to the entry about to be created
    /// (the "KwKwK" special case).
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// Insert a new sequence, mirroring [`EncodeDictionary::insert`].
    pub fn insert(&mut self, sequence: Vec<u8>) {
        let max_dictionary_size = 1u32 << MAX_CODE_SIZE;
        if self.next_code < max_dictionary_size {
            self.table.push(sequence);
            self.next_code += 1;
            let width_limit = 1u32 << self.current_bits;
            if self.next_code == width_limit && self.current_bits < MAX_CODE_SIZE {
                self.current_bits += 1;
            }
        } else {
            self.reset();
        }
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}
