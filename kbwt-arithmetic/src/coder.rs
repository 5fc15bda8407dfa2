//! 32-bit range coder shared by the arithmetic encoder and decoder.
//!
//! Renormalization follows the classic three-case scheme: E1/E2 fire when
//! the top bit of `low` and `high` agree (shift it out), and E3 fires when
//! `low`/`high` straddle the midpoint on the second-highest bit (an
//! underflow that defers its decision until the straddle resolves).

use kbwt_core::bitstream::{BitSink, BitSource};

use crate::model::FrequencyTable;

const STATE_BITS: u32 = 32;
const MASK: u64 = (1u64 << STATE_BITS) - 1;
const TOP_MASK: u64 = 1u64 << (STATE_BITS - 1);
const SECOND_MASK: u64 = 1u64 << (STATE_BITS - 2);

/// Encodes a stream of symbols against an evolving [`FrequencyTable`].
pub struct ArithmeticEncoder<'a> {
    low: u64,
    high: u64,
    pending_underflow: u32,
    sink: &'a mut BitSink,
}

impl<'a> ArithmeticEncoder<'a> {
    /// Wrap a bit sink for encoding.
    pub fn new(sink: &'a mut BitSink) -> Self {
        Self {
            low: 0,
            high: MASK,
            pending_underflow: 0,
            sink,
        }
    }

    /// Narrow the current interval to `symbol`'s slice of `freqs`, then
    /// renormalize.
    pub fn write(&mut self, freqs: &FrequencyTable, symbol: usize) {
        let total = freqs.total();
        let sym_low = freqs.low(symbol);
        let sym_high = freqs.high(symbol);
        let range = self.high - self.low + 1;

        self.high = self.low + sym_high * range / total - 1;
        self.low += sym_low * range / total;

        loop {
            if (self.low ^ self.high) & TOP_MASK == 0 {
                let bit = (self.low >> (STATE_BITS - 1)) & 1 != 0;
                self.emit_with_pending(bit);
                self.low = (self.low << 1) & MASK;
                self.high = ((self.high << 1) & MASK) | 1;
            } else if self.low & !self.high & SECOND_MASK != 0 {
                self.pending_underflow += 1;
                self.low = (self.low << 1) & (MASK >> 1);
                self.high = ((self.high << 1) & (MASK >> 1)) | TOP_MASK | 1;
            } else {
                break;
            }
        }
    }

    fn emit_with_pending(&mut self, bit: bool) {
        self.sink.write_bit(bit);
        for _ in 0..self.pending_underflow {
            self.sink.write_bit(!bit);
        }
        self.pending_underflow = 0;
    }

    /// Flush one final bit so the decoder's window has enough bits to
    /// disambiguate the last symbol.
    pub fn finish(&mut self) {
        self.sink.write_bit(true);
    }
}

/// Decodes a stream of symbols against an evolving [`FrequencyTable`].
pub struct ArithmeticDecoder<'a, 'b> {
    low: u64,
    high: u64,
    code: u64,
    source: &'a mut BitSource<'b>,
}

impl<'a, 'b> ArithmeticDecoder<'a, 'b> {
    /// Wrap a bit source for decoding, priming the code window with the
    /// first [`STATE_BITS`] bits.
    pub fn new(source: &'a mut BitSource<'b>) -> Self {
        let mut decoder = Self {
            low: 0,
            high: MASK,
            code: 0,
            source,
        };
        for _ in 0..STATE_BITS {
            decoder.code = (decoder.code << 1) | decoder.next_bit();
        }
        decoder
    }

    fn next_bit(&mut self) -> u64 {
        self.source.read_bit_or_zero() as u64
    }

    /// Decode the next symbol and renormalize to match the encoder's state
    /// transition exactly.
    pub fn read(&mut self, freqs: &FrequencyTable) -> usize {
        let total = freqs.total();
        let range = self.high - self.low + 1;
        let offset = self.code - self.low;
        let value = ((offset + 1) * total - 1) / range;

        let mut symbol = 0usize;
        while freqs.high(symbol) <= value {
            symbol += 1;
        }

        let sym_low = freqs.low(symbol);
        let sym_high = freqs.high(symbol);
        self.high = self.low + sym_high * range / total - 1;
        self.low += sym_low * range / total;

        loop {
            if (self.low ^ self.high) & TOP_MASK == 0 {
                self.code = ((self.code << 1) & MASK) | self.next_bit();
                self.low = (self.low << 1) & MASK;
                self.high = ((self.high << 1) & MASK) | 1;
            } else if self.low & !self.high & SECOND_MASK != 0 {
                let bit = self.next_bit();
                self.code = (self.code & TOP_MASK) | ((self.code << 1) & (MASK >> 1)) | bit;
                self.low = (self.low << 1) & (MASK >> 1);
                self.high = ((self.high << 1) & (MASK >> 1)) | TOP_MASK | 1;
            } else {
                break;
            }
        }

        symbol
    }
}
