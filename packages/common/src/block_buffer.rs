//! Accumulate-and-drain block processing shared by ciphers and hashers
//!
//! Input is appended into an arena of words. [`BufferedBlockProcessor::process`]
//! hands every whole block that is ready to a caller-supplied transform (a
//! cipher round, a compression function) and returns the transformed words.
//! Consumed words are skipped with a read cursor and only compacted on the
//! next append.

use crate::word_array::WordArray;

/// Block-buffering state machine parameterized by a per-block transform
#[derive(Clone, Debug)]
pub struct BufferedBlockProcessor {
    data: WordArray,
    cursor: usize,
    block_size: usize,
    min_buffer_size: usize,
    data_bytes: u64,
}

impl BufferedBlockProcessor {
    /// Create a processor.
    ///
    /// `block_size` is counted in 32-bit words; `min_buffer_size` is the
    /// number of whole blocks kept back when not flushing (0 for hashers).
    #[must_use]
    pub fn new(block_size: usize, min_buffer_size: usize) -> Self {
        debug_assert!(block_size > 0, "block size must be at least one word");
        Self {
            data: WordArray::new(),
            cursor: 0,
            block_size: block_size.max(1),
            min_buffer_size,
            data_bytes: 0,
        }
    }

    /// Drop pending data and reset the byte counter
    pub fn reset(&mut self) {
        self.data = WordArray::new();
        self.cursor = 0;
        self.data_bytes = 0;
    }

    /// Block size in words
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Total bytes appended since construction or the last reset
    #[must_use]
    pub fn data_bytes(&self) -> u64 {
        self.data_bytes
    }

    /// Bytes appended but not yet processed
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.data.sig_bytes() - self.cursor * 4
    }

    /// Copy of the bytes appended but not yet processed
    #[must_use]
    pub fn pending(&self) -> WordArray {
        let pending = self.pending_len();
        let end = self.data.sig_bytes().div_ceil(4);
        let mut rest = WordArray::from_words(self.data.words()[self.cursor..end].to_vec(), pending);
        rest.clamp();
        rest
    }

    /// Append data; text is UTF-8 encoded
    pub fn append(&mut self, data: impl Into<WordArray>) {
        let data = data.into();
        self.compact();
        self.data.concat(&data);
        self.data_bytes += data.sig_bytes() as u64;
    }

    /// Run `transform` over every ready block and return the processed words.
    ///
    /// Without `flush`, only whole blocks beyond `min_buffer_size` are
    /// processed. With `flush`, every pending byte is processed, the final
    /// partial block zero-extended to a whole block.
    pub fn process<F>(&mut self, flush: bool, mut transform: F) -> WordArray
    where
        F: FnMut(&mut [u32]),
    {
        let block_bytes = self.block_size * 4;
        let pending = self.pending_len();

        let n_blocks_ready = if flush {
            pending.div_ceil(block_bytes)
        } else {
            (pending / block_bytes).saturating_sub(self.min_buffer_size)
        };
        let n_words_ready = n_blocks_ready * self.block_size;
        let n_bytes_ready = (n_words_ready * 4).min(pending);

        if n_words_ready == 0 {
            return WordArray::new();
        }

        self.data.clamp();
        let start = self.cursor;
        let end = start + n_words_ready;
        let words = self.data.words_vec_mut();
        if words.len() < end {
            words.resize(end, 0);
        }

        for block in words[start..end].chunks_exact_mut(self.block_size) {
            transform(block);
        }
        let processed = WordArray::from_words(words[start..end].to_vec(), n_bytes_ready);

        self.cursor = end;
        if self.cursor * 4 >= self.data.sig_bytes() {
            self.data = WordArray::new();
            self.cursor = 0;
        }

        processed
    }

    fn compact(&mut self) {
        if self.cursor == 0 || self.cursor * 2 < self.data.words().len() {
            return;
        }
        let pending = self.pending();
        self.data = pending;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_partial_block_pending() {
        let mut proc = BufferedBlockProcessor::new(4, 0);
        proc.append(&[7u8; 20]);
        let mut seen = 0;
        let out = proc.process(false, |block| {
            assert_eq!(block.len(), 4);
            seen += 1;
        });
        assert_eq!(seen, 1);
        assert_eq!(out.sig_bytes(), 16);
        assert_eq!(proc.pending_len(), 4);
        assert_eq!(proc.pending().to_bytes(), vec![7u8; 4]);
        assert_eq!(proc.data_bytes(), 20);
    }

    #[test]
    fn test_min_buffer_size_holds_back_blocks() {
        let mut proc = BufferedBlockProcessor::new(4, 1);
        proc.append(&[1u8; 32]);
        let out = proc.process(false, |_| {});
        assert_eq!(out.sig_bytes(), 16);
        assert_eq!(proc.pending_len(), 16);

        let out = proc.process(true, |_| {});
        assert_eq!(out.sig_bytes(), 16);
        assert_eq!(proc.pending_len(), 0);
    }

    #[test]
    fn test_flush_includes_partial_block() {
        let mut proc = BufferedBlockProcessor::new(4, 0);
        proc.append("abc");
        let mut blocks = Vec::new();
        let out = proc.process(true, |block| blocks.push(block.to_vec()));
        assert_eq!(blocks, vec![vec![0x6162_6300, 0, 0, 0]]);
        assert_eq!(out.to_bytes(), b"abc".to_vec());
        assert_eq!(proc.pending_len(), 0);
    }

    #[test]
    fn test_transform_mutates_output() {
        let mut proc = BufferedBlockProcessor::new(1, 0);
        proc.append(&[0u8, 0, 0, 1, 0, 0, 0, 2]);
        let out = proc.process(false, |block| block[0] = block[0].wrapping_add(1));
        assert_eq!(out.words(), &[2, 3]);
    }

    #[test]
    fn test_appends_after_drain_stay_in_order() {
        let mut proc = BufferedBlockProcessor::new(2, 0);
        let mut drained = Vec::new();
        for chunk in [&b"abcde"[..], &b"fghij"[..], &b"klmnopq"[..]] {
            proc.append(chunk);
            drained.extend(proc.process(false, |_| {}).to_bytes());
        }
        drained.extend(proc.process(true, |_| {}).to_bytes());
        assert_eq!(drained, b"abcdefghijklmnopq".to_vec());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut proc = BufferedBlockProcessor::new(4, 0);
        proc.append(&[1u8; 10]);
        proc.reset();
        assert_eq!(proc.pending_len(), 0);
        assert_eq!(proc.data_bytes(), 0);
    }
}
