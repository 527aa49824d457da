//! MD5 compression function and running state (RFC 1321)

use super::{BLOCK_SIZE, DIGEST_SIZE, Md5Digest};

const INIT: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// K[i] = floor(2^32 * |sin(i + 1)|)
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

static S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Running MD5 registers
///
/// Only whole 64-byte blocks are ever folded in; carrying a partial block
/// from one call to the next is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Md5State {
    h: [u32; 4],
    bytes: u64,
}

impl Default for Md5State {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5State {
    /// Fresh state with the RFC 1321 initial registers
    #[must_use]
    pub fn new() -> Self {
        Self { h: INIT, bytes: 0 }
    }

    /// Bytes folded in so far (always a multiple of 64)
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        self.bytes
    }

    /// Fold one block given as 16 little-endian-decoded words
    pub fn compress(&mut self, m: &[u32; 16]) {
        let [mut a, mut b, mut c, mut d] = self.h;

        for j in 0..64 {
            let (f, g) = match j / 16 {
                0 => ((b & c) | (!b & d), j),
                1 => ((d & b) | (!d & c), (5 * j + 1) % 16),
                2 => (b ^ c ^ d, (3 * j + 5) % 16),
                _ => (c ^ (b | !d), (7 * j) % 16),
            };
            let rotated = a
                .wrapping_add(f)
                .wrapping_add(K[j])
                .wrapping_add(m[g])
                .rotate_left(S[j]);
            let temp = d;
            d = c;
            c = b;
            b = b.wrapping_add(rotated);
            a = temp;
        }

        for (h, v) in self.h.iter_mut().zip([a, b, c, d]) {
            *h = h.wrapping_add(v);
        }
        self.bytes += BLOCK_SIZE as u64;
    }

    /// Fold every complete 64-byte block of `bytes`; returns how many bytes
    /// were consumed. The tail (< 64 bytes) is left untouched.
    pub fn process_chunk(&mut self, bytes: &[u8]) -> usize {
        let mut blocks = bytes.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            let mut m = [0u32; 16];
            for (word, src) in m.iter_mut().zip(block.chunks_exact(4)) {
                *word = u32::from_le_bytes([src[0], src[1], src[2], src[3]]);
            }
            self.compress(&m);
        }
        bytes.len() - blocks.remainder().len()
    }

    /// Pad and fold the final block(s) and serialize the digest
    ///
    /// `remainder` is whatever `process_chunk` left over; `total_bit_len`
    /// is the bit length of the whole message.
    #[must_use]
    pub fn finalize(mut self, remainder: &[u8], total_bit_len: u64) -> Md5Digest {
        let consumed = self.process_chunk(remainder);
        let tail = &remainder[consumed..];

        let mut last = [0u8; 2 * BLOCK_SIZE];
        last[..tail.len()].copy_from_slice(tail);
        last[tail.len()] = 0x80;
        let padded_len = if tail.len() < 56 { BLOCK_SIZE } else { 2 * BLOCK_SIZE };
        last[padded_len - 8..padded_len].copy_from_slice(&total_bit_len.to_le_bytes());
        self.process_chunk(&last[..padded_len]);

        let mut digest = [0u8; DIGEST_SIZE];
        for (dst, h) in digest.chunks_exact_mut(4).zip(self.h) {
            dst.copy_from_slice(&h.to_le_bytes());
        }
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn oneshot(data: &[u8]) -> Md5Digest {
        let mut state = Md5State::new();
        let consumed = state.process_chunk(data);
        state.finalize(&data[consumed..], data.len() as u64 * 8)
    }

    #[test]
    fn test_rfc1321_vectors() {
        assert_eq!(oneshot(b""), hex!("d41d8cd98f00b204e9800998ecf8427e"));
        assert_eq!(oneshot(b"a"), hex!("0cc175b9c0f1b6a831c399e269772661"));
        assert_eq!(oneshot(b"abc"), hex!("900150983cd24fb0d6963f7d28e17f72"));
        assert_eq!(oneshot(b"message digest"), hex!("f96b697d7cb7938d525a2f31aaf161d0"));
    }

    #[test]
    fn test_padding_boundaries() {
        // 55 bytes fits length in one block, 56 spills into a second
        for len in [55usize, 56, 63, 64, 65, 119, 120] {
            let data = vec![b'x'; len];
            let mut state = Md5State::new();
            let consumed = state.process_chunk(&data);
            assert_eq!(consumed, len / 64 * 64);
            assert_eq!(state.bytes_processed(), consumed as u64);
            let split = state.finalize(&data[consumed..], len as u64 * 8);

            // whole input as remainder must give the same digest
            assert_eq!(Md5State::new().finalize(&data, len as u64 * 8), split);
        }
    }

    #[test]
    fn test_leftover_not_processed() {
        let mut state = Md5State::new();
        assert_eq!(state.process_chunk(&[0u8; 63]), 0);
        assert_eq!(state, Md5State::new());
    }
}
