//! Cipher block chaining over any [`BlockCore`](crate::block::BlockCore)

use super::ModeEngine;
use crate::block::{BLOCK_SIZE, Block, block_to_words, words_to_block, xor_in_place};
use crate::context::CipherContext;
use crate::padding::{Padding, PaddingScheme};
use crate::{CipherError, Result};
use cryptkit_common::BufferedBlockProcessor;

const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// CBC engine
#[derive(Clone, Copy, Debug, Default)]
pub struct Cbc;

fn chaining_iv(ctx: &CipherContext) -> Result<Block> {
    let iv = ctx.iv().ok_or(CipherError::MissingIv)?;
    iv.try_into().map_err(|_| CipherError::InvalidIvLength {
        expected: "16",
        actual: iv.len(),
    })
}

impl ModeEngine for Cbc {
    fn name(&self) -> &'static str {
        "cbc"
    }

    fn encrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>> {
        let mut chain = chaining_iv(ctx)?;
        let core = ctx.backend.block_core(&ctx.key)?;
        let padded = ctx.padding.pad(data, BLOCK_SIZE)?;

        let mut processor = BufferedBlockProcessor::new(BLOCK_WORDS, 0);
        processor.append(padded);
        let out = processor.process(true, |words| {
            let mut block = words_to_block(words);
            xor_in_place(&mut block, &chain);
            core.encrypt_block(&mut block);
            chain = block;
            block_to_words(&block, words);
        });
        Ok(out.to_bytes())
    }

    fn decrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>> {
        let mut chain = chaining_iv(ctx)?;
        // Zero and no padding encrypt the empty message to zero blocks.
        if data.is_empty() && ctx.padding != PaddingScheme::Pkcs7 {
            return Ok(Vec::new());
        }
        if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidCiphertextLength(data.len()));
        }
        let core = ctx.backend.block_core(&ctx.key)?;

        // The last block stays buffered until the flush so padding is only
        // ever inspected once the whole message is in.
        let mut processor = BufferedBlockProcessor::new(BLOCK_WORDS, 1);
        processor.append(data);
        let mut transform = |words: &mut [u32]| {
            let ciphertext = words_to_block(words);
            let mut block = ciphertext;
            core.decrypt_block(&mut block);
            xor_in_place(&mut block, &chain);
            chain = ciphertext;
            block_to_words(&block, words);
        };
        let mut plain = processor.process(false, &mut transform);
        plain.concat(&processor.process(true, &mut transform));

        ctx.padding.unpad(&plain.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use hex_literal::hex;

    const KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const PLAIN: [u8; 64] = hex!(
        "6bc1bee22e409f96e93d7e117393172a"
        "ae2d8a571e03ac9c9eb76fac45af8e51"
        "30c81c46a35ce411e5fbc1191a0a52ef"
        "f69f2445df4f9b17ad2b417be66c3710"
    );
    const CIPHER: [u8; 64] = hex!(
        "7649abac8119b246cee98e9b12e9197d"
        "5086cb9b507219ee95db113a917678b2"
        "73bed6b8e3c1743b7116e69e22229516"
        "3ff1caa1681fac09120eca307586e1a7"
    );

    fn ctx(backend: Backend) -> Result<CipherContext> {
        Ok(CipherContext::new(KEY.to_vec(), backend)?
            .with_iv(IV)
            .with_padding(PaddingScheme::None))
    }

    #[test]
    fn test_sp800_38a_software() -> Result<()> {
        let ctx = ctx(Backend::Software)?;
        assert_eq!(Cbc.encrypt(&ctx, &PLAIN)?, CIPHER.to_vec());
        assert_eq!(Cbc.decrypt(&ctx, &CIPHER)?, PLAIN.to_vec());
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_sp800_38a_native() -> Result<()> {
        let ctx = ctx(Backend::Native)?;
        assert_eq!(Cbc.encrypt(&ctx, &PLAIN)?, CIPHER.to_vec());
        assert_eq!(Cbc.decrypt(&ctx, &CIPHER)?, PLAIN.to_vec());
        Ok(())
    }

    #[test]
    fn test_iv_checks() -> Result<()> {
        let no_iv = CipherContext::new(KEY.to_vec(), Backend::Software)?;
        assert!(matches!(Cbc.encrypt(&no_iv, b"x"), Err(CipherError::MissingIv)));

        let short_iv = no_iv.with_iv([0u8; 12]);
        assert!(matches!(
            Cbc.decrypt(&short_iv, &[0u8; 16]),
            Err(CipherError::InvalidIvLength { actual: 12, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_ciphertext_length_checks() -> Result<()> {
        let ctx = ctx(Backend::Software)?;
        assert!(matches!(
            Cbc.decrypt(&ctx, &[0u8; 17]),
            Err(CipherError::InvalidCiphertextLength(17))
        ));
        let pkcs7 = ctx.with_padding(PaddingScheme::Pkcs7);
        assert!(matches!(
            Cbc.decrypt(&pkcs7, &[]),
            Err(CipherError::InvalidCiphertextLength(0))
        ));
        Ok(())
    }

    #[test]
    fn test_empty_plaintext_without_pkcs7_roundtrips() -> Result<()> {
        for padding in [PaddingScheme::Zero, PaddingScheme::None] {
            let ctx = ctx(Backend::Software)?.with_padding(padding);
            let ct = Cbc.encrypt(&ctx, b"")?;
            assert!(ct.is_empty());
            assert_eq!(Cbc.decrypt(&ctx, &ct)?, Vec::<u8>::new());
        }
        Ok(())
    }

    #[test]
    fn test_pkcs7_empty_plaintext_is_one_block() -> Result<()> {
        let ctx = ctx(Backend::Software)?.with_padding(PaddingScheme::Pkcs7);
        let ct = Cbc.encrypt(&ctx, b"")?;
        assert_eq!(ct.len(), 16);
        assert_eq!(Cbc.decrypt(&ctx, &ct)?, Vec::<u8>::new());
        Ok(())
    }
}
