//! Property tests for padding and CBC round trips

use cryptkit_cipher::modes::Cbc;
use cryptkit_cipher::{Backend, CipherContext, ModeEngine, Padding, PaddingScheme};
use proptest::prelude::*;

#[test]
fn prop_pkcs7_roundtrip_any_input() {
    proptest!(|(data in proptest::collection::vec(any::<u8>(), 0..200), block in 1usize..=255)| {
        let padded = PaddingScheme::Pkcs7.pad(&data, block).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(padded.len() % block, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() - data.len() <= block);
        let unpadded = PaddingScheme::Pkcs7.unpad(&padded).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(unpadded, data);
    });
}

#[test]
fn prop_zero_padding_roundtrip_without_trailing_zero() {
    proptest!(|(mut data in proptest::collection::vec(any::<u8>(), 0..100), block in 1usize..64)| {
        if data.last() == Some(&0) {
            data.push(1);
        }
        let padded = PaddingScheme::Zero.pad(&data, block).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(padded.len(), data.len().div_ceil(block) * block);
        let unpadded = PaddingScheme::Zero.unpad(&padded).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(unpadded, data);
    });
}

#[test]
fn prop_cbc_roundtrip_every_key_size_and_backend() {
    proptest!(ProptestConfig::with_cases(64), |(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        key_len in prop_oneof![Just(16usize), Just(24), Just(32)],
        key_byte in any::<u8>(),
        iv in any::<[u8; 16]>(),
    )| {
        for backend in [Backend::Software, Backend::detect()] {
            let ctx = CipherContext::new(vec![key_byte; key_len], backend)
                .map_err(|e| TestCaseError::fail(e.to_string()))?
                .with_iv(iv);
            let ct = Cbc.encrypt(&ctx, &data).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(ct.len(), (data.len() / 16 + 1) * 16);
            let pt = Cbc.decrypt(&ctx, &ct).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(pt, data.clone());
        }
    });
}

#[test]
fn prop_cbc_zero_padding_roundtrip_including_empty() {
    proptest!(ProptestConfig::with_cases(64), |(
        mut data in prop_oneof![
            Just(Vec::new()),
            proptest::collection::vec(any::<u8>(), 0..100),
        ],
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
    )| {
        if data.last() == Some(&0) {
            data.push(1);
        }
        let ctx = CipherContext::new(key.to_vec(), Backend::Software)
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .with_iv(iv)
            .with_padding(PaddingScheme::Zero);
        let ct = Cbc.encrypt(&ctx, &data).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(ct.len(), data.len().div_ceil(16) * 16);
        let pt = Cbc.decrypt(&ctx, &ct).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(pt, data);
    });
}

#[test]
fn prop_cbc_no_padding_roundtrip_aligned() {
    proptest!(ProptestConfig::with_cases(32), |(
        blocks in 0usize..6,
        fill in any::<u8>(),
        iv in any::<[u8; 16]>(),
    )| {
        let data = vec![fill; blocks * 16];
        let ctx = CipherContext::new(vec![7u8; 32], Backend::Software)
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .with_iv(iv)
            .with_padding(PaddingScheme::None);
        let ct = Cbc.encrypt(&ctx, &data).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(ct.len(), data.len());
        let pt = Cbc.decrypt(&ctx, &ct).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(pt, data);
    });
}
