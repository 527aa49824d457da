//! Any partition of the input into chunks yields the one-shot digest

use cryptkit_hashing::{Md5, Md5State, MemorySource, hash_source, stream_md5, collect_hash};
use futures::stream;
use proptest::prelude::*;

fn partition(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
    points.push(0);
    points.push(data.len());
    points.sort_unstable();
    points.dedup();
    points.windows(2).map(|w| data[w[0]..w[1]].to_vec()).collect()
}

#[test]
fn prop_incremental_update_is_chunk_invariant() {
    proptest!(|(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        cuts in proptest::collection::vec(any::<usize>(), 0..12),
    )| {
        let expected = Md5::digest(&data);
        let mut hasher = Md5::new();
        for chunk in partition(&data, &cuts) {
            prop_assert!(!chunk.is_empty());
            hasher.update(chunk);
        }
        prop_assert_eq!(hasher.finalize(), expected);
    });
}

#[test]
fn prop_raw_state_with_carried_tail_is_chunk_invariant() {
    proptest!(|(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        cuts in proptest::collection::vec(any::<usize>(), 0..12),
    )| {
        let mut state = Md5State::new();
        let mut carry: Vec<u8> = Vec::new();
        for chunk in partition(&data, &cuts) {
            carry.extend_from_slice(&chunk);
            let consumed = state.process_chunk(&carry);
            carry.drain(..consumed);
            prop_assert!(carry.len() < 64);
        }
        let digest = state.finalize(&carry, data.len() as u64 * 8);
        prop_assert_eq!(digest, Md5::digest(&data));
    });
}

#[test]
fn prop_source_and_stream_agree() {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    proptest!(ProptestConfig::with_cases(64), |(
        data in proptest::collection::vec(any::<u8>(), 0..2000),
        chunk_size in 1usize..300,
    )| {
        let expected = Md5::digest(&data);
        let (from_source, from_stream) = rt.block_on(async {
            let from_source = hash_source(&mut MemorySource::new(&data), chunk_size).await;
            let chunks: Vec<Vec<u8>> = data.chunks(chunk_size).map(<[u8]>::to_vec).collect();
            let from_stream = collect_hash(stream_md5(stream::iter(chunks))).await;
            (from_source, from_stream)
        });
        let from_source = from_source.map_err(|e| TestCaseError::fail(e.to_string()))?;
        let from_stream = from_stream.map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(from_source, expected);
        prop_assert_eq!(from_stream.hash.as_bytes(), &expected[..]);
        prop_assert_eq!(from_stream.total_bytes, data.len() as u64);
    });
}
