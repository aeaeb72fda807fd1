//! End-to-end reassembly of fragmented messages through the public API.
//!
//! Messages are split with [`Fragmenter`], passed through the wire encoding,
//! shuffled, duplicated and fed back into a [`PacketAssembly`].

use std::num::NonZeroUsize;

use holeframe::{
    FragmentationConfig,
    Fragmenter,
    Hole,
    PacketAssembly,
    PeerId,
    decode_fragment,
};
use proptest::prelude::*;
use rstest::rstest;

fn fragmenter(cap: usize) -> Fragmenter {
    Fragmenter::new(FragmentationConfig {
        fragment_payload_cap: NonZeroUsize::new(cap).expect("non-zero cap"),
        max_message_size: NonZeroUsize::new(1 << 20).expect("non-zero"),
    })
}

fn wire_frames(cap: usize, message: &[u8]) -> Vec<Vec<u8>> {
    fragmenter(cap)
        .fragment_bytes(PeerId::new(1), PeerId::new(2), 0, message.to_vec())
        .expect("message within cap")
        .into_iter()
        .map(|frame| frame.encode())
        .collect()
}

/// Feed `frames` in the given order, checking readiness before each update.
fn reassemble(frames: &[Vec<u8>], order: &[usize]) -> PacketAssembly {
    let (&head, rest) = order.split_first().expect("at least one fragment");
    let first = decode_fragment(&frames[head]).expect("first fragment decodes");
    let mut assembly = PacketAssembly::new(&first);

    for (position, &index) in rest.iter().enumerate() {
        assert!(
            !assembly.is_ready(),
            "ready before update {position} of {}",
            rest.len()
        );
        let fragment = decode_fragment(&frames[index]).expect("fragment decodes");
        assembly.update(&fragment);
    }
    assembly
}

#[rstest]
#[case::in_order(vec![0, 1, 2, 3])]
#[case::reversed(vec![3, 2, 1, 0])]
#[case::interleaved(vec![1, 3, 0, 2])]
fn four_fragment_message_reassembles(#[case] order: Vec<usize>) {
    let message: Vec<u8> = (0..14).collect();
    let frames = wire_frames(4, &message);
    assert_eq!(frames.len(), 4);

    let assembly = reassemble(&frames, &order);
    assert!(assembly.is_ready());
    assert_eq!(assembly.into_buffer(), message);
}

#[test]
fn missing_fragment_keeps_message_incomplete() {
    let message: Vec<u8> = (0..12).collect();
    let frames = wire_frames(4, &message);

    let assembly = reassemble(&frames, &[2, 0]);
    assert!(!assembly.is_ready());
    let expected = Hole::new(4, 7).expect("first <= last");
    assert_eq!(assembly.holes().collect::<Vec<_>>(), vec![expected]);
    assert_eq!(assembly.missing_bytes(), 4);
}

fn message_and_order() -> impl Strategy<Value = (Vec<u8>, usize, Vec<usize>)> {
    (prop::collection::vec(any::<u8>(), 1..512), 1_usize..64).prop_flat_map(|(message, cap)| {
        let count = message.len().div_ceil(cap);
        let order = Just((0..count).collect::<Vec<_>>()).prop_shuffle();
        (Just(message), Just(cap), order)
    })
}

proptest! {
    #[test]
    fn any_arrival_order_rebuilds_message((message, cap, order) in message_and_order()) {
        let frames = wire_frames(cap, &message);
        let assembly = reassemble(&frames, &order);

        prop_assert!(assembly.is_ready());
        prop_assert_eq!(assembly.buffer(), message.as_slice());
    }

    #[test]
    fn repeated_fragment_leaves_state_unchanged((message, cap, order) in message_and_order()) {
        let frames = wire_frames(cap, &message);
        let first = decode_fragment(&frames[order[0]]).expect("decodes");
        let mut assembly = PacketAssembly::new(&first);
        let mut missing = assembly.missing_bytes();

        for &index in &order[1..] {
            let fragment = decode_fragment(&frames[index]).expect("decodes");
            assembly.update(&fragment);
            prop_assert!(assembly.missing_bytes() < missing);
            missing = assembly.missing_bytes();

            let holes: Vec<Hole> = assembly.holes().collect();
            let buffer = assembly.buffer().to_vec();
            assembly.update(&fragment);
            prop_assert_eq!(assembly.holes().collect::<Vec<_>>(), holes);
            prop_assert_eq!(assembly.buffer(), buffer.as_slice());
        }

        prop_assert_eq!(missing, 0);
        prop_assert!(assembly.is_ready());
    }
}
