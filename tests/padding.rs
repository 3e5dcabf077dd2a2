use sha256_trace::HashError;
use sha256_trace::hash::sha256::{PaddingInfo, pad, padded_blocks};

fn assert_padding_invariants(len: usize) {
    let info = PaddingInfo::for_length(len).unwrap();

    assert_eq!(info.data_bits, len as u64 * 8);
    assert_eq!(info.one_bit, 1);
    assert_eq!(info.len_field_bits, 64);
    assert_eq!(info.total_bits % 512, 0, "length {len}");
    assert!(info.zero_pad_bits < 512, "length {len}");
    assert_eq!(
        info.total_bits - info.data_bits - 1 - 64,
        info.zero_pad_bits,
        "length {len}"
    );
    assert_eq!(info.block_count, info.total_bits / 512);
}

#[test]
fn padding_invariants_hold_for_small_lengths() {
    for len in 0..=300 {
        assert_padding_invariants(len);
    }
}

#[test]
fn padding_invariants_hold_for_large_lengths() {
    for len in [1 << 20, (1 << 32) + 17, (1usize << 40) - 1] {
        assert_padding_invariants(len);
    }
}

#[test]
fn padded_buffer_is_whole_blocks_with_room_for_trailer() {
    for len in 0..=200 {
        let message = vec![0xc3u8; len];
        let (padded, info) = pad(&message).unwrap();

        assert_eq!(padded.len() % 64, 0);
        assert!(padded.len() >= len + 9);
        assert_eq!(padded.len() as u64, info.padded_len());
        assert_eq!(&padded[..len], message.as_slice());
        assert_eq!(padded[len], 0x80);
        assert_eq!(
            &padded[padded.len() - 8..],
            &(len as u64 * 8).to_be_bytes()
        );
    }
}

#[test]
fn fifty_five_bytes_fit_one_block() {
    let info = PaddingInfo::for_length(55).unwrap();

    assert_eq!(info.block_count, 1);
    assert_eq!(info.zero_pad_bits, 7);
    assert_eq!(info.total_bits, 512);
}

#[test]
fn fifty_six_bytes_need_a_second_block() {
    let info = PaddingInfo::for_length(56).unwrap();

    assert_eq!(info.block_count, 2);
    assert_eq!(info.zero_pad_bits, 511);
    assert_eq!(info.total_bits, 1024);
}

#[test]
fn full_block_message_gets_a_padding_block() {
    let info = PaddingInfo::for_length(64).unwrap();

    assert_eq!(info.block_count, 2);
    assert_eq!(info.zero_pad_bits, 447);
}

#[test]
fn empty_message_pads_to_one_block() {
    let (padded, info) = pad(b"").unwrap();

    assert_eq!(padded.len(), 64);
    assert_eq!(padded[0], 0x80);
    assert!(padded[1..].iter().all(|&b| b == 0));
    assert_eq!(info.zero_pad_bits, 447);
}

#[test]
fn block_iterator_matches_contiguous_padding() {
    let message: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let (padded, info) = pad(&message).unwrap();

    let blocks = padded_blocks(&message).unwrap();
    assert_eq!(blocks.len() as u64, info.block_count);

    let joined: Vec<u8> = blocks.flatten().collect();
    assert_eq!(joined, padded);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn lengths_beyond_the_length_field_are_rejected() {
    let len = 1usize << 61;

    assert_eq!(
        PaddingInfo::for_length(len),
        Err(HashError::MessageTooLarge { len })
    );
    assert_eq!(
        PaddingInfo::for_length(usize::MAX),
        Err(HashError::MessageTooLarge { len: usize::MAX })
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn padded_length_overflow_is_rejected() {
    // Data bits fit in 64 bits, but the padded length does not.
    let len = (1usize << 61) - 1;

    assert!(PaddingInfo::for_length(len).is_err());

    let fits = (1usize << 61) - 73;
    let info = PaddingInfo::for_length(fits).unwrap();
    assert_eq!(info.total_bits, u64::MAX - 511);
}

#[test]
fn too_large_error_names_the_length() {
    let err = HashError::MessageTooLarge { len: 42 };

    assert!(err.to_string().contains("42 bytes"));
}
