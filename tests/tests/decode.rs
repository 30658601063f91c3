use token_account_decoder::{Address, DecodeError, TokenAccount, TOKEN_ACCOUNT_LEN};
use token_account_decoder_tests::{sample_account, sample_account_bytes};

#[test]
fn decodes_every_field_of_a_known_buffer() {
    let data = sample_account_bytes();
    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account, sample_account());
}

#[test]
fn integers_are_little_endian() {
    let mut data = [0u8; TOKEN_ACCOUNT_LEN];
    // amount bytes [0x01, 0x00, ...] must decode as 1, not 2^56
    data[64] = 0x01;
    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.amount, 1);

    data[64] = 0x00;
    data[71] = 0x01; // most significant byte of amount
    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.amount, 1u64 << 56);

    // same for the 4-byte tags
    data[72] = 0x01;
    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.delegate.tag, 1);
}

#[test]
fn buffer_of_164_bytes_is_rejected() {
    let data = [0u8; TOKEN_ACCOUNT_LEN - 1];
    let err = TokenAccount::decode(&data).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InsufficientData {
            required: 165,
            actual: 164,
        }
    );
    assert_eq!(
        err.to_string(),
        "token account data too short: need at least 165 bytes, got 164"
    );
}

#[test]
fn buffer_of_exactly_165_bytes_succeeds() {
    let data = [0u8; TOKEN_ACCOUNT_LEN];
    assert!(TokenAccount::decode(&data).is_ok());
}

#[test]
fn empty_buffer_is_rejected() {
    let err = TokenAccount::decode(&[]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InsufficientData {
            required: 165,
            actual: 0,
        }
    );
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut data = vec![0u8; 200];
    data[..TOKEN_ACCOUNT_LEN].copy_from_slice(&sample_account_bytes());
    data[TOKEN_ACCOUNT_LEN..].fill(0xFF); // extension-style junk past the record

    let with_trailing = TokenAccount::decode(&data).unwrap();
    let exact = TokenAccount::decode(&data[..TOKEN_ACCOUNT_LEN]).unwrap();
    assert_eq!(with_trailing, exact);
}

#[test]
fn gated_fields_are_decoded_regardless_of_their_tags() {
    // Absent is_native tag in the fixture, but the value bytes still decode.
    let account = TokenAccount::decode(&sample_account_bytes()).unwrap();
    assert!(account.is_native.is_none());
    assert_eq!(account.is_native.value, 7);
    assert_eq!(account.native_reserve(), None);

    // Flip every tag and confirm only interpretation changes, not the values.
    let mut data = sample_account_bytes();
    data[72..76].copy_from_slice(&0u32.to_le_bytes());
    data[109..113].copy_from_slice(&1u32.to_le_bytes());
    data[129..133].copy_from_slice(&0u32.to_le_bytes());

    let flipped = TokenAccount::decode(&data).unwrap();
    assert_eq!(flipped.delegate.value, account.delegate.value);
    assert!(!flipped.has_delegate());
    assert_eq!(flipped.native_reserve(), Some(7));
    assert_eq!(flipped.close_authority.value, account.close_authority.value);
    assert!(!flipped.has_close_authority());
}

#[test]
fn tags_outside_zero_and_one_pass_through() {
    let mut data = sample_account_bytes();
    data[72..76].copy_from_slice(&7u32.to_le_bytes());

    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.delegate.tag, 7);
    assert!(account.has_delegate());
}

#[test]
fn state_byte_is_not_reinterpreted() {
    let mut data = sample_account_bytes();
    data[108] = 9; // outside the well-known SPL states
    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.state, 9);
}

#[test]
fn decoding_is_pure_and_leaves_the_input_untouched() {
    let data = sample_account_bytes();
    let before = data;

    let first = TokenAccount::decode(&data).unwrap();
    let second = TokenAccount::decode(&data).unwrap();
    assert_eq!(first, second);
    assert_eq!(data, before);
}

#[test]
fn identifier_bytes_pass_through_verbatim() {
    let mut data = sample_account_bytes();
    let mut mint = [0u8; 32];
    for (i, b) in mint.iter_mut().enumerate() {
        *b = 0xA0 ^ (i as u8);
    }
    data[0..32].copy_from_slice(&mint);

    let account = TokenAccount::decode(&data).unwrap();
    assert_eq!(account.mint, Address::new(mint));
    assert_eq!(account.mint.as_bytes(), &mint);
    assert_ne!(account.mint, account.owner);
}

#[test]
fn round_trip_recovers_raw_tags_and_gated_bytes() {
    let data = sample_account_bytes();
    let account = TokenAccount::decode(&data).unwrap();

    let encoded = account.to_bytes();
    assert_eq!(encoded, data);
    assert_eq!(TokenAccount::decode(&encoded).unwrap(), account);

    // The absent-tagged pair survives the trip byte for byte.
    assert_eq!(&encoded[109..113], &0u32.to_le_bytes());
    assert_eq!(&encoded[113..121], &7u64.to_le_bytes());
}
