use alloc::vec::Vec;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sp800_185_sponge::{Domain, KeccakF1600, Sponge, RATE_128, RATE_256};

use super::random_bytes;
use crate::{
    encoding::{bit_length, bytepad, encode_string, left_encode, right_encode, Bytepad},
    Error,
};

const INTEGERS: [(u64, &[u8]); 11] = [
    (0, &[0x00]),
    (1, &[0x01]),
    (127, &[0x7f]),
    (128, &[0x80]),
    (255, &[0xff]),
    (256, &[0x01, 0x00]),
    (65535, &[0xff, 0xff]),
    (65536, &[0x01, 0x00, 0x00]),
    (u32::MAX as u64, &[0xff, 0xff, 0xff, 0xff]),
    (1 << 32, &[0x01, 0x00, 0x00, 0x00, 0x00]),
    (u64::MAX, &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]),
];

#[test]
fn left_encode_reference_values() {
    for (x, value) in INTEGERS.iter() {
        let mut expected = vec![value.len() as u8];
        expected.extend_from_slice(value);
        assert_eq!(left_encode(*x).as_slice(), &expected[..], "left_encode({})", x);
    }
}

#[test]
fn right_encode_reference_values() {
    for (x, value) in INTEGERS.iter() {
        let mut expected = value.to_vec();
        expected.push(value.len() as u8);
        assert_eq!(right_encode(*x).as_slice(), &expected[..], "right_encode({})", x);
    }
}

#[test]
fn zero_keeps_one_value_byte() {
    assert_eq!(&*left_encode(0), &[0x01, 0x00]);
    assert_eq!(&*right_encode(0), &[0x00, 0x01]);
}

#[test]
fn encode_string_prefixes_bit_length() {
    assert_eq!(encode_string(b"").unwrap(), vec![0x01, 0x00]);
    assert_eq!(encode_string(b"abc").unwrap(), vec![0x01, 0x18, b'a', b'b', b'c']);
    assert_eq!(&encode_string(&[0; 32]).unwrap()[..3], &[0x02, 0x01, 0x00]);

    for len in [1_usize, 2, 31, 32, 33, 255, 256, 8191, 8192].iter() {
        let s = vec![0xab; *len];
        let encoded = encode_string(&s).unwrap();
        let prefix = left_encode(*len as u64 * 8);
        assert!(encoded.starts_with(&prefix), "len {}", len);
        assert_eq!(&encoded[prefix.len()..], &s[..]);
        if *len > 1 {
            assert!(!encoded.starts_with(&left_encode(*len as u64)), "len {}", len);
        }
    }
}

#[test]
fn kmac_header_bytes() {
    let mut names = encode_string(b"KMAC").unwrap();
    names.extend(encode_string(b"").unwrap());
    let header = bytepad(&names, RATE_128).unwrap();
    assert_eq!(header.len(), RATE_128);
    assert_eq!(&header[..10], &[0x01, 0xa8, 0x01, 0x20, b'K', b'M', b'A', b'C', 0x01, 0x00]);
    assert!(header[10..].iter().all(|&b| b == 0));
}

#[test]
fn bytepad_aligns_to_width() {
    let mut rng = StdRng::seed_from_u64(0xb17e);
    for w in 1..300 {
        for &n in [0_usize, 1, w / 2, w, w + 1, 3 * w + 5].iter() {
            let x = random_bytes(&mut rng, n);
            let padded = bytepad(&x, w).unwrap();
            let prefix = left_encode(w as u64);

            assert_eq!(padded.len() % w, 0, "w {} n {}", w, n);
            assert!(padded.len() >= w);
            assert!(padded.starts_with(&prefix));
            assert_eq!(&padded[prefix.len()..prefix.len() + n], &x[..]);
            assert!(padded[prefix.len() + n..].iter().all(|&b| b == 0));
            // No more padding than needed.
            assert!(padded.len() - (prefix.len() + n) < w);
        }
    }
}

#[test]
fn bytepad_of_empty_input_is_one_block() {
    let padded = bytepad(&[], RATE_256).unwrap();
    assert_eq!(padded.len(), RATE_256);
    assert_eq!(&padded[..2], &[0x01, 0x88]);
}

#[test]
fn bytepad_rejects_zero_width() {
    assert_eq!(bytepad(b"x", 0), Err(Error::InvalidPadWidth));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn bit_length_overflow_is_an_error() {
    assert_eq!(bit_length(1 << 60), Ok(1 << 63));
    assert_eq!(bit_length((1 << 61) + 1), Err(Error::EncodingOverflow("bit length")));
    assert_eq!(bit_length(usize::MAX), Err(Error::EncodingOverflow("bit length")));
}

#[test]
fn streamed_bytepad_matches_pure_functions() {
    let mut rng = StdRng::seed_from_u64(42);
    for &rate in [7_usize, 10, RATE_256, RATE_128, 199].iter() {
        for _ in 0..10 {
            let (na, nb) = (rng.gen_range(0..400), rng.gen_range(0..50));
            let a = random_bytes(&mut rng, na);
            let b = random_bytes(&mut rng, nb);

            let mut strings: Vec<u8> = encode_string(&a).unwrap();
            strings.extend(encode_string(&b).unwrap());
            let mut expected = Sponge::<KeccakF1600>::new(rate, 32, Domain::CShake).unwrap();
            expected.absorb(bytepad(&strings, rate).unwrap());

            let mut streamed = Sponge::<KeccakF1600>::new(rate, 32, Domain::CShake).unwrap();
            let mut pad = Bytepad::start(&mut streamed, rate).unwrap();
            pad.encode_string(&a).unwrap().encode_string(&b).unwrap();
            pad.finish();

            assert_eq!(streamed, expected, "rate {}", rate);
        }
    }
}
