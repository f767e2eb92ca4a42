//! ChaCha20 block function (RFC 8439)
//!
//! Only the keystream block is needed here: the CSPRNG expands its key by
//! running the block function over an incrementing counter. No stream
//! cipher or AEAD is built on top of it in this crate.

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// Ten double rounds: columns, then diagonals.
fn double_rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

fn load_le(words: &mut [u32], bytes: &[u8]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Produces the 64-byte keystream block for `(key, counter, nonce)`.
///
/// A `(key, counter, nonce)` triple must never be used twice for output
/// that is meant to be independent.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&SIGMA);
    load_le(&mut state[4..12], key);
    state[12] = counter;
    load_le(&mut state[13..], nonce);

    let input = state;
    double_rounds(&mut state);

    let mut out = [0u8; 64];
    for ((chunk, word), init) in out.chunks_exact_mut(4).zip(&state).zip(&input) {
        chunk.copy_from_slice(&word.wrapping_add(*init).to_le_bytes());
    }

    out
}
