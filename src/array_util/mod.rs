
/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``, otherwise this function panics. Data from ``source`` will be treated as little endian
/// integers
pub(crate) fn align_to_u32a_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Sets the bits of ``byte`` at byte position ``index`` of a little endian word array, leaving all other bits as they
/// are.
pub(crate) fn or_byte_le(words: &mut [u32], index: usize, byte: u8) {
    words[index / 4] |= u32::from(byte) << ((index % 4) * 8);
}

/// Serializes a word array into bytes, least significant byte of every word first.
pub(crate) fn u32a_to_bytes_le(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|dword| dword.to_le_bytes().to_vec()).collect()
}
