use super::constants::{MAGIC_SINUS_SCALARS, ROUND_ROTATION_COUNT};
use super::{MD5Hash, BLOCK_LENGTH_DOUBLE_WORDS};

/// the number of rounds applied to each block
const ROUND_COUNT: usize = 64;

impl MD5Hash {
    /// compress one block into the state by applying all 64 rounds of MD5
    ///
    /// # Parameters
    /// ``input_block`` a 16 double-word slice containing one block of the padded message
    ///
    /// The state is replaced with the state computed from the previous state and the input data block.
    pub fn round_function(&mut self, input_block: &[u32]) {
        assert_eq!(input_block.len(), BLOCK_LENGTH_DOUBLE_WORDS);

        let mut round_state = *self;

        for i in 0..ROUND_COUNT {
            let (scrambled_data, message_index) = match i {
                0..=15 =>
                    ((round_state.1 & round_state.2) | (!round_state.1 & round_state.3), i),
                16..=31 =>
                    ((round_state.3 & round_state.1) | (!round_state.3 & round_state.2), (5 * i + 1) %
                        BLOCK_LENGTH_DOUBLE_WORDS),
                32..=47 =>
                    (round_state.1 ^ round_state.2 ^ round_state.3, (3 * i + 5) % BLOCK_LENGTH_DOUBLE_WORDS),
                48..=63 =>
                    (round_state.2 ^ (round_state.1 | !round_state.3), (7 * i) % BLOCK_LENGTH_DOUBLE_WORDS),
                _ => unreachable!()
            };

            let temp = round_state.3;
            round_state.3 = round_state.2;
            round_state.2 = round_state.1;
            round_state.1 = round_state.1.wrapping_add(
                u32::rotate_left(round_state.0.wrapping_add(scrambled_data)
                                     .wrapping_add(MAGIC_SINUS_SCALARS[i])
                                     .wrapping_add(input_block[message_index]),
                                 ROUND_ROTATION_COUNT[i])
            );
            round_state.0 = temp;
        }

        self.0 = self.0.wrapping_add(round_state.0);
        self.1 = self.1.wrapping_add(round_state.1);
        self.2 = self.2.wrapping_add(round_state.2);
        self.3 = self.3.wrapping_add(round_state.3);
    }
}
