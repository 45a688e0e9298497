use std::fmt::Debug;
use std::mem::size_of;
use std::ops::RangeInclusive;

/// Bit extraction helpers for instruction words.
/// The index (`bit_idx`) goes from lsb to msb (right to left).
pub trait Bits
where
    Self: Copy + Into<u64> + TryFrom<u64> + From<u8>,
    <Self as TryFrom<u64>>::Error: Debug,
{
    const WIDTH: u8 = (size_of::<Self>() * 8) as u8;

    fn get_bit(&self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < Self::WIDTH);
        let value: u64 = (*self).into();
        (value >> bit_idx) & 1 == 1
    }

    /// Returns the bits in `bits_range` moved down to position 0.
    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self {
        let start = *bits_range.start();
        let end = *bits_range.end();
        debug_assert!(start <= end && end < Self::WIDTH);

        let length = u32::from(end - start + 1);
        let mask = if length >= 64 {
            u64::MAX
        } else {
            (1_u64 << length) - 1
        };
        let value: u64 = (*self).into();

        // The masked value is never wider than `Self`.
        Self::try_from((value >> start) & mask).unwrap_or_else(|_| Self::from(0))
    }

    /// Same as [`Bits::get_bits`] but widened to `u8`, for fields that fit in a byte.
    fn get_field(&self, bits_range: RangeInclusive<u8>) -> u8 {
        let field: u64 = self.get_bits(bits_range).into();
        (field & 0xFF) as u8
    }

    /// Checks the bits in `bits_range` against a pattern written the way
    /// encoding tables write them, MSB first: `'0'` and `'1'` must match,
    /// `'x'` is a don't care. Underscores are ignored.
    ///
    /// `0b00_1011.matches_pattern(0..=5, "0010x1")` is `true`.
    fn matches_pattern(&self, bits_range: RangeInclusive<u8>, pattern: &str) -> bool {
        let field: u64 = self.get_bits(bits_range.clone()).into();
        let mut position = u32::from(*bits_range.end() - *bits_range.start()) + 1;

        for c in pattern.chars().filter(|c| *c != '_') {
            if position == 0 {
                return false;
            }
            position -= 1;
            let bit = (field >> position) & 1;
            match c {
                '0' if bit != 0 => return false,
                '1' if bit != 1 => return false,
                '0' | '1' | 'x' | 'X' => {}
                _ => return false,
            }
        }

        position == 0
    }
}

impl Bits for u64 {}
impl Bits for u32 {}
impl Bits for u16 {}
impl Bits for u8 {}
