//! Native-Word Passthroughs
//!
//! Thin wrappers over the machine's own wrapping addition for 8/16/32/64-bit
//! words. They share the library's wraparound convention but nothing ties
//! them to the limb engines; they are not part of the core contract.

/// Wrapping 8-bit addition.
pub fn add_u8(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Wrapping 16-bit addition.
pub fn add_u16(a: u16, b: u16) -> u16 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit addition.
pub fn add_u32(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping 64-bit addition.
pub fn add_u64(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthroughs_wrap() {
        assert_eq!(add_u8(200, 100), 44);
        assert_eq!(add_u16(u16::MAX, 1), 0);
        assert_eq!(add_u32(1, 2), 3);
        assert_eq!(add_u64(u64::MAX, u64::MAX), u64::MAX - 1);
    }
}
