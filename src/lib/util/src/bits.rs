/// Single-bit mask for bit number `nr`
pub const fn bit(nr: u32) -> u32 {
    1u32 << nr
}

pub const fn mask_contains(mask: u32, nr: u32) -> bool {
    nr < u32::BITS && mask & bit(nr) != 0
}

/// Two masks share no set bits
pub const fn bits_disjoint(a: u32, b: u32) -> bool {
    a & b == 0
}

/// Iterate over the bit numbers set in `mask`, lowest first.
pub fn set_bits(mask: u32) -> impl Iterator<Item = u32> {
    (0..u32::BITS).filter(move |nr| mask_contains(mask, *nr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bits() {
        assert_eq!(bit(0), 0b1);
        assert_eq!(bit(4), 0b1_0000);
        assert_eq!(bit(31), 0x8000_0000);
    }

    #[test]
    fn contains_and_disjoint() {
        let phys = bit(0) | bit(1);
        assert!(mask_contains(phys, 1));
        assert!(!mask_contains(phys, 2));
        assert!(!mask_contains(phys, 40));
        assert!(bits_disjoint(bit(0), bit(1)));
        assert!(!bits_disjoint(phys, bit(1)));
    }

    #[test]
    fn iterates_set_bits() {
        let found: Vec<u32> = set_bits(!(bit(0) | bit(1)) & 0x1f).collect();
        assert_eq!(found, vec![2, 3, 4]);
        assert_eq!(set_bits(0).count(), 0);
    }
}
