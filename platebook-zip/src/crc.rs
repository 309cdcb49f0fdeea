/// CRC-32 checksum engine as mandated by the ZIP format.
///
/// Uses the reflected polynomial 0xEDB88320 with an initial value of
/// 0xFFFFFFFF and a final XOR of 0xFFFFFFFF, matching the checksum every
/// conforming ZIP reader validates stored entries against.
///
/// The 256-entry lookup table is built once at construction and owned by the
/// value; there is no ambient/global table state.
#[derive(Debug, Clone)]
pub struct Crc32 {
    table: [u32; 256],
}

impl Crc32 {
    /// Build the checksum engine, precomputing the byte-folding table.
    pub fn new() -> Self {
        let mut table = [0u32; 256];
        let mut n = 0;
        while n < 256 {
            let mut c = n as u32;
            let mut k = 0;
            while k < 8 {
                c = if c & 1 != 0 {
                    0xEDB8_8320 ^ (c >> 1)
                } else {
                    c >> 1
                };
                k += 1;
            }
            table[n] = c;
            n += 1;
        }
        Self { table }
    }

    /// Compute the CRC-32 of a byte slice.
    ///
    /// Pure function over byte sequences of any length; the checksum of
    /// empty input is 0.
    #[inline]
    pub fn checksum(&self, data: &[u8]) -> u32 {
        let mut crc = 0xFFFF_FFFFu32;
        for &byte in data {
            let index = ((crc ^ byte as u32) & 0xFF) as usize;
            crc = self.table[index] ^ (crc >> 8);
        }
        crc ^ 0xFFFF_FFFF
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn known_vectors() {
        let crc = Crc32::new();
        assert_eq!(crc.checksum(b""), 0);
        assert_eq!(crc.checksum(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc.checksum(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
    }

    #[test]
    fn matches_reference_on_fixed_inputs() {
        let crc = Crc32::new();
        let inputs: [&[u8]; 4] = [b"a", b"[Content_Types].xml", b"\x00\xff\x00\xff", b"platebook"];
        for input in inputs {
            assert_eq!(crc.checksum(input), crc32fast::hash(input));
        }
    }

    #[quickcheck]
    fn matches_reference(data: Vec<u8>) -> bool {
        Crc32::new().checksum(&data) == crc32fast::hash(&data)
    }
}
