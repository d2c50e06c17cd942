use crate::hash::sha256d;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// Input contains a symbol outside the 58-character alphabet.
    InvalidCharacter(char),
    /// Decoded bytes cannot hold the 4-byte checksum.
    TooShort,
    /// Recomputed checksum does not match the trailing 4 bytes.
    ChecksumMismatch,
}

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base-58 big-integer encoding. Each leading 0x00 byte becomes a leading '1'.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    // base-58 digits, least significant first
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }
    out
}

pub fn decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = s.bytes().take_while(|&b| b == b'1').count();
    // decoded bytes, least significant first
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len());
    for ch in s[zeros..].chars() {
        let val = ALPHABET
            .iter()
            .position(|&a| a as char == ch)
            .ok_or(Base58Error::InvalidCharacter(ch))? as u32;
        let mut carry = val;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// Appends first4(SHA256(SHA256(payload))) and base-58 encodes.
pub fn check_encode(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&sha256d(payload)[..4]);
    encode(&buf)
}

/// Decodes, verifies the trailing checksum, and returns the stripped payload.
pub fn check_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let mut raw = decode(s)?;
    if raw.len() < 4 {
        return Err(Base58Error::TooShort);
    }
    let checksum = raw.split_off(raw.len() - 4);
    if checksum.as_slice() != &sha256d(&raw)[..4] {
        return Err(Base58Error::ChecksumMismatch);
    }
    Ok(raw)
}
