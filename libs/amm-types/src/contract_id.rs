use soroban_sdk::{Address, Bytes, BytesN, Env};

/// Strkey version byte for contract ids ('C')
const VERSION_BYTE_CONTRACT: u8 = 2 << 3;

/// Version byte + 32 byte id + 2 byte checksum
const PAYLOAD_LEN: usize = 35;

/// Encoded length of a contract strkey
pub const STRKEY_LEN: usize = 56;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Raw 256-bit identifier of a deployed contract
///
/// Usable in `const` items so deployment targets can be fixed at build time.
/// Turned into a host [`Address`] through its strkey form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ContractId([u8; 32]);

impl ContractId {
    pub const fn from_array(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse 64 hex digits, optionally prefixed with `0x`
    ///
    /// Panics on malformed input, which fails compilation when used in a
    /// `const` item.
    pub const fn from_hex(hex: &str) -> Self {
        let digits = hex.as_bytes();
        let prefixed =
            digits.len() >= 2 && digits[0] == b'0' && (digits[1] == b'x' || digits[1] == b'X');
        let start = if prefixed { 2 } else { 0 };

        if digits.len() - start != 64 {
            panic!("Contract id must be 64 hex digits");
        }

        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            let hi = hex_value(digits[start + 2 * i]);
            let lo = hex_value(digits[start + 2 * i + 1]);
            bytes[i] = (hi << 4) | lo;
            i += 1;
        }

        Self(bytes)
    }

    pub const fn to_array(&self) -> [u8; 32] {
        self.0
    }

    pub fn to_bytes(&self, env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &self.0)
    }

    /// Stellar strkey of the id (`C...`)
    /// Layout: version byte, id, CRC16-XModem of both (little endian), base32 without padding
    pub fn to_strkey(&self) -> [u8; STRKEY_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = VERSION_BYTE_CONTRACT;
        payload[1..33].copy_from_slice(&self.0);

        let checksum = crc16_xmodem(&payload[..33]);
        payload[33..].copy_from_slice(&checksum.to_le_bytes());

        base32_encode(&payload)
    }

    /// Resolve the id into an address the host can invoke
    pub fn to_address(&self, env: &Env) -> Address {
        Address::from_string_bytes(&Bytes::from_slice(env, &self.to_strkey()))
    }
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("Invalid hex digit in contract id"),
    }
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

// 35 bytes are exactly 56 five-bit groups, so no padding is produced
fn base32_encode(data: &[u8; PAYLOAD_LEN]) -> [u8; STRKEY_LEN] {
    let mut out = [0u8; STRKEY_LEN];
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    let mut pos = 0;

    for &byte in data {
        buffer = ((buffer << 8) | byte as u32) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out[pos] = BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize];
            pos += 1;
        }
    }

    debug_assert_eq!(pos, STRKEY_LEN);
    out
}
