//! The BCH checksum at the end of every bech32 string: a 30 bit polynomial
//! remainder over the expanded human readable part, the data symbols and a 6
//! symbol trailer.

const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Fills `out` with the 6 checksum symbols for `hrp` and `data`.
///
/// `hrp` must already be lowercased, `data` must contain 5 bit symbols.
pub fn create_checksum(hrp: &[u8], data: &[u8], out: &mut [u8; 6]) {
    let residue = polymod(hrp, data, &[0u8; 6]) ^ 1;
    for (i, symbol) in out.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (5 - i))) & 0x1f) as u8;
    }
}

/// True iff the checksum at the end of `data_and_checksum` verifies for `hrp`.
pub fn verify_checksum(hrp: &[u8], data_and_checksum: &[u8]) -> bool {
    polymod(hrp, data_and_checksum, &[]) == 1
}

/// The hrp expansion (high 3 bits of each byte, a zero, then the low 5 bits of
/// each byte) is fed straight into the register, no intermediate buffer.
fn polymod(hrp: &[u8], data: &[u8], trailer: &[u8]) -> u32 {
    let mut chk = 1;

    for b in hrp {
        chk = polymod_step(chk, b >> 5);
    }
    chk = polymod_step(chk, 0);
    for b in hrp {
        chk = polymod_step(chk, b & 0x1f);
    }

    for &symbol in data {
        chk = polymod_step(chk, symbol);
    }
    for &symbol in trailer {
        chk = polymod_step(chk, symbol);
    }

    chk
}

fn polymod_step(chk: u32, value: u8) -> u32 {
    let top = chk >> 25;
    let mut chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(value);
    for (i, generator) in GENERATORS.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            chk ^= generator;
        }
    }
    chk
}
