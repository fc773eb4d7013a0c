#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::bigint::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let x = i64::from_le_bytes(data[..8].try_into().unwrap());
    let y = i64::from_le_bytes(data[8..16].try_into().unwrap());
    let (bx, by) = (BigInt::from_i64(x), BigInt::from_i64(y));
    let (wx, wy) = (i128::from(x), i128::from(y));

    assert_eq!(bx.add(&by).unwrap().to_string(), (wx + wy).to_string());
    assert_eq!(bx.subtract(&by).unwrap().to_string(), (wx - wy).to_string());
    assert_eq!(bx.multiply(&by).unwrap().to_string(), (wx * wy).to_string());

    // Rendering must parse back to the same value
    let text = bx.to_string();
    assert_eq!(text.parse::<BigInt>().unwrap(), bx);
});
