#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::matrix::Matrix;
use matmul_core::{naive, strassen, winograd};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First 3 bytes pick the shapes, capped at 6 for speed (3 algorithms)
    let rows = usize::from(data[0] % 6) + 1;
    let shared = usize::from(data[1] % 6) + 1;
    let cols = usize::from(data[2] % 6) + 1;

    // Remaining bytes become signed cells, cycling when short
    let body = &data[3..];
    let cell = |k: usize| -> i64 {
        if body.is_empty() {
            0
        } else {
            i64::from(body[k % body.len()] as i8) * 37
        }
    };
    let left: Vec<Vec<i64>> = (0..rows)
        .map(|i| (0..shared).map(|j| cell(i * shared + j)).collect())
        .collect();
    let right: Vec<Vec<i64>> = (0..shared)
        .map(|i| (0..cols).map(|j| cell(rows * shared + i * cols + j)).collect())
        .collect();

    let a: Matrix = Matrix::from_rows(&left).unwrap();
    let b: Matrix = Matrix::from_rows(&right).unwrap();

    let expected = naive::multiply(&a, &b).unwrap();
    assert_eq!(strassen::multiply(&a, &b).unwrap(), expected, "Naive != Strassen");
    assert_eq!(winograd::multiply(&a, &b).unwrap(), expected, "Naive != Winograd");

    // Native backend must agree with the exact one at these magnitudes
    let native_a: Matrix<i64> = Matrix::from_rows(&left).unwrap();
    let native_b: Matrix<i64> = Matrix::from_rows(&right).unwrap();
    let native = winograd::multiply(&native_a, &native_b).unwrap();
    assert_eq!(expected.convert::<i64>().unwrap(), native, "bigint != native");
});
