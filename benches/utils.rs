#![allow(dead_code)]

use rand::Rng;

/// Epilogue shapes `(rows, cols)`: every cols is a multiple of 16 lanes.
pub const EPILOGUE_SHAPES: &[(usize, usize)] = &[
    (1, 4096),    // single-row GEMV output
    (64, 1024),   // small batch
    (256, 4096),  // large batch, FFN width
];

/// Activation sizes (elements), multiples of 16.
pub const ACTIVATION_SIZES: &[usize] = &[4096, 65536, 1 << 20];

/// Element throughput in elements/sec.
pub fn throughput_elements(elements: usize, duration_secs: f64) -> f64 {
    elements as f64 / duration_secs
}

/// Random i32 accumulators shaped like an int8 GEMM with inner dimension `k`.
pub fn random_acc_vec(n: usize, k: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    let bound = 127 * 127 * k as i32;
    (0..n).map(|_| rng.gen_range(-bound..bound)).collect()
}

/// Random f32 vector in `[lo, hi)`.
pub fn random_f32_vec(n: usize, lo: f32, hi: f32) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Random f32 bias vector in `[-1, 1)`.
pub fn random_bias_vec(n: usize) -> Vec<f32> {
    random_f32_vec(n, -1.0, 1.0)
}
