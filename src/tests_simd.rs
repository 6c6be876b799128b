//! SIMD regression tests: every kernel, instantiated for every ISA the host
//! supports, against the scalar references in `igemm-scalar-ops`.
//!
//! Exact kernels compare bit-for-bit; only sigmoid (approximate reciprocal)
//! uses a tolerance.

#[cfg(test)]
mod tests {
    use crate::cpu_kernels::{Avx2, Avx512bw, Gather, Isa, Lane, Sse2};
    use crate::kernels;
    use igemm_scalar_ops::activations::{
        exp_approx_taylor, floor_by_truncation, relu, scalar_relu, sigmoid, tanh_taylor,
    };
    use igemm_scalar_ops::blas::{abs_i8, adds_i16, madd_i16, mul_u32_wide, scalar_vec_mul, WrappingLaneMul};
    use igemm_scalar_ops::quant;
    use igemm_scalar_ops::EXP_LOOKUP;
    use std::any::type_name;
    use std::fmt::Debug;

    // ========================================================================
    // Helpers
    // ========================================================================

    macro_rules! for_each_isa {
        ($check:ident) => {{
            $check::<Sse2>();
            if Avx2::cpu_supports() {
                $check::<Avx2>();
            } else {
                println!("Skipping AVX2 leg of {}: not supported", stringify!($check));
            }
            if Avx512bw::cpu_supports() {
                $check::<Avx512bw>();
            } else {
                println!("Skipping AVX-512BW leg of {}: not supported", stringify!($check));
            }
        }};
    }

    macro_rules! for_each_gather_isa {
        ($check:ident) => {{
            if Avx2::cpu_supports() {
                $check::<Avx2>();
            } else {
                println!("Skipping AVX2 leg of {}: not supported", stringify!($check));
            }
            if Avx512bw::cpu_supports() {
                $check::<Avx512bw>();
            } else {
                println!("Skipping AVX-512BW leg of {}: not supported", stringify!($check));
            }
        }};
    }

    fn lanes<I: Isa, T: Lane<I>>(f: impl Fn(usize) -> T) -> Vec<T> {
        (0..T::LANES).map(f).collect()
    }

    fn load<I: Isa, T: Lane<I>>(values: &[T]) -> T::Reg {
        assert_eq!(values.len(), T::LANES);
        unsafe { T::loadu(values.as_ptr()) }
    }

    fn store<I: Isa, T: Lane<I> + Default>(reg: T::Reg) -> Vec<T> {
        let mut out = vec![T::default(); T::LANES];
        unsafe { T::storeu(out.as_mut_ptr(), reg) };
        out
    }

    fn assert_close(a: &[f32], b: &[f32], label: &str, tol: f32) {
        assert_eq!(a.len(), b.len(), "{label}: length mismatch");
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (x - y).abs() <= tol,
                "{label}[{i}]: scalar={x}, simd={y}, diff={}",
                (x - y).abs()
            );
        }
    }

    fn map_f32<I: Isa>(input: &[f32], kernel: unsafe fn(I::Vf) -> I::Vf) -> Vec<f32> {
        let reg = load::<I, f32>(input);
        store::<I, f32>(unsafe { kernel(reg) })
    }

    // ========================================================================
    // Layout
    // ========================================================================

    #[test]
    fn lane_counts_follow_register_width() {
        assert_eq!(<i8 as Lane<Sse2>>::LANES, 16);
        assert_eq!(<i16 as Lane<Avx2>>::LANES, 16);
        assert_eq!(<f64 as Lane<Avx2>>::LANES, 4);
        assert_eq!(<i8 as Lane<Avx512bw>>::LANES, 64);
        assert_eq!(<f32 as Lane<Avx512bw>>::LANES, Avx512bw::LANES_I32);
    }

    // ========================================================================
    // floor
    // ========================================================================

    /// Fractional values, exact integers, and magnitudes past 2^23 and 2^31
    /// where only the pass-through keeps truncation correct.
    const FLOOR_CASES: [f32; 16] = [
        -1.5,
        -2.0,
        2.0,
        2.7,
        -0.25,
        0.0,
        -0.5,
        1_000_000.5,
        -8_388_607.5,
        2_147_483_520.0,
        -2_147_483_904.0,
        3.0e9,
        -3.0e9,
        1.0e20,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ];

    fn check_floor<I: Isa>() {
        let n = <f32 as Lane<I>>::LANES;
        for chunk in FLOOR_CASES.chunks(n) {
            let input = lanes::<I, f32>(|i| chunk.get(i).copied().unwrap_or((i as f32 - 9.0) * 0.75));
            let want: Vec<f32> = input.iter().map(|x| x.floor()).collect();
            assert_eq!(map_f32::<I>(&input, kernels::floor::<I>), want, "{} floor", I::NAME);
            assert_eq!(
                map_f32::<I>(&input, kernels::floor_by_truncation::<I>),
                input.iter().map(|&x| floor_by_truncation(x)).collect::<Vec<_>>(),
                "{} floor_by_truncation",
                I::NAME
            );
            assert_eq!(map_f32::<I>(&input, kernels::floor_by_truncation::<I>), want, "{} floor_by_truncation", I::NAME);
        }

        let nan = vec![f32::NAN; n];
        assert!(map_f32::<I>(&nan, kernels::floor_by_truncation::<I>).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn floor_all_isas() {
        for_each_isa!(check_floor);
    }

    // ========================================================================
    // Primitives without a kernel of their own
    // ========================================================================

    fn check_integer_primitives<I: Isa>() {
        let a16 = lanes::<I, i16>(|i| match i {
            0 => i16::MAX,
            1 => i16::MIN,
            _ => (i as i32 * 2311 - 17_000) as i16,
        });
        let b16 = lanes::<I, i16>(|i| match i {
            0 => 1,
            1 => -1,
            _ => (i as i32 * -977 + 12_000) as i16,
        });
        let (va, vb) = (load::<I, i16>(&a16), load::<I, i16>(&b16));

        let got = store::<I, i16>(unsafe { I::adds_epi16(va, vb) });
        let want: Vec<i16> = a16.iter().zip(&b16).map(|(&a, &b)| adds_i16(a, b)).collect();
        assert_eq!(got, want, "{} adds_epi16", I::NAME);

        let got = store::<I, i32>(unsafe { I::madd_epi16(va, vb) });
        let want: Vec<i32> = (0..I::LANES_I32)
            .map(|k| madd_i16(a16[2 * k], a16[2 * k + 1], b16[2 * k], b16[2 * k + 1]))
            .collect();
        assert_eq!(got, want, "{} madd_epi16", I::NAME);

        let a32 = lanes::<I, i32>(|i| (i as i32).wrapping_mul(0x1357_9BDF) ^ -0x7000_0000);
        let b32 = lanes::<I, i32>(|i| (i as i32 + 1).wrapping_mul(-0x0246_8ACE));
        let (va, vb) = (load::<I, i32>(&a32), load::<I, i32>(&b32));

        let got = store::<I, i32>(unsafe { I::andnot_si(va, vb) });
        let want: Vec<i32> = a32.iter().zip(&b32).map(|(&a, &b)| !a & b).collect();
        assert_eq!(got, want, "{} andnot_si", I::NAME);

        let got = store::<I, i32>(unsafe { I::mul_epu32(va, vb) });
        for k in 0..I::LANES_I32 / 2 {
            let wide = (got[2 * k] as u32 as u64) | ((got[2 * k + 1] as u32 as u64) << 32);
            assert_eq!(wide, mul_u32_wide(a32[2 * k], b32[2 * k]), "{} mul_epu32 lane {k}", I::NAME);
        }

        let a8 = lanes::<I, i8>(|i| (i as i32 * 41 - 128) as i8);
        let got = store::<I, i8>(unsafe { I::abs_epi8(load::<I, i8>(&a8)) });
        let want: Vec<i8> = a8.iter().map(|&v| abs_i8(v)).collect();
        assert_eq!(got, want, "{} abs_epi8", I::NAME);
    }

    fn check_shuffles<I: Isa>() {
        let a = lanes::<I, i32>(|i| i as i32);
        let b = lanes::<I, i32>(|i| 100 + i as i32);
        let (va, vb) = (load::<I, i32>(&a), load::<I, i32>(&b));

        // Both operate within each 128-bit block.
        let got = store::<I, i32>(unsafe { I::shuffle_epi32::<0b00_01_10_11>(va) });
        let want: Vec<i32> = a.chunks(4).flat_map(|q| q.iter().rev().copied()).collect();
        assert_eq!(got, want, "{} shuffle_epi32 reverse", I::NAME);

        let got = store::<I, i32>(unsafe { I::unpacklo_epi32(va, vb) });
        let want: Vec<i32> = a
            .chunks(4)
            .zip(b.chunks(4))
            .flat_map(|(x, y)| [x[0], y[0], x[1], y[1]])
            .collect();
        assert_eq!(got, want, "{} unpacklo_epi32", I::NAME);
    }

    fn check_mullo_epi32_by_parts<I: Isa>() {
        let a = lanes::<I, i32>(|i| match i {
            0 => i32::MIN,
            1 => i32::MAX,
            _ => (i as i32 - 5).wrapping_mul(0x0F0F_0F0F),
        });
        let b = lanes::<I, i32>(|i| match i {
            0 => -1,
            1 => i32::MAX,
            _ => (i as i32 * 7 + 3).wrapping_mul(-0x0102_0304),
        });
        let (va, vb) = (load::<I, i32>(&a), load::<I, i32>(&b));
        let mut want = vec![0i32; a.len()];
        scalar_vec_mul(&a, &b, &mut want);

        let got = store::<I, i32>(unsafe { kernels::mullo_epi32_by_parts::<I>(va, vb) });
        assert_eq!(got, want, "{} mullo_epi32_by_parts", I::NAME);
        let native = store::<I, i32>(unsafe { I::mullo_epi32(va, vb) });
        assert_eq!(native, want, "{} mullo_epi32", I::NAME);
    }

    fn check_sub_pd<I: Isa>() {
        let a = lanes::<I, f64>(|i| i as f64 * 1.5 - 2.0);
        let b = lanes::<I, f64>(|i| 0.25 - i as f64);
        let got = store::<I, f64>(unsafe { I::sub_pd(load::<I, f64>(&a), load::<I, f64>(&b)) });
        let want: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x - y).collect();
        assert_eq!(got, want, "{} sub_pd", I::NAME);
    }

    #[test]
    fn primitives_all_isas() {
        for_each_isa!(check_integer_primitives);
        for_each_isa!(check_shuffles);
        for_each_isa!(check_mullo_epi32_by_parts);
        for_each_isa!(check_sub_pd);
    }

    // ========================================================================
    // multiply
    // ========================================================================

    fn check_mul_lane<I, T>(a: Vec<T>, b: Vec<T>)
    where
        I: Isa,
        T: Lane<I> + WrappingLaneMul + Default + PartialEq + Debug,
    {
        let got = store::<I, T>(unsafe {
            kernels::multiply::<I, T>(load::<I, T>(&a), load::<I, T>(&b))
        });
        let mut want = vec![T::default(); a.len()];
        scalar_vec_mul(&a, &b, &mut want);
        assert_eq!(got, want, "{} multiply<{}>", I::NAME, type_name::<T>());
    }

    fn check_multiply<I: Isa>() {
        check_mul_lane::<I, i8>(
            lanes::<I, i8>(|i| match i {
                0 => i8::MIN,
                1 => i8::MAX,
                _ => (i as i32 * 37 - 100) as i8,
            }),
            lanes::<I, i8>(|i| match i {
                0 => -1,
                1 => i8::MAX,
                _ => (i as i32 * 53 + 7) as i8,
            }),
        );
        check_mul_lane::<I, i16>(
            lanes::<I, i16>(|i| (i as i32 * 4099 - 30_000) as i16),
            lanes::<I, i16>(|i| (i as i32 * 731 + 300) as i16),
        );
        check_mul_lane::<I, i32>(
            lanes::<I, i32>(|i| match i {
                0 => i32::MIN,
                1 => i32::MAX,
                _ => (i as i32 - 7) * 123_457,
            }),
            lanes::<I, i32>(|i| match i {
                0 => -1,
                1 => 2,
                _ => (i as i32 + 3) * -98_765,
            }),
        );
        check_mul_lane::<I, f32>(
            lanes::<I, f32>(|i| i as f32 * 0.5 - 3.0),
            lanes::<I, f32>(|i| 1.25 - i as f32),
        );
        check_mul_lane::<I, f64>(
            lanes::<I, f64>(|i| i as f64 * 0.1 - 1.0),
            lanes::<I, f64>(|i| i as f64 + 0.5),
        );
    }

    #[test]
    fn multiply_all_isas() {
        for_each_isa!(check_multiply);
    }

    // ========================================================================
    // relu
    // ========================================================================

    fn check_relu_lane<I, T>(x: Vec<T>)
    where
        I: Isa,
        T: Lane<I> + PartialOrd + Default + PartialEq + Debug,
    {
        let got = store::<I, T>(unsafe { kernels::relu::<I, T>(load::<I, T>(&x)) });
        let want: Vec<T> = x.iter().map(|&v| relu(v)).collect();
        assert_eq!(got, want, "{} relu<{}>", I::NAME, type_name::<T>());
    }

    fn check_relu<I: Isa>() {
        check_relu_lane::<I, i8>(lanes::<I, i8>(|i| match i {
            0 => i8::MIN,
            1 => i8::MAX,
            _ => (i as i32 * 29 - 90) as i8,
        }));
        check_relu_lane::<I, i16>(lanes::<I, i16>(|i| (i as i32 * 3001 - 25_000) as i16));
        check_relu_lane::<I, i32>(lanes::<I, i32>(|i| match i {
            0 => i32::MIN,
            1 => i32::MAX,
            _ => i as i32 - 6,
        }));
        check_relu_lane::<I, f32>(lanes::<I, f32>(|i| i as f32 - 5.5));

        let x = lanes::<I, f32>(|i| (i as f32 - 3.0) * -0.75);
        let mut want = vec![0.0f32; x.len()];
        scalar_relu(&x, &mut want);
        assert_eq!(store::<I, f32>(unsafe { kernels::relu::<I, f32>(load::<I, f32>(&x)) }), want, "{} relu slice", I::NAME);
        check_relu_lane::<I, f64>(lanes::<I, f64>(|i| 1.0 - i as f64));
    }

    #[test]
    fn relu_all_isas() {
        for_each_isa!(check_relu);
    }

    // ========================================================================
    // quantize / unquantize
    // ========================================================================

    fn check_quantize<I: Isa>() {
        let mult = 2.0f32;
        // x * 2 lands exactly on .5 for odd i: exercises ties-to-even.
        let x = lanes::<I, f32>(|i| (i as f32 - 6.0) * 0.75);
        let got = store::<I, i32>(unsafe {
            kernels::quantize::<I>(load::<I, f32>(&x), I::set1_ps(mult))
        });
        let want: Vec<i32> = x.iter().map(|&v| quant::quantize(v, mult)).collect();
        assert_eq!(got, want, "{} quantize", I::NAME);

        let overflow = lanes::<I, f32>(|i| if i % 2 == 0 { 3.0e9 } else { f32::NAN });
        let got = store::<I, i32>(unsafe {
            kernels::quantize::<I>(load::<I, f32>(&overflow), I::set1_ps(1.0))
        });
        assert!(got.iter().all(|&v| v == quant::INTEGER_INDEFINITE), "{} quantize overflow", I::NAME);
    }

    fn check_quantize_roundtrip<I: Isa>() {
        let mult = 64.0f32;
        let x = lanes::<I, f32>(|i| (i as f32 * 13.0 - 100.0) / mult);
        let back = store::<I, f32>(unsafe {
            let q = kernels::quantize::<I>(load::<I, f32>(&x), I::set1_ps(mult));
            kernels::unquantize::<I>(q, I::set1_ps(1.0 / mult))
        });
        assert_close(&x, &back, &format!("{} quantize/unquantize", I::NAME), 1e-6);
    }

    fn check_unquantize<I: Isa>() {
        let acc = lanes::<I, i32>(|i| match i {
            0 => i32::MIN,
            1 => i32::MAX,
            _ => (i as i32 - 4) * 1_000_003,
        });
        let got = store::<I, f32>(unsafe {
            kernels::unquantize::<I>(load::<I, i32>(&acc), I::set1_ps(0.125))
        });
        let want: Vec<f32> = acc.iter().map(|&a| quant::unquantize(a, 0.125)).collect();
        assert_eq!(got, want, "{} unquantize", I::NAME);
    }

    #[test]
    fn quantize_all_isas() {
        for_each_isa!(check_quantize);
        for_each_isa!(check_quantize_roundtrip);
        for_each_isa!(check_unquantize);
    }

    // ========================================================================
    // add_bias / write
    // ========================================================================

    fn check_add_bias<I: Isa>() {
        let n = <f32 as Lane<I>>::LANES;
        let bias: Vec<f32> = (0..3 * n).map(|i| i as f32 * 10.0).collect();
        let x = lanes::<I, f32>(|i| i as f32);
        let got = store::<I, f32>(unsafe {
            kernels::add_bias::<I, f32>(load::<I, f32>(&x), bias.as_ptr(), n)
        });
        let want: Vec<f32> = x.iter().zip(&bias[n..2 * n]).map(|(a, b)| a + b).collect();
        assert_eq!(got, want, "{} add_bias<f32>", I::NAME);

        let m = <i8 as Lane<I>>::LANES;
        let bias8: Vec<i8> = (0..m + 1).map(|i| (i as i32 * 7) as i8).collect();
        let x8 = lanes::<I, i8>(|i| (120 - i as i32) as i8);
        let got = store::<I, i8>(unsafe {
            kernels::add_bias::<I, i8>(load::<I, i8>(&x8), bias8.as_ptr(), 1)
        });
        let want: Vec<i8> = x8.iter().zip(&bias8[1..]).map(|(a, b)| a.wrapping_add(*b)).collect();
        assert_eq!(got, want, "{} add_bias<i8>", I::NAME);
    }

    fn check_write<I: Isa>() {
        let n = <f64 as Lane<I>>::LANES;
        let mut out = vec![-1.0f64; 3 * n];
        let v = lanes::<I, f64>(|i| i as f64 + 0.5);
        unsafe { kernels::write::<I, f64>(load::<I, f64>(&v), out.as_mut_ptr(), n + 1) };
        assert!(out[..n + 1].iter().all(|&x| x == -1.0), "{} write: prefix touched", I::NAME);
        assert_eq!(&out[n + 1..2 * n + 1], &v[..], "{} write", I::NAME);
        assert!(out[2 * n + 1..].iter().all(|&x| x == -1.0), "{} write: suffix touched", I::NAME);
    }

    #[test]
    fn bias_and_write_all_isas() {
        for_each_isa!(check_add_bias);
        for_each_isa!(check_write);
    }

    // ========================================================================
    // exp / sigmoid / tanh (gather ISAs only)
    // ========================================================================

    fn transcendental_inputs<I: Isa>() -> Vec<f32> {
        lanes::<I, f32>(|i| (i as f32 - 7.3) * 2.9)
    }

    fn check_exp<I: Gather>() {
        let x = transcendental_inputs::<I>();
        let want: Vec<f32> = x.iter().map(|&v| exp_approx_taylor(v)).collect();
        assert_eq!(map_f32::<I>(&x, kernels::exp_approx_taylor::<I>), want, "{} exp", I::NAME);

        let edges = lanes::<I, f32>(|i| [0.0, 20.0, -20.0, 1000.0, -1000.0, 3.0, -3.0, 0.5][i % 8]);
        let got = map_f32::<I>(&edges, kernels::exp_approx_taylor::<I>);
        for (i, (&x, &y)) in edges.iter().zip(&got).enumerate() {
            let expected = match x {
                v if v == 0.0 => 1.0,
                v if v >= 20.0 => EXP_LOOKUP[40],
                v if v <= -20.0 => EXP_LOOKUP[0],
                v => exp_approx_taylor(v),
            };
            assert_eq!(y, expected, "{} exp edge lane {i}: x={x}", I::NAME);
        }
    }

    fn check_sigmoid<I: Gather>() {
        let x = transcendental_inputs::<I>();
        let got = map_f32::<I>(&x, kernels::sigmoid::<I>);
        let want: Vec<f32> = x.iter().map(|&v| sigmoid(v)).collect();
        assert_close(&want, &got, &format!("{} sigmoid", I::NAME), 1e-3);

        let edges = lanes::<I, f32>(|i| [0.0, 50.0, -50.0][i % 3]);
        let got = map_f32::<I>(&edges, kernels::sigmoid::<I>);
        for (&x, &y) in edges.iter().zip(&got) {
            let target = if x == 0.0 { 0.5 } else if x > 0.0 { 1.0 } else { 0.0 };
            assert!((y - target).abs() < 1e-3, "{} sigmoid({x}) = {y}", I::NAME);
        }
    }

    fn check_tanh<I: Gather>() {
        let x = transcendental_inputs::<I>();
        let got = map_f32::<I>(&x, kernels::tanh::<I>);
        let want: Vec<f32> = x.iter().map(|&v| tanh_taylor(v)).collect();
        assert_eq!(got, want, "{} tanh", I::NAME);

        let exact: Vec<f32> = x.iter().map(|v| v.tanh()).collect();
        assert_close(&exact, &got, &format!("{} tanh vs std", I::NAME), 1e-4);

        let neg: Vec<f32> = x.iter().map(|v| -v).collect();
        let got_neg = map_f32::<I>(&neg, kernels::tanh::<I>);
        for (a, b) in got.iter().zip(&got_neg) {
            assert_eq!(*a, -*b, "{} tanh is odd", I::NAME);
        }
        let zero = vec![0.0f32; <f32 as Lane<I>>::LANES];
        assert!(map_f32::<I>(&zero, kernels::tanh::<I>).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn transcendentals_gather_isas() {
        for_each_gather_isa!(check_exp);
        for_each_gather_isa!(check_sigmoid);
        for_each_gather_isa!(check_tanh);
    }
}
