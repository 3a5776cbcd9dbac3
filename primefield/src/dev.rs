//! Macros for testing and benchmarking [`MontyFieldElement`](crate::MontyFieldElement)
//! instantiations from the crates which define them.
//!
//! The benchmark macro expects `criterion` to be available to the calling crate.

/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_square(&mut group);
            bench_invert(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a field.
#[macro_export]
macro_rules! test_field {
    ($fe:tt) => {
        $crate::test_field_constants!($fe);
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
    };
}

/// Implement tests for the Montgomery constants derived from the modulus.
#[macro_export]
macro_rules! test_field_constants {
    ($fe:tt) => {
        #[test]
        fn one_round_trips_through_montgomery_form() {
            assert_eq!($fe::ONE.retrieve(), $crate::Uint::ONE);
            assert_eq!($fe::from_u64(1), $fe::ONE);
        }

        #[test]
        fn modulus_minus_one_is_minus_one() {
            let one = $crate::Uint::ONE;
            let max = $fe::ZERO.sub(&$fe::ONE).retrieve();
            let (sum, carry) = max.adc(&one, $crate::Limb::ZERO);
            assert_eq!(carry, $crate::Limb::ZERO);
            assert_eq!($fe::from_uint(&sum).is_none().unwrap_u8(), 1);
            assert_eq!($fe::from_uint(&max).unwrap() + $fe::ONE, $fe::ZERO);
        }

        #[test]
        fn bytes_round_trip() {
            use $crate::ff::PrimeField;

            let x = $fe::from_u64(0x0123_4567_89ab_cdef).square();
            let mut bytes = [0u8; 128];
            let bytes = &mut bytes[..$fe::BYTES];
            x.write_be_bytes(bytes);
            assert_eq!($fe::from_be_slice(bytes).unwrap(), x);

            let repr = x.to_repr();
            assert_eq!(AsRef::<[u8]>::as_ref(&repr), &bytes[..]);
            assert_eq!($fe::from_repr(repr).unwrap(), x);
        }

        #[test]
        fn multiplicative_generator_constant() {
            use $crate::ff::PrimeField;

            // a generator of the multiplicative group is a quadratic non-residue
            let g = <$fe as PrimeField>::MULTIPLICATIVE_GENERATOR;
            assert!(bool::from(g.sqrt().is_none()));
        }

        #[test]
        fn root_of_unity_constant() {
            use $crate::ff::PrimeField;

            // ROOT_OF_UNITY has order exactly 2^S
            let s = <$fe as PrimeField>::S as usize;
            let root = <$fe as PrimeField>::ROOT_OF_UNITY;
            assert_eq!(root.sqn_vartime(s - 1), -$fe::ONE);
            assert_eq!(root.sqn_vartime(s), $fe::ONE);
            assert_eq!(root * <$fe as PrimeField>::ROOT_OF_UNITY_INV, $fe::ONE);
        }

        #[test]
        fn delta_and_two_inv_constants() {
            use $crate::ff::PrimeField;

            let g = <$fe as PrimeField>::MULTIPLICATIVE_GENERATOR;
            let s = <$fe as PrimeField>::S as usize;
            assert_eq!(<$fe as PrimeField>::DELTA, g.sqn_vartime(s));
            assert_eq!($fe::from_u64(2) * <$fe as PrimeField>::TWO_INV, $fe::ONE);
        }
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
        }

        #[test]
        fn square_matches_multiply() {
            let x = $fe::from_u64(0xdead_beef_cafe_babe);
            let y = x.multiply(&x).add(&$fe::ONE);
            assert_eq!(y.square(), y.multiply(&y));
            assert_eq!(y.double(), y + y);
            assert_eq!(y - y, $fe::ZERO);
            assert_eq!(-y + y, $fe::ZERO);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = fe.sqrt().unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }

        #[test]
        fn sqrt_of_square_is_a_root() {
            let x = $fe::from_u64(0xdead_beef_cafe_babe).square() + $fe::ONE;
            let sq = x.square();
            let root = sq.sqrt().unwrap();
            assert!(root == x || root == -x);
        }

        #[test]
        fn sqrt_of_non_residue_fails() {
            use $crate::ff::PrimeField;

            // a non-residue times a square is a non-residue
            let g = <$fe as PrimeField>::MULTIPLICATIVE_GENERATOR;
            assert!(bool::from((g * $fe::from_u64(9)).sqrt().is_none()));
        }
    };
}
