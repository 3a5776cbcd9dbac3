//! Development-related functionality.

/// Implement projective arithmetic tests.
///
/// `$add_vectors` holds the affine coordinates of `[k] G` for `k = 1, 2, ...`, and
/// `$mul_vectors` holds `(k, x, y)` triples for arbitrary scalars, all as big-endian byte arrays.
#[macro_export]
macro_rules! impl_projective_arithmetic_tests {
    (
        $affine:tt,
        $projective:tt,
        $scalar:ty,
        $add_vectors:expr,
        $mul_vectors:expr
    ) => {
        /// Assert that the provided projective point matches the given test vector.
        macro_rules! assert_point_eq {
            ($actual:expr, $expected:expr) => {
                let (expected_x, expected_y) = $expected;
                let point = $actual.to_affine();
                assert!(!bool::from(point.is_identity()));

                let mut actual_x = expected_x;
                let mut actual_y = expected_y;
                point.x().write_be_bytes(&mut actual_x);
                point.y().write_be_bytes(&mut actual_y);

                assert_eq!(expected_x, actual_x);
                assert_eq!(expected_y, actual_y);
            };
        }

        #[test]
        fn affine_to_projective() {
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!($projective::from(basepoint_affine), basepoint_projective);
            assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
            assert!(!bool::from(basepoint_projective.to_affine().is_identity()));

            assert!(bool::from($projective::IDENTITY.to_affine().is_identity()));
        }

        #[test]
        fn projective_identity_addition() {
            let identity = $projective::IDENTITY;
            let generator = $projective::GENERATOR;

            assert_eq!(identity + &generator, generator);
            assert_eq!(generator + &identity, generator);
            assert!(bool::from((identity + &identity).is_identity()));
        }

        #[test]
        fn projective_mixed_addition() {
            let identity = $projective::IDENTITY;
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!(identity + &basepoint_affine, basepoint_projective);
            assert_eq!(
                basepoint_projective + &basepoint_affine,
                basepoint_projective + &basepoint_projective
            );
        }

        #[test]
        fn projective_add_inverse_is_identity() {
            let generator = $projective::GENERATOR;
            assert!(bool::from((generator + &generator.neg()).is_identity()));
            assert!(bool::from((generator - &generator).is_identity()));
        }

        #[test]
        fn test_vector_repeated_add() {
            let generator = $projective::GENERATOR;
            let mut p = generator;

            for i in 0..$add_vectors.len() {
                assert_point_eq!(p, $add_vectors[i]);
                p += &generator;
            }
        }

        #[test]
        fn test_vector_repeated_add_mixed() {
            let generator = $affine::GENERATOR;
            let mut p = $projective::GENERATOR;

            for i in 0..$add_vectors.len() {
                assert_point_eq!(p, $add_vectors[i]);
                p += &generator;
            }
        }

        #[test]
        fn test_vector_add_mixed_identity() {
            let generator = $projective::GENERATOR;
            let p0 = generator + $projective::IDENTITY;
            let p1 = generator + $affine::IDENTITY;
            assert_eq!(p0, p1);
        }

        #[test]
        fn test_vector_double_generator() {
            let generator = $projective::GENERATOR;
            let mut p = generator;

            for i in [0, 1, 3, 7] {
                if i >= $add_vectors.len() {
                    break;
                }
                assert_point_eq!(p, $add_vectors[i]);
                p = p.double();
            }
        }

        #[test]
        fn projective_add_vs_double() {
            let generator = $projective::GENERATOR;
            assert_eq!(generator + &generator, generator.double());

            let p = generator.double() + &generator;
            assert_eq!(p + &p, p.double());
        }

        #[test]
        fn projective_add_and_sub() {
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!(
                (basepoint_projective + &basepoint_projective) - &basepoint_projective,
                basepoint_projective
            );
            assert_eq!(
                (basepoint_projective + &basepoint_affine) - &basepoint_affine,
                basepoint_projective
            );
        }

        #[test]
        fn projective_double_and_sub() {
            let generator = $projective::GENERATOR;
            assert_eq!(generator.double() - &generator, generator);
        }

        #[test]
        fn test_vector_scalar_mult() {
            let generator = $projective::GENERATOR;

            for (k, coords) in $add_vectors
                .iter()
                .enumerate()
                .map(|(k, coords)| (<$scalar>::from(k as u64 + 1), *coords))
                .chain($mul_vectors.iter().cloned().map(|(k, x, y)| {
                    (<$scalar>::from_be_slice(&k).unwrap(), (x, y))
                }))
            {
                assert_point_eq!(generator * &k, coords);
                assert_point_eq!($projective::mul_by_generator(&k), coords);
            }
        }

        #[test]
        fn scalar_mult_edge_cases() {
            let generator = $projective::GENERATOR;

            assert!(bool::from((generator * &<$scalar>::ZERO).is_identity()));
            assert!(bool::from(
                $projective::mul_by_generator(&<$scalar>::ZERO).is_identity()
            ));
            assert_eq!(generator * &<$scalar>::ONE, generator);
            assert_eq!(generator * &-<$scalar>::ONE, generator.neg());
            assert_eq!($projective::mul_by_generator(&-<$scalar>::ONE), generator.neg());
            assert!(bool::from(($projective::IDENTITY * &<$scalar>::from(5u64)).is_identity()));
        }

        #[test]
        fn group_and_curve_traits() {
            fn check<G>(generator_affine: G::AffineRepr)
            where
                G: $crate::group::Curve,
                G::AffineRepr: Copy + PartialEq + core::fmt::Debug,
            {
                use $crate::group::Group;

                let g = G::generator();
                assert!(bool::from(G::identity().is_identity()));
                assert_eq!(g.double(), g + g);
                assert_eq!([g, g, g].iter().sum::<G>(), g * G::Scalar::from(3u64));
                assert_eq!(g.to_affine(), generator_affine);

                let mut acc = g;
                acc -= g;
                assert!(bool::from(acc.is_identity()));
                acc += generator_affine;
                assert_eq!(acc, g);
                acc -= generator_affine;
                assert!(bool::from(acc.is_identity()));
            }

            check::<$projective>($affine::GENERATOR);
        }

        #[test]
        fn mul_by_generator_and_mul_add() {
            let generator = $projective::GENERATOR;
            let point = generator * &<$scalar>::from(7u64);
            let k1 = <$scalar>::from(3u64);
            let k2 = <$scalar>::from(5u64);

            assert_eq!(
                point.mul_by_generator_and_mul_add(&k1, &k2),
                generator * &<$scalar>::from(38u64)
            );
            assert_eq!(
                point.mul_by_generator_and_mul_add(&<$scalar>::ZERO, &<$scalar>::ZERO),
                $projective::IDENTITY
            );
        }
    };
}
