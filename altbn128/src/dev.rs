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

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_divide<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("divide", |b| b.iter(|| x.divide(&y)));
        }

        fn bench_power<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let e = core::hint::black_box(0x9e37_79b9_7f4a_7c15u64);
            group.bench_function("power", |b| b.iter(|| x.power(e)));
        }

        fn bench_to_bytes<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("to_bytes", |b| b.iter(|| x.to_bytes()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            use $crate::ff::Field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| Field::sqrt(&x)));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_divide(&mut group);
            bench_power(&mut group);
            bench_to_bytes(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement tests of the [`FieldElement`](crate::FieldElement) contract for a type.
///
/// Only items of the contract are used, so the same checks apply to any field built on it.
#[macro_export]
macro_rules! test_field_element {
    ($fe:ty) => {
        fn contract_samples() -> [$fe; 4] {
            use $crate::FieldElement;
            let one = <$fe as FieldElement>::one();
            [
                FieldElement::multiply_scalar(&one, 5),
                FieldElement::multiply_scalar(&one, -7),
                FieldElement::multiply_scalar(&one, 123_456_789),
                FieldElement::power(&FieldElement::multiply_scalar(&one, 3), 200),
            ]
        }

        #[test]
        fn contract_additive_identity() {
            use $crate::FieldElement;
            let zero = <$fe as FieldElement>::zero();
            assert!(bool::from(FieldElement::is_zero(&zero)));
            for a in contract_samples() {
                assert_eq!(FieldElement::add(&a, &zero), a);
                assert_eq!(FieldElement::add(&zero, &a), a);
                assert!(!bool::from(FieldElement::is_zero(&a)));
            }
        }

        #[test]
        fn contract_multiplicative_identity() {
            use $crate::FieldElement;
            let one = <$fe as FieldElement>::one();
            for a in contract_samples() {
                assert_eq!(FieldElement::multiply(&a, &one), a);
                assert_eq!(FieldElement::multiply(&one, &a), a);
            }
        }

        #[test]
        fn contract_additive_inverse() {
            use $crate::FieldElement;
            let zero = <$fe as FieldElement>::zero();
            for a in contract_samples() {
                assert_eq!(FieldElement::add(&a, &FieldElement::negate(&a)), zero);
                assert_eq!(FieldElement::subtract(&a, &a), zero);
            }
            assert_eq!(FieldElement::negate(&zero), zero);
        }

        #[test]
        fn contract_subtract_undoes_add() {
            use $crate::FieldElement;
            let s = contract_samples();
            for a in s {
                for b in s {
                    assert_eq!(FieldElement::subtract(&FieldElement::add(&a, &b), &b), a);
                }
            }
        }

        #[test]
        fn contract_self_division() {
            use $crate::FieldElement;
            let one = <$fe as FieldElement>::one();
            for a in contract_samples() {
                assert_eq!(FieldElement::divide(&a, &a), Ok(one));
            }
        }

        #[test]
        fn contract_division_by_zero() {
            use $crate::FieldElement;
            let zero = <$fe as FieldElement>::zero();
            assert_eq!(
                FieldElement::divide(&zero, &zero),
                Err($crate::Error::DivisionByZero)
            );
            for a in contract_samples() {
                assert_eq!(
                    FieldElement::divide(&a, &zero),
                    Err($crate::Error::DivisionByZero)
                );
                assert_eq!(FieldElement::divide(&zero, &a), Ok(zero));
            }
        }

        #[test]
        fn contract_commutativity_and_associativity() {
            use $crate::FieldElement;
            let s = contract_samples();
            for a in s {
                for b in s {
                    assert_eq!(FieldElement::add(&a, &b), FieldElement::add(&b, &a));
                    assert_eq!(FieldElement::multiply(&a, &b), FieldElement::multiply(&b, &a));
                    for c in s {
                        assert_eq!(
                            FieldElement::add(&FieldElement::add(&a, &b), &c),
                            FieldElement::add(&a, &FieldElement::add(&b, &c))
                        );
                        assert_eq!(
                            FieldElement::multiply(&FieldElement::multiply(&a, &b), &c),
                            FieldElement::multiply(&a, &FieldElement::multiply(&b, &c))
                        );
                        assert_eq!(
                            FieldElement::multiply(&a, &FieldElement::add(&b, &c)),
                            FieldElement::add(
                                &FieldElement::multiply(&a, &b),
                                &FieldElement::multiply(&a, &c)
                            )
                        );
                    }
                }
            }
        }

        #[test]
        fn contract_multiply_scalar() {
            use $crate::FieldElement;
            let zero = <$fe as FieldElement>::zero();
            for a in contract_samples() {
                let tripled = FieldElement::add(&FieldElement::add(&a, &a), &a);
                assert_eq!(FieldElement::multiply_scalar(&a, 3), tripled);
                assert_eq!(FieldElement::multiply_scalar(&a, -1), FieldElement::negate(&a));
                assert_eq!(FieldElement::multiply_scalar(&a, 0), zero);
            }
        }

        #[test]
        fn contract_power_consistency() {
            use $crate::FieldElement;
            let one = <$fe as FieldElement>::one();
            for a in contract_samples() {
                assert_eq!(FieldElement::power(&a, 0), one);
                assert_eq!(FieldElement::power(&a, 1), a);
                assert_eq!(FieldElement::power(&a, 2), FieldElement::multiply(&a, &a));

                let mut expected = one;
                for n in 1..40u64 {
                    expected = FieldElement::multiply(&expected, &a);
                    assert_eq!(FieldElement::power(&a, n), expected);
                    assert_eq!(
                        FieldElement::power(&a, n),
                        FieldElement::multiply(&FieldElement::power(&a, n - 1), &a)
                    );
                    assert_eq!(
                        FieldElement::power_uint(&a, &$crate::bigint::U512::from_u64(n)),
                        expected
                    );
                }
            }
        }

        #[test]
        fn contract_serialization() {
            use $crate::FieldElement;
            let zero = <$fe as FieldElement>::zero();
            assert!(FieldElement::to_bytes(&zero).as_ref().is_empty());
            for a in contract_samples() {
                let bytes = FieldElement::to_bytes(&a);
                assert!(!bytes.as_ref().is_empty());
                assert_ne!(bytes.as_ref()[0], 0);
            }
        }

        #[test]
        fn contract_validity() {
            use $crate::FieldElement;
            assert!(bool::from(FieldElement::is_valid(&<$fe as FieldElement>::zero())));
            assert!(bool::from(FieldElement::is_valid(&<$fe as FieldElement>::one())));
            for a in contract_samples() {
                assert!(bool::from(FieldElement::is_valid(&a)));
            }
        }
    };
}

/// Implement tests for constants defined by the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield_constants {
    ($fe:tt) => {
        use $crate::ff::PrimeField as _;

        /// `(modulus - 1) >> shift`
        fn modulus_minus_one_shr(shift: u32) -> $crate::bigint::U256 {
            $crate::bigint::U256::from_be_hex($fe::MODULUS)
                .wrapping_sub(&$crate::bigint::U256::ONE)
                .wrapping_shr(shift)
        }

        #[test]
        fn num_bits_constant() {
            let modulus = $crate::bigint::U256::from_be_hex($fe::MODULUS);
            assert_eq!($fe::NUM_BITS, modulus.bits() as u32);
            assert_eq!($fe::CAPACITY, $fe::NUM_BITS - 1);
        }

        #[test]
        fn delta_constant() {
            // DELTA^{t} mod m == 1
            let t = modulus_minus_one_shr($fe::S);
            assert_eq!($fe::DELTA.pow_vartime(&t), $fe::ONE);
        }

        #[test]
        fn multiplicative_generator_constant() {
            // Euler's criterion: the generator is a quadratic non-residue
            let half = modulus_minus_one_shr(1);
            assert_eq!($fe::MULTIPLICATIVE_GENERATOR.pow_vartime(&half), -$fe::ONE);
        }

        #[test]
        fn root_of_unity_constant() {
            // ROOT_OF_UNITY^{2^s} mod m == 1
            let two_s = $crate::bigint::U64::from_u64(1u64 << $fe::S);
            assert_eq!($fe::ROOT_OF_UNITY.pow_vartime(&two_s), $fe::ONE);

            // MULTIPLICATIVE_GENERATOR^{t} mod m == ROOT_OF_UNITY
            let t = modulus_minus_one_shr($fe::S);
            assert_eq!(
                $fe::MULTIPLICATIVE_GENERATOR.pow_vartime(&t),
                $fe::ROOT_OF_UNITY
            );
        }

        #[test]
        fn root_of_unity_inv_constant() {
            assert_eq!($fe::ROOT_OF_UNITY * $fe::ROOT_OF_UNITY_INV, $fe::ONE);
        }

        #[test]
        fn two_inv_constant() {
            assert_eq!($fe::from(2u32) * $fe::TWO_INV, $fe::ONE);
        }
    };
}
