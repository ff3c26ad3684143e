//! Environment override of the backend; one test per process since the
//! selection is process-wide.

use bls12381::prelude::*;
use bls12381_tests::{g1_mul, g2_mul};

#[test]
fn environment_forces_portable_backend() {
    std::env::set_var(BackendConfig::BACKEND_ENV, "portable");
    std::env::remove_var(BackendConfig::DISABLE_ADX_ENV);

    assert_eq!(backend::selected(), None);
    assert_eq!(backend::active().kind(), BackendKind::Portable);
    assert_eq!(backend::selected(), Some(BackendKind::Portable));

    // Results do not depend on the backend
    let baseline = Backend::for_kind(BackendKind::Baseline, CpuFeatures::none()).unwrap();
    let a = -Fp::one();
    let b = Fp::one() + Fp::one();
    assert_eq!(a * b, baseline.mul(&a, &b));

    let x = BigUint::from(7u32);
    let y = BigUint::from(11u32);
    assert_eq!(pairing(&g1_mul(&x), &g2_mul(&y)), Gt::generator().exp(&(&x * &y)));
}
