//! An unparsable environment value falls back to automatic selection

use bls12381::prelude::*;

#[test]
fn invalid_environment_falls_back() {
    std::env::set_var(BackendConfig::BACKEND_ENV, "quantum");

    assert!(matches!(
        BackendConfig::from_env(),
        Err(Error::InvalidConfig { .. })
    ));

    let expected = Backend::select(&BackendConfig::new(), CpuFeatures::detect())
        .unwrap()
        .kind();
    assert_eq!(backend::active().kind(), expected);
    assert!(Fp::one().square() == Fp::one());
}
