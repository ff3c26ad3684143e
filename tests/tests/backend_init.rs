//! Explicit initialization is first-writer-wins

use bls12381::prelude::*;

#[test]
fn explicit_init_fixes_the_backend() {
    let config = BackendConfig::new().force(BackendKind::Baseline);
    let chosen = backend::init(&config).unwrap();
    assert_eq!(chosen.kind(), BackendKind::Baseline);
    assert_eq!(backend::active().kind(), BackendKind::Baseline);

    // Same request again succeeds
    assert!(backend::init(&config).is_ok());

    let conflict = backend::init(&BackendConfig::new().force(BackendKind::Portable));
    assert_eq!(
        conflict,
        Err(Error::BackendConflict {
            selected: "baseline",
            requested: "portable",
        })
    );

    // Forcing a backend the CPU lacks is reported before any conflict check
    let features = CpuFeatures::detect();
    if !features.supports_adx() {
        assert_eq!(
            backend::init(&BackendConfig::new().force(BackendKind::Adx)),
            Err(Error::BackendUnavailable { backend: "adx" })
        );
    }

    assert_eq!(backend::active().kind(), BackendKind::Baseline);
}
