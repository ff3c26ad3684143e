// Pick a field backend explicitly, compute a pairing and move the result
// through its 576-byte encoding.
// Set BLS12381_BACKEND=portable to see the environment override.

use bls12381_algorithms::ec::bls12_381::{
    backend::{self, BackendConfig, CpuFeatures},
    pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt,
};
use bls12381_algorithms::Result;
use num_bigint::BigUint;

fn main() -> Result<()> {
    let features = CpuFeatures::detect();
    println!("adx={} bmi2={}", features.adx(), features.bmi2());

    let config = BackendConfig::from_env()?;
    let backend = backend::init(&config)?;
    println!("field backend: {}", backend.name());

    let a = BigUint::from(0xa11ce_u32);
    let b = BigUint::from(0xb0b_u32);
    let p = G1Affine::from(G1Projective::generator() * &a);
    let q = G2Affine::from(G2Projective::generator() * &b);

    let e = pairing(&p, &q);
    assert_eq!(e, Gt::generator().exp(&(&a * &b)));

    let bytes = e.to_bytes();
    let decoded = Gt::from_bytes(&bytes)?;
    assert_eq!(decoded, e);
    println!("e([a]G1, [b]G2) = {}...", hex::encode(&bytes[..16]));

    Ok(())
}
