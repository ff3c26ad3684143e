//! BLS12-381 curve parameters

/// Size of a base-field element encoding in bytes
pub const FP_BYTES: usize = 48;

/// Size of an Fp2 element encoding in bytes
pub const FP2_BYTES: usize = 2 * FP_BYTES;

/// Size of an Fp6 element encoding in bytes
pub const FP6_BYTES: usize = 3 * FP2_BYTES;

/// Size of a target-group (Fp12) element encoding in bytes
pub const GT_BYTES: usize = 2 * FP6_BYTES;

/// Size of a compressed G1 point in bytes
pub const G1_COMPRESSED_BYTES: usize = FP_BYTES;

/// Size of an uncompressed G1 point in bytes
pub const G1_UNCOMPRESSED_BYTES: usize = 2 * FP_BYTES;

/// Size of a compressed G2 point in bytes
pub const G2_COMPRESSED_BYTES: usize = FP2_BYTES;

/// Size of an uncompressed G2 point in bytes
pub const G2_UNCOMPRESSED_BYTES: usize = 2 * FP2_BYTES;

/// Size of a big-endian scalar for the constant-time ladders
pub const SCALAR_BYTES: usize = 32;

/// Absolute value of the curve parameter x = -0xd201000000010000
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// Sign of the curve parameter x
pub const BLS_X_IS_NEGATIVE: bool = true;

/// Base-field modulus p, big-endian hex
pub const MODULUS_HEX: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// Base-field modulus p, little-endian limbs
pub const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Prime order r of G1, G2 and GT, big-endian hex
pub const GROUP_ORDER_HEX: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// Prime order r of G1, G2 and GT, little-endian limbs
pub const GROUP_ORDER: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];
