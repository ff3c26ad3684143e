//! Base-field multiplication backends
//!
//! Three implementations of Montgomery multiplication share one contract:
//! reduced operands in, reduced product out, bit-identical results. One of
//! them is fixed for the whole process the first time field arithmetic runs
//! (or when [`init`] is called explicitly) and never changes afterwards.

use core::fmt;

use portable_atomic::{AtomicU8, Ordering};

use bls12381_internal::sbb;

use super::field::fp::Fp;
use crate::error::{Error, Result};

#[cfg(target_arch = "x86_64")]
mod adx;
mod baseline;
mod config;
mod portable;

pub use config::{BackendConfig, BackendKind};

pub(crate) use portable::montgomery_reduce;

/// Field modulus p, little-endian limbs
pub(crate) const MODULUS: [u64; 6] = bls12381_params::MODULUS;

/// INV = -(p^{-1} mod 2^64) mod 2^64
pub(crate) const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Subtracts p once if `a >= p`; `a` must be below 2p
#[inline]
pub(crate) const fn subtract_p(a: &[u64; 6]) -> [u64; 6] {
    let (r0, borrow) = sbb(a[0], MODULUS[0], 0);
    let (r1, borrow) = sbb(a[1], MODULUS[1], borrow);
    let (r2, borrow) = sbb(a[2], MODULUS[2], borrow);
    let (r3, borrow) = sbb(a[3], MODULUS[3], borrow);
    let (r4, borrow) = sbb(a[4], MODULUS[4], borrow);
    let (r5, borrow) = sbb(a[5], MODULUS[5], borrow);

    // borrow is all ones exactly when a < p
    [
        (a[0] & borrow) | (r0 & !borrow),
        (a[1] & borrow) | (r1 & !borrow),
        (a[2] & borrow) | (r2 & !borrow),
        (a[3] & borrow) | (r3 & !borrow),
        (a[4] & borrow) | (r4 & !borrow),
        (a[5] & borrow) | (r5 & !borrow),
    ]
}

// ============================================================================
// CPU features
// ============================================================================

/// CPU capabilities that decide whether the ADX backend may run
///
/// Outside this crate a value can only come from [`CpuFeatures::detect`] or
/// [`CpuFeatures::none`]. Even so, [`Backend::for_kind`] hands out the ADX
/// backend only when detection on the running CPU agrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuFeatures {
    adx: bool,
    bmi2: bool,
}

impl CpuFeatures {
    /// Features of the running CPU
    ///
    /// With `std` this queries CPUID at runtime; without it only the features
    /// enabled at compile time are reported.
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "std"))]
        {
            CpuFeatures {
                adx: std::is_x86_feature_detected!("adx"),
                bmi2: std::is_x86_feature_detected!("bmi2"),
            }
        }
        #[cfg(all(target_arch = "x86_64", not(feature = "std")))]
        {
            CpuFeatures {
                adx: cfg!(target_feature = "adx"),
                bmi2: cfg!(target_feature = "bmi2"),
            }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            CpuFeatures::none()
        }
    }

    /// No optional features at all
    pub const fn none() -> Self {
        CpuFeatures {
            adx: false,
            bmi2: false,
        }
    }

    /// Hypothetical feature set for exercising the selection rules
    #[cfg(test)]
    pub(crate) const fn new(adx: bool, bmi2: bool) -> Self {
        CpuFeatures { adx, bmi2 }
    }

    /// ADCX/ADOX
    pub const fn adx(&self) -> bool {
        self.adx
    }

    /// MULX
    pub const fn bmi2(&self) -> bool {
        self.bmi2
    }

    /// Both ADX and BMI2 are present
    pub const fn supports_adx(&self) -> bool {
        self.adx && self.bmi2
    }
}

// ============================================================================
// Backends
// ============================================================================

type MulFn = fn(&[u64; 6], &[u64; 6]) -> [u64; 6];
type SquareFn = fn(&[u64; 6]) -> [u64; 6];

/// One implementation of base-field multiplication and squaring
pub struct Backend {
    kind: BackendKind,
    mul_fn: MulFn,
    square_fn: SquareFn,
}

static PORTABLE: Backend = Backend {
    kind: BackendKind::Portable,
    mul_fn: portable::mul,
    square_fn: portable::square,
};

static BASELINE: Backend = Backend {
    kind: BackendKind::Baseline,
    mul_fn: baseline::mul,
    square_fn: baseline::square,
};

#[cfg(target_arch = "x86_64")]
static ADX: Backend = Backend {
    kind: BackendKind::Adx,
    mul_fn: adx::mul,
    square_fn: adx::square,
};

impl Backend {
    /// Which implementation this is
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Lower-case backend name
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// `a * b` computed by this backend
    #[inline]
    pub fn mul(&self, a: &Fp, b: &Fp) -> Fp {
        Fp((self.mul_fn)(&a.0, &b.0))
    }

    /// `a^2` computed by this backend
    #[inline]
    pub fn square(&self, a: &Fp) -> Fp {
        Fp((self.square_fn)(&a.0))
    }

    /// The backend of the given kind, if it can run on a CPU with `features`
    ///
    /// ADX additionally requires [`CpuFeatures::detect`] to report it on the
    /// running CPU, whatever `features` claims.
    pub fn for_kind(kind: BackendKind, features: CpuFeatures) -> Option<&'static Backend> {
        match kind {
            BackendKind::Adx if features.supports_adx() => adx_backend(),
            BackendKind::Adx => None,
            BackendKind::Baseline => Some(&BASELINE),
            BackendKind::Portable => Some(&PORTABLE),
        }
    }

    /// Every backend that can run on a CPU with `features`
    pub fn available(features: CpuFeatures) -> impl Iterator<Item = &'static Backend> {
        BackendKind::ALL
            .into_iter()
            .filter_map(move |kind| Backend::for_kind(kind, features))
    }

    /// Applies `config` to the detected `features`
    ///
    /// A forced backend must be runnable. Otherwise ADX wins when both of its
    /// features are present and it is not disabled, and baseline is used
    /// everywhere else.
    pub fn select(config: &BackendConfig, features: CpuFeatures) -> Result<&'static Backend> {
        match config.forced() {
            Some(BackendKind::Adx) if config.adx_disabled() => Err(Error::InvalidConfig {
                name: BackendConfig::BACKEND_ENV,
                expected: "a backend other than adx while adx is disabled",
            }),
            Some(kind) => Backend::for_kind(kind, features).ok_or(Error::BackendUnavailable {
                backend: kind.name(),
            }),
            None => Ok(Backend::automatic(features, config.adx_disabled())),
        }
    }

    fn automatic(features: CpuFeatures, adx_disabled: bool) -> &'static Backend {
        if !adx_disabled {
            if let Some(backend) = Backend::for_kind(BackendKind::Adx, features) {
                return backend;
            }
        }
        &BASELINE
    }

    // SELECTED only ever holds the tag of a backend returned by `for_kind`,
    // so the ADX tag implies detection already succeeded.
    fn installed(kind: BackendKind) -> &'static Backend {
        match kind {
            #[cfg(target_arch = "x86_64")]
            BackendKind::Adx => &ADX,
            #[cfg(not(target_arch = "x86_64"))]
            BackendKind::Adx => &BASELINE,
            BackendKind::Baseline => &BASELINE,
            BackendKind::Portable => &PORTABLE,
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend").field("kind", &self.kind).finish()
    }
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Backend {}

#[cfg(target_arch = "x86_64")]
fn adx_backend() -> Option<&'static Backend> {
    // adx::mul is compiled with `target_feature(enable = "adx,bmi2")`
    if CpuFeatures::detect().supports_adx() {
        Some(&ADX)
    } else {
        None
    }
}

#[cfg(not(target_arch = "x86_64"))]
fn adx_backend() -> Option<&'static Backend> {
    None
}

// ============================================================================
// Process-wide selection
// ============================================================================

const UNSELECTED: u8 = 0;

static SELECTED: AtomicU8 = AtomicU8::new(UNSELECTED);

/// Fixes the process-wide backend according to `config`
///
/// The first successful call wins. Later calls that resolve to the same
/// backend succeed; calls that resolve to a different one fail with
/// [`Error::BackendConflict`] and leave the selection untouched.
pub fn init(config: &BackendConfig) -> Result<&'static Backend> {
    let features = CpuFeatures::detect();
    log::debug!(
        "bls12-381 cpu features: adx={} bmi2={}",
        features.adx(),
        features.bmi2()
    );
    let backend = Backend::select(config, features)?;
    install(backend)
}

/// The backend fixed for this process, if one was selected yet
pub fn selected() -> Option<BackendKind> {
    BackendKind::from_tag(SELECTED.load(Ordering::Acquire))
}

/// The process-wide backend, selecting it on first use
#[inline]
pub fn active() -> &'static Backend {
    match selected() {
        Some(kind) => Backend::installed(kind),
        None => init_default(),
    }
}

fn install(backend: &'static Backend) -> Result<&'static Backend> {
    let tag = backend.kind.tag();
    match SELECTED.compare_exchange(UNSELECTED, tag, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            log::info!("bls12-381 field backend: {}", backend.name());
            Ok(backend)
        }
        Err(current) if current == tag => Ok(backend),
        Err(current) => Err(Error::BackendConflict {
            selected: BackendKind::from_tag(current).map_or("unknown", BackendKind::name),
            requested: backend.name(),
        }),
    }
}

#[cold]
fn init_default() -> &'static Backend {
    let features = CpuFeatures::detect();
    let config = BackendConfig::from_env_or_default();
    let backend = Backend::select(&config, features).unwrap_or_else(|err| {
        log::warn!("{}; falling back to automatic backend selection", err);
        Backend::automatic(features, config.adx_disabled())
    });
    match install(backend) {
        Ok(backend) => backend,
        // Another thread selected first; its choice stands.
        Err(_) => selected().map_or(backend, Backend::installed),
    }
}
