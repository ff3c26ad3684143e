//! Backend configuration

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// The interchangeable implementations of base-field multiplication
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// MULX with ADCX/ADOX carry chains; needs ADX and BMI2
    Adx,
    /// Word-serial CIOS on plain 64-bit multiplies
    Baseline,
    /// Unrolled product scanning with a separate reduction pass
    Portable,
}

impl BackendKind {
    /// Every kind, in preference order
    pub const ALL: [BackendKind; 3] = [BackendKind::Adx, BackendKind::Baseline, BackendKind::Portable];

    /// Lower-case name, as accepted by [`BackendConfig::from_env`]
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::Adx => "adx",
            BackendKind::Baseline => "baseline",
            BackendKind::Portable => "portable",
        }
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            BackendKind::Adx => 1,
            BackendKind::Baseline => 2,
            BackendKind::Portable => 3,
        }
    }

    pub(crate) const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(BackendKind::Adx),
            2 => Some(BackendKind::Baseline),
            3 => Some(BackendKind::Portable),
            _ => None,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(Error::InvalidConfig {
                name: BackendConfig::BACKEND_ENV,
                expected: "adx, baseline or portable",
            })
    }
}

/// Startup configuration for backend selection
///
/// The default lets CPU detection decide. `force` pins one backend (mainly for
/// cross-backend testing), `disable_adx` keeps automatic selection off the
/// ADX path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    force: Option<BackendKind>,
    disable_adx: bool,
}

impl BackendConfig {
    /// Environment variable naming a backend to force
    pub const BACKEND_ENV: &'static str = "BLS12381_BACKEND";

    /// Environment variable disabling the ADX backend
    pub const DISABLE_ADX_ENV: &'static str = "BLS12381_DISABLE_ADX";

    /// Automatic selection
    pub const fn new() -> Self {
        BackendConfig {
            force: None,
            disable_adx: false,
        }
    }

    /// Pin the given backend
    pub const fn force(mut self, kind: BackendKind) -> Self {
        self.force = Some(kind);
        self
    }

    /// Keep automatic selection off the ADX backend
    pub const fn disable_adx(mut self, disable: bool) -> Self {
        self.disable_adx = disable;
        self
    }

    /// The pinned backend, if any
    pub fn forced(&self) -> Option<BackendKind> {
        self.force
    }

    /// Whether the ADX backend is excluded
    pub fn adx_disabled(&self) -> bool {
        self.disable_adx
    }

    /// Read `BLS12381_BACKEND` and `BLS12381_DISABLE_ADX`
    ///
    /// Unset variables keep their defaults; unparsable values are errors.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[cfg(feature = "std")]
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<std::string::String>,
    {
        let mut config = BackendConfig::new();
        if let Some(value) = lookup(Self::BACKEND_ENV) {
            if !value.trim().is_empty() {
                config = config.force(value.parse()?);
            }
        }
        if let Some(value) = lookup(Self::DISABLE_ADX_ENV) {
            config = config.disable_adx(parse_flag(&value)?);
        }
        Ok(config)
    }

    /// Environment configuration when available, otherwise the default
    pub(crate) fn from_env_or_default() -> Self {
        #[cfg(feature = "std")]
        {
            Self::from_env().unwrap_or_else(|err| {
                log::warn!("ignoring backend environment configuration: {}", err);
                Self::default()
            })
        }
        #[cfg(not(feature = "std"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "std")]
fn parse_flag(value: &str) -> Result<bool> {
    let value = value.trim();
    let matches = |options: &[&str]| options.iter().any(|o| o.eq_ignore_ascii_case(value));
    if matches(&["1", "true", "yes", "on"]) {
        Ok(true)
    } else if value.is_empty() || matches(&["0", "false", "no", "off"]) {
        Ok(false)
    } else {
        Err(Error::InvalidConfig {
            name: BackendConfig::DISABLE_ADX_ENV,
            expected: "a boolean flag such as 1 or 0",
        })
    }
}
