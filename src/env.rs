use std::{ffi::OsString, fmt::Display, num::NonZeroU16, str::FromStr};

use crate::error::{LaunchError, LaunchResult};

pub const DEFAULT_LISTEN: &str = "0.0.0.0";
pub const DEFAULT_PORT: Port = Port::new(3000);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env {
    pub listen: String,
    pub port: String,
}
impl Default for Env {
    fn default() -> Self {
        Self { listen: DEFAULT_LISTEN.to_string(), port: DEFAULT_PORT.to_string() }
    }
}
impl Env {
    pub fn environment(default: Self) -> Self {
        Self::lookup_os(default, |key| std::env::var_os(key))
    }

    /// Non-unicode values are kept lossily, so they are rejected later instead of falling back to the default.
    pub fn lookup_os<F>(default: Self, f: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::lookup(default, |key| f(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Empty values are treated as unset.
    pub fn lookup<F>(default: Self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| f(key).filter(|value: &String| !value.is_empty());
        Self { listen: var("LISTEN").unwrap_or(default.listen), port: var("PORT").unwrap_or(default.port) }
    }

    pub fn port(&self) -> LaunchResult<Port> {
        self.port.parse()
    }
}

/// TCP port in `1..=65535`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(NonZeroU16);
impl Port {
    pub(crate) const fn new(port: u16) -> Self {
        match NonZeroU16::new(port) {
            Some(port) => Self(port),
            None => panic!("port must not be zero"),
        }
    }

    pub fn get(self) -> u16 {
        self.0.get()
    }
}
impl Default for Port {
    fn default() -> Self {
        DEFAULT_PORT
    }
}
impl Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl FromStr for Port {
    type Err = LaunchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let port = s.trim().parse().map_err(|source| LaunchError::InvalidPort { value: s.to_string(), source })?;
        Ok(Self(port))
    }
}
