// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External entropy: the operating system generator and device files
//!
//! Entropy sources are fallible. They implement [`TryBitGenerator`] with
//! [`Error`] as the error type and never substitute data for a failed read.
//! Use [`UnwrapErr`](crate::UnwrapErr) where a panicking
//! [`BitGenerator`](crate::BitGenerator) is wanted instead.
//!
//! ```no_run
//! use rngkit_core::{EntropyConfig, EntropyKind, EntropySource, TryBitGenerator};
//!
//! let config = EntropyConfig { source: EntropyKind::Urandom };
//! let mut source = EntropySource::new(&config)?;
//! let word = source.try_next_u64()?;
//! # Ok::<(), rngkit_core::Error>(())
//! ```

use crate::{Error, TryBitGenerator, TryCryptoGenerator};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// The operating system's generator, through [`getrandom`].
///
/// Zero-sized; construct it as `OsEntropy`.
///
/// Reads may block during early boot until the system generator is
/// initialised.
#[cfg(feature = "os_rng")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

#[cfg(feature = "os_rng")]
impl TryBitGenerator for OsEntropy {
    type Error = Error;

    #[inline]
    fn try_next_u32(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    #[inline]
    fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    #[inline]
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(dst)?;
        Ok(())
    }
}

#[cfg(feature = "os_rng")]
impl TryCryptoGenerator for OsEntropy {}

/// Entropy read from a device or file, typically `/dev/urandom`.
///
/// The file stays open for the lifetime of the value and is closed when it
/// is dropped. A read returning fewer bytes than requested is an error.
pub struct DeviceEntropy {
    path: PathBuf,
    file: File,
}

impl DeviceEntropy {
    /// Path of the non-blocking kernel entropy device.
    pub const URANDOM: &'static str = "/dev/urandom";
    /// Path of the blocking kernel entropy device.
    pub const RANDOM: &'static str = "/dev/random";

    /// Open the device at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("opening entropy device {}", path.display());
        let file = File::open(path)
            .map_err(|e| Error::with_cause("failed to open entropy device", e))?;
        Ok(DeviceEntropy {
            path: path.to_path_buf(),
            file,
        })
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for DeviceEntropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DeviceEntropy")
            .field("path", &self.path)
            .finish()
    }
}

impl TryBitGenerator for DeviceEntropy {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        self.file
            .read_exact(dst)
            .map_err(|e| Error::with_cause("entropy device read failed", e))
    }
}

impl TryCryptoGenerator for DeviceEntropy {}

/// Which entropy source [`EntropySource::new`] opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntropyKind {
    /// The operating system generator ([`OsEntropy`]).
    #[cfg(feature = "os_rng")]
    Os,
    /// `/dev/urandom`
    Urandom,
    /// `/dev/random`
    Random,
    /// Any readable file or device.
    Path(PathBuf),
}

/// Configuration of an [`EntropySource`].
///
/// The default is the operating system generator when the `os_rng` feature
/// is enabled, `/dev/urandom` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntropyConfig {
    /// The source to open.
    pub source: EntropyKind,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        #[cfg(feature = "os_rng")]
        let source = EntropyKind::Os;
        #[cfg(not(feature = "os_rng"))]
        let source = EntropyKind::Urandom;
        EntropyConfig { source }
    }
}

#[derive(Debug)]
enum Inner {
    #[cfg(feature = "os_rng")]
    Os(OsEntropy),
    Device(DeviceEntropy),
}

/// An entropy source selected at runtime.
#[derive(Debug)]
pub struct EntropySource {
    inner: Inner,
}

impl EntropySource {
    /// Open the source described by `config`.
    pub fn new(config: &EntropyConfig) -> Result<Self, Error> {
        let inner = match config.source {
            #[cfg(feature = "os_rng")]
            EntropyKind::Os => Inner::Os(OsEntropy),
            EntropyKind::Urandom => Inner::Device(DeviceEntropy::open(DeviceEntropy::URANDOM)?),
            EntropyKind::Random => Inner::Device(DeviceEntropy::open(DeviceEntropy::RANDOM)?),
            EntropyKind::Path(ref path) => Inner::Device(DeviceEntropy::open(path)?),
        };
        Ok(EntropySource { inner })
    }

    /// The operating system generator.
    #[cfg(feature = "os_rng")]
    pub fn os() -> Self {
        EntropySource {
            inner: Inner::Os(OsEntropy),
        }
    }

    /// Whether this source reads from a device file.
    pub fn is_device(&self) -> bool {
        matches!(self.inner, Inner::Device(_))
    }
}

impl From<DeviceEntropy> for EntropySource {
    fn from(device: DeviceEntropy) -> Self {
        EntropySource {
            inner: Inner::Device(device),
        }
    }
}

impl TryBitGenerator for EntropySource {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Error> {
        match self.inner {
            #[cfg(feature = "os_rng")]
            Inner::Os(ref mut os) => os.try_next_u32(),
            Inner::Device(ref mut dev) => dev.try_next_u32(),
        }
    }

    fn try_next_u64(&mut self) -> Result<u64, Error> {
        match self.inner {
            #[cfg(feature = "os_rng")]
            Inner::Os(ref mut os) => os.try_next_u64(),
            Inner::Device(ref mut dev) => dev.try_next_u64(),
        }
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        match self.inner {
            #[cfg(feature = "os_rng")]
            Inner::Os(ref mut os) => os.try_fill_bytes(dst),
            Inner::Device(ref mut dev) => dev.try_fill_bytes(dst),
        }
    }
}

impl TryCryptoGenerator for EntropySource {}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rngkit-entropy-{}-{}",
            name,
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[cfg(feature = "os_rng")]
    #[test]
    fn os_entropy() {
        let x = OsEntropy.try_next_u64().unwrap();
        let y = OsEntropy.try_next_u64().unwrap();
        assert!(x != 0);
        assert!(x != y);
    }

    #[test]
    fn device_reads_little_endian() {
        let path = temp_file("le", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let mut dev = DeviceEntropy::open(&path).unwrap();
        assert_eq!(dev.try_next_u32().unwrap(), 0x04030201);
        assert_eq!(dev.try_next_u64().unwrap(), 0x0c0b0a0908070605);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn short_read_is_an_error() {
        let path = temp_file("short", &[0xff; 3]);
        let mut dev = DeviceEntropy::open(&path).unwrap();
        let mut buf = [0u8; 4];
        let err = dev.try_fill_bytes(&mut buf).unwrap_err();
        assert_eq!(err.msg(), "entropy device read failed");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_device_fails_to_open() {
        let config = EntropyConfig {
            source: EntropyKind::Path(PathBuf::from("/nonexistent/rngkit/entropy")),
        };
        let err = EntropySource::new(&config).unwrap_err();
        assert_eq!(err.msg(), "failed to open entropy device");
    }

    #[cfg(unix)]
    #[test]
    fn urandom_source() {
        let config = EntropyConfig {
            source: EntropyKind::Urandom,
        };
        let mut source = EntropySource::new(&config).unwrap();
        assert!(source.is_device());
        let mut buf = [0u8; 64];
        source.try_fill_bytes(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }
}
