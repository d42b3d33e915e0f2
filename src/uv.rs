//! Platform errno tables.
//!
//! The asynchronous I/O engine reports failures as negated error numbers.
//! The numbers differ per operating system family, so three fixed tables
//! exist: Linux, Darwin and Windows. The symbols are shared; only the numeric
//! values move around.
//!
//! # Selection
//!
//! Nothing here reads ambient state behind the caller's back. A table is
//! chosen from an explicit platform identifier:
//!
//! ```rust
//! use node_compat_errors::uv::{ErrnoTable, Platform};
//!
//! let table = ErrnoTable::for_platform(Platform::Linux);
//! let entry = table.lookup(-2).unwrap();
//! assert_eq!(entry.symbol, "ENOENT");
//! assert_eq!(entry.description, "no such file or directory");
//! ```
//!
//! The process-wide table is fixed once with [`init_host_table`] and is
//! read-only afterwards.
//!
//! # Failure Model
//!
//! - Unknown platform identifier: [`TableError::UnsupportedPlatform`]. Hosts
//!   treat this as fatal at startup.
//! - Code missing from the active table: [`TableError::UnknownErrno`]. This
//!   means the table drifted from the platform and is a bug, not user input.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

// ============================================================================
// Platform
// ============================================================================

/// Supported platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux and other systems using Linux errno numbering.
    Linux,
    /// macOS and BSD-derived systems.
    Darwin,
    /// Windows, using libuv's private `-40xx` numbering.
    Windows,
}

impl Platform {
    /// All recognised platforms.
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Darwin, Platform::Windows];

    /// Parse one of the three recognised host identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedPlatform`] for anything other than
    /// `"linux"`, `"darwin"` or `"windows"`.
    pub fn from_identifier(identifier: &str) -> Result<Self, TableError> {
        match identifier {
            "linux" => Ok(Self::Linux),
            "darwin" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            other => Err(TableError::UnsupportedPlatform {
                identifier: other.to_owned(),
            }),
        }
    }

    /// Map the compilation target to a platform family.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedPlatform`] on targets that belong to
    /// none of the three families.
    pub fn host() -> Result<Self, TableError> {
        match std::env::consts::OS {
            "linux" | "android" => Ok(Self::Linux),
            "macos" | "ios" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            other => Err(TableError::UnsupportedPlatform {
                identifier: other.to_owned(),
            }),
        }
    }

    /// The identifier accepted by [`Platform::from_identifier`].
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }

    const fn raw_entries(self) -> &'static [ErrnoEntry] {
        match self {
            Self::Linux => LINUX,
            Self::Darwin => DARWIN,
            Self::Windows => WINDOWS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Table Errors
// ============================================================================

/// Failures of the errno table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The host identifier is not one of the three recognised families.
    UnsupportedPlatform {
        /// The rejected identifier.
        identifier: String,
    },
    /// The code is not present in the selected table.
    UnknownErrno {
        /// The errno that was looked up.
        code: i32,
        /// The table that lacked it.
        platform: Platform,
    },
    /// Errnos are negative; zero and positive values are not errors.
    NotAnErrno {
        /// The non-negative code.
        code: i32,
    },
    /// The process-wide table was already fixed to another platform.
    AlreadyInitialized {
        /// The platform already selected.
        active: Platform,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform { identifier } => {
                write!(f, "unsupported platform '{}'", identifier)
            }
            Self::UnknownErrno { code, platform } => {
                write!(f, "errno {} is not defined for platform {}", code, platform)
            }
            Self::NotAnErrno { code } => {
                write!(f, "the value {} is not a negative errno", code)
            }
            Self::AlreadyInitialized { active } => {
                write!(f, "host errno table already initialized for {}", active)
            }
        }
    }
}

impl std::error::Error for TableError {}

// ============================================================================
// Entries and Tables
// ============================================================================

/// One platform error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrnoEntry {
    /// Negated error number as reported by the I/O engine.
    pub code: i32,
    /// Canonical mnemonic, e.g. `ENOENT`.
    pub symbol: &'static str,
    /// Short lowercase description.
    pub description: &'static str,
}

/// Immutable code-keyed view over one platform's entries.
#[derive(Debug)]
pub struct ErrnoTable {
    platform: Platform,
    entries: &'static [ErrnoEntry],
    by_code: HashMap<i32, usize>,
    by_symbol: HashMap<&'static str, usize>,
}

static LINUX_TABLE: OnceLock<ErrnoTable> = OnceLock::new();
static DARWIN_TABLE: OnceLock<ErrnoTable> = OnceLock::new();
static WINDOWS_TABLE: OnceLock<ErrnoTable> = OnceLock::new();
static HOST_TABLE: OnceLock<&'static ErrnoTable> = OnceLock::new();

impl ErrnoTable {
    fn build(platform: Platform) -> Self {
        let entries = platform.raw_entries();
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_symbol = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_code.insert(entry.code, idx);
            by_symbol.insert(entry.symbol, idx);
        }
        Self {
            platform,
            entries,
            by_code,
            by_symbol,
        }
    }

    /// The table for `platform`, built on first use.
    pub fn for_platform(platform: Platform) -> &'static ErrnoTable {
        let cell = match platform {
            Platform::Linux => &LINUX_TABLE,
            Platform::Darwin => &DARWIN_TABLE,
            Platform::Windows => &WINDOWS_TABLE,
        };
        cell.get_or_init(|| Self::build(platform))
    }

    /// Select a table from a host identifier.
    ///
    /// # Errors
    ///
    /// [`TableError::UnsupportedPlatform`] for unknown identifiers.
    pub fn select(identifier: &str) -> Result<&'static ErrnoTable, TableError> {
        Platform::from_identifier(identifier).map(Self::for_platform)
    }

    /// Platform this table belongs to.
    #[inline]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// All entries in declaration order.
    #[inline]
    pub const fn entries(&self) -> &'static [ErrnoEntry] {
        self.entries
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; tables are never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `code`, if present.
    #[inline]
    pub fn get(&self, code: i32) -> Option<&'static ErrnoEntry> {
        self.by_code.get(&code).map(|&idx| &self.entries[idx])
    }

    /// Entry for `code`.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownErrno`] when the code is absent.
    pub fn lookup(&self, code: i32) -> Result<&'static ErrnoEntry, TableError> {
        self.get(code).ok_or(TableError::UnknownErrno {
            code,
            platform: self.platform,
        })
    }

    /// Numeric code for a symbol on this platform (`UV_ENOENT` and friends).
    #[inline]
    pub fn code_of(&self, symbol: &str) -> Option<i32> {
        self.by_symbol.get(symbol).map(|&idx| self.entries[idx].code)
    }

    /// Symbol for `code`, or `"Unknown system error <code>"`.
    ///
    /// Total counterpart of [`ErrnoTable::lookup`] for display paths that
    /// must not fail.
    pub fn system_error_name(&self, code: i32) -> Cow<'static, str> {
        match self.get(code) {
            Some(entry) => Cow::Borrowed(entry.symbol),
            None => Cow::Owned(format!("Unknown system error {}", code)),
        }
    }
}

/// Symbol for a negative errno.
///
/// # Errors
///
/// - [`TableError::NotAnErrno`] when `code >= 0`
/// - [`TableError::UnknownErrno`] when the table has no entry
pub fn errname(table: &ErrnoTable, code: i32) -> Result<&'static str, TableError> {
    if code >= 0 {
        return Err(TableError::NotAnErrno { code });
    }
    table.lookup(code).map(|entry| entry.symbol)
}

/// Fix the process-wide table from the host identifier.
///
/// The first successful call wins. Repeating the call with the same platform
/// returns the same table.
///
/// # Errors
///
/// - [`TableError::UnsupportedPlatform`] for unknown identifiers
/// - [`TableError::AlreadyInitialized`] if another platform is already active
pub fn init_host_table(identifier: &str) -> Result<&'static ErrnoTable, TableError> {
    let platform = Platform::from_identifier(identifier)?;
    let active = *HOST_TABLE.get_or_init(|| ErrnoTable::for_platform(platform));
    if active.platform() == platform {
        Ok(active)
    } else {
        Err(TableError::AlreadyInitialized {
            active: active.platform(),
        })
    }
}

/// The process-wide table, if [`init_host_table`] has run.
#[inline]
pub fn host_table() -> Option<&'static ErrnoTable> {
    HOST_TABLE.get().copied()
}

// ============================================================================
// Raw Data
// ============================================================================

macro_rules! errno_entries {
    ($( $code:literal => $symbol:literal, $description:literal; )*) => {
        &[ $( ErrnoEntry { code: $code, symbol: $symbol, description: $description }, )* ]
    };
}

/// Resolver codes are identical on every platform.
macro_rules! with_resolver_codes {
    ($( $code:literal => $symbol:literal, $description:literal; )*) => {
        errno_entries! {
            $( $code => $symbol, $description; )*
            -3000 => "EAI_ADDRFAMILY", "address family not supported";
            -3001 => "EAI_AGAIN", "temporary failure";
            -3002 => "EAI_BADFLAGS", "bad ai_flags value";
            -3013 => "EAI_BADHINTS", "invalid value for hints";
            -3003 => "EAI_CANCELED", "request canceled";
            -3004 => "EAI_FAIL", "permanent failure";
            -3005 => "EAI_FAMILY", "ai_family not supported";
            -3006 => "EAI_MEMORY", "out of memory";
            -3007 => "EAI_NODATA", "no address";
            -3008 => "EAI_NONAME", "unknown node or service";
            -3009 => "EAI_OVERFLOW", "argument buffer overflow";
            -3014 => "EAI_PROTOCOL", "resolved protocol is unknown";
            -3010 => "EAI_SERVICE", "service not available for socket type";
            -3011 => "EAI_SOCKTYPE", "socket type not supported";
        }
    };
}

static LINUX: &[ErrnoEntry] = with_resolver_codes! {
    -7 => "E2BIG", "argument list too long";
    -13 => "EACCES", "permission denied";
    -98 => "EADDRINUSE", "address already in use";
    -99 => "EADDRNOTAVAIL", "address not available";
    -97 => "EAFNOSUPPORT", "address family not supported";
    -11 => "EAGAIN", "resource temporarily unavailable";
    -114 => "EALREADY", "connection already in progress";
    -9 => "EBADF", "bad file descriptor";
    -16 => "EBUSY", "resource busy or locked";
    -125 => "ECANCELED", "operation canceled";
    -4080 => "ECHARSET", "invalid Unicode character";
    -103 => "ECONNABORTED", "software caused connection abort";
    -111 => "ECONNREFUSED", "connection refused";
    -104 => "ECONNRESET", "connection reset by peer";
    -89 => "EDESTADDRREQ", "destination address required";
    -17 => "EEXIST", "file already exists";
    -14 => "EFAULT", "bad address in system call argument";
    -27 => "EFBIG", "file too large";
    -113 => "EHOSTUNREACH", "host is unreachable";
    -4 => "EINTR", "interrupted system call";
    -22 => "EINVAL", "invalid argument";
    -5 => "EIO", "i/o error";
    -106 => "EISCONN", "socket is already connected";
    -21 => "EISDIR", "illegal operation on a directory";
    -40 => "ELOOP", "too many symbolic links encountered";
    -24 => "EMFILE", "too many open files";
    -90 => "EMSGSIZE", "message too long";
    -36 => "ENAMETOOLONG", "name too long";
    -100 => "ENETDOWN", "network is down";
    -101 => "ENETUNREACH", "network is unreachable";
    -23 => "ENFILE", "file table overflow";
    -105 => "ENOBUFS", "no buffer space available";
    -19 => "ENODEV", "no such device";
    -2 => "ENOENT", "no such file or directory";
    -12 => "ENOMEM", "not enough memory";
    -64 => "ENONET", "machine is not on the network";
    -92 => "ENOPROTOOPT", "protocol not available";
    -28 => "ENOSPC", "no space left on device";
    -38 => "ENOSYS", "function not implemented";
    -107 => "ENOTCONN", "socket is not connected";
    -20 => "ENOTDIR", "not a directory";
    -39 => "ENOTEMPTY", "directory not empty";
    -88 => "ENOTSOCK", "socket operation on non-socket";
    -95 => "ENOTSUP", "operation not supported on socket";
    -1 => "EPERM", "operation not permitted";
    -32 => "EPIPE", "broken pipe";
    -71 => "EPROTO", "protocol error";
    -93 => "EPROTONOSUPPORT", "protocol not supported";
    -91 => "EPROTOTYPE", "protocol wrong type for socket";
    -34 => "ERANGE", "result too large";
    -30 => "EROFS", "read-only file system";
    -108 => "ESHUTDOWN", "cannot send after transport endpoint shutdown";
    -29 => "ESPIPE", "invalid seek";
    -3 => "ESRCH", "no such process";
    -110 => "ETIMEDOUT", "connection timed out";
    -26 => "ETXTBSY", "text file is busy";
    -18 => "EXDEV", "cross-device link not permitted";
    -4094 => "UNKNOWN", "unknown error";
    -4095 => "EOF", "end of file";
    -6 => "ENXIO", "no such device or address";
    -31 => "EMLINK", "too many links";
    -112 => "EHOSTDOWN", "host is down";
    -121 => "EREMOTEIO", "remote I/O error";
    -25 => "ENOTTY", "inappropriate ioctl for device";
    -4028 => "EFTYPE", "inappropriate file type or format";
    -84 => "EILSEQ", "illegal byte sequence";
};

static DARWIN: &[ErrnoEntry] = with_resolver_codes! {
    -7 => "E2BIG", "argument list too long";
    -13 => "EACCES", "permission denied";
    -48 => "EADDRINUSE", "address already in use";
    -49 => "EADDRNOTAVAIL", "address not available";
    -47 => "EAFNOSUPPORT", "address family not supported";
    -35 => "EAGAIN", "resource temporarily unavailable";
    -37 => "EALREADY", "connection already in progress";
    -9 => "EBADF", "bad file descriptor";
    -16 => "EBUSY", "resource busy or locked";
    -89 => "ECANCELED", "operation canceled";
    -4080 => "ECHARSET", "invalid Unicode character";
    -53 => "ECONNABORTED", "software caused connection abort";
    -61 => "ECONNREFUSED", "connection refused";
    -54 => "ECONNRESET", "connection reset by peer";
    -39 => "EDESTADDRREQ", "destination address required";
    -17 => "EEXIST", "file already exists";
    -14 => "EFAULT", "bad address in system call argument";
    -27 => "EFBIG", "file too large";
    -65 => "EHOSTUNREACH", "host is unreachable";
    -4 => "EINTR", "interrupted system call";
    -22 => "EINVAL", "invalid argument";
    -5 => "EIO", "i/o error";
    -56 => "EISCONN", "socket is already connected";
    -21 => "EISDIR", "illegal operation on a directory";
    -62 => "ELOOP", "too many symbolic links encountered";
    -24 => "EMFILE", "too many open files";
    -40 => "EMSGSIZE", "message too long";
    -63 => "ENAMETOOLONG", "name too long";
    -50 => "ENETDOWN", "network is down";
    -51 => "ENETUNREACH", "network is unreachable";
    -23 => "ENFILE", "file table overflow";
    -55 => "ENOBUFS", "no buffer space available";
    -19 => "ENODEV", "no such device";
    -2 => "ENOENT", "no such file or directory";
    -12 => "ENOMEM", "not enough memory";
    -4056 => "ENONET", "machine is not on the network";
    -42 => "ENOPROTOOPT", "protocol not available";
    -28 => "ENOSPC", "no space left on device";
    -78 => "ENOSYS", "function not implemented";
    -57 => "ENOTCONN", "socket is not connected";
    -20 => "ENOTDIR", "not a directory";
    -66 => "ENOTEMPTY", "directory not empty";
    -38 => "ENOTSOCK", "socket operation on non-socket";
    -45 => "ENOTSUP", "operation not supported on socket";
    -1 => "EPERM", "operation not permitted";
    -32 => "EPIPE", "broken pipe";
    -100 => "EPROTO", "protocol error";
    -43 => "EPROTONOSUPPORT", "protocol not supported";
    -41 => "EPROTOTYPE", "protocol wrong type for socket";
    -34 => "ERANGE", "result too large";
    -30 => "EROFS", "read-only file system";
    -58 => "ESHUTDOWN", "cannot send after transport endpoint shutdown";
    -29 => "ESPIPE", "invalid seek";
    -3 => "ESRCH", "no such process";
    -60 => "ETIMEDOUT", "connection timed out";
    -26 => "ETXTBSY", "text file is busy";
    -18 => "EXDEV", "cross-device link not permitted";
    -4094 => "UNKNOWN", "unknown error";
    -4095 => "EOF", "end of file";
    -6 => "ENXIO", "no such device or address";
    -31 => "EMLINK", "too many links";
    -64 => "EHOSTDOWN", "host is down";
    -4030 => "EREMOTEIO", "remote I/O error";
    -25 => "ENOTTY", "inappropriate ioctl for device";
    -79 => "EFTYPE", "inappropriate file type or format";
    -92 => "EILSEQ", "illegal byte sequence";
};

static WINDOWS: &[ErrnoEntry] = with_resolver_codes! {
    -4093 => "E2BIG", "argument list too long";
    -4092 => "EACCES", "permission denied";
    -4091 => "EADDRINUSE", "address already in use";
    -4090 => "EADDRNOTAVAIL", "address not available";
    -4089 => "EAFNOSUPPORT", "address family not supported";
    -4088 => "EAGAIN", "resource temporarily unavailable";
    -4084 => "EALREADY", "connection already in progress";
    -4083 => "EBADF", "bad file descriptor";
    -4082 => "EBUSY", "resource busy or locked";
    -4081 => "ECANCELED", "operation canceled";
    -4080 => "ECHARSET", "invalid Unicode character";
    -4079 => "ECONNABORTED", "software caused connection abort";
    -4078 => "ECONNREFUSED", "connection refused";
    -4077 => "ECONNRESET", "connection reset by peer";
    -4076 => "EDESTADDRREQ", "destination address required";
    -4075 => "EEXIST", "file already exists";
    -4074 => "EFAULT", "bad address in system call argument";
    -4036 => "EFBIG", "file too large";
    -4073 => "EHOSTUNREACH", "host is unreachable";
    -4072 => "EINTR", "interrupted system call";
    -4071 => "EINVAL", "invalid argument";
    -4070 => "EIO", "i/o error";
    -4069 => "EISCONN", "socket is already connected";
    -4068 => "EISDIR", "illegal operation on a directory";
    -4067 => "ELOOP", "too many symbolic links encountered";
    -4066 => "EMFILE", "too many open files";
    -4065 => "EMSGSIZE", "message too long";
    -4064 => "ENAMETOOLONG", "name too long";
    -4063 => "ENETDOWN", "network is down";
    -4062 => "ENETUNREACH", "network is unreachable";
    -4061 => "ENFILE", "file table overflow";
    -4060 => "ENOBUFS", "no buffer space available";
    -4059 => "ENODEV", "no such device";
    -4058 => "ENOENT", "no such file or directory";
    -4057 => "ENOMEM", "not enough memory";
    -4056 => "ENONET", "machine is not on the network";
    -4035 => "ENOPROTOOPT", "protocol not available";
    -4055 => "ENOSPC", "no space left on device";
    -4054 => "ENOSYS", "function not implemented";
    -4053 => "ENOTCONN", "socket is not connected";
    -4052 => "ENOTDIR", "not a directory";
    -4051 => "ENOTEMPTY", "directory not empty";
    -4050 => "ENOTSOCK", "socket operation on non-socket";
    -4049 => "ENOTSUP", "operation not supported on socket";
    -4048 => "EPERM", "operation not permitted";
    -4047 => "EPIPE", "broken pipe";
    -4046 => "EPROTO", "protocol error";
    -4045 => "EPROTONOSUPPORT", "protocol not supported";
    -4044 => "EPROTOTYPE", "protocol wrong type for socket";
    -4034 => "ERANGE", "result too large";
    -4043 => "EROFS", "read-only file system";
    -4042 => "ESHUTDOWN", "cannot send after transport endpoint shutdown";
    -4041 => "ESPIPE", "invalid seek";
    -4040 => "ESRCH", "no such process";
    -4039 => "ETIMEDOUT", "connection timed out";
    -4038 => "ETXTBSY", "text file is busy";
    -4037 => "EXDEV", "cross-device link not permitted";
    -4094 => "UNKNOWN", "unknown error";
    -4095 => "EOF", "end of file";
    -4033 => "ENXIO", "no such device or address";
    -4032 => "EMLINK", "too many links";
    -4031 => "EHOSTDOWN", "host is down";
    -4030 => "EREMOTEIO", "remote I/O error";
    -4029 => "ENOTTY", "inappropriate ioctl for device";
    -4028 => "EFTYPE", "inappropriate file type or format";
    -4027 => "EILSEQ", "illegal byte sequence";
};
