//! Errors built from raw OS error numbers.
//!
//! These constructors translate a negative errno through an [`ErrnoTable`]
//! and attach the syscall context as extra fields. An errno that the table
//! does not know is surfaced as [`TableError::UnknownErrno`] rather than a
//! placeholder message: it means the table and the platform disagree.
//!
//! # Example
//!
//! ```rust
//! use node_compat_errors::{exception_with_host_port, ErrnoTable, Platform, Value};
//!
//! let table = ErrnoTable::for_platform(Platform::Darwin);
//! let err = exception_with_host_port(table, -61, "connect", "127.0.0.1", Some(8080), None).unwrap();
//! assert_eq!(err.code(), "ECONNREFUSED");
//! assert_eq!(err.message(), "connect ECONNREFUSED 127.0.0.1:8080");
//! assert_eq!(err.field("port"), Some(&Value::from(8080)));
//! ```

use crate::uv::{ErrnoTable, TableError};
use crate::{ErrorKind, NodeError, Value};
use std::fmt;
use zeroize::Zeroize;

/// Resolver codes reported as `ENOTFOUND`.
const NOT_FOUND_RESOLVER_CODES: [&str; 3] = ["EAI_NODATA", "EAI_NONAME", "EAI_MEMORY"];

// ============================================================================
// System Context
// ============================================================================

/// Syscall context for an errno-backed error.
///
/// Paths and hosts are zeroized on drop.
#[derive(Debug, Clone)]
pub struct SystemContext {
    errno: i32,
    syscall: String,
    path: Option<String>,
    dest: Option<String>,
    message: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    additional: Option<String>,
}

impl SystemContext {
    /// Start building a context.
    #[inline]
    pub fn builder() -> SystemContextBuilder {
        SystemContextBuilder::new()
    }

    /// Negative errno.
    #[inline]
    pub const fn errno(&self) -> i32 {
        self.errno
    }

    /// Failing call name.
    #[inline]
    pub fn syscall(&self) -> &str {
        &self.syscall
    }

    /// Source path.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Destination path for two-path calls.
    #[inline]
    pub fn dest(&self) -> Option<&str> {
        self.dest.as_deref()
    }

    /// Replacement for the table description in the message.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Remote host.
    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Remote port.
    #[inline]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Local address detail.
    #[inline]
    pub fn additional(&self) -> Option<&str> {
        self.additional.as_deref()
    }

    /// Copy the context onto `err` as fields.
    fn attach(&self, err: NodeError) -> NodeError {
        let mut err = err
            .with_field("errno", self.errno)
            .with_field("syscall", self.syscall.as_str());
        if let Some(path) = &self.path {
            err = err.with_field("path", path);
        }
        if let Some(dest) = &self.dest {
            err = err.with_field("dest", dest);
        }
        if let Some(host) = &self.host {
            err = err.with_field("host", host);
        }
        if let Some(port) = self.port {
            err = err.with_field("port", port);
        }
        if let Some(additional) = &self.additional {
            err = err.with_field("additional", additional);
        }
        err
    }
}

impl Zeroize for SystemContext {
    fn zeroize(&mut self) {
        self.syscall.zeroize();
        for field in [
            &mut self.path,
            &mut self.dest,
            &mut self.message,
            &mut self.host,
            &mut self.additional,
        ] {
            if let Some(s) = field {
                s.zeroize();
            }
        }
    }
}

impl Drop for SystemContext {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Fluent builder for [`SystemContext`].
///
/// ```rust
/// use node_compat_errors::{ContextError, SystemContext};
///
/// let ctx = SystemContext::builder().errno(-13).syscall("open").path("/root").try_build().unwrap();
/// assert_eq!(ctx.path(), Some("/root"));
///
/// let missing = SystemContext::builder().errno(-13).try_build();
/// assert_eq!(missing.unwrap_err(), ContextError::MissingSyscall { has_errno: true });
/// ```
#[derive(Debug, Default)]
pub struct SystemContextBuilder {
    errno: Option<i32>,
    syscall: Option<String>,
    path: Option<String>,
    dest: Option<String>,
    message: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    additional: Option<String>,
}

impl SystemContextBuilder {
    /// Empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative errno reported by the I/O engine.
    #[inline]
    pub fn errno(mut self, errno: i32) -> Self {
        self.errno = Some(errno);
        self
    }

    /// Name of the failing call, e.g. `"open"`.
    #[inline]
    pub fn syscall(mut self, syscall: impl Into<String>) -> Self {
        self.syscall = Some(syscall.into());
        self
    }

    /// Source path.
    #[inline]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Destination path.
    #[inline]
    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    /// Override the table description in `uv_exception` messages.
    #[inline]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Remote host.
    #[inline]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Remote port.
    #[inline]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Local address detail.
    #[inline]
    pub fn additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = Some(additional.into());
        self
    }

    /// Finish the context.
    ///
    /// # Errors
    ///
    /// Returns `Err(ContextError)` when the errno or syscall is missing.
    pub fn try_build(self) -> Result<SystemContext, ContextError> {
        let has_errno = self.errno.is_some();
        let has_syscall = self.syscall.is_some();

        let errno = self.errno.ok_or(ContextError::MissingErrno { has_syscall })?;
        let syscall = self.syscall.ok_or(ContextError::MissingSyscall { has_errno })?;

        Ok(SystemContext {
            errno,
            syscall,
            path: self.path,
            dest: self.dest,
            message: self.message,
            host: self.host,
            port: self.port,
            additional: self.additional,
        })
    }
}

/// Error type for [`SystemContextBuilder`] failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// `errno()` was never called.
    MissingErrno {
        /// Whether the syscall was set (helps diagnose partial builds).
        has_syscall: bool,
    },
    /// `syscall()` was never called.
    MissingSyscall {
        /// Whether the errno was set.
        has_errno: bool,
    },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingErrno { has_syscall } => write!(
                f,
                "SystemContext missing errno (syscall: {}; errno: missing)",
                if *has_syscall { "set" } else { "missing" }
            ),
            Self::MissingSyscall { has_errno } => write!(
                f,
                "SystemContext missing syscall (errno: {}; syscall: missing)",
                if *has_errno { "set" } else { "missing" }
            ),
        }
    }
}

impl std::error::Error for ContextError {}

// ============================================================================
// Constructors
// ============================================================================

/// `"<CODE>: <desc>, <syscall> '<path>' -> '<dest>'"`, coded by errno symbol.
///
/// # Errors
///
/// [`TableError::UnknownErrno`] when `ctx.errno()` is not in `table`.
pub fn uv_exception(table: &ErrnoTable, ctx: &SystemContext) -> Result<NodeError, TableError> {
    let entry = table.lookup(ctx.errno)?;
    let mut message = format!(
        "{}: {}, {}",
        entry.symbol,
        ctx.message().unwrap_or(entry.description),
        ctx.syscall
    );
    if let Some(path) = ctx.path() {
        message.push_str(&format!(" '{}'", path));
    }
    if let Some(dest) = ctx.dest() {
        message.push_str(&format!(" -> '{}'", dest));
    }
    Ok(ctx.attach(NodeError::error(entry.symbol, message)))
}

/// `"<syscall> <CODE>[ <original>]"`.
///
/// # Errors
///
/// [`TableError::UnknownErrno`] when `errno` is not in `table`.
pub fn errno_exception(
    table: &ErrnoTable,
    errno: i32,
    syscall: &str,
    original: Option<&str>,
) -> Result<NodeError, TableError> {
    let entry = table.lookup(errno)?;
    let message = match original {
        Some(original) => format!("{} {} {}", syscall, entry.symbol, original),
        None => format!("{} {}", syscall, entry.symbol),
    };
    Ok(NodeError::error(entry.symbol, message)
        .with_field("errno", errno)
        .with_field("syscall", syscall))
}

/// `"<syscall> <CODE> <address>[:port][ - Local (<additional>)]"`.
///
/// A zero port is treated as absent.
///
/// # Errors
///
/// [`TableError::UnknownErrno`] when `errno` is not in `table`.
pub fn exception_with_host_port(
    table: &ErrnoTable,
    errno: i32,
    syscall: &str,
    address: &str,
    port: Option<u16>,
    additional: Option<&str>,
) -> Result<NodeError, TableError> {
    let entry = table.lookup(errno)?;
    let port = port.filter(|&p| p > 0);

    let mut message = format!("{} {}", syscall, entry.symbol);
    match port {
        Some(port) => message.push_str(&format!(" {}:{}", address, port)),
        None if !address.is_empty() => message.push_str(&format!(" {}", address)),
        None => {}
    }
    if let Some(additional) = additional {
        message.push_str(&format!(" - Local ({})", additional));
    }

    let err = NodeError::error(entry.symbol, message)
        .with_field("errno", errno)
        .with_field("syscall", syscall)
        .with_field("address", address);
    Ok(match port {
        Some(port) => err.with_field("port", port),
        None => err,
    })
}

/// `"<syscall> <code>[ <hostname>]"` for resolver failures.
///
/// `EAI_NODATA`, `EAI_NONAME` and `EAI_MEMORY` are reported as `ENOTFOUND`.
///
/// # Errors
///
/// [`TableError::UnknownErrno`] when `errno` is not in `table`.
pub fn dns_exception(
    table: &ErrnoTable,
    errno: i32,
    syscall: &str,
    hostname: Option<&str>,
) -> Result<NodeError, TableError> {
    let entry = table.lookup(errno)?;
    let code = if NOT_FOUND_RESOLVER_CODES.contains(&entry.symbol) {
        "ENOTFOUND"
    } else {
        entry.symbol
    };

    let message = match hostname {
        Some(host) if !host.is_empty() => format!("{} {} {}", syscall, code, host),
        _ => format!("{} {}", syscall, code),
    };
    let err = NodeError::error(code, message)
        .with_field("errno", errno)
        .with_field("syscall", syscall);
    Ok(match hostname {
        Some(host) if !host.is_empty() => err.with_field("hostname", host),
        _ => err,
    })
}

/// `"<prefix>: <syscall> returned <CODE> (<desc>) <path> => <dest>"` for
/// `ERR_SYSTEM_ERROR`-style kinds.
///
/// The kind supplies the prefix and the code; the errno symbol and
/// description are recorded in the `info` field.
///
/// # Errors
///
/// [`TableError::UnknownErrno`] when `ctx.errno()` is not in `table`.
pub fn system_error(
    table: &ErrnoTable,
    kind: &'static ErrorKind,
    ctx: &SystemContext,
) -> Result<NodeError, TableError> {
    let entry = table.lookup(ctx.errno)?;
    let description = ctx.message().unwrap_or(entry.description);

    let mut message = format!(
        "{}: {} returned {} ({})",
        kind.render(&[]),
        ctx.syscall,
        entry.symbol,
        description
    );
    if let Some(path) = ctx.path() {
        message.push_str(&format!(" {}", path));
    }
    if let Some(dest) = ctx.dest() {
        message.push_str(&format!(" => {}", dest));
    }

    let info = Value::object([
        ("errno", Value::from(ctx.errno)),
        ("code", Value::from(entry.symbol)),
        ("message", Value::from(description)),
        ("syscall", Value::from(ctx.syscall())),
    ]);
    let err = NodeError::with_message(kind, message).with_field("info", info);
    Ok(ctx.attach(err))
}
