use std::fmt;

/// The platform metadata query itself failed.
///
/// An unknown-but-answered value (an empty string, `"unknown"`) is not this
/// error; such values are passed through to the caller verbatim.
#[derive(Debug)]
pub struct QueryUnavailable;

impl fmt::Display for QueryUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("platform metadata query unavailable")
    }
}

impl std::error::Error for QueryUnavailable {}

/// Source of the raw architecture facts.
///
/// Implemented by [`HostInfoProvider`] against the live operating system;
/// tests substitute fixed-value providers.
pub trait OsInfoProvider {
    /// Pointer width of the running process, e.g. `"64bit"`.
    fn query_bitness(&self) -> Result<String, QueryUnavailable>;

    /// Machine label the platform reports, e.g. `"x86_64"`.
    fn query_machine(&self) -> Result<String, QueryUnavailable>;
}

/// Provider backed by the operating system the process runs on.
#[derive(Debug, Default)]
pub struct HostInfoProvider;

impl OsInfoProvider for HostInfoProvider {
    fn query_bitness(&self) -> Result<String, QueryUnavailable> {
        Ok(format!("{}bit", usize::BITS))
    }

    fn query_machine(&self) -> Result<String, QueryUnavailable> {
        cfg_if::cfg_if! {
            if #[cfg(target_os = "macos")] {
                sysctl_machine().map_err(|_| QueryUnavailable)
            } else if #[cfg(not(target_os = "windows"))] {
                uname_machine().map_err(|_| QueryUnavailable)
            } else {
                // No uname on Windows; the compiled-in label is what the
                // runtime reports for the process.
                Ok(std::env::consts::ARCH.to_string())
            }
        }
    }
}

/// Reads the machine field from `uname(2)`.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn uname_machine() -> std::io::Result<String> {
    use std::ffi::CStr;
    use std::io;
    use std::mem::MaybeUninit;

    let mut utsname = MaybeUninit::zeroed();
    let r = unsafe { libc::uname(utsname.as_mut_ptr()) };
    if r != 0 {
        return Err(io::Error::last_os_error());
    }

    let utsname = unsafe { utsname.assume_init() };
    let machine = unsafe { CStr::from_ptr(utsname.machine.as_ptr()) };
    Ok(machine.to_string_lossy().into_owned())
}

/// On macOS the machine label comes from the `hw.machine` sysctl.
#[cfg(target_os = "macos")]
fn sysctl_machine() -> Result<String, sysctl::SysctlError> {
    use sysctl::Sysctl;

    sysctl::Ctl::new("hw.machine")?.value_string()
}
