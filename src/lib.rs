//! Reports architecture facts about the host system.
//!
//! Two facts are collected: the pointer width of the running process (the
//! "bitness descriptor", e.g. `64bit`) and the machine label the platform
//! reports for its instruction-set family (e.g. `x86_64`, `aarch64`). The
//! [`arch::Reporter`] renders them as a short labeled report with colored
//! labels, degrading to plain text on terminals without color support.
//!
//! ```no_run
//! let info = archinfo::arch::host().unwrap();
//! println!("running on {}", info.machine());
//! ```

pub mod arch;
