//! C FFI bindings for the spinlat exchange kernels.
//!
//! Exposes the field and energy evaluators over caller-owned flat arrays.
//! This is the only spinlat crate that contains `unsafe` code; every entry
//! point validates its pointers and extents before touching memory and
//! reports failure through a [`SpinlatStatus`] code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an FFI body, converting a Rust panic into [`SpinlatStatus::Panicked`].
///
/// Unwinding across an `extern "C"` boundary aborts the host process, so
/// every exported function wraps its body in this guard.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(code) => code,
            Err(_) => $crate::status::SpinlatStatus::Panicked as i32,
        }
    };
}

pub mod exchange;
pub mod status;

pub use exchange::{spinlat_compute_exch_energy, spinlat_compute_exch_field};
pub use status::SpinlatStatus;
