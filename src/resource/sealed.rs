// ABOUTME: Sealed trait pattern for resource adapters.
// ABOUTME: Only the four built-in adapters can implement ResourceAdapter.

/// Sealed trait to prevent external implementations.
///
/// The tree pipeline assumes every adapter honors the key-table contract, so
/// only adapters defined in this crate implement `ResourceAdapter`.
pub trait Sealed {}
