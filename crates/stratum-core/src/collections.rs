//! Hash map selection for container pools and lookup tables.
//!
//! Keys are small integers (content types, ids), so Fx hashing is used
//! unless the `std-hash` feature asks for the standard SipHash maps.

pub mod map {
    #[cfg(not(feature = "std-hash"))]
    pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

    #[cfg(feature = "std-hash")]
    pub type HashMap<K, V> = std::collections::HashMap<K, V>;
}
