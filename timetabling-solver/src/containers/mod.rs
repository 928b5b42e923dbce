//! Contains the containers which are used to store the problem data and the model.
mod keyed_vec;

use fnv::FnvBuildHasher;
pub use keyed_vec::*;

/// [`std::collections::HashMap`] that defaults to a deterministic hasher.
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
