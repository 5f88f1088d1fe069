#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::LoadPhase;

#[cfg(feature = "std")]
pub(crate) type LoadPhaseMap<K> = HashMap<K, LoadPhase>;
#[cfg(not(feature = "std"))]
pub(crate) type LoadPhaseMap<K> = BTreeMap<K, LoadPhase>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait LoadStateKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> LoadStateKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait LoadStateKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> LoadStateKey for K {}
