//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a graphic stored in a [`HandleMap`]
    pub struct GraphicHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_stay_valid_after_removal_of_others() {
        let mut map: HandleMap<GraphicHandle, &str> = HandleMap::with_key();
        let a = map.insert("a");
        let b = map.insert("b");
        map.remove(a);
        assert_eq!(map.get(b), Some(&"b"));
        assert!(map.get(a).is_none());
    }
}
