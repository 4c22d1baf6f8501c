macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }

            /// Create an ID from a u32 value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

// Variables and rows share one id space so that value and dual queries can
// take either kind and disambiguate through the model's maps.
define_id_type!(Vid);

#[cfg(test)]
mod tests {
    use super::Vid;

    #[test]
    fn vid_roundtrip() {
        let id = Vid::new(7);
        assert_eq!(id.inner(), 7);
    }
}
