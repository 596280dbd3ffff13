use crate::domain::value_objects::Identity;

/// Domain object distinguished by its identity rather than its field values
pub trait Entity {
    fn identity(&self) -> &Identity;

    /// Two entities are the same when their identities match, whatever their state
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.identity() == other.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        id: Identity,
        label: &'static str,
    }

    impl Entity for Dummy {
        fn identity(&self) -> &Identity {
            &self.id
        }
    }

    #[test]
    fn test_same_identity_ignores_state() {
        let a = Dummy {
            id: Identity::from("test-id-123"),
            label: "first",
        };
        let b = Dummy {
            id: Identity::from("test-id-123"),
            label: "second",
        };
        let c = Dummy {
            id: Identity::new(),
            label: "first",
        };

        assert_ne!(a.label, b.label);
        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&c));
    }
}
