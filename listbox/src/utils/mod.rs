//! Small shared helpers.

pub mod once;

pub use once::OnceLatch;

/// Check whether an optional value is absent.
pub fn is_nil<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Collect the present values out of an iterator of optional values,
/// preserving order.
pub fn non_nil<T>(values: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    values.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nil() {
        assert!(is_nil::<u32>(&None));
        assert!(!is_nil(&Some(1)));
    }

    #[test]
    fn test_non_nil_preserves_order() {
        let values = non_nil(vec![Some(1), None, Some(3), None]);
        assert_eq!(values, vec![1, 3]);
    }
}
