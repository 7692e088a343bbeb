//! Tests for core_kernel identifiers

use core_kernel::CustomerId;
use proptest::prelude::*;

mod customer_id_tests {
    use super::*;

    #[test]
    fn test_display_is_raw_integer() {
        let id = CustomerId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: CustomerId = " 17 ".parse().unwrap();
        assert_eq!(id, CustomerId::new(17));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<CustomerId>().is_err());
        assert!("".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(CustomerId::new(1) < CustomerId::new(2));
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&CustomerId::new(5)).unwrap();
        assert_eq!(json, "5");

        let parsed: CustomerId = serde_json::from_str("9").unwrap();
        assert_eq!(parsed.value(), 9);
    }

    #[test]
    fn test_i32_conversions() {
        let id: CustomerId = 3.into();
        let raw: i32 = id.into();
        assert_eq!(raw, 3);
    }
}

proptest! {
    #[test]
    fn prop_display_parses_back(value in any::<i32>()) {
        let id = CustomerId::new(value);
        let parsed: CustomerId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
