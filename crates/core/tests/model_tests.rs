// ═══════════════════════════════════════════════════════════════════
// Model Tests — MovementType, Movement, PagedMovements, requests, settings
// ═══════════════════════════════════════════════════════════════════

use rust_decimal::Decimal;
use std::str::FromStr;

use movements_core::errors::CoreError;
use movements_core::models::filter::{MovementQuery, MovementsRequest};
use movements_core::models::movement::{Movement, MovementType, PagedMovements};
use movements_core::models::product::{Product, ProductType};
use movements_core::models::settings::{self, Settings};
use movements_core::services::account_resolver::DEFAULT_FISCAL_TRANSFER_ACCOUNT;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_movement() -> Movement {
    Movement {
        movement_id: 1000,
        account: "NL91FAKE0417164300".into(),
        movement_type: MovementType::Interest,
        amount: dec("0.42"),
        account_from: "NL13FAKE0000000100".into(),
        account_to: "NL91FAKE0417164300".into(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// MovementType
// ═══════════════════════════════════════════════════════════════════

mod movement_type {
    use super::*;

    #[test]
    fn display_is_variant_name() {
        assert_eq!(MovementType::Interest.to_string(), "Interest");
        assert_eq!(MovementType::FiscalTransfer.to_string(), "FiscalTransfer");
        assert_eq!(MovementType::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn from_str_round_trips_every_variant() {
        for t in MovementType::ALL {
            assert_eq!(MovementType::from_str(&t.to_string()).unwrap(), t);
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(MovementType::from_str("interest").unwrap(), MovementType::Interest);
        assert_eq!(
            MovementType::from_str(" FISCALTRANSFER ").unwrap(),
            MovementType::FiscalTransfer
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = MovementType::from_str("Dividend").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(MovementType::default(), MovementType::Unknown);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&MovementType::Outgoing).unwrap();
        assert_eq!(json, "\"Outgoing\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Movement
// ═══════════════════════════════════════════════════════════════════

mod movement {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_string_amount() {
        let json = serde_json::to_value(sample_movement()).unwrap();
        assert_eq!(json["movementId"], 1000);
        assert_eq!(json["account"], "NL91FAKE0417164300");
        assert_eq!(json["movementType"], "Interest");
        assert_eq!(json["amount"], "0.42");
        assert_eq!(json["accountFrom"], "NL13FAKE0000000100");
        assert_eq!(json["accountTo"], "NL91FAKE0417164300");
    }

    #[test]
    fn deserializes_numeric_amount() {
        let json = r#"{"movementId":7,"account":"A","movementType":"Fee","amount":-0.59,"accountFrom":"A","accountTo":"F"}"#;
        let m: Movement = serde_json::from_str(json).unwrap();
        assert_eq!(m.amount, dec("-0.59"));
        assert_eq!(m.movement_type, MovementType::Fee);
    }

    #[test]
    fn direction_helpers() {
        let m = sample_movement();
        assert!(m.enters_account());
        assert!(!m.leaves_account());

        let out = Movement {
            account_from: m.account.clone(),
            account_to: "NL86FAKE0000000200".into(),
            ..m
        };
        assert!(out.leaves_account());
        assert!(!out.enters_account());
    }
}

// ═══════════════════════════════════════════════════════════════════
// PagedMovements
// ═══════════════════════════════════════════════════════════════════

mod paged_movements {
    use super::*;

    #[test]
    fn default_is_empty_page_zero() {
        let page = PagedMovements::default();
        assert_eq!(page.page_number, 0);
        assert_eq!(page.page_size, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let page = PagedMovements::new(
            2,
            5,
            vec![
                sample_movement(),
                Movement {
                    movement_id: 1001,
                    movement_type: MovementType::Fee,
                    amount: dec("-0.59"),
                    account_from: "NL91FAKE0417164300".into(),
                    account_to: "NL86FAKE0000000200".into(),
                    ..sample_movement()
                },
            ],
        );

        let json = serde_json::to_string(&page).unwrap();
        let back: PagedMovements = serde_json::from_str(&json).unwrap();

        assert_eq!(back, page);
        assert_eq!(back.movements[1].amount.to_string(), "-0.59");
    }

    #[test]
    fn missing_movements_field_means_empty() {
        let page: PagedMovements = serde_json::from_str(r#"{"pageNumber":1,"pageSize":5}"#).unwrap();
        assert!(page.movements.is_empty());
    }

    #[test]
    fn exceeds_page_size() {
        let page = PagedMovements::new(1, 1, vec![sample_movement(), sample_movement()]);
        assert!(page.exceeds_page_size());
        let page = PagedMovements::new(1, 2, vec![sample_movement(), sample_movement()]);
        assert!(!page.exceeds_page_size());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Product
// ═══════════════════════════════════════════════════════════════════

mod product {
    use super::*;

    #[test]
    fn json_shape() {
        let p = Product::new(1, ProductType::SavingsRetirement, "NL91FAKE0417164300");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["productId"], 1);
        assert_eq!(json["productType"], "SavingsRetirement");
        assert_eq!(json["externalAccount"], "NL91FAKE0417164300");
    }

    #[test]
    fn product_type_display() {
        assert_eq!(ProductType::SavingsRetirement.to_string(), "SavingsRetirement");
        assert_eq!(ProductType::Payment.to_string(), "Payment");
    }
}

// ═══════════════════════════════════════════════════════════════════
// MovementsRequest — validation
// ═══════════════════════════════════════════════════════════════════

mod request_validation {
    use super::*;

    #[test]
    fn minimal_valid_request() {
        let v = MovementsRequest::page(1, 1, 5).validate().unwrap();
        assert_eq!(v.product_id, 1);
        assert_eq!(v.page_number, 1);
        assert_eq!(v.page_size, 5);
        assert_eq!(v.movement_type, None);
        assert_eq!(v.account_from, None);
        assert_eq!(v.amount_min, None);
    }

    #[test]
    fn empty_request_lists_every_missing_parameter() {
        let err = MovementsRequest::default().validate().unwrap_err();
        let CoreError::Validation(msg) = err else {
            panic!("expected Validation");
        };
        assert!(msg.contains("productId is required"));
        assert!(msg.contains("pageNumber is required"));
        assert!(msg.contains("pageSize is required"));
    }

    #[test]
    fn zero_page_number_rejected() {
        let err = MovementsRequest::page(1, 0, 5).validate().unwrap_err();
        assert!(err.to_string().contains("pageNumber must be at least 1"));
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = MovementsRequest::page(1, 1, 0).validate().unwrap_err();
        assert!(err.to_string().contains("pageSize must be at least 1"));
    }

    #[test]
    fn inverted_amount_range_rejected() {
        let err = MovementsRequest::page(1, 1, 5)
            .with_amount_range(Some(dec("10")), Some(dec("-10")))
            .validate()
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn equal_amount_bounds_accepted() {
        let v = MovementsRequest::page(1, 1, 5)
            .with_amount_range(Some(dec("3.5")), Some(dec("3.5")))
            .validate()
            .unwrap();
        assert_eq!(v.amount_min, Some(dec("3.5")));
        assert_eq!(v.amount_max, Some(dec("3.5")));
    }

    #[test]
    fn blank_counterparty_filters_become_unset() {
        let v = MovementsRequest::page(1, 1, 5)
            .with_account_from("")
            .with_account_to("   ")
            .validate()
            .unwrap();
        assert_eq!(v.account_from, None);
        assert_eq!(v.account_to, None);
    }

    #[test]
    fn movement_type_parameter_ignores_case() {
        let r: MovementsRequest = serde_json::from_str(r#"{"movementType":"fiscaltransfer"}"#).unwrap();
        assert_eq!(r.movement_type, Some(MovementType::FiscalTransfer));
    }

    #[test]
    fn blank_movement_type_parameter_is_unset() {
        for raw in [r#"{"movementType":""}"#, r#"{"movementType":"  "}"#, r#"{"movementType":null}"#, "{}"] {
            let r: MovementsRequest = serde_json::from_str(raw).unwrap();
            assert_eq!(r.movement_type, None, "{raw}");
        }
    }

    #[test]
    fn unknown_movement_type_parameter_rejected() {
        let err = serde_json::from_str::<MovementsRequest>(r#"{"movementType":"Dividend"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown movement type 'Dividend'"));
    }

    #[test]
    fn into_query_keeps_unset_filters_unset() {
        let q = MovementsRequest::page(1, 3, 20)
            .with_movement_type(MovementType::Tax)
            .validate()
            .unwrap()
            .into_query("NL91FAKE0417164300".into());

        assert_eq!(
            q,
            MovementQuery {
                page_number: Some(3),
                page_size: Some(20),
                account_number: Some("NL91FAKE0417164300".into()),
                movement_type: Some(MovementType::Tax),
                account_from: None,
                account_to: None,
                amount_min: None,
                amount_max: None,
            }
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// MovementQuery
// ═══════════════════════════════════════════════════════════════════

mod movement_query {
    use super::*;

    #[test]
    fn unset_fields_are_omitted_when_serialized() {
        let q = MovementQuery {
            page_number: Some(1),
            page_size: Some(5),
            account_number: Some("A".into()),
            ..MovementQuery::default()
        };
        let json = serde_json::to_value(&q).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("pageNumber"));
        assert!(obj.contains_key("accountNumber"));
        assert!(!obj.contains_key("movementType"));
        assert!(!obj.contains_key("amountMin"));
    }

    #[test]
    fn amount_in_range_bounds_are_inclusive() {
        let q = MovementQuery {
            amount_min: Some(dec("0")),
            amount_max: Some(dec("500")),
            ..MovementQuery::default()
        };
        assert!(q.amount_in_range(dec("0")));
        assert!(q.amount_in_range(dec("500")));
        assert!(!q.amount_in_range(dec("-0.01")));
        assert!(!q.amount_in_range(dec("500.01")));
    }

    #[test]
    fn amount_in_range_without_bounds_accepts_everything() {
        let q = MovementQuery::default();
        assert!(q.amount_in_range(dec("-999999")));
        assert!(q.amount_in_range(dec("999999")));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings_tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(s.upstream_base_url, "http://127.0.0.1:9090");
        assert_eq!(s.upstream_timeout_secs, 30);
        assert_eq!(s.products_file, None);
        assert_eq!(s.fiscal_transfer_account, DEFAULT_FISCAL_TRANSFER_ACCOUNT);
        assert_eq!(s.log_filter, "info");
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let s = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn overrides_every_key() {
        let s = Settings::from_lookup(lookup(&[
            (settings::ENV_BIND_ADDR, "0.0.0.0:9000"),
            (settings::ENV_UPSTREAM_URL, "https://movements.internal/"),
            (settings::ENV_UPSTREAM_TIMEOUT_SECS, "5"),
            (settings::ENV_PRODUCTS_FILE, "/etc/movements/products.json"),
            (settings::ENV_FISCAL_TRANSFER_ACCOUNT, "NL00TEST0000000009"),
            (settings::ENV_LOG, "debug"),
        ]))
        .unwrap();

        assert_eq!(s.bind_addr.to_string(), "0.0.0.0:9000");
        assert_eq!(s.upstream_base_url, "https://movements.internal");
        assert_eq!(s.upstream_timeout_secs, 5);
        assert_eq!(
            s.products_file.as_deref(),
            Some(std::path::Path::new("/etc/movements/products.json"))
        );
        assert_eq!(s.fiscal_transfer_account, "NL00TEST0000000009");
        assert_eq!(s.log_filter, "debug");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let s = Settings::from_lookup(lookup(&[(settings::ENV_BIND_ADDR, "  ")])).unwrap();
        assert_eq!(s.bind_addr, Settings::default().bind_addr);
    }

    #[test]
    fn invalid_bind_addr_rejected() {
        let err = Settings::from_lookup(lookup(&[(settings::ENV_BIND_ADDR, "localhost")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn non_http_upstream_rejected() {
        let err = Settings::from_lookup(lookup(&[(settings::ENV_UPSTREAM_URL, "ftp://x")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = Settings::from_lookup(lookup(&[(settings::ENV_UPSTREAM_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn non_numeric_timeout_rejected() {
        let err = Settings::from_lookup(lookup(&[(settings::ENV_UPSTREAM_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
