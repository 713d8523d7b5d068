//! Form coercion and pre-submission validation tests
//!
//! Form fields stay strings until submission; coercion and the stock
//! business checks run before any request is made.

use fleet_ops_dashboard::screens::{AdjustmentForm, PartForm, SupplierForm, UsageForm, UserForm, VehicleForm};
use shared::{AdjustmentType, Part, UnitOfMeasure};

use chrono::Utc;
use rust_decimal::Decimal;

fn part(id: i64, current_stock: u32) -> Part {
    Part {
        id,
        sku: format!("BP-{:03}", id),
        name: "Brake Pad".to_string(),
        description: None,
        category: None,
        category_name: None,
        supplier: None,
        supplier_name: None,
        unit_of_measure: UnitOfMeasure::Set,
        unit_cost: Decimal::from(1500),
        current_stock,
        min_stock_level: 5,
        max_stock_level: 100,
        location: None,
        is_low_stock: current_stock <= 5,
        stock_value: Decimal::from(current_stock) * Decimal::from(1500),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Blank optional fields coerce to None so they serialize as null
#[test]
fn test_part_form_blank_optionals() {
    let form = PartForm {
        name: "Brake Pad".to_string(),
        sku: "BP-001".to_string(),
        unit_cost: "1500".to_string(),
        ..PartForm::default()
    };
    let input = form.to_input().unwrap();
    assert_eq!(input.description, None);
    assert_eq!(input.category, None);
    assert_eq!(input.supplier, None);
    assert_eq!(input.location, None);
    assert_eq!(input.current_stock, 0);
}

/// Serialized payloads carry explicit nulls for blank optionals
#[test]
fn test_part_input_serializes_nulls() {
    let form = PartForm {
        name: "Brake Pad".to_string(),
        sku: "BP-001".to_string(),
        unit_cost: "1500".to_string(),
        ..PartForm::default()
    };
    let json = serde_json::to_value(form.to_input().unwrap()).unwrap();
    assert!(json["description"].is_null());
    assert!(json["supplier"].is_null());
    assert_eq!(json["unit_cost"], "1500");
}

/// Malformed SKUs are rejected client-side
#[test]
fn test_part_form_sku_check() {
    let form = PartForm {
        name: "Brake Pad".to_string(),
        sku: "bp 001".to_string(),
        unit_cost: "1500".to_string(),
        ..PartForm::default()
    };
    assert!(form.to_input().is_err());
}

/// A damage adjustment larger than current stock is rejected before
/// any request is built
#[test]
fn test_out_adjustment_rejected_before_submission() {
    let form = AdjustmentForm {
        adjustment_type: AdjustmentType::Damage,
        quantity: "8".to_string(),
        reason: "Water damage in store".to_string(),
        reference_number: String::new(),
    };
    assert!(form.to_input(1, 3).is_err());

    // The same quantity as a purchase is fine
    let form = AdjustmentForm {
        adjustment_type: AdjustmentType::Purchase,
        ..form
    };
    let input = form.to_input(1, 3).unwrap();
    assert_eq!(input.quantity, 8);
    assert_eq!(input.part, 1);
}

/// Corrections move either way and are not capped by current stock
#[test]
fn test_correction_adjustment_uncapped() {
    let form = AdjustmentForm {
        adjustment_type: AdjustmentType::Correction,
        quantity: "50".to_string(),
        reason: "Physical count".to_string(),
        reference_number: String::new(),
    };
    assert!(form.to_input(1, 3).is_ok());
}

/// Usage entries check the quantity against the selected part's stock
#[test]
fn test_usage_form_stock_cap() {
    let parts = vec![part(1, 3)];
    let form = UsageForm {
        part: "1".to_string(),
        quantity_used: "4".to_string(),
        used_by: "J. Mwangi".to_string(),
        usage_date: "2026-08-20".to_string(),
        ..UsageForm::default()
    };
    assert!(form.to_input(&parts).is_err());

    let form = UsageForm {
        quantity_used: "3".to_string(),
        ..form
    };
    let input = form.to_input(&parts).unwrap();
    assert_eq!(input.quantity_used, 3);
}

/// A usage entry without a selected part never reaches the API
#[test]
fn test_usage_form_requires_part() {
    let form = UsageForm {
        part: String::new(),
        quantity_used: "1".to_string(),
        used_by: "J. Mwangi".to_string(),
        usage_date: "2026-08-20".to_string(),
        ..UsageForm::default()
    };
    assert!(form.to_input(&[part(1, 10)]).is_err());
}

/// Supplier forms run the declarative checks at submit time
#[test]
fn test_supplier_form_validation() {
    let form = SupplierForm {
        name: "Kamau Auto Spares".to_string(),
        email: "kamauspares.co.ke".to_string(),
        ..SupplierForm::default()
    };
    assert!(form.to_input().is_err());

    let form = SupplierForm {
        email: "sales@kamauspares.co.ke".to_string(),
        ..form
    };
    let input = form.to_input().unwrap();
    assert_eq!(input.name, "Kamau Auto Spares");
    assert_eq!(input.contact_person, None);
}

/// User forms require a well-formed email
#[test]
fn test_user_form_validation() {
    let form = UserForm {
        name: "Grace Njeri".to_string(),
        email: "grace@fleetops.co.ke".to_string(),
        ..UserForm::default()
    };
    assert!(form.to_input().is_ok());

    let form = UserForm {
        email: "grace".to_string(),
        ..form
    };
    assert!(form.to_input().is_err());
}

/// Vehicle forms coerce year, prices, and optional inspection dates
#[test]
fn test_vehicle_form_coercion() {
    let form = VehicleForm {
        make: "Isuzu".to_string(),
        model: "D-Max".to_string(),
        year: "2023".to_string(),
        registration_number: "KDD 456B".to_string(),
        purchase_price: "4200000".to_string(),
        current_value: "3900000".to_string(),
        last_inspection_date: "2026-06-01".to_string(),
        ..VehicleForm::default()
    };
    let input = form.to_input().unwrap();
    assert_eq!(input.year, 2023);
    assert_eq!(
        input.last_inspection_date,
        chrono::NaiveDate::from_ymd_opt(2026, 6, 1)
    );
    assert_eq!(input.next_inspection_date, None);

    let form = VehicleForm {
        last_inspection_date: "June 2026".to_string(),
        ..form
    };
    assert!(form.to_input().is_err());
}
