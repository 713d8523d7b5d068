//! Validation utilities for the Fleet Ops Dashboard
//!
//! Business checks performed client-side before a mutation is
//! submitted; everything else is delegated to the backend.

use crate::models::{AdjustmentDirection, AdjustmentType};

// ============================================================================
// Stock Validations
// ============================================================================

/// Validate a stock adjustment before submission
///
/// OUT-direction adjustments (damage, loss) may not exceed the part's
/// current stock; corrections move either way and are not capped.
pub fn validate_adjustment(
    adjustment_type: AdjustmentType,
    quantity: u32,
    current_stock: u32,
) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Adjustment quantity must be positive");
    }
    if adjustment_type.direction() == AdjustmentDirection::Out && quantity > current_stock {
        return Err("Adjustment quantity must not exceed current stock");
    }
    Ok(())
}

/// Validate a stock usage entry before submission
pub fn validate_usage_quantity(quantity_used: u32, current_stock: u32) -> Result<(), &'static str> {
    if quantity_used == 0 {
        return Err("Quantity used must be positive");
    }
    if quantity_used > current_stock {
        return Err("Quantity used must not exceed available stock");
    }
    Ok(())
}

/// Validate a part SKU (3-32 chars, uppercase alphanumeric plus dashes)
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.len() < 3 {
        return Err("SKU must be at least 3 characters");
    }
    if sku.len() > 32 {
        return Err("SKU must be at most 32 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("SKU must be uppercase alphanumeric with dashes only");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate Kenyan phone number format
/// Accepts: 0712345678, 0712-345-678, +254712345678
pub fn validate_kenyan_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Local format: 10 digits starting with 0 (e.g., 0712345678)
    if digits.len() == 10 && digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 254
    if digits.len() == 12 && digits.starts_with("254") {
        return Ok(());
    }

    Err("Invalid Kenyan phone number format")
}
