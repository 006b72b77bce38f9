//! One resource client per gateway endpoint family.

pub mod bank_profiles;
pub mod batch_payments;
pub mod batch_reports;
pub mod merchant_reports;
pub mod payments;
pub mod profiles;
