//! Per-format request body builders.

pub mod batch_payment_csv;
pub mod multipart;
pub mod www_form;
pub mod xml;
