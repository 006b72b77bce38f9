//! CSV bodies for the batch payment upload.
//!
//! The gateway takes one transaction per row, positional fields only: no
//! header row, CRLF line endings, and quoting only where a field embeds a
//! comma or quote.

use serde::Serialize;

use crate::errors::{ClientError, CustomResult};

/// One batch transaction row. Field order here is the wire order the
/// gateway requires; it is never validated server-side, so a misordered
/// row debits the wrong field.
#[derive(Debug, Clone, Serialize)]
pub struct BatchTransaction {
    /// `E` for EFT (CAD) or `A` for ACH (USD).
    pub super_type: String,
    /// `C` credit or `D` debit.
    pub transaction_type: String,
    pub institution_number: String,
    pub transit_number: String,
    pub account_number: String,
    /// Amount in minor units.
    pub amount: i64,
    pub reference_number: String,
    pub recipient_name: String,
    pub customer_code: String,
    pub dynamic_description: String,
}

/// Renders transactions as the upload file contents.
pub fn build(transactions: &[BatchTransaction]) -> CustomResult<String, ClientError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for transaction in transactions {
        writer
            .serialize(transaction)
            .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))?;
    String::from_utf8(bytes).map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction() -> BatchTransaction {
        BatchTransaction {
            super_type: "E".to_string(),
            transaction_type: "D".to_string(),
            institution_number: "12345".to_string(),
            transit_number: "123".to_string(),
            account_number: "123456789".to_string(),
            amount: 10000,
            reference_number: "1234".to_string(),
            recipient_name: "Hup Podling".to_string(),
            customer_code: "02355E2e58Bf488EAB4EaFAD7083dB6A".to_string(),
            dynamic_description: "The Skeksis".to_string(),
        }
    }

    #[test]
    fn renders_one_crlf_terminated_row_per_transaction() {
        let csv = build(&[transaction()]).expect("buildable");
        assert_eq!(
            csv,
            "E,D,12345,123,123456789,10000,1234,Hup Podling,\
             02355E2e58Bf488EAB4EaFAD7083dB6A,The Skeksis\r\n"
        );
    }

    #[test]
    fn emits_no_header_row() {
        let csv = build(&[transaction(), transaction()]).expect("buildable");
        assert_eq!(csv.matches("\r\n").count(), 2);
        assert!(csv.starts_with("E,D,"));
    }

    #[test]
    fn quotes_only_fields_that_need_it() {
        let mut with_comma = transaction();
        with_comma.recipient_name = "Podling, Hup".to_string();
        let csv = build(&[with_comma]).expect("buildable");
        assert!(csv.contains("\"Podling, Hup\""));
        assert!(!csv.contains("\"12345\""));
    }

    #[test]
    fn preserves_leading_zeroes_in_bank_fields() {
        let mut transaction = transaction();
        transaction.institution_number = "001".to_string();
        transaction.account_number = "09400313371".to_string();
        let csv = build(&[transaction]).expect("buildable");
        assert!(csv.starts_with("E,D,001,123,09400313371,"));
    }
}
