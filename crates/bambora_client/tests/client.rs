use bambora_client::{
    builders::batch_payment_csv::BatchTransaction,
    resources::{
        bank_profiles::BankProfileParams, batch_payments::BatchPaymentOptions,
        batch_reports::BatchReportFilters,
    },
    ApiResponse, Client, ClientError, Config,
};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> Client {
    Client::new(Config {
        base_url: server.base_url(),
        scripts_url: Some(server.base_url()),
        reports_url: Some(server.base_url()),
        merchant_id: "1".to_string(),
        sub_merchant_id: Some("2".to_string()),
    })
    .expect("valid config")
}

#[test]
fn profile_creation_round_trips_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/profiles")
            .header("Authorization", "Passcode MTpmYWtla2V5")
            .header("Content-Type", "application/json")
            .header("Sub-Merchant-Id", "2")
            .json_body(json!({"language": "en", "card": {"name": "Hup Podling"}}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": 1, "message": "Operation Successful"}));
    });

    let client = client_for(&server);
    let response = client
        .profiles("fakekey")
        .create(&json!({"language": "en", "card": {"name": "Hup Podling"}}))
        .expect("transport ok");

    mock.assert();
    assert_eq!(
        response,
        ApiResponse::Success(json!({"code": 1, "message": "Operation Successful"}))
    );
}

#[test]
fn parseable_error_bodies_are_successes_regardless_of_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/payments");
        then.status(402)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": 7, "message": "DECLINE"}));
    });

    let client = client_for(&server);
    let response = client
        .payments("fakekey")
        .create(&json!({"amount": 50, "payment_method": "card"}))
        .expect("transport ok");

    assert_eq!(
        response,
        ApiResponse::Success(json!({"code": 7, "message": "DECLINE"}))
    );
}

#[test]
fn unparsable_bodies_degrade_to_the_failure_shape() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/payments/10000001");
        then.status(500)
            .header("Content-Type", "application/json")
            .body("<html>Gateway Timeout</html>");
    });

    let client = client_for(&server);
    let response = client
        .payments("fakekey")
        .get("10000001")
        .expect("transport ok");

    assert_eq!(
        response,
        ApiResponse::Failure {
            status: 500,
            body: "<html>Gateway Timeout</html>".to_string(),
        }
    );
}

#[test]
fn unknown_content_types_are_errors_carrying_the_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/profiles/abc123");
        then.status(200)
            .header("Content-Type", "application/example")
            .body("X");
    });

    let client = client_for(&server);
    let error = client
        .profiles("fakekey")
        .get("abc123")
        .expect_err("must fail");

    match error.current_context() {
        ClientError::UnknownContentType { content_type, body } => {
            assert_eq!(content_type, "application/example");
            assert_eq!(body, "X");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bank_profile_responses_normalize_query_string_keys() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/scripts/payment_profile.asp")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body_includes("operationType=N")
            .body_includes("passCode=fakekey")
            .body_includes("ordName=Hup+Podling");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("responseCode=1&responseMessage=Operation+Successful&ordName=Hup");
    });

    let client = client_for(&server);
    let response = client
        .bank_profiles("fakekey")
        .create(&BankProfileParams {
            customer_code: Some("1234".to_string()),
            bank_account_type: Some("CA".to_string()),
            name: Some("Hup Podling".to_string()),
            ..BankProfileParams::default()
        })
        .expect("transport ok");

    mock.assert();
    assert_eq!(
        response,
        ApiResponse::Success(json!({
            "response_code": "1",
            "response_message": "Operation Successful",
            "name": "Hup",
        }))
    );
}

#[test]
fn bank_profile_plain_text_errors_degrade_to_the_failure_shape() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/scripts/payment_profile.asp");
        then.status(500)
            .header("Content-Type", "text/html")
            .body("GARTHIM! ATTACK!");
    });

    let client = client_for(&server);
    let response = client
        .bank_profiles("fakekey")
        .create(&BankProfileParams::default())
        .expect("transport ok");

    assert_eq!(
        response,
        ApiResponse::Failure {
            status: 500,
            body: "GARTHIM! ATTACK!".to_string(),
        }
    );
}

#[test]
fn bank_profile_requests_send_no_authorization_header() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/scripts/payment_profile.asp")
            .header_missing("Authorization");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("responseCode=1");
    });

    let client = client_for(&server);
    let response = client
        .bank_profiles("fakekey")
        .create(&BankProfileParams::default())
        .expect("transport ok");

    assert!(response.is_success());
}

#[test]
fn batch_reports_post_xml_and_gain_message_lists() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/scripts/reporting/report.aspx")
            .header("Content-Type", "application/xml")
            .body_includes("<?xml version='1.0' encoding='utf-8'?>")
            .body_includes("<rptFilterBy1>batch_id</rptFilterBy1>")
            .body_includes("<rptVersion>2.0</rptVersion>")
            .body_includes("<passCode>fakekey</passCode>")
            .body_includes("<sessionSource>external</sessionSource>");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "version": "1.0",
                "code": 1,
                "record": [{"trans_id": 7, "message_id": "1,2"}],
            }));
    });

    let client = client_for(&server);
    let response = client
        .batch_reports("fakekey")
        .show(&BatchReportFilters {
            rpt_filter_by_1: Some("batch_id".to_string()),
            rpt_filter_value_1: Some(json!(1)),
            rpt_operation_type_1: Some("EQ".to_string()),
            service_name: Some("BatchPaymentsEFT".to_string()),
            ..BatchReportFilters::default()
        })
        .expect("transport ok");

    mock.assert();
    let report = response.value().expect("success payload");
    assert_eq!(
        report.pointer("/record/0/messages"),
        Some(&json!(["Transaction approved", "Transaction declined"]))
    );
}

#[test]
fn zero_result_batch_reports_gain_an_empty_record_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/scripts/reporting/report.aspx");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"version": "1.0", "code": 1}));
    });

    let client = client_for(&server);
    let response = client
        .batch_reports("fakekey")
        .show(&BatchReportFilters::default())
        .expect("transport ok");

    assert_eq!(
        response.value().and_then(|report| report.get("record")),
        Some(&json!([]))
    );
}

#[test]
fn batch_payments_upload_multipart_files() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/batchpayments")
            .header("Authorization", "Passcode MTpmYWtla2V5")
            .body_includes("name=\"criteria\"")
            .body_includes("\"process_now\":1")
            .body_includes("filename=\"merchant_2.txt\"")
            .body_includes("E,D,12345,123,123456789,10000,1234,Hup Podling");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": 1, "message": "File successfully received"}));
    });

    let client = client_for(&server);
    let response = client
        .batch_payments("fakekey")
        .create(
            &[BatchTransaction {
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
            }],
            BatchPaymentOptions::default(),
        )
        .expect("transport ok");

    mock.assert();
    assert!(response.is_success());
}

#[test]
fn merchant_report_authentication_failures_become_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/reports/merchants/372110001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": 21, "category": 4, "message": "Authentication failed"}));
    });

    let client = client_for(&server);
    let error = client
        .merchant_reports("fakekey")
        .get("372110001")
        .expect_err("must fail");

    assert!(matches!(
        error.current_context(),
        ClientError::InvalidAuthentication { .. }
    ));
}

#[test]
fn merchant_report_ids_are_validated_before_any_request() {
    let server = MockServer::start();
    let client = client_for(&server);

    let error = client
        .merchant_reports("fakekey")
        .get("not-a-merchant")
        .expect_err("must fail");

    assert!(matches!(
        error.current_context(),
        ClientError::InvalidMerchantId
    ));
}
