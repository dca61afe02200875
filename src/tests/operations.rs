// End-to-end operation tests against a mock CRM endpoint.

use httpmock::prelude::*;

use crate::error::Error;
use crate::record::Record;
use crate::tests::common::{mock_auth, test_client, TEST_TOKEN};

const INSERT_OK: &str = r#"<response uri="/crm/private/xml/Leads/insertRecords">
  <result>
    <message>Record(s) added successfully</message>
    <recorddetail>
      <FL val="Id">508020000000067003</FL>
    </recorddetail>
  </result>
</response>"#;

const RECORDS_OK: &str = r#"<response uri="/crm/private/xml/Leads/getRecords">
  <result>
    <Leads>
      <row no="1"><FL val="Last_Name">Smith</FL></row>
    </Leads>
  </result>
</response>"#;

const VENDOR_ERROR: &str = r#"<response uri="/crm/private/xml/Leads/getRecords">
  <error>
    <code>4834</code>
    <message>Invalid Ticket Id</message>
  </error>
</response>"#;

#[tokio::test]
async fn unknown_scope_fails_before_any_network_call() {
    let server = MockServer::start_async().await;
    let auth = mock_auth(&server).await;
    let client = test_client(&server);

    let err = client.get_records("Tickets").await.unwrap_err();
    assert!(matches!(err, Error::Scope(ref name) if name == "Tickets"));

    let record = Record::new().field("Last_Name", "Smith");
    let err = client.insert_records("tickets", record).await.unwrap_err();
    assert!(matches!(err, Error::Scope(_)));

    assert_eq!(auth.hits_async().await, 0);
}

#[tokio::test]
async fn insert_records_returns_vendor_payload() {
    let server = MockServer::start_async().await;
    let auth = mock_auth(&server).await;
    let insert = server
        .mock_async(|when, then| {
            when.method(POST).path("/crm/Leads/insertRecords");
            then.status(200).body(INSERT_OK);
        })
        .await;

    let client = test_client(&server);
    let record = Record::new()
        .field("Last_Name", "Smith")
        .field("Company", "Acme");
    let response = client.insert_records("Leads", record).await.unwrap();

    let result = response.child("result").unwrap();
    assert_eq!(
        result.child_text("message"),
        Some("Record(s) added successfully")
    );
    assert_eq!(auth.hits_async().await, 1);
    assert_eq!(insert.hits_async().await, 1);
}

#[tokio::test]
async fn update_records_posts_to_update_operation() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    let update = server
        .mock_async(|when, then| {
            when.method(POST).path("/crm/Contacts/updateRecords");
            then.status(200).body(INSERT_OK);
        })
        .await;

    let client = test_client(&server);
    let records = vec![
        Record::new().field("Last_Name", "Smith"),
        Record::new().field("Last_Name", "Jones"),
    ];
    client.update_records("Contacts", records).await.unwrap();

    assert_eq!(update.hits_async().await, 1);
}

#[tokio::test]
async fn read_operations_carry_the_auth_token() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    let all = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/crm/Leads/getRecords")
                .query_param("authtoken", TEST_TOKEN);
            then.status(200).body(RECORDS_OK);
        })
        .await;
    let mine = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/crm/Leads/getMyRecords")
                .query_param("authtoken", TEST_TOKEN);
            then.status(200).body(RECORDS_OK);
        })
        .await;

    let client = test_client(&server);
    let response = client.get_records("Leads").await.unwrap();
    client.get_my_records("Leads").await.unwrap();

    let rows = response
        .child("result")
        .and_then(|r| r.child("Leads"))
        .unwrap()
        .children_named("row")
        .count();
    assert_eq!(rows, 1);
    assert_eq!(all.hits_async().await, 1);
    assert_eq!(mine.hits_async().await, 1);
}

#[tokio::test]
async fn get_record_by_id_passes_the_id_param() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    let by_id = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/crm/Potentials/getRecordById")
                .query_param("authtoken", TEST_TOKEN)
                .query_param("id", "508020000000067003");
            then.status(200).body(RECORDS_OK);
        })
        .await;

    let client = test_client(&server);
    client
        .get_record_by_id("Potentials", "508020000000067003")
        .await
        .unwrap();

    assert_eq!(by_id.hits_async().await, 1);
}

#[tokio::test]
async fn vendor_rejection_in_a_2xx_response_is_an_error() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/crm/Leads/getRecords");
            then.status(200).body(VENDOR_ERROR);
        })
        .await;

    let client = test_client(&server);
    let err = client.get_records("Leads").await.unwrap_err();
    match err {
        Error::Vendor { code, message } => {
            assert_eq!(message, "Invalid Ticket Id");
            assert_eq!(code.as_deref(), Some("4834"));
        }
        other => panic!("expected vendor error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_status_is_a_request_error() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/crm/Leads/getRecords");
            then.status(500).body("internal error");
        })
        .await;

    let client = test_client(&server);
    let err = client.get_records("Leads").await.unwrap_err();
    assert!(matches!(err, Error::Request { status: 500 }));
}
