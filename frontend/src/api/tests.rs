#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn employee_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn time_clock_json(id: u64, kind: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": 1,
        "type": kind,
        "timestamp": "2025/3/3 09:00:00",
        "created_at": "2025-03-03T09:00:00+09:00"
    })
}

fn clock_request_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": 1,
        "employee_name": "Aoki",
        "clock_id": 10,
        "type": "clock_in",
        "time": "2025-03-03T08:55:00+09:00",
        "status": status,
        "reason": "forgot to clock in",
        "created_at": "2025-03-03T10:00:00+09:00",
        "updated_at": "2025-03-03T10:00:00+09:00"
    })
}

fn allowance_type_json(id: u64, kind: &str, rate: Option<f64>) -> serde_json::Value {
    json!({
        "id": id,
        "company_id": 1,
        "name": "営業手当",
        "type": kind,
        "description": "sales",
        "commission_rate": rate,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn non_success_status_uses_error_field_from_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/9");
        then.status(404).json_body(json!({ "error": "employee not found" }));
    });

    let err = api_client(&server).get_employee(9).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Server);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "employee not found");
}

#[tokio::test]
async fn non_success_status_uses_message_field_when_error_missing() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/clock_requests/3/approve");
        then.status(400).json_body(json!({ "message": "request already reviewed" }));
    });

    let err = api_client(&server)
        .approve_clock_request(3)
        .await
        .unwrap_err();
    assert_eq!(err.message, "request already reviewed");
}

#[tokio::test]
async fn non_success_status_without_json_body_falls_back_to_status_code() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(503).body("service unavailable");
    });

    let err = api_client(&server).get_employees().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Server);
    assert_eq!(err.message, "HTTP error! Status: 503");
}

#[tokio::test]
async fn success_returns_parsed_body_unchanged() {
    let server = MockServer::start_async().await;
    let body = json!({ "nested": { "list": [1, 2, 3] }, "flag": true });
    server.mock(|when, then| {
        when.method(GET).path("/api/anything");
        then.status(200).json_body(body.clone());
    });

    let value: serde_json::Value = api_client(&server).get_json("/anything").await.unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn success_with_unexpected_shape_is_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({ "not": "a list" }));
    });

    let err = api_client(&server).get_employees().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = client.get_employees().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert!(err.status.is_none());
}

#[tokio::test]
async fn employee_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!([employee_json(1, "Aoki")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/1");
        then.status(200).json_body(employee_json(1, "Aoki"));
    });
    let payroll = server.mock(|when, then| {
        when.method(GET)
            .path("/api/employees/1/payroll")
            .query_param("year", "2025")
            .query_param("month", "3");
        then.status(200).json_body(json!({
            "employee_name": "Aoki",
            "gross_salary": 300000,
            "total_allowance": 20000,
            "health_insurance": 15000,
            "pension": 27450,
            "total_deductions": 42450,
            "net_salary": 277550
        }));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/employees/1/attendances")
            .json_body(json!({
                "check_in": "2025-03-03T09:00:00+09:00",
                "check_out": "2025-03-03T18:00:00+09:00"
            }));
        then.status(201).json_body(json!({
            "id": 5,
            "check_in": "2025-03-03T09:00:00+09:00",
            "check_out": "2025-03-03T18:00:00+09:00"
        }));
    });

    let client = api_client(&server);
    let employees = client.get_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Aoki");
    assert_eq!(client.get_employee(1).await.unwrap().id, 1);
    let snapshot = client.get_payroll(1, 2025, 3).await.unwrap();
    assert_eq!(snapshot.net_salary, 277550.0);
    payroll.assert();
    let attendance = client
        .create_attendance(
            1,
            &CreateAttendance {
                check_in: "2025-03-03T09:00:00+09:00".into(),
                check_out: "2025-03-03T18:00:00+09:00".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(attendance.id, 5);
}

#[tokio::test]
async fn time_clock_query_carries_employee_and_period() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/time_clocks")
            .query_param("employee_id", "1")
            .query_param("year", "2025")
            .query_param("month", "3");
        then.status(200)
            .json_body(json!([time_clock_json(10, "clock_in"), time_clock_json(11, "clock_out")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/time_clocks/10");
        then.status(200).json_body(time_clock_json(10, "clock_in"));
    });

    let client = api_client(&server);
    let clocks = client.get_time_clocks(1, Some(2025), Some(3)).await.unwrap();
    assert_eq!(clocks.len(), 2);
    assert_eq!(clocks[1].kind, ClockType::ClockOut);
    list.assert();
    assert_eq!(client.get_time_clock(10).await.unwrap().kind, ClockType::ClockIn);
}

#[tokio::test]
async fn create_time_clock_without_notify_sends_no_notify_fields() {
    let server = MockServer::start_async().await;
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/time_clocks").json_body(json!({
            "employee_id": 1,
            "type": "clock_in",
            "timestamp": "2025-03-03T09:00:00+09:00",
            "notify": false
        }));
        then.status(201).json_body(time_clock_json(12, "clock_in"));
    });

    let created = api_client(&server)
        .create_time_clock(&CreateTimeClock {
            employee_id: 1,
            kind: ClockType::ClockIn,
            timestamp: "2025-03-03T09:00:00+09:00".into(),
            notify: false,
            notify_at: None,
            delay_h: None,
            delay_m: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 12);
    create.assert();
}

#[tokio::test]
async fn create_time_clock_with_delay_sends_delay_fields() {
    let server = MockServer::start_async().await;
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/time_clocks").json_body(json!({
            "employee_id": 1,
            "type": "break_begin",
            "timestamp": "2025-03-03T12:00:00+09:00",
            "notify": true,
            "delay_h": 1,
            "delay_m": 0
        }));
        then.status(201).json_body(time_clock_json(13, "break_begin"));
    });

    api_client(&server)
        .create_time_clock(&CreateTimeClock {
            employee_id: 1,
            kind: ClockType::BreakBegin,
            timestamp: "2025-03-03T12:00:00+09:00".into(),
            notify: true,
            notify_at: None,
            delay_h: Some(1),
            delay_m: Some(0),
        })
        .await
        .unwrap();
    create.assert();
}

#[tokio::test]
async fn clock_request_workflow_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let submit = server.mock(|when, then| {
        when.method(POST).path("/api/time_clocks/10/requests").json_body(json!({
            "employee_id": 1,
            "type": "clock_in",
            "time": "2025-03-03T08:55:00+09:00",
            "reason": "forgot to clock in"
        }));
        then.status(201).json_body(clock_request_json(3, "pending"));
    });
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/clock_requests")
            .query_param("status", "pending");
        then.status(200).json_body(json!([clock_request_json(3, "pending")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/clock_requests/3/approve");
        then.status(200).json_body(json!({
            "message": "request approved",
            "request": clock_request_json(3, "approved")
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/clock_requests/4/reject");
        then.status(200).json_body(json!({
            "message": "request rejected",
            "request": clock_request_json(4, "rejected")
        }));
    });

    let client = api_client(&server);
    let request = client
        .create_clock_request(
            10,
            &CreateClockRequest {
                employee_id: 1,
                kind: ClockType::ClockIn,
                time: "2025-03-03T08:55:00+09:00".into(),
                reason: "forgot to clock in".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    submit.assert();

    let pending = client
        .get_clock_requests(&ClockRequestFilter {
            employee_id: None,
            status: Some(RequestStatus::Pending),
        })
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].employee_name.as_deref(), Some("Aoki"));
    filtered.assert();

    assert_eq!(
        client.approve_clock_request(3).await.unwrap().message,
        "request approved"
    );
    assert_eq!(
        client.reject_clock_request(4).await.unwrap().message,
        "request rejected"
    );
}

#[tokio::test]
async fn allowance_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/allowance_types");
        then.status(200).json_body(json!([
            allowance_type_json(1, "commission", Some(0.075)),
            allowance_type_json(2, "fixed", None)
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/allowance_types/1");
        then.status(200)
            .json_body(allowance_type_json(1, "commission", Some(0.075)));
    });
    let create_type = server.mock(|when, then| {
        when.method(POST).path("/api/allowance_types").json_body(json!({
            "name": "営業手当",
            "type": "commission",
            "description": "sales",
            "commission_rate": 0.1
        }));
        then.status(201)
            .json_body(allowance_type_json(3, "commission", Some(0.1)));
    });
    let update_type = server.mock(|when, then| {
        when.method(PUT).path("/api/allowance_types/2").json_body(json!({
            "name": "住宅手当",
            "type": "fixed",
            "description": ""
        }));
        then.status(200).json_body(allowance_type_json(2, "fixed", None));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/allowance_types/2");
        then.status(200).json_body(json!({ "message": "deleted" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employee_allowances");
        then.status(200).json_body(json!([{
            "id": 1,
            "employee_id": 1,
            "allowance_type_id": 1,
            "amount": 0,
            "commission_rate": 0.075,
            "year": 2025,
            "month": 3,
            "employee_name": "Aoki",
            "allowance_type_name": "営業手当"
        }]));
    });
    let assign = server.mock(|when, then| {
        when.method(POST).path("/api/employee_allowances").json_body(json!({
            "employee_id": 1,
            "allowance_type_id": 2,
            "amount": 10000,
            "year": 2025,
            "month": 4
        }));
        then.status(201).json_body(json!({
            "id": 2,
            "employee_id": 1,
            "allowance_type_id": 2,
            "amount": 10000,
            "year": 2025,
            "month": 4
        }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employee_allowances/2");
        then.status(200).json_body(json!({ "message": "deleted" }));
    });

    let client = api_client(&server);
    let types = client.get_allowance_types().await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].commission_rate, Some(0.075));
    assert_eq!(client.get_allowance_type(1).await.unwrap().kind, AllowanceKind::Commission);

    client
        .create_allowance_type(&AllowanceTypeInput {
            name: "営業手当".into(),
            kind: AllowanceKind::Commission,
            description: "sales".into(),
            commission_rate: Some(0.1),
        })
        .await
        .unwrap();
    create_type.assert();
    client
        .update_allowance_type(
            2,
            &AllowanceTypeInput {
                name: "住宅手当".into(),
                kind: AllowanceKind::Fixed,
                description: String::new(),
                commission_rate: None,
            },
        )
        .await
        .unwrap();
    update_type.assert();
    assert_eq!(client.delete_allowance_type(2).await.unwrap().message, "deleted");

    let grants = client.get_employee_allowances().await.unwrap();
    assert_eq!(grants[0].type_name().as_deref(), Some("営業手当"));
    let created = client
        .create_employee_allowance(&EmployeeAllowanceInput {
            employee_id: 1,
            allowance_type_id: 2,
            amount: 10000,
            commission_rate: None,
            year: 2025,
            month: 4,
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(2));
    assign.assert();
    client.delete_employee_allowance(2).await.unwrap();
}

#[tokio::test]
async fn auth_and_work_record_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let login = server.mock(|when, then| {
        when.method(POST).path("/api/login").json_body(json!({
            "email": "admin@example.com",
            "password": "secret"
        }));
        then.status(200).json_body(json!({ "message": "Login successful" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/current_account");
        then.status(200).json_body(json!({
            "id": 1,
            "email": "admin@example.com",
            "is_admin": true,
            "company": { "id": 1, "name": "Acme" }
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/logout");
        then.status(200).json_body(json!({ "message": "Logged out" }));
    });
    let records = server.mock(|when, then| {
        when.method(GET)
            .path("/api/work_records")
            .query_param("employee_id", "1");
        then.status(200).json_body(json!([{
            "id": 1,
            "employee_id": 1,
            "date": "2025-03-03T00:00:00Z",
            "clock_in": "2025-03-03T09:00:00+09:00",
            "clock_out": "2025-03-03T18:00:00+09:00",
            "break_minutes": 60,
            "work_minutes": 480
        }]));
    });

    let client = api_client(&server);
    client
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    login.assert();
    let profile = client.get_current_account().await.unwrap();
    assert!(profile.is_admin);
    assert_eq!(profile.company_name(), Some("Acme"));
    client.logout().await.unwrap();

    let list = client.get_work_records(1).await.unwrap();
    assert_eq!(list[0].work_minutes, 480);
    records.assert();
}

#[tokio::test]
async fn null_list_bodies_decode_as_empty() {
    let server = MockServer::start_async().await;
    for path in [
        "/api/employees",
        "/api/time_clocks",
        "/api/work_records",
        "/api/clock_requests",
        "/api/allowance_types",
        "/api/employee_allowances",
    ] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body("null");
        });
    }

    let client = api_client(&server);
    assert!(client.get_employees().await.unwrap().is_empty());
    assert!(client
        .get_time_clocks(1, Some(2025), Some(3))
        .await
        .unwrap()
        .is_empty());
    assert!(client.get_work_records(1).await.unwrap().is_empty());
    assert!(client
        .get_clock_requests(&ClockRequestFilter::default())
        .await
        .unwrap()
        .is_empty());
    assert!(client.get_allowance_types().await.unwrap().is_empty());
    assert!(client.get_employee_allowances().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_list_body_decodes_as_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/time_clocks");
        then.status(200);
    });

    let list = api_client(&server).get_time_clocks(1, None, None).await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn payroll_with_fractional_amounts_decodes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/employees/1/payroll")
            .query_param("year", "2025")
            .query_param("month", "3");
        then.status(200).json_body(json!({
            "employee_name": "山田太郎",
            "gross_salary": 300925.875,
            "total_allowance": 925.875,
            "health_insurance": 14946.25,
            "pension": 27525.5,
            "total_deductions": 42471.75,
            "net_salary": 258454.125
        }));
    });

    let slip = api_client(&server).get_payroll(1, 2025, 3).await.unwrap();
    assert_eq!(slip.gross_salary, 300925.875);
    assert_eq!(slip.net_salary, 258454.125);
}
