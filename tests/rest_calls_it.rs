mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use mdp_client::{
	auth::{AppointmentId, PatientId, PracticeId},
	client::DEFAULT_DEPARTMENT_LIMIT,
	config::ApiVersion,
	error::{AuthError, DecodeError, Error, HttpError},
	model::DepartmentsResponse,
	request::ApiRequest,
};

const PRACTICE_LIST: &str =
	"{\"practiceinfo\":[{\"practiceid\":\"195900\",\"name\":\"Test Practice\"}],\"totalcount\":1}";

fn practice(id: &str) -> PracticeId {
	PracticeId::new(id).expect("Practice fixture should be valid.")
}

#[tokio::test]
async fn practice_list_builds_registry() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let practices = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/1/practiceinfo").header("authorization", "Bearer tok");
			then.status(200).header("content-type", "application/json").body(PRACTICE_LIST);
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let registry = client.practices(&practice("1")).await.expect("Practice list should load.");

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.name("195900"), Some("Test Practice"));

	token.assert_async().await;
	practices.assert_async().await;
}

#[tokio::test]
async fn departments_follow_registry_and_reuse_token() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let practices = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/1/practiceinfo");
			then.status(200).header("content-type", "application/json").body(PRACTICE_LIST);
		})
		.await;
	let departments = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/preview1/195900/departments")
				.query_param("limit", "15")
				.header("authorization", "Bearer tok");
			then.status(200).header("content-type", "application/json").body(
				"{\"departments\":[{\"departmentid\":\"102\",\"name\":\"Cardiology\",\"state\":\"MA\"}],\"totalcount\":1}",
			);
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let registry = client.practices(&practice("1")).await.expect("Practice list should load.");
	let all = client
		.departments_for(&registry, DEFAULT_DEPARTMENT_LIMIT)
		.await
		.expect("Departments should load for every registered practice.");
	let listed: &DepartmentsResponse =
		all.get("195900").expect("Registered practice should have departments.");

	assert_eq!(listed.departments.len(), 1);
	assert_eq!(listed.departments[0].name, "Cardiology");
	assert_eq!(listed.totalcount, Some(1));

	token.assert_calls_async(1).await;
	practices.assert_async().await;
	departments.assert_async().await;
}

#[tokio::test]
async fn care_plan_requests_json() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let care_plan = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/preview1/195900/ccda/34718/patientcareplan")
				.header("accept", "application/json")
				.header("authorization", "Bearer tok");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"patientcareplan\":{\"goals\":[\"walk daily\"]}}");
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let plan = client
		.care_plan(&practice("195900"), &PatientId::new("34718").expect("Patient should be valid."))
		.await
		.expect("Care plan should load.");

	assert_eq!(plan.0["patientcareplan"]["goals"][0], "walk daily");

	care_plan.assert_async().await;
}

#[tokio::test]
async fn appointment_note_posts_form_body() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::V1, "tok").await;
	let note = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/195900/appointments/1/notes")
				.header("content-type", "application/x-www-form-urlencoded")
				.header("authorization", "Bearer tok")
				.body("notetext=Hello%20world%21");
			then.status(200).header("content-type", "application/json").body("{\"success\":true}");
		})
		.await;
	let client = build_test_client(&server, ApiVersion::V1);
	let response = client
		.set_appointment_note(
			&practice("195900"),
			&AppointmentId::new("1").expect("Appointment should be valid."),
			"Hello world!",
		)
		.await
		.expect("Appointment note should be accepted.");

	assert_eq!(response.0["success"], true);

	note.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_http_error() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let note = server
		.mock_async(|when, then| {
			when.method(POST).path("/preview1/1/appointments/1/notes");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"error\":\"The appointment is not valid.\"}");
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let err = client
		.set_appointment_note(
			&practice("1"),
			&AppointmentId::new("1").expect("Appointment should be valid."),
			"unused",
		)
		.await
		.expect_err("A 404 should surface to the caller.");

	match err {
		Error::Http(HttpError::Status { status, path, body, .. }) => {
			assert_eq!(status, 404);
			assert_eq!(path, "preview1/1/appointments/1/notes");
			assert!(body.contains("not valid"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	note.assert_async().await;
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let _practices = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/1/practiceinfo");
			then.status(200).header("content-type", "text/html").body("<html>maintenance</html>");
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let err = client
		.practices(&practice("1"))
		.await
		.expect_err("Non-JSON bodies should fail to decode.");

	assert!(matches!(
		err,
		Error::Decode(DecodeError::Json { ref path, .. }) if path == "preview1/1/practiceinfo"
	));
}

#[tokio::test]
async fn trailing_bytes_after_json_are_decode_error() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let practices = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/1/practiceinfo");
			then.status(200)
				.header("content-type", "application/json")
				.body(format!("{PRACTICE_LIST} trailing garbage"));
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let err = client
		.practices(&practice("1"))
		.await
		.expect_err("A body with bytes after the JSON value should fail to decode.");

	match err {
		Error::Decode(DecodeError::Json { path, source }) => {
			assert_eq!(path, "preview1/1/practiceinfo");
			assert!(source.to_string().contains("trailing characters"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	practices.assert_async().await;
}

#[tokio::test]
async fn token_failure_short_circuits_api_calls() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauthpreview/token");
			then.status(401).body("Unauthorized");
		})
		.await;
	let practices = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/1/practiceinfo");
			then.status(200).header("content-type", "application/json").body(PRACTICE_LIST);
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let err = client
		.practices(&practice("1"))
		.await
		.expect_err("Rejected credentials should fail the call.");

	assert!(matches!(err, Error::Auth(AuthError::Rejected { status: 401, .. })));

	token.assert_async().await;
	practices.assert_calls_async(0).await;
}

#[tokio::test]
async fn generic_requests_decode_into_caller_types() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, ApiVersion::Preview1, "tok").await;
	let providers = server
		.mock_async(|when, then| {
			when.method(GET).path("/preview1/195900/providers").query_param("limit", "5");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"providers\":[],\"totalcount\":0}");
		})
		.await;
	let client = build_test_client(&server, ApiVersion::Preview1);
	let body: serde_json::Value = client
		.get_json(ApiRequest::get(["preview1", "195900", "providers/"]).param("limit", "5"))
		.await
		.expect("Generic request should decode.");

	assert_eq!(body["totalcount"], 0);

	providers.assert_async().await;
}
