//! Wire-shape tests: what the mock service receives, and that it parses back
//! into the same specification.

use assert_json_diff::assert_json_eq;
use mapping_builders::matcher::{self, BuildMatcher};
use mapping_builders::response::BodyDestination;
use mapping_builders::{
    MappingSpecification, RequestSpecBuilder, RequestSpecification, ResponseSpecBuilder,
    ResponseSpecification, SimMetricType, TextEncoding,
};
use serde_json::json;
use std::io::Write;
use std::time::Duration;

fn round_trip_request(spec: &RequestSpecification) {
    let json = serde_json::to_string(spec).unwrap();
    let parsed: RequestSpecification = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, spec);
}

fn round_trip_response(spec: &ResponseSpecification) {
    let json = serde_json::to_string(spec).unwrap();
    let parsed: ResponseSpecification = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, spec);
}

#[test]
fn test_request_wire_shape() {
    let mut builder = RequestSpecBuilder::new();
    builder
        .using_get()
        .using_method(["HEAD"])
        .unwrap()
        .with_path(["/test-get/*"])
        .with_header("Accept", ["application/json"])
        .with_cookie("session", "abc*")
        .with_param("verbose")
        .with_param_values("page", ["1"])
        .with_client_ip(["10.0.0.1"])
        .with_body_matcher(matcher::json(json!({"id": 1})));

    assert_json_eq!(
        serde_json::to_value(builder.build()).unwrap(),
        json!({
            "methods": ["get", "head"],
            "path": {"matchers": [
                {"name": "WildcardMatcher", "patterns": ["/test-get/*"], "ignoreCase": true, "rejectOnMatch": false}
            ]},
            "headers": [{"name": "Accept", "matchers": [
                {"name": "WildcardMatcher", "patterns": ["application/json"], "ignoreCase": true, "rejectOnMatch": false}
            ]}],
            "cookies": [{"name": "session", "matchers": [
                {"name": "WildcardMatcher", "patterns": ["abc*"], "ignoreCase": true, "rejectOnMatch": false}
            ]}],
            "params": [
                {"name": "verbose", "matchers": [
                    {"name": "WildcardMatcher", "patterns": ["*"], "rejectOnMatch": false}
                ]},
                {"name": "page", "matchers": [
                    {"name": "ExactMatcher", "patterns": ["1"], "rejectOnMatch": false}
                ]}
            ],
            "clientIP": {"matchers": [
                {"name": "WildcardMatcher", "patterns": ["10.0.0.1"], "ignoreCase": true, "rejectOnMatch": false}
            ]},
            "body": {"matcher": {"name": "JsonMatcher", "pattern": {"id": 1}, "rejectOnMatch": false}}
        })
    );
    round_trip_request(builder.build());
}

#[test]
fn test_request_round_trip_for_every_matcher_kind() {
    let body_matchers: Vec<Box<dyn BuildMatcher>> = vec![
        Box::new(matcher::exact_with(true, ["a", "b"])),
        Box::new(matcher::wildcard_with(false, true, ["*x*"])),
        Box::new(matcher::regex(["^\\d+$"])),
        Box::new(matcher::json_with("{\"raw\": true}", true)),
        Box::new(matcher::json_path(["$.a", "$.b"])),
        Box::new(matcher::xpath("/a[@b='c']")),
        Box::new(matcher::similarity(SimMetricType::SmithWatermanGotoh, "hello")),
    ];

    for body in &body_matchers {
        let mut builder = RequestSpecBuilder::new();
        builder
            .using_delete()
            .with_url_with(true, ["/u/*"])
            .with_path_matchers([matcher::regex(["/p"])])
            .with_header_with("X-A", false, true, ["1", "2"])
            .with_header_matchers("X-A", [matcher::exact(["3"])])
            .with_cookie_with("c", "v", false, true)
            .with_cookie_matchers("c", [matcher::xpath("/c")])
            .with_param_with("k", true)
            .with_param_values_with("k", true, ["v"])
            .with_param_matchers("k", [matcher::json_path(["$.k"])])
            .with_client_ip_with(true, ["::1"])
            .with_body_matcher(&**body);
        round_trip_request(builder.build());
    }
}

#[test]
fn test_response_wire_shape() {
    let mut builder = ResponseSpecBuilder::new();
    builder
        .with_status_code(202)
        .with_header("X-Id", ["1"])
        .with_header("X-Id", ["2", "1"])
        .with_body("accepted")
        .with_delay_duration(Duration::from_millis(1500))
        .with_transformer()
        .with_proxy("http://upstream:8080", Some("AB12CD".to_string()));

    assert_json_eq!(
        serde_json::to_value(builder.build()).unwrap(),
        json!({
            "statusCode": 202,
            "headers": {"X-Id": ["1", "2"]},
            "body": "accepted",
            "bodyEncoding": {"codePage": 65001, "encodingName": "Unicode (UTF-8)", "webName": "utf-8"},
            "delay": 1500,
            "useTransformer": true,
            "proxyUrl": "http://upstream:8080",
            "x509ThumbprintOrSubjectName": "AB12CD"
        })
    );
    round_trip_response(builder.build());
}

#[test]
fn test_response_round_trip_for_every_body_setter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xde, 0xad, 0xbe, 0xef]).unwrap();

    let mut builders = Vec::new();

    let mut text = ResponseSpecBuilder::new();
    text.with_body_encoded("héllo", TextEncoding::Latin1)
        .with_body_destination(BodyDestination::Bytes);
    builders.push(text);

    let mut bytes = ResponseSpecBuilder::new();
    bytes.with_body("kept").with_body_as_bytes_encoded(vec![1, 2, 3], TextEncoding::Utf16);
    builders.push(bytes);

    let mut json_body = ResponseSpecBuilder::new();
    json_body.with_body_as_json_encoded(json!({"a": [1, 2]}), TextEncoding::Utf32, Some(false));
    builders.push(json_body);

    let mut local_file = ResponseSpecBuilder::new();
    local_file.with_body_from_file(file.path()).unwrap();
    builders.push(local_file);

    let mut remote_file = ResponseSpecBuilder::new();
    remote_file
        .with_cached_body_from_remote_file("bodies/large.json")
        .with_headers([("Content-Type", "application/json")]);
    builders.push(remote_file);

    for builder in &builders {
        round_trip_response(builder.build());
    }

    assert_eq!(
        builders[3].build().body_as_bytes.as_deref(),
        Some(&[0xde, 0xad, 0xbe, 0xef][..])
    );
    assert_eq!(
        serde_json::to_value(builders[3].build()).unwrap()["bodyAsBytes"],
        json!("3q2+7w==")
    );
}

#[test]
fn test_json_null_body_round_trips() {
    let mut builder = ResponseSpecBuilder::new();
    builder.with_body_as_json(serde_json::Value::Null);

    let wire = serde_json::to_value(builder.build()).unwrap();
    assert_eq!(wire["bodyAsJson"], serde_json::Value::Null);
    assert!(wire.as_object().unwrap().contains_key("bodyAsJson"));

    round_trip_response(builder.build());
    let parsed: ResponseSpecification = serde_json::from_value(wire).unwrap();
    assert_eq!(parsed.body_as_json, Some(serde_json::Value::Null));

    let without_body: ResponseSpecification =
        serde_json::from_value(json!({"statusCode": 200})).unwrap();
    assert_eq!(without_body.body_as_json, None);
}

#[test]
fn test_response_headers_serialize_in_name_order() {
    let mut builder = ResponseSpecBuilder::new();
    builder
        .with_header("X-Zulu", ["z"])
        .with_header("Accept", ["a"])
        .with_header("Content-Type", ["c"]);

    let json = serde_json::to_string(&builder.build().headers).unwrap();
    assert_eq!(json, r#"{"Accept":["a"],"Content-Type":["c"],"X-Zulu":["z"]}"#);
}

#[test]
fn test_mapping_wire_shape() {
    let guid = uuid::Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000001").unwrap();

    let mut request = RequestSpecBuilder::new();
    request.using_put().with_path(["/items/1"]);
    let mut response = ResponseSpecBuilder::new();
    response.with_not_found();

    let mapping = MappingSpecification::new(request.into_spec(), response.into_spec())
        .with_guid(guid)
        .with_priority(10);

    let value = serde_json::to_value(&mapping).unwrap();
    assert_json_eq!(
        value,
        json!({
            "guid": "a1b2c3d4-0000-4000-8000-000000000001",
            "priority": 10,
            "request": {
                "methods": ["put"],
                "path": {"matchers": [
                    {"name": "WildcardMatcher", "patterns": ["/items/1"], "ignoreCase": true, "rejectOnMatch": false}
                ]},
                "headers": [],
                "cookies": [],
                "params": []
            },
            "response": {"statusCode": 404, "headers": {}}
        })
    );

    let parsed: MappingSpecification = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, mapping);
}
