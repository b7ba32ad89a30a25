use super::*;

#[test]
fn decode_import_request_with_posts() {
    let text = r#"{"type":"import","data":[{"Post_ID":"P1","Dimensions":"1080x1080px","Content_Format":"Image"}]}"#;
    let request = decode_request(text).expect("decode");
    let UiRequest::Import { data: Some(posts) } = request else {
        panic!("expected import with data");
    };
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post_id, "P1");
    assert_eq!(posts[0].dimensions.as_deref(), Some("1080x1080px"));
    assert_eq!(posts[0].content_format.as_deref(), Some("Image"));
    assert_eq!(posts[0].caption, None);
}

#[test]
fn decode_import_request_without_data() {
    let request = decode_request(r#"{"type":"import"}"#).expect("decode");
    assert_eq!(request, UiRequest::Import { data: None });
}

#[test]
fn decode_unknown_message_type() {
    let request = decode_request(r#"{"type":"resize","width":400}"#).expect("decode");
    assert_eq!(request, UiRequest::Unknown);
}

#[test]
fn decode_rejects_missing_type() {
    let err = decode_request(r#"{"data":[]}"#).expect_err("type is required");
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn decode_rejects_post_without_id() {
    let err = decode_request(r#"{"type":"import","data":[{"Caption":"hi"}]}"#).expect_err("Post_ID is required");
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn unknown_columns_are_ignored() {
    let text = r#"{"type":"import","data":[{"Post_ID":"P9","Internal_Notes":"skip me"}]}"#;
    let request = decode_request(text).expect("decode");
    assert_eq!(request, UiRequest::Import { data: Some(vec![ContentPost::new("P9")]) });
}

#[test]
fn encode_success_response() {
    let response = UiResponse::Success { message: "Imported 2 posts with 3 frames".to_owned() };
    let json = encode_response(&response).expect("encode");
    assert_eq!(json, r#"{"type":"success","message":"Imported 2 posts with 3 frames"}"#);
}

#[test]
fn encode_error_response() {
    let response = UiResponse::Error { message: "font missing".to_owned() };
    let json = encode_response(&response).expect("encode");
    assert_eq!(json, r#"{"type":"error","message":"font missing"}"#);
    assert!(!response.is_success());
    assert_eq!(response.message(), "font missing");
}

#[test]
fn carousel_detection_is_case_insensitive() {
    let mut post = ContentPost::new("P1");
    assert!(!post.is_carousel());
    post.content_format = Some("IG CAROUSEL (5 slides)".to_owned());
    assert!(post.is_carousel());
    post.content_format = Some("Reel".to_owned());
    assert!(!post.is_carousel());
}

#[test]
fn display_id_falls_back_for_blank_ids() {
    assert_eq!(ContentPost::new("P7").display_id(), "P7");
    assert_eq!(ContentPost::new("  ").display_id(), UNKNOWN_POST_ID);
}

#[test]
fn posts_from_records_reads_converted_rows() {
    let records = csv::parse_csv("Post_ID,Platform,Extra\nP1,Instagram,x\nP2,,y\n").expect("csv");
    let posts = posts_from_records(records).expect("posts");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].platform.as_deref(), Some("Instagram"));
    assert_eq!(posts[1].post_id, "P2");
    assert_eq!(posts[1].platform.as_deref(), Some(""));
}

#[test]
fn posts_from_records_reports_row_without_id() {
    let records = csv::parse_csv("Caption\nhello\n").expect("csv");
    let err = posts_from_records(records).expect_err("missing Post_ID");
    assert!(matches!(err, CodecError::InvalidRecord { row: 1, .. }));
}
