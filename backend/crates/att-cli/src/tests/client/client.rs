use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/");
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080");
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_stream_url() {
    let client = Client::new("http://gateway:9000/");
    assert_eq!(
        client.stream_url(),
        "http://gateway:9000/api/attendance/stream"
    );
}
