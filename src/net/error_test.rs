use super::*;

#[test]
fn network_error_displays_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn server_error_displays_status() {
    let err = ApiError::Server { status: 502 };
    assert_eq!(err.to_string(), "server responded with status 502");
}

#[test]
fn decode_error_displays_cause() {
    let err = ApiError::Decode("missing field `title`".to_owned());
    assert_eq!(err.to_string(), "could not decode response: missing field `title`");
}

#[test]
fn variants_are_distinguishable() {
    assert_ne!(
        ApiError::Server { status: 500 },
        ApiError::Server { status: 404 }
    );
    assert_ne!(
        ApiError::Network("x".to_owned()),
        ApiError::Decode("x".to_owned())
    );
}
