use super::*;

#[test]
fn display_names_the_endpoint() {
    let err = ApiError::Status { path: "/api/tags".to_owned(), status: 503 };
    assert_eq!(err.to_string(), "/api/tags answered with status 503");
}

#[test]
fn codes_distinguish_transport_from_rejection() {
    let transport = ApiError::Transport { path: "/follow/3".to_owned(), message: "offline".to_owned() };
    let rejected = ApiError::Rejected { path: "/follow/3".to_owned() };
    assert_eq!(transport.code(), "E_TRANSPORT");
    assert_eq!(rejected.code(), "E_REJECTED");
    assert_eq!(rejected.to_string(), "/follow/3 did not report success");
}
