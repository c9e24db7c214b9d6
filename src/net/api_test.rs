use super::*;
use board::view::NoticeKind;

#[test]
fn check_status_accepts_success() {
    assert_eq!(check_status(true, 200, None), Ok(()));
}

#[test]
fn check_status_maps_missing_task() {
    assert_eq!(check_status(false, 404, Some(TaskId(9))), Err(ApiError::NotFound { id: TaskId(9) }));
}

#[test]
fn check_status_maps_other_failures() {
    let err = check_status(false, 500, Some(TaskId(9))).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500 });
    assert_eq!(err.notice_kind(), NoticeKind::NetworkFailure);
}

#[test]
fn transport_and_body_errors_keep_their_message() {
    assert_eq!(network_error("connection refused"), ApiError::Network("connection refused".to_owned()));
    assert_eq!(decode_error("expected array"), ApiError::Decode("expected array".to_owned()));
}

#[test]
fn base_is_kept_verbatim() {
    assert_eq!(HttpTaskApi::new("https://tasks.example").base(), "https://tasks.example");
    assert_eq!(HttpTaskApi::default().base(), "");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_has_no_transport() {
    let api = HttpTaskApi::new("");
    assert_eq!(api.list(SortMode::Manual).await, Err(ApiError::Unavailable));
    assert_eq!(api.delete(TaskId(1)).await, Err(ApiError::Unavailable));
    assert_eq!(api.reorder(&[TaskId(1), TaskId(2)]).await, Err(ApiError::Unavailable));
}
