use outcome_rail::ErrorObject;

#[test]
fn new_sets_default_name_and_message() {
    let err = ErrorObject::new("Couldn't convert abc to number");

    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), Some("Couldn't convert abc to number"));
    assert!(err.fields().is_empty());
    assert_eq!(err.to_string(), "Error: Couldn't convert abc to number");
}

#[test]
fn empty_has_no_message() {
    let err = ErrorObject::empty();

    assert_eq!(err.message(), None);
    assert_eq!(err.to_string(), "Error");
    assert_eq!(err, ErrorObject::default());
}

#[test]
fn fields_keep_insertion_order_and_first_match_wins() {
    let err = ErrorObject::new("bad request")
        .with_name("HttpError")
        .with_field("status", "400")
        .with_field("path", "/users")
        .with_field("status", "422");

    assert_eq!(err.fields().len(), 3);
    assert_eq!(err.fields()[1], ("path".to_string(), "/users".to_string()));
    assert_eq!(err.field("status"), Some("400"));
    assert_eq!(err.field("missing"), None);
    assert_eq!(err.to_string(), "HttpError: bad request");
}

#[test]
fn set_message_overwrites_in_place() {
    let mut err = ErrorObject::empty().with_field("code", "7");
    err.set_message("now described");

    assert_eq!(err.message(), Some("now described"));
    assert_eq!(err.field("code"), Some("7"));
}

#[test]
fn implements_std_error() {
    fn as_dyn(err: &ErrorObject) -> &dyn std::error::Error {
        err
    }

    let err = ErrorObject::new("io failure");
    assert!(as_dyn(&err).source().is_none());
    assert_eq!(as_dyn(&err).to_string(), "Error: io failure");
}

#[test]
fn shared_handle_sees_mutation() {
    let shared = ErrorObject::new("original").shared();
    let other = shared.clone();

    shared.lock().unwrap().set_message("changed");
    assert_eq!(other.lock().unwrap().message(), Some("changed"));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_with_fields() {
    let err = ErrorObject::new("timeout").with_field("after", "30s");

    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"message\":\"timeout\""));
    assert!(json.contains("after"));

    let back: ErrorObject = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
