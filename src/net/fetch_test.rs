use super::*;

use futures::executor::block_on;

async fn ok_json(value: serde_json::Value) -> Result<Fragment, FetchError> {
    Ok(Fragment::Json(value))
}

#[test]
fn join_keeps_descriptor_order() {
    let outcomes = block_on(join_fragments(vec![
        ok_json(serde_json::json!(1)),
        ok_json(serde_json::json!(2)),
        ok_json(serde_json::json!(3)),
    ]));
    assert_eq!(
        outcomes,
        vec![
            Fragment::Json(serde_json::json!(1)),
            Fragment::Json(serde_json::json!(2)),
            Fragment::Json(serde_json::json!(3)),
        ]
    );
}

#[test]
fn one_failure_does_not_cancel_the_rest() {
    let fragments: Vec<_> = vec![
        Box::pin(async { Ok(Fragment::Text("first".to_owned())) })
            as std::pin::Pin<Box<dyn std::future::Future<Output = Result<Fragment, FetchError>>>>,
        Box::pin(async { Err(FetchError::Transport("connection refused".to_owned())) }),
        Box::pin(async { Ok(Fragment::Text("third".to_owned())) }),
    ];
    let outcomes = block_on(join_fragments(fragments));
    assert_eq!(
        outcomes,
        vec![
            Fragment::Text("first".to_owned()),
            Fragment::Unavailable,
            Fragment::Text("third".to_owned()),
        ]
    );
}

#[test]
fn status_and_decode_failures_become_unavailable() {
    let fragments: Vec<_> = vec![
        Box::pin(async { Err(FetchError::Status(503)) })
            as std::pin::Pin<Box<dyn std::future::Future<Output = Result<Fragment, FetchError>>>>,
        Box::pin(async { Err(FetchError::Decode("expected value".to_owned())) }),
    ];
    let outcomes = block_on(join_fragments(fragments));
    assert_eq!(outcomes, vec![Fragment::Unavailable, Fragment::Unavailable]);
}

#[test]
fn decode_reads_typed_json() {
    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    let fragment = Fragment::Json(serde_json::json!({"name": "Alien"}));
    assert_eq!(
        fragment.decode::<Payload>(),
        Some(Payload { name: "Alien".to_owned() })
    );
}

#[test]
fn decode_shape_mismatch_degrades_to_none() {
    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    let fragment = Fragment::Json(serde_json::json!({"name": 7}));
    assert_eq!(fragment.decode::<Payload>(), None);
    assert_eq!(Fragment::Unavailable.decode::<Payload>(), None);
}

#[test]
fn text_accessor_ignores_json_fragments() {
    assert_eq!(Fragment::Text("summary".to_owned()).text(), Some("summary"));
    assert_eq!(Fragment::Json(serde_json::json!({})).text(), None);
    assert_eq!(Fragment::Unavailable.text(), None);
}
