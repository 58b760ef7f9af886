//! Request to instruction to store

use crate::common::*;
use tokenkv::{
    infer_data_into, InboundRequest, Instruction, KeyValueStore, RequestLimits,
    CONTENT_TYPE_HEADER, FORM_MEDIA_TYPE, IDEMPOTENT_ID_HEADER, METHOD_OVERRIDE_HEADER,
};

fn record_email(id: &str, email: &str) -> InboundRequest {
    InboundRequest::new("POST")
        .with_header(IDEMPOTENT_ID_HEADER, id)
        .with_header(METHOD_OVERRIDE_HEADER, "RECORD_EMAIL")
        .with_header(CONTENT_TYPE_HEADER, FORM_MEDIA_TYPE)
        .with_body(format!("email_address={}", email))
}

#[test]
fn test_instruction_data_lands_under_its_id() {
    init_tracing();

    let journal = KeyValues::new();
    for (id, email) in [("id-1", "joe@example.com"), ("id-2", "ann@example.com")] {
        let instruction = Instruction::scan(&record_email(id, email)).unwrap();
        let id = instruction.idempotent_id.clone().unwrap_or(String::new());
        let verb = instruction.verb.clone().unwrap_or(String::new());
        for (key, value) in instruction.data.snapshot() {
            let mut tokens = vec![id.clone(), verb.clone()];
            tokens.extend(key.tokens());
            journal.store(Key::some_key(tokens), value).unwrap();
        }
    }

    assert_eq!(journal.len(), 2);
    assert_eq!(
        journal.fetch(["id-1", "RECORD_EMAIL", "email_address"]),
        present("joe@example.com")
    );
    assert_eq!(
        journal.canonical_form(),
        "\"id-1/RECORD_EMAIL/email_address\" -> \"joe@example.com\"\n\
         \"id-2/RECORD_EMAIL/email_address\" -> \"ann@example.com\"\n"
    );
}

#[test]
fn test_replayed_instruction_is_rejected_by_store() {
    init_tracing();

    let journal = KeyValues::new();
    let request = record_email("id-1", "joe@example.com");
    let first = Instruction::scan(&request).unwrap();
    let replay = Instruction::scan(&request).unwrap();

    let id = first.idempotent_id.unwrap_or(String::new());
    journal.store(Key::shallow(&id), "done").unwrap();

    let replay_id = replay.idempotent_id.unwrap_or(String::new());
    let err = journal.store(Key::shallow(&replay_id), "done again").unwrap_err();
    assert!(err.is_key_found());
    assert_eq!(journal.fetch([id.as_str()]), present("done"));
}

#[test]
fn test_infer_into_shared_store_through_trait() {
    init_tracing();

    let store = KeyValues::new();
    let request = InboundRequest::new("PATCH")
        .with_header(CONTENT_TYPE_HEADER, FORM_MEDIA_TYPE)
        .with_body("given_name=Joe&family_name=Blow");

    let dyn_store: &dyn KeyValueStore = &store;
    let count = infer_data_into(dyn_store, &request, &RequestLimits::default()).unwrap();
    assert_eq!(count, 2);
    assert_eq!(dyn_store.fetch(&["family_name"]), present("Blow"));
}
