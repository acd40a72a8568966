use chrono::{TimeZone, Utc};
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use lights_frontend::form::record::{FieldValue, FormRecord};
use lights_frontend::form::submission::{
    submit, FormSurface, SubmissionOutcome, SubmissionState, SubmitError, Transport,
};
use lights_frontend::form::upload::{UploadStatus, DEFAULT_UPLOAD_TEXT};
use lights_frontend::form::validation::{FieldErrors, Trigger};
use lights_frontend::slider::board::SliderBoard;
use lights_frontend::slider::geometry::{clip_path, handle_left, Bounds};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};

/// In-memory stand-in for the quote form.
struct FakeForm {
    state: Cell<SubmissionState>,
    notices: Cell<u32>,
    first_name: RefCell<String>,
    upload: Cell<UploadStatus>,
}

impl FakeForm {
    fn filled() -> Self {
        Self {
            state: Cell::new(SubmissionState::Idle),
            notices: Cell::new(0),
            first_name: RefCell::new("Holly".into()),
            upload: Cell::new(UploadStatus::Selected(2)),
        }
    }
}

impl FormSurface for FakeForm {
    fn enter(&self, state: SubmissionState) {
        self.state.set(state);
    }
    fn show_success(&self) {
        self.notices.set(self.notices.get() + 1);
    }
    fn reset_fields(&self) {
        self.first_name.borrow_mut().clear();
    }
    fn reset_upload(&self) {
        self.upload.set(UploadStatus::Empty);
    }
}

/// Captures the posted body and answers with a canned result.
struct Webhook {
    body: RefCell<Option<String>>,
    online: bool,
}

impl Transport for Webhook {
    fn post_json(&self, body: String) -> LocalBoxFuture<'_, Result<Value, SubmitError>> {
        *self.body.borrow_mut() = Some(body);
        let online = self.online;
        Box::pin(async move {
            if online {
                Ok(json!({"status": "success", "id": "abc"}))
            } else {
                Err(SubmitError::Network("TypeError: Failed to fetch".into()))
            }
        })
    }
}

fn quote_record() -> FormRecord {
    FormRecord::from_entries(vec![
        ("firstName", FieldValue::Text("Holly".into())),
        ("lastName", FieldValue::Text("Berry".into())),
        ("email", FieldValue::Text("holly@example.com".into())),
        ("phone", FieldValue::Text("(555) 010-2030".into())),
        ("quoteType", FieldValue::Text("residential".into())),
        ("houseImages", FieldValue::File(None)),
    ])
    .with_derived(Utc.with_ymd_and_hms(2024, 11, 20, 9, 15, 0).unwrap())
}

#[test]
fn posted_body_carries_fields_and_metadata() {
    let webhook = Webhook {
        body: RefCell::new(None),
        online: true,
    };
    let form = FakeForm::filled();
    let outcome = block_on(submit(&webhook, &form, quote_record()));
    assert!(outcome.is_delivered());

    let body = webhook.body.borrow().clone().expect("one request sent");
    let sent: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(sent["firstName"], "Holly");
    assert_eq!(sent["houseImages"], "No files selected");
    assert_eq!(sent["leadSource"], "Website Quote Request");
    assert_eq!(sent["leadType"], "Christmas Lights Installation");
    assert_eq!(sent["timestamp"], "2024-11-20T09:15:00.000Z");
    assert_eq!(sent["fullName"], "Holly Berry");
}

#[test]
fn user_sees_success_whether_or_not_the_network_works() {
    for online in [true, false] {
        let webhook = Webhook {
            body: RefCell::new(None),
            online,
        };
        let form = FakeForm::filled();
        let outcome = block_on(submit(&webhook, &form, quote_record()));

        assert_eq!(outcome.is_delivered(), online);
        if !online {
            assert!(matches!(outcome, SubmissionOutcome::Failed(SubmitError::Network(_))));
        }
        assert_eq!(form.notices.get(), 1);
        assert!(form.first_name.borrow().is_empty());
        assert_eq!(form.upload.get().helper_text(), DEFAULT_UPLOAD_TEXT);
        assert_eq!(form.state.get(), SubmissionState::Settled);
        assert!(!form.state.get().is_loading());
    }
}

#[test]
fn required_field_error_comes_and_goes() {
    let mut errors = FieldErrors::default();
    for name in ["firstName", "lastName", "email", "phone", "address", "quoteType"] {
        assert_eq!(errors.check(Trigger::Blur, name, "", true), Some(false));
    }
    assert_eq!(errors.get("quoteType").unwrap().to_string(), "Quote Type is required");
    assert_eq!(errors.get("phone").unwrap().to_string(), "Phone Number is required");

    errors.check(Trigger::Input, "phone", "+44 20 7946 0958", true);
    errors.check(Trigger::Input, "email", "holly@example.com", true);
    assert!(!errors.has_error("phone"));
    assert!(!errors.has_error("email"));
    assert!(errors.has_error("firstName"));
}

#[test]
fn sliders_on_one_page_stay_independent() {
    let widths = [Bounds::new(0.0, 800.0), Bounds::new(0.0, 600.0)];
    let mut board = SliderBoard::with_instances(2);

    board.grab(0);
    board.drag_to(400.0, |id| widths.get(id).copied());
    let reveal = board.reveal(0).unwrap();
    assert!((reveal - 50.0).abs() < 1e-9);
    assert_eq!(clip_path(reveal), "inset(0 50% 0 0)");
    assert_eq!(handle_left(reveal), "50%");

    board.drag_to(200.0, |id| widths.get(id).copied());
    board.release();
    assert_eq!(board.reveal(0), Some(25.0));
    assert_eq!(board.reveal(1), Some(50.0));

    board.grab(1);
    board.drag_to(-20.0, |id| widths.get(id).copied());
    assert_eq!(board.reveal(1), Some(0.0));
    assert_eq!(board.reveal(0), Some(25.0));
}
