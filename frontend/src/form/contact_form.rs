use crate::components::notification::{NoticeAction, NoticeList, SuccessNotice};
use crate::config::{self, SubmitPolicy};
use crate::form::record::{FieldValue, FormRecord};
use crate::form::submission::{submit, FormSurface, SubmissionState};
use crate::form::upload::UploadStatus;
use crate::form::validation::{field_label, FieldErrors, Trigger};
use crate::utils::api::WebhookClient;
use chrono::Utc;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{File, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const REQUIRED_FIELDS: [&str; 6] = ["firstName", "lastName", "email", "phone", "address", "quoteType"];

pub struct FieldCheck {
    pub trigger: Trigger,
    pub name: &'static str,
    pub value: String,
    pub required: bool,
}

pub enum FieldAction {
    Check(FieldCheck),
    /// Errors computed elsewhere, e.g. by a gated submit.
    Replace(FieldErrors),
}

impl Reducible for FieldErrors {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FieldAction::Check(check) => {
                let mut next = (*self).clone();
                match next.check(check.trigger, check.name, &check.value, check.required) {
                    Some(_) => Rc::new(next),
                    None => self,
                }
            }
            FieldAction::Replace(errors) => Rc::new(errors),
        }
    }
}

/// Last submitted text of each required field, blank when missing.
pub fn required_values(entries: &[(String, FieldValue)]) -> Vec<(&'static str, String)> {
    REQUIRED_FIELDS
        .iter()
        .map(|&name| {
            let value = entries
                .iter()
                .rev()
                .find_map(|(n, v)| match v {
                    FieldValue::Text(text) if n == name => Some(text.clone()),
                    _ => None,
                })
                .unwrap_or_default();
            (name, value)
        })
        .collect()
}

/// Whether a submit may go ahead. With gating on, every required field is
/// validated and its error recorded in `errors`.
pub fn submit_allowed(policy: SubmitPolicy, entries: &[(String, FieldValue)], errors: &mut FieldErrors) -> bool {
    if !policy.gate_on_validity {
        return true;
    }
    let values = required_values(entries);
    errors.check_all(values.iter().map(|(name, value)| (*name, value.as_str())))
}

#[derive(Clone, PartialEq)]
pub enum Control {
    Input(&'static str),
    Select(&'static [(&'static str, &'static str)]),
    TextArea,
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: &'static str,
    pub control: Control,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: Option<&'static str>,
    pub error: Option<String>,
    pub on_check: Callback<FieldCheck>,
}

/// One labelled control with its inline error message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let name = props.name;
    let required = props.required;

    let check = |trigger: Trigger| {
        let on_check = props.on_check.clone();
        move |e: &Event| {
            if !required {
                return;
            }
            if let Some(value) = e.target().and_then(|t| control_value(&t)) {
                on_check.emit(FieldCheck {
                    trigger,
                    name,
                    value,
                    required,
                });
            }
        }
    };
    let onblur = {
        let check = check(Trigger::Blur);
        Callback::from(move |e: FocusEvent| check(&e))
    };
    let oninput = {
        let check = check(Trigger::Input);
        Callback::from(move |e: InputEvent| check(&e))
    };

    let class = classes!(props.error.is_some().then_some("error"));
    let control = match &props.control {
        Control::Input(kind) => html! {
            <input type={*kind} id={name} name={name} class={class} required={required}
                placeholder={props.placeholder} onblur={onblur} oninput={oninput} />
        },
        Control::Select(options) => html! {
            <select id={name} name={name} class={class} required={required} onblur={onblur} oninput={oninput}>
                <option value="">{"Select an option"}</option>
                { for options.iter().map(|(value, text)| html! { <option value={*value}>{*text}</option> }) }
            </select>
        },
        Control::TextArea => html! {
            <textarea id={name} name={name} class={class} rows="4" required={required}
                placeholder={props.placeholder} onblur={onblur} oninput={oninput}></textarea>
        },
    };

    html! {
        <div class="form-group">
            <label for={name}>{field_label(name)}{ if required { " *" } else { "" } }</label>
            {control}
            if let Some(message) = &props.error {
                <div class="field-error" style="color: #DC143C; font-size: 0.9rem; margin-top: 0.25rem;">{message}</div>
            }
        </div>
    }
}

fn control_value(target: &web_sys::EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}

/// Snapshot of every named control, file inputs reduced to the file name.
fn read_entries(form: &HtmlFormElement) -> Result<Vec<(String, FieldValue)>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let iter = js_sys::try_iter(&data)?.ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut entries = Vec::new();
    for entry in iter {
        let pair: js_sys::Array = entry?.dyn_into()?;
        let Some(name) = pair.get(0).as_string() else {
            continue;
        };
        let value = pair.get(1);
        let value = match value.dyn_ref::<File>() {
            Some(file) => FieldValue::File(Some(file.name())),
            None => FieldValue::Text(value.as_string().unwrap_or_default()),
        };
        entries.push((name, value));
    }
    Ok(entries)
}

struct ContactFormSurface {
    form: NodeRef,
    state: UseStateHandle<SubmissionState>,
    notices: UseReducerHandle<NoticeList>,
    upload: UseStateHandle<UploadStatus>,
}

impl FormSurface for ContactFormSurface {
    fn enter(&self, state: SubmissionState) {
        self.state.set(state);
    }

    fn show_success(&self) {
        self.notices.dispatch(NoticeAction::Push);
    }

    fn reset_fields(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn reset_upload(&self) {
        self.upload.set(UploadStatus::Empty);
    }
}

const QUOTE_TYPES: &[(&str, &str)] = &[
    ("residential", "Residential Installation"),
    ("commercial", "Commercial Installation"),
    ("removal", "Takedown & Storage"),
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(SubmitPolicy::from_build_env)]
    pub policy: SubmitPolicy,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let state = use_state(SubmissionState::default);
    let upload = use_state(UploadStatus::default);
    let notices = use_reducer(NoticeList::default);
    let errors = use_reducer(FieldErrors::default);

    let on_check = {
        let errors = errors.clone();
        Callback::from(move |check: FieldCheck| errors.dispatch(FieldAction::Check(check)))
    };

    let on_files = {
        let upload = upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let count = input.files().map(|files| files.length()).unwrap_or(0);
            log::info!("{} file(s) selected for upload", count);
            upload.set(UploadStatus::from_count(count));
        })
    };

    let on_expire = {
        let notices = notices.clone();
        Callback::from(move |id: u32| notices.dispatch(NoticeAction::Expire(id)))
    };

    let onsubmit = {
        let form_ref = form_ref.clone();
        let state = state.clone();
        let upload = upload.clone();
        let notices = notices.clone();
        let errors = errors.clone();
        let policy = props.policy;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let entries = match read_entries(&form) {
                Ok(entries) => entries,
                Err(e) => {
                    log::error!("Failed to read contact form: {:?}", e);
                    return;
                }
            };

            if policy.gate_on_validity {
                let mut next = (*errors).clone();
                let allowed = submit_allowed(policy, &entries, &mut next);
                errors.dispatch(FieldAction::Replace(next));
                if !allowed {
                    log::warn!("Quote request held back, form has invalid fields");
                    return;
                }
            }

            let record = FormRecord::from_entries(entries).with_derived(Utc::now());
            let surface = ContactFormSurface {
                form: form_ref.clone(),
                state: state.clone(),
                notices: notices.clone(),
                upload: upload.clone(),
            };
            spawn_local(async move {
                let client = WebhookClient::from_config();
                submit(&client, &surface, record).await;
            });
        })
    };

    let error_for = |name: &str| errors.get(name).map(ToString::to_string);
    let field = |name: &'static str, control: Control, placeholder: Option<&'static str>| {
        let required = REQUIRED_FIELDS.contains(&name);
        html! {
            <FormField name={name} control={control} required={required} placeholder={placeholder}
                error={error_for(name)} on_check={on_check.clone()} />
        }
    };

    html! {
        <div class="contact-form-wrapper">
            { for notices.ids().iter().map(|id| html! {
                <SuccessNotice key={*id} id={*id} on_expire={on_expire.clone()} />
            }) }
            // novalidate: the browser must not block submit on its own, the
            // page sends whatever is filled in unless SubmitPolicy gates it
            <form id="contactForm" ref={form_ref} novalidate=true
                class={classes!("contact-form", state.is_loading().then_some("loading"))}
                onsubmit={onsubmit}>
                <div class="form-row">
                    { field("firstName", Control::Input("text"), None) }
                    { field("lastName", Control::Input("text"), None) }
                </div>
                <div class="form-row">
                    { field("email", Control::Input("email"), Some("you@example.com")) }
                    { field("phone", Control::Input("tel"), Some("(555) 123-4567")) }
                </div>
                { field("address", Control::Input("text"), Some("Street, city, ZIP")) }
                { field("quoteType", Control::Select(QUOTE_TYPES), None) }
                { field("description", Control::TextArea, Some("Rooflines, trees, colors, anything we should know")) }
                <div class="form-group">
                    <label for={config::UPLOAD_FIELD}>{"House Photos"}</label>
                    <div class={upload.area_class()}>
                        <input type="file" id={config::UPLOAD_FIELD} name={config::UPLOAD_FIELD}
                            accept="image/*" multiple=true onchange={on_files} />
                        <div class="file-upload-text">
                            <p>{upload.helper_text()}</p>
                        </div>
                    </div>
                </div>
                <button type="submit" class="submit-btn" disabled={state.is_loading()}>
                    {"Get My Free Quote"}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(trigger: Trigger, name: &'static str, value: &str) -> FieldCheck {
        FieldCheck {
            trigger,
            name,
            value: value.to_string(),
            required: true,
        }
    }

    #[test]
    fn reducer_applies_blur_and_input() {
        let errors = Rc::new(FieldErrors::default());
        let errors = errors.reduce(FieldAction::Check(check(Trigger::Blur, "address", " ")));
        assert_eq!(
            errors.get("address").map(ToString::to_string).as_deref(),
            Some("Property Address is required")
        );

        let errors = errors.reduce(FieldAction::Check(check(Trigger::Input, "address", "12 Holly Lane")));
        assert!(errors.is_empty());
    }

    #[test]
    fn input_on_clean_field_keeps_state() {
        let errors = Rc::new(FieldErrors::default());
        let next = errors.clone().reduce(FieldAction::Check(check(Trigger::Input, "email", "x")));
        assert!(Rc::ptr_eq(&errors, &next));
    }

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, FieldValue)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), FieldValue::Text(v.to_string())))
            .collect()
    }

    const GATED: SubmitPolicy = SubmitPolicy { gate_on_validity: true };

    #[test]
    fn ungated_submit_always_goes_ahead() {
        let mut errors = FieldErrors::default();
        assert!(submit_allowed(SubmitPolicy::default(), &[], &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn gated_submit_holds_back_and_flags_each_bad_field() {
        let mut errors = FieldErrors::default();
        let form = entries(&[("firstName", "Holly"), ("email", "holly-at-example"), ("phone", "0123")]);
        assert!(!submit_allowed(GATED, &form, &mut errors));

        assert!(!errors.has_error("firstName"));
        assert!(errors.has_error("email"));
        assert!(errors.has_error("phone"));
        for name in ["lastName", "address", "quoteType"] {
            assert_eq!(
                errors.get(name).map(ToString::to_string),
                Some(format!("{} is required", field_label(name)))
            );
        }
    }

    #[test]
    fn gated_submit_passes_complete_form() {
        let mut errors = FieldErrors::default();
        errors.check(Trigger::Blur, "address", "", true);
        let form = entries(&[
            ("firstName", "Holly"),
            ("lastName", "Berry"),
            ("email", "holly@example.com"),
            ("phone", "(555) 010-2030"),
            ("address", "1 Elm St"),
            ("quoteType", "residential"),
            ("description", ""),
        ]);
        assert!(submit_allowed(GATED, &form, &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn required_values_take_last_text_entry() {
        let form = entries(&[("email", "old@example.com"), ("email", "new@example.com")]);
        let values = required_values(&form);
        assert_eq!(values.len(), REQUIRED_FIELDS.len());
        assert!(values.contains(&("email", "new@example.com".to_string())));
        assert!(values.contains(&("firstName", String::new())));
    }

    #[test]
    fn description_is_optional() {
        assert!(!REQUIRED_FIELDS.contains(&"description"));
        assert!(!REQUIRED_FIELDS.contains(&config::UPLOAD_FIELD));
    }
}
