//! Browser-side helpers for the alta form: the multipart body, the POST
//! itself, and the blocking alert.
//!
//! `send_alta` is the whole network story — one request, no retries, no
//! timeout — and reduces every way a submit can end to a [`SubmitOutcome`],
//! which `update.rs` then applies to the form.

use common::form::SubmitOutcome;
use common::model::alta::{self, Alta};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Shows a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Builds the multipart body: one part per field, using the part name as
/// key. The file part carries the raw bytes under its original filename;
/// with no file selected the part is omitted.
fn build_form_data(alta: &Alta, imagen: Option<&File>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (name, value) in alta.parts() {
        form.append_with_str(name, value)?;
    }
    if let Some(file) = imagen {
        form.append_with_blob_and_filename(alta::IMAGEN, file, &file.name())?;
    }
    Ok(form)
}

/// Sends one alta to the server and classifies how it went.
///
/// - 2xx with a JSON-parseable body → [`SubmitOutcome::Saved`]. The parsed
///   value is not inspected; parsing succeeding is the confirmation.
/// - 2xx with a body that is not JSON → [`SubmitOutcome::TransportError`].
/// - Any other status → [`SubmitOutcome::Rejected`].
/// - Request never completed → [`SubmitOutcome::TransportError`].
///
/// No headers are set explicitly: the browser derives the multipart
/// boundary and `Content-Type` from the `FormData` body.
pub async fn send_alta(endpoint: &str, alta: &Alta, imagen: Option<File>) -> SubmitOutcome {
    let form = match build_form_data(alta, imagen.as_ref()) {
        Ok(form) => form,
        Err(err) => return SubmitOutcome::TransportError(js_error(&err)),
    };

    let request = match Request::post(endpoint).body(form) {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::TransportError(err.to_string()),
    };

    match request.send().await {
        Ok(response) if response.ok() => match response.json::<serde_json::Value>().await {
            Ok(_) => SubmitOutcome::Saved,
            Err(err) => SubmitOutcome::TransportError(err.to_string()),
        },
        Ok(response) => SubmitOutcome::Rejected {
            status: response.status(),
        },
        Err(err) => SubmitOutcome::TransportError(err.to_string()),
    }
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
