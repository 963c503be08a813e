//! Update function for the alta form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `AltaFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Keeping `FormFields` synchronized with the inputs via `UpdateField` and
//!   `FileSelected`.
//! - Submitting: suppress the browser navigation, snapshot the fields into
//!   an `Alta`, and send it from an async task; the result comes back as
//!   `Submitted`.
//! - Resolving a submit: success alerts and clears the form, a transport
//!   failure alerts and preserves it, a rejected status only logs.

use common::form::{apply_outcome, SubmitOutcome};
use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, send_alta};
use super::messages::Msg;
use super::state::AltaFormComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view, `false` when only side effects
///   occur.
pub fn update(
    component: &mut AltaFormComponent,
    ctx: &Context<AltaFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(name, value) => {
            if !component.fields.set(name, &value) {
                warn!(format!("Campo desconocido: {}", name));
            }
            true
        }
        Msg::FileSelected(file) => {
            component.fields.imagen = file;
            true
        }
        Msg::Submit(event) => {
            // Keep the browser from navigating away with its own submission.
            event.prevent_default();

            let alta = component.fields.collect();
            let imagen = component.fields.imagen.clone();
            let endpoint = ctx.props().config.alta_endpoint();

            match serde_json::to_string(&alta) {
                Ok(json) => log!(format!("POST {} {}", endpoint, json)),
                Err(_) => log!(format!("POST {}", endpoint)),
            }

            // One request per submit; nothing guards against a second submit
            // while this one is in flight, each invocation is independent.
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = send_alta(&endpoint, &alta, imagen).await;
                link.send_message(Msg::Submitted(outcome));
            });

            false
        }
        Msg::Submitted(outcome) => {
            match &outcome {
                SubmitOutcome::Saved => log!("Alta confirmada por el servidor"),
                SubmitOutcome::Rejected { status } => {
                    // No alert on this path; pending a product decision.
                    warn!(format!("El servidor rechazó el alta: estado {}", status));
                }
                SubmitOutcome::TransportError(err) => {
                    error!(format!("No se pudo enviar el alta: {}", err));
                }
            }

            let alert_text = apply_outcome(&mut component.fields, &outcome);
            if let Some(text) = alert_text {
                alert(text);
            }
            if matches!(outcome, SubmitOutcome::Saved) {
                component.reset_native_controls();
            }

            true
        }
    }
}
