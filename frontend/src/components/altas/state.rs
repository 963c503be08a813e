//! Component state for the alta form.
//!
//! The six field values live in a [`FormFields`] from `common`, so the
//! update logic never reads the document at submit time; the view keeps the
//! controls synchronized through `oninput`/`onchange` messages instead. The
//! component retains `NodeRef`s only for the controls Yew cannot
//! value-control — the two selects and the file input — so they can be
//! reset in place after a successful alta.

use common::form::FormFields;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub struct AltaFormComponent {
    /// Current values of the six form fields.
    pub fields: FormFields<File>,

    /// Reference to the `<input type="file">` DOM node.
    pub file_input_ref: NodeRef,

    /// Reference to the `sexo` select DOM node.
    pub sexo_ref: NodeRef,

    /// Reference to the `tamanio` select DOM node.
    pub tamanio_ref: NodeRef,
}

impl AltaFormComponent {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(),
            file_input_ref: Default::default(),
            sexo_ref: Default::default(),
            tamanio_ref: Default::default(),
        }
    }

    /// Empties the selects and the file input in the document. The values
    /// held in `fields` are cleared separately by `apply_outcome`.
    pub fn reset_native_controls(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
        for select_ref in [&self.sexo_ref, &self.tamanio_ref] {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value("");
            }
        }
    }
}
