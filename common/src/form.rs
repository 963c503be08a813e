//! Form state and submit outcome handling, independent of the DOM.
//!
//! The frontend component keeps its field values in a [`FormFields`] and
//! routes every read and write through it, instead of poking
//! `document.getElementById` at submit time. That keeps the submit handler's
//! branching — reset and alert on success, alert only on transport failure,
//! silence on a rejected status — in plain Rust that runs under `cargo test`
//! with no browser attached.
//!
//! `F` is the host's file handle type: `web_sys::File` in the frontend, any
//! stand-in (a `String`, a `()`) in tests.

use crate::model::alta::{self, Alta};

/// Success alert shown after the server accepted the alta.
pub const ALERT_SUCCESS: &str = "Callejero agregado correctamente.";

/// Failure alert shown when the request never completed.
pub const ALERT_FAILURE: &str = "Error al agregar el callejero.";

/// Current values of the six form fields.
#[derive(Debug, Clone)]
pub struct FormFields<F> {
    pub id: String,
    pub nombre: String,
    pub edad: String,
    pub sexo: String,
    pub tamanio: String,
    pub imagen: Option<F>,
}

impl<F> Default for FormFields<F> {
    fn default() -> Self {
        Self {
            id: String::new(),
            nombre: String::new(),
            edad: String::new(),
            sexo: String::new(),
            tamanio: String::new(),
            imagen: None,
        }
    }
}

impl<F> FormFields<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field, addressed by its part name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            alta::ID => Some(self.id.as_str()),
            alta::NOMBRE => Some(self.nombre.as_str()),
            alta::EDAD => Some(self.edad.as_str()),
            alta::SEXO => Some(self.sexo.as_str()),
            alta::TAMANIO => Some(self.tamanio.as_str()),
            _ => None,
        }
    }

    /// Overwrites a text field by part name. Returns `false` when the name
    /// is not one of the five text fields (the image goes through `imagen`
    /// directly, it is not a string).
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            alta::ID => &mut self.id,
            alta::NOMBRE => &mut self.nombre,
            alta::EDAD => &mut self.edad,
            alta::SEXO => &mut self.sexo,
            alta::TAMANIO => &mut self.tamanio,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// Snapshots the five text fields into the payload for one submit.
    pub fn collect(&self) -> Alta {
        Alta {
            id: self.id.clone(),
            nombre: self.nombre.clone(),
            edad: self.edad.clone(),
            sexo: self.sexo.clone(),
            tamanio: self.tamanio.clone(),
        }
    }

    /// Resets every field to empty, ready for the next alta.
    pub fn clear(&mut self) {
        self.id.clear();
        self.nombre.clear();
        self.edad.clear();
        self.sexo.clear();
        self.tamanio.clear();
        self.imagen = None;
    }
}

/// How one submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response with a JSON-parseable body. The parsed value is unused.
    Saved,
    /// The server answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request never completed (connection refused, CORS, DNS, or a 2xx
    /// body that was not JSON).
    TransportError(String),
}

/// Applies a submit outcome to the form and returns the alert to show, if
/// any.
///
/// - `Saved`: every field is cleared and the success text is returned.
/// - `TransportError`: fields are left untouched for retry, failure text.
/// - `Rejected`: fields untouched and no alert. The user only learns about
///   rejected statuses from the console; surfacing them is pending a
///   product decision.
pub fn apply_outcome<F>(
    fields: &mut FormFields<F>,
    outcome: &SubmitOutcome,
) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Saved => {
            fields.clear();
            Some(ALERT_SUCCESS)
        }
        SubmitOutcome::Rejected { .. } => None,
        SubmitOutcome::TransportError(_) => Some(ALERT_FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields<String> {
        FormFields {
            id: "7".to_string(),
            nombre: "Rex".to_string(),
            edad: "3".to_string(),
            sexo: "M".to_string(),
            tamanio: "mediano".to_string(),
            imagen: Some("rex.jpg".to_string()),
        }
    }

    #[test]
    fn get_and_set_address_fields_by_part_name() {
        let mut fields: FormFields<String> = FormFields::new();

        assert!(fields.set("nombre", "Luna"));
        assert!(fields.set("tamanio", "chico"));
        assert_eq!(fields.get("nombre"), Some("Luna"));
        assert_eq!(fields.get("tamanio"), Some("chico"));
        assert_eq!(fields.get("id"), Some(""));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut fields: FormFields<String> = FormFields::new();

        assert!(!fields.set("raza", "mestizo"));
        assert_eq!(fields.get("raza"), None);
        assert_eq!(fields.get("imagen"), None);
    }

    #[test]
    fn collect_snapshots_current_values() {
        let fields = filled();
        let alta = fields.collect();

        assert_eq!(
            alta.parts(),
            [
                ("id", "7"),
                ("nombre", "Rex"),
                ("edad", "3"),
                ("sexo", "M"),
                ("tamanio", "mediano"),
            ]
        );
    }

    #[test]
    fn saved_clears_the_form_and_alerts_success() {
        let mut fields = filled();

        let alert = apply_outcome(&mut fields, &SubmitOutcome::Saved);

        assert_eq!(alert, Some("Callejero agregado correctamente."));
        for name in crate::model::alta::TEXT_FIELDS {
            assert_eq!(fields.get(name), Some(""), "field {name} not cleared");
        }
        assert!(fields.imagen.is_none());
    }

    #[test]
    fn transport_error_alerts_failure_and_keeps_the_form() {
        let mut fields = filled();

        let alert = apply_outcome(
            &mut fields,
            &SubmitOutcome::TransportError("Failed to fetch".to_string()),
        );

        assert_eq!(alert, Some("Error al agregar el callejero."));
        assert_eq!(fields.collect(), filled().collect());
        assert_eq!(fields.imagen.as_deref(), Some("rex.jpg"));
    }

    #[test]
    fn rejected_status_is_silent_and_keeps_the_form() {
        let mut fields = filled();

        let alert = apply_outcome(&mut fields, &SubmitOutcome::Rejected { status: 400 });

        assert_eq!(alert, None);
        assert_eq!(fields.collect(), filled().collect());
        assert_eq!(fields.imagen.as_deref(), Some("rex.jpg"));
    }
}
