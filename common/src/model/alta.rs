use serde::{Deserialize, Serialize};

/// Multipart part names expected by the server. The DOM element ids of the
/// form controls are the same strings, so one constant covers both sides.
pub const ID: &str = "id";
pub const NOMBRE: &str = "nombre";
pub const EDAD: &str = "edad";
pub const SEXO: &str = "sexo";
pub const TAMANIO: &str = "tamanio";
pub const IMAGEN: &str = "imagen";

/// The five text fields, in form order. `IMAGEN` is the sixth part and
/// carries the raw file bytes instead of a string value.
pub const TEXT_FIELDS: [&str; 5] = [ID, NOMBRE, EDAD, SEXO, TAMANIO];

/// Registration payload for one stray ("alta de callejero").
///
/// Built fresh from the current form values on every submit and consumed by
/// a single POST; never cached or reused across submissions. All values are
/// kept as strings here — the server parses `id`/`edad` on its side, and the
/// form never sees anything but strings anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alta {
    pub id: String,
    pub nombre: String,
    pub edad: String,
    pub sexo: String,
    pub tamanio: String,
}

impl Alta {
    /// The five text parts as `(part name, value)` pairs, in form order.
    /// The image part is appended separately because it is binary.
    pub fn parts(&self) -> [(&'static str, &str); 5] {
        [
            (ID, self.id.as_str()),
            (NOMBRE, self.nombre.as_str()),
            (EDAD, self.edad.as_str()),
            (SEXO, self.sexo.as_str()),
            (TAMANIO, self.tamanio.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_follow_form_order() {
        let alta = Alta {
            id: "7".to_string(),
            nombre: "Rex".to_string(),
            edad: "3".to_string(),
            sexo: "M".to_string(),
            tamanio: "mediano".to_string(),
        };

        let parts = alta.parts();
        assert_eq!(
            parts,
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
    fn text_fields_plus_imagen_cover_the_request_keys() {
        let mut keys: Vec<&str> = TEXT_FIELDS.to_vec();
        keys.push(IMAGEN);
        assert_eq!(keys, ["id", "nombre", "edad", "sexo", "tamanio", "imagen"]);
    }
}
