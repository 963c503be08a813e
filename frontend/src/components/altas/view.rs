//! View rendering for the alta form component.
//!
//! One `<form id="formulario">` with six labelled controls whose DOM ids are
//! the multipart part names: `id`, `nombre` and `edad` as inputs, `sexo` and
//! `tamanio` as selects, `imagen` as a file input. Controls are kept
//! synchronized with the component state through messages; the selects and
//! the file input also keep `NodeRef`s, so they can be cleared in place
//! after a successful alta.
//!
//! Validation is whatever the browser enforces (`required`, input types).

use common::model::alta;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AltaFormComponent;

const SEXOS: [(&str, &str); 2] = [("M", "Macho"), ("H", "Hembra")];
const TAMANIOS: [(&str, &str); 3] = [("chico", "Chico"), ("mediano", "Mediano"), ("grande", "Grande")];

/// Main view function for the alta form component.
pub fn view(component: &AltaFormComponent, ctx: &Context<AltaFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <form id="formulario" class="alta-form" onsubmit={link.callback(Msg::Submit)}>
            <h1>{"Alta de callejeros"}</h1>
            { build_text_field(link, alta::ID, "Id", "number", component.fields.id.clone()) }
            { build_text_field(link, alta::NOMBRE, "Nombre", "text", component.fields.nombre.clone()) }
            { build_text_field(link, alta::EDAD, "Edad", "number", component.fields.edad.clone()) }
            { build_select_field(link, alta::SEXO, "Sexo", &SEXOS, component.fields.sexo.clone(), component.sexo_ref.clone()) }
            { build_select_field(link, alta::TAMANIO, "Tamaño", &TAMANIOS, component.fields.tamanio.clone(), component.tamanio_ref.clone()) }
            { build_file_field(component, link) }
            <button type="submit" class="boton-agregar">{"Agregar"}</button>
        </form>
    }
}

/// Builds a labelled text/number input bound to a form field.
fn build_text_field(
    link: &Scope<AltaFormComponent>,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
) -> Html {
    html! {
        <div class="campo">
            <label for={name}>{label}</label>
            <input
                id={name}
                name={name}
                type={input_type}
                value={value}
                required=true
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateField(name, input.value())
                })}
            />
        </div>
    }
}

/// Builds a labelled select bound to a form field. Selects are not
/// value-controlled by Yew, so the node keeps a ref and is reset in place
/// after a successful alta.
fn build_select_field(
    link: &Scope<AltaFormComponent>,
    name: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: String,
    node_ref: NodeRef,
) -> Html {
    html! {
        <div class="campo">
            <label for={name}>{label}</label>
            <select
                id={name}
                name={name}
                required=true
                ref={node_ref}
                onchange={link.callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::UpdateField(name, select.value())
                })}
            >
                <option value="" selected={value.is_empty()} disabled=true>{"Seleccionar"}</option>
                {
                    options.iter().map(|(option_value, option_label)| html! {
                        <option value={*option_value} selected={value == *option_value}>
                            {*option_label}
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

/// Builds the file input. The first selected file (if any) is forwarded to
/// the component state; the node itself is referenced for the post-success
/// reset.
fn build_file_field(component: &AltaFormComponent, link: &Scope<AltaFormComponent>) -> Html {
    html! {
        <div class="campo">
            <label for={alta::IMAGEN}>{"Imagen"}</label>
            <input
                id={alta::IMAGEN}
                name={alta::IMAGEN}
                type="file"
                accept="image/*"
                required=true
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                })}
            />
        </div>
    }
}
