//! Alta form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AltaFormProps`, `AltaFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! All user-facing text is Spanish, matching the rest of the product.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AltaFormProps;
pub use state::AltaFormComponent;

impl Component for AltaFormComponent {
    type Message = Msg;
    type Properties = AltaFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AltaFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
