//! Defines the properties for the `AltaFormComponent`.

use common::config::ApiConfig;
use yew::prelude::*;

/// Properties for the `AltaFormComponent`.
///
/// The only property is the API configuration. The default points at the
/// local development server, so a bare `<AltaFormComponent />` works out of
/// the box; a host page overrides `config` to target another deployment.
#[derive(Properties, PartialEq, Clone)]
pub struct AltaFormProps {
    #[prop_or_default]
    pub config: ApiConfig,
}
