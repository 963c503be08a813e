use common::form::SubmitOutcome;
use web_sys::{File, SubmitEvent};

#[derive(Clone)]
pub enum Msg {
    UpdateField(&'static str, String),
    FileSelected(Option<File>),
    Submit(SubmitEvent),
    Submitted(SubmitOutcome),
}
