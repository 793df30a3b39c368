use crate::action::ActionKind;
use crate::descriptor::{DialogText, FALLBACK_DIALOG};
use derive_getters::Getters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedAction {
    Known(ActionKind),
    /// A tag the page asked for but which doesn't match any action.
    Unrecognized(String),
}

impl RequestedAction {
    pub fn parse(tag: &str) -> Self {
        match tag.parse() {
            Ok(kind) => RequestedAction::Known(kind),
            Err(_) => RequestedAction::Unrecognized(tag.to_owned()),
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            RequestedAction::Known(kind) => Some(*kind),
            RequestedAction::Unrecognized(_) => None,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            RequestedAction::Known(kind) => kind.tag(),
            RequestedAction::Unrecognized(tag) => tag,
        }
    }

    pub fn dialog_text(&self) -> &'static DialogText {
        match self {
            RequestedAction::Known(kind) => &kind.descriptor().dialog,
            RequestedAction::Unrecognized(_) => &FALLBACK_DIALOG,
        }
    }
}

impl From<ActionKind> for RequestedAction {
    fn from(kind: ActionKind) -> Self {
        RequestedAction::Known(kind)
    }
}

/// What the user is about to confirm.
///
/// Returned when a dialog is opened, then handed back on submission.
/// Opening another dialog produces a fresh context; nothing is shared between the two.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ActionContext {
    action: RequestedAction,
    target_id: Option<String>,
    new_email: Option<String>,
}

impl ActionContext {
    pub fn new(action: RequestedAction, target_id: Option<String>) -> Self {
        Self {
            action,
            target_id,
            new_email: None,
        }
    }

    pub(crate) fn with_new_email(mut self, new_email: String) -> Self {
        self.new_email = Some(new_email);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_tag() {
        let action = RequestedAction::parse("delete_box");

        assert_eq!(RequestedAction::Known(ActionKind::DeleteBox), action);
        assert_eq!(Some(ActionKind::DeleteBox), action.kind());
        assert_eq!("Confirm Action", action.dialog_text().title);
    }

    #[test]
    fn should_keep_unrecognized_tag() {
        let action = RequestedAction::parse("launch_rocket");

        assert_eq!(None, action.kind());
        assert_eq!("launch_rocket", action.tag());
        assert_eq!(&FALLBACK_DIALOG, action.dialog_text());
    }
}
