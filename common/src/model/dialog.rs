//! Declarative description of the small data-entry dialogs in the control panel.

use std::fmt;
use std::str::FromStr;

use crate::error::DialogError;

/// Kind of a synthesized input. `Textarea` becomes a `<textarea>`, the rest an `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Textarea,
}

impl InputKind {
    /// Value for the `type` attribute, `None` for a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Password => Some("password"),
            InputKind::Textarea => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDescriptor {
    /// Used as both `name` and `id` of the input.
    pub name: String,
    pub kind: InputKind,
    pub placeholder: Option<String>,
}

impl InputDescriptor {
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescriptor {
    /// Matches the `data-dialog-button` value of the trigger.
    pub id: String,
    pub prompt: String,
    /// Material icon name shown next to the prompt.
    pub prompt_icon: String,
    pub inputs: Vec<InputDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
    Put,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
            FormMethod::Put => "put",
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMethod {
    type Err = DialogError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(FormMethod::Get),
            "post" => Ok(FormMethod::Post),
            "put" => Ok(FormMethod::Put),
            _ => Err(DialogError::InvalidMethod(method.to_string())),
        }
    }
}

/// Where a dialog's form submits to, read from its trigger button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTarget {
    pub method: FormMethod,
    pub action: String,
}

impl DialogTarget {
    /// Validates the `data-dialog-method` and `data-dialog-action` attributes of trigger `id`.
    pub fn from_attributes(
        id: &str,
        method: Option<String>,
        action: Option<String>,
    ) -> Result<Self, DialogError> {
        let missing = |attribute| DialogError::MissingAttribute {
            id: id.to_string(),
            attribute,
        };
        let method = method
            .filter(|m| !m.is_empty())
            .ok_or_else(|| missing("data-dialog-method"))?;
        let action = action
            .filter(|a| !a.is_empty())
            .ok_or_else(|| missing("data-dialog-action"))?;

        Ok(Self {
            method: method.parse()?,
            action,
        })
    }
}

/// Dialogs the control panel synthesizes at page load.
pub fn control_panel_dialogs() -> Vec<DialogDescriptor> {
    vec![DialogDescriptor {
        id: "create-user".into(),
        prompt: "Skapa användare".into(),
        prompt_icon: "person_add".into(),
        inputs: vec![
            InputDescriptor::new("username", InputKind::Text).placeholder("sven.svensson"),
            InputDescriptor::new("password", InputKind::Password).placeholder("superSecret45"),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn target_requires_both_attributes() {
        assert_eq!(
            DialogTarget::from_attributes("create-user", None, Some("/api/creator".into())),
            Err(DialogError::MissingAttribute {
                id: "create-user".into(),
                attribute: "data-dialog-method"
            })
        );
        assert_eq!(
            DialogTarget::from_attributes("create-user", Some("post".into()), Some(String::new())),
            Err(DialogError::MissingAttribute {
                id: "create-user".into(),
                attribute: "data-dialog-action"
            })
        );
    }

    #[test]
    fn target_parses_method_case_insensitively() {
        let target =
            DialogTarget::from_attributes("x", Some("POST".into()), Some("/api/x".into())).unwrap();
        assert_eq!(target.method, FormMethod::Post);
        assert_eq!(target.action, "/api/x");

        assert_eq!(
            "patch".parse::<FormMethod>(),
            Err(DialogError::InvalidMethod("patch".into()))
        );
    }

    #[test]
    fn create_user_dialog_has_credentials_inputs() {
        let dialogs = control_panel_dialogs();
        let create_user = &dialogs[0];

        assert_eq!(create_user.id, "create-user");
        let kinds: Vec<_> = create_user.inputs.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, [InputKind::Text, InputKind::Password]);
        assert_eq!(InputKind::Textarea.input_type(), None);
    }
}
