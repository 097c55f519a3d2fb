use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Nombre,
    Email,
    Empresa,
    Mensaje,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Nombre, Field::Email, Field::Empresa, Field::Mensaje];

    /// Form control name, also the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Email => "email",
            Field::Empresa => "empresa",
            Field::Mensaje => "mensaje",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nombre => "Nombre",
            Field::Email => "Email",
            Field::Empresa => "Empresa",
            Field::Mensaje => "Mensaje",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Nombre => "Tu nombre",
            Field::Email => "tu@email.com",
            Field::Empresa => "Nombre de tu empresa",
            Field::Mensaje => "Cuéntanos sobre tu proyecto...",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Empresa)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub nombre: String,
    pub email: String,
    pub empresa: String,
    pub mensaje: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Email => &self.email,
            Field::Empresa => &self.empresa,
            Field::Mensaje => &self.mensaje,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Nombre => self.nombre = value,
            Field::Email => self.email = value,
            Field::Empresa => self.empresa = value,
            Field::Mensaje => self.mensaje = value,
        }
    }

    /// Same rule as the HTML `required` attribute: only an empty value is
    /// missing, whitespace counts as filled.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = FormDraft::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("confirmation is showing, reset the form first")]
    NotEditing,
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Complete,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: FormDraft,
    pub phase: Phase,
}

impl ContactForm {
    pub fn check_submit(&self) -> Result<(), SubmitError> {
        match self.phase {
            Phase::Submitting => Err(SubmitError::InFlight),
            Phase::Submitted => Err(SubmitError::NotEditing),
            Phase::Editing => match self.draft.first_missing() {
                Some(field) => Err(SubmitError::MissingField(field)),
                None => Ok(()),
            },
        }
    }

    pub fn apply(&mut self, action: FormAction) -> Result<(), SubmitError> {
        match action {
            FormAction::Edit(field, value) => {
                self.draft.set(field, value);
            }
            FormAction::Submit => {
                self.check_submit()?;
                self.phase = Phase::Submitting;
            }
            FormAction::Complete => {
                // A completion that arrives outside a submission is stale
                if self.phase == Phase::Submitting {
                    self.draft.clear();
                    self.phase = Phase::Submitted;
                }
            }
            FormAction::Reset => {
                if self.phase == Phase::Submitted {
                    self.draft.clear();
                    self.phase = Phase::Editing;
                }
            }
        }
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) => Rc::new(next),
            // Rejections are reported by the caller
            Err(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Nombre, "Ana".into())).unwrap();
        form.apply(FormAction::Edit(Field::Email, "ana@x.com".into())).unwrap();
        form.apply(FormAction::Edit(Field::Mensaje, "Hola".into())).unwrap();
        form
    }

    #[test]
    fn submit_then_complete_clears_and_confirms() {
        let mut form = filled();
        form.apply(FormAction::Submit).unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.draft.nombre, "Ana");

        form.apply(FormAction::Complete).unwrap();
        assert_eq!(form.phase, Phase::Submitted);
        assert_eq!(form.draft, FormDraft::default());

        form.apply(FormAction::Reset).unwrap();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled();
        form.apply(FormAction::Submit).unwrap();
        assert_eq!(form.apply(FormAction::Submit), Err(SubmitError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn submit_from_confirmation_is_refused() {
        let mut form = filled();
        form.apply(FormAction::Submit).unwrap();
        form.apply(FormAction::Complete).unwrap();
        assert_eq!(form.apply(FormAction::Submit), Err(SubmitError::NotEditing));
    }

    #[test]
    fn company_is_optional() {
        let form = filled();
        assert_eq!(form.draft.empresa, "");
        assert_eq!(form.check_submit(), Ok(()));
    }

    #[test]
    fn missing_required_field_keeps_editing() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Email, String::new())).unwrap();
        assert_eq!(
            form.apply(FormAction::Submit),
            Err(SubmitError::MissingField(Field::Email))
        );
        assert_eq!(form.phase, Phase::Editing);

        let mut empty = ContactForm::default();
        assert_eq!(
            empty.apply(FormAction::Submit),
            Err(SubmitError::MissingField(Field::Nombre))
        );
    }

    #[test]
    fn whitespace_counts_as_filled_like_html_required() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Nombre, "   ".into())).unwrap();
        assert_eq!(form.check_submit(), Ok(()));
        assert_eq!(form.apply(FormAction::Submit), Ok(()));
        assert_eq!(form.phase, Phase::Submitting);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = filled();
        form.apply(FormAction::Complete).unwrap();
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft.mensaje, "Hola");
    }

    #[test]
    fn reducer_keeps_state_on_rejection() {
        let state = Rc::new(ContactForm::default());
        let next = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(FormAction::Edit(Field::Empresa, "Minera Andes".into()));
        assert_eq!(next.draft.get(Field::Empresa), "Minera Andes");
    }

    #[test]
    fn payload_uses_form_control_names() {
        let json = serde_json::to_value(&filled().draft).unwrap();
        for field in Field::ALL {
            assert!(json.get(field.name()).is_some(), "missing key {}", field.name());
        }
        assert_eq!(json["email"], "ana@x.com");
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            SubmitError::MissingField(Field::Mensaje).to_string(),
            "required field `mensaje` is empty"
        );
    }
}
