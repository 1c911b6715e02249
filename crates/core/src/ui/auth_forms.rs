//! Login and signup forms bound to the session container

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::{Authenticator, DemoCredential, KeyValueStorage, Role, Session, SignupProfile, UserIdentity};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn fill(&mut self, demo: &DemoCredential) {
        self.email = demo.email.to_string();
        self.password = demo.password.to_string();
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub location: String,
}

impl SignupForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn profile(&self) -> SignupProfile {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        SignupProfile {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            role: Some(self.role),
            phone: optional(&self.phone),
            location: optional(&self.location),
        }
    }
}

fn session_error<S: KeyValueStorage, A: Authenticator>(ui: &mut Ui, session: &Session<S, A>) {
    if let Some(error) = session.error() {
        ui.label(RichText::new(format!("{} {}", regular::WARNING, error)).color(Color32::from_rgb(220, 38, 38)));
    }
}

/// Returns the identity on a successful login this frame
pub fn render_login_form<S: KeyValueStorage, A: Authenticator>(
    ui: &mut Ui,
    form: &mut LoginForm,
    session: &mut Session<S, A>,
    demo_accounts: &[DemoCredential],
) -> Option<UserIdentity> {
    let mut submitted = false;

    egui::Grid::new("login_form").num_columns(2).spacing([8.0, 8.0]).show(ui, |ui| {
        ui.label("Email:");
        ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("you@example.com"));
        ui.end_row();
        ui.label("Password:");
        let response = ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
        ui.end_row();
    });

    session_error(ui, session);

    ui.add_space(8.0);
    let button = egui::Button::new(format!("{} Sign In", regular::SIGN_IN));
    if ui.add_enabled(!session.is_loading(), button).clicked() {
        submitted = true;
    }

    if !demo_accounts.is_empty() {
        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new("Demo accounts").small().color(Color32::GRAY));
        ui.horizontal_wrapped(|ui| {
            for demo in demo_accounts {
                if ui
                    .button(demo.role.label())
                    .on_hover_text(format!("{} / {}", demo.email, demo.password))
                    .clicked()
                {
                    form.fill(demo);
                }
            }
        });
    }

    if !submitted {
        return None;
    }
    let user = session.login(&form.email, &form.password).ok()?;
    form.password.clear();
    Some(user)
}

/// Returns the new identity on a successful signup this frame
pub fn render_signup_form<S: KeyValueStorage, A: Authenticator>(
    ui: &mut Ui,
    form: &mut SignupForm,
    session: &mut Session<S, A>,
) -> Option<UserIdentity> {
    egui::Grid::new("signup_form").num_columns(2).spacing([8.0, 8.0]).show(ui, |ui| {
        ui.label("Full name:");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();
        ui.label("Email:");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();
        ui.label("Phone:");
        ui.text_edit_singleline(&mut form.phone);
        ui.end_row();
        ui.label("Location:");
        ui.text_edit_singleline(&mut form.location);
        ui.end_row();
        ui.label("I am a:");
        egui::ComboBox::from_id_salt("signup_role")
            .selected_text(form.role.label())
            .show_ui(ui, |ui| {
                for role in [Role::User, Role::Owner] {
                    ui.selectable_value(&mut form.role, role, role.label());
                }
            });
        ui.end_row();
    });

    session_error(ui, session);

    ui.add_space(8.0);
    let button = egui::Button::new(format!("{} Create Account", regular::USER_PLUS));
    if !ui.add_enabled(form.is_complete() && !session.is_loading(), button).clicked() {
        return None;
    }
    session.signup(&form.profile()).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Sign-in card with a login/signup toggle
#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub login: LoginForm,
    pub signup: SignupForm,
}

impl AuthScreen {
    pub fn show<S: KeyValueStorage, A: Authenticator>(
        &mut self,
        ui: &mut Ui,
        session: &mut Session<S, A>,
        demo_accounts: &[DemoCredential],
    ) -> Option<UserIdentity> {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(regular::CUBE).size(40.0));
            ui.heading("BookMyBox");
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let before = self.mode;
            ui.selectable_value(&mut self.mode, AuthMode::Login, "Sign In");
            ui.selectable_value(&mut self.mode, AuthMode::Signup, "Sign Up");
            if self.mode != before {
                session.clear_error();
            }
        });
        ui.separator();

        match self.mode {
            AuthMode::Login => render_login_form(ui, &mut self.login, session, demo_accounts),
            AuthMode::Signup => {
                let user = render_signup_form(ui, &mut self.signup, session);
                if user.is_some() {
                    self.signup = SignupForm::default();
                }
                user
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DemoAuthenticator, MemoryStorage};

    #[test]
    fn signup_profile_trims_and_drops_blank_fields() {
        let form = SignupForm {
            name: "  Asha Rao ".into(),
            email: "asha@example.com".into(),
            role: Role::Owner,
            phone: "   ".into(),
            location: "Pune".into(),
        };
        assert!(form.is_complete());
        let profile = form.profile();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.role, Some(Role::Owner));
        assert_eq!(profile.phone, None);
        assert_eq!(profile.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn signup_needs_name_and_email() {
        let form = SignupForm { email: "x@y.z".into(), ..Default::default() };
        assert!(!form.is_complete());
    }

    #[test]
    fn quick_fill_matches_a_working_login() {
        let auth = DemoAuthenticator::new();
        let demo = auth.demo_credentials();
        let mut form = LoginForm::default();
        form.fill(&demo[1]);

        let mut session = Session::new(MemoryStorage::new(), auth);
        let user = session.login(&form.email, &form.password).unwrap();
        assert_eq!(user.role, demo[1].role);
    }
}
