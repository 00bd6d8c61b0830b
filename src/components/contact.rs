//! Contact form with client-side validation and a simulated send.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

use super::notification::Notifier;
use crate::tasks::Timeout;

const FAKE_SEND_MS: i32 = 2000;

/// Why a submission was rejected client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormIssue {
	MissingField,
	BadEmail,
}

impl FormIssue {
	fn message(self) -> &'static str {
		match self {
			FormIssue::MissingField => "Please fill in all fields",
			FormIssue::BadEmail => "Please enter a valid email address",
		}
	}
}

/// Accepts `local@domain.tld` with no whitespace and a single `@`.
fn is_valid_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	let Some((host, tld)) = domain.rsplit_once('.') else {
		return false;
	};
	let token =
		|part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
	token(local) && token(host) && token(tld)
}

fn validate(name: &str, email: &str, subject: &str, message: &str) -> Result<(), FormIssue> {
	if [name, email, subject, message].iter().any(|f| f.is_empty()) {
		return Err(FormIssue::MissingField);
	}
	if !is_valid_email(email) {
		return Err(FormIssue::BadEmail);
	}
	Ok(())
}

/// The contact section's form. Submissions are validated locally and then
/// acknowledged after a simulated round-trip; nothing leaves the page.
#[component]
pub fn ContactForm() -> impl IntoView {
	let notifier = Notifier::expect();
	let (sending, set_sending) = signal(false);
	let name_ref = NodeRef::<leptos::html::Input>::new();
	let email_ref = NodeRef::<leptos::html::Input>::new();
	let subject_ref = NodeRef::<leptos::html::Input>::new();
	let message_ref = NodeRef::<leptos::html::Textarea>::new();
	let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

	let pending_submit = pending.clone();
	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if sending.get_untracked() {
			return;
		}
		let name: HtmlInputElement = name_ref.get().unwrap().into();
		let email: HtmlInputElement = email_ref.get().unwrap().into();
		let subject: HtmlInputElement = subject_ref.get().unwrap().into();
		let message: HtmlTextAreaElement = message_ref.get().unwrap().into();

		match validate(
			&name.value(),
			&email.value(),
			&subject.value(),
			&message.value(),
		) {
			Err(issue) => notifier.error(issue.message()),
			Ok(()) => {
				set_sending.set(true);
				*pending_submit.borrow_mut() = Some(Timeout::after(FAKE_SEND_MS, move || {
					notifier.success("Message sent successfully! I'll get back to you soon.");
					for field in [&name, &email, &subject] {
						field.set_value("");
					}
					message.set_value("");
					let _ = set_sending.try_set(false);
				}));
			}
		}
	};

	on_cleanup(move || {
		pending.borrow_mut().take();
	});

	view! {
		<form class="contact-form" on:submit=on_submit>
			<div class="form-group">
				<input type="text" name="name" placeholder="Your Name" node_ref=name_ref />
			</div>
			<div class="form-group">
				<input type="email" name="email" placeholder="Your Email" node_ref=email_ref />
			</div>
			<div class="form-group">
				<input type="text" name="subject" placeholder="Subject" node_ref=subject_ref />
			</div>
			<div class="form-group">
				<textarea name="message" rows="6" placeholder="Your Message" node_ref=message_ref></textarea>
			</div>
			<button type="submit" class="btn btn-primary" disabled=sending>
				{move || {
					if sending.get() {
						view! { <i class="fas fa-spinner fa-spin"></i> " Sending..." }.into_any()
					} else {
						view! { <i class="fas fa-paper-plane"></i> " Send Message" }.into_any()
					}
				}}
			</button>
		</form>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_ordinary_addresses() {
		assert!(is_valid_email("jane@example.com"));
		assert!(is_valid_email("a.b+c@sub.example.co"));
	}

	#[test]
	fn rejects_missing_parts() {
		assert!(!is_valid_email(""));
		assert!(!is_valid_email("jane"));
		assert!(!is_valid_email("jane@"));
		assert!(!is_valid_email("@example.com"));
		assert!(!is_valid_email("jane@example"));
		assert!(!is_valid_email("jane@example."));
		assert!(!is_valid_email("jane@.com"));
	}

	#[test]
	fn rejects_whitespace_and_double_at() {
		assert!(!is_valid_email("ja ne@example.com"));
		assert!(!is_valid_email("jane@exa mple.com"));
		assert!(!is_valid_email("jane@@example.com"));
		assert!(!is_valid_email("jane@foo@example.com"));
	}

	#[test]
	fn empty_fields_fail_before_the_email_check() {
		assert_eq!(
			validate("", "bad", "subject", "message"),
			Err(FormIssue::MissingField)
		);
		assert_eq!(
			validate("name", "bad", "subject", ""),
			Err(FormIssue::MissingField)
		);
	}

	#[test]
	fn bad_email_is_reported_once_fields_are_present() {
		assert_eq!(
			validate("name", "not-an-email", "subject", "message"),
			Err(FormIssue::BadEmail)
		);
	}

	#[test]
	fn complete_valid_input_passes() {
		assert_eq!(validate("name", "jane@example.com", "s", "m"), Ok(()));
	}

	#[test]
	fn rejection_messages_match_the_ui_copy() {
		assert_eq!(FormIssue::MissingField.message(), "Please fill in all fields");
		assert_eq!(
			FormIssue::BadEmail.message(),
			"Please enter a valid email address"
		);
	}
}
