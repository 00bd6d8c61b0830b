//! Toast notifications, one visible at a time.

use leptos::prelude::*;

use crate::tasks;

const DISMISS_AFTER_MS: i32 = 5000;

/// Severity of a toast message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
	Info,
}

impl NoticeKind {
	fn class(self) -> &'static str {
		match self {
			NoticeKind::Success => "notification-success",
			NoticeKind::Error => "notification-error",
			NoticeKind::Info => "notification-info",
		}
	}

	fn icon(self) -> &'static str {
		match self {
			NoticeKind::Success => "fa-check-circle",
			NoticeKind::Error => "fa-exclamation-circle",
			NoticeKind::Info => "fa-info-circle",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
struct Notice {
	id: usize,
	kind: NoticeKind,
	message: String,
}

/// Toast dispatcher shared through context.
///
/// A new toast replaces whatever is currently showing; each toast dismisses
/// itself after five seconds.
#[derive(Clone, Copy)]
pub struct Notifier {
	notices: RwSignal<Vec<Notice>>,
	next_id: StoredValue<usize>,
}

impl Notifier {
	/// Creates a dispatcher and registers it in the reactive context.
	pub fn provide() -> Self {
		let notifier = Notifier {
			notices: RwSignal::new(Vec::new()),
			next_id: StoredValue::new(0),
		};
		provide_context(notifier);
		notifier
	}

	/// The dispatcher registered by [`Notifier::provide`].
	pub fn expect() -> Self {
		expect_context::<Notifier>()
	}

	pub fn success(&self, message: impl Into<String>) {
		self.push(NoticeKind::Success, message.into());
	}

	pub fn error(&self, message: impl Into<String>) {
		self.push(NoticeKind::Error, message.into());
	}

	pub fn info(&self, message: impl Into<String>) {
		self.push(NoticeKind::Info, message.into());
	}

	fn push(&self, kind: NoticeKind, message: String) {
		let mut id = 0;
		self.next_id.update_value(|next| {
			id = *next;
			*next += 1;
		});
		self.notices.set(vec![Notice { id, kind, message }]);

		let notices = self.notices;
		tasks::fire_and_forget(DISMISS_AFTER_MS, move || {
			let _ = notices.try_update(|list| list.retain(|notice| notice.id != id));
		});
	}
}

/// Fixed-position toast area rendered once at the app root.
#[component]
pub fn NotificationArea() -> impl IntoView {
	let notifier = Notifier::expect();
	view! {
		<div class="notification-area">
			<For each=move || notifier.notices.get() key=|notice| notice.id let:notice>
				<div class=format!("notification {}", notice.kind.class())>
					<div class="notification-content">
						<i class=format!("fas {}", notice.kind.icon())></i>
						<span>{notice.message.clone()}</span>
					</div>
				</div>
			</For>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_map_to_their_css_classes() {
		assert_eq!(NoticeKind::Success.class(), "notification-success");
		assert_eq!(NoticeKind::Error.class(), "notification-error");
		assert_eq!(NoticeKind::Info.class(), "notification-info");
	}

	#[test]
	fn kinds_map_to_their_icons() {
		assert_eq!(NoticeKind::Success.icon(), "fa-check-circle");
		assert_eq!(NoticeKind::Error.icon(), "fa-exclamation-circle");
		assert_eq!(NoticeKind::Info.icon(), "fa-info-circle");
	}
}
