//! Featured-project cards and their detail blurbs.

use leptos::prelude::*;

use super::notification::Notifier;
use crate::tasks;

const DETAIL_DELAY_MS: i32 = 1000;

/// A portfolio project card.
struct Project {
	title: &'static str,
	icon: &'static str,
	tagline: &'static str,
	technologies: &'static [&'static str],
	/// Longer blurb shown on click; not every card has one.
	detail: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
	Project {
		title: "Neural Style Transfer",
		icon: "fa-palette",
		tagline: "Applies artistic styles to images with convolutional networks.",
		technologies: &["Python", "TensorFlow", "OpenCV", "NumPy"],
		detail: Some(
			"A deep learning project that applies artistic styles to images using \
			 convolutional neural networks. Built with TensorFlow and VGG-19 architecture.",
		),
	},
	Project {
		title: "Real-time Sentiment Analyzer",
		icon: "fa-comments",
		tagline: "Streams social media text through transformer models.",
		technologies: &["Python", "BERT", "Flask", "MongoDB"],
		detail: Some(
			"NLP-powered sentiment analysis system that processes social media data \
			 in real-time using BERT and transformer models.",
		),
	},
	Project {
		title: "Advanced Object Detection",
		icon: "fa-eye",
		tagline: "Multi-class detection pipeline tuned for edge deployment.",
		technologies: &["Python", "PyTorch", "ONNX", "Docker"],
		detail: None,
	},
	Project {
		title: "AI Recommendation Engine",
		icon: "fa-magnifying-glass-chart",
		tagline: "Hybrid collaborative and content-based recommendations.",
		technologies: &["Python", "Scikit-learn", "Redis", "FastAPI"],
		detail: None,
	},
];

fn announce(notifier: Notifier, project: &'static Project) {
	let Some(detail) = project.detail else {
		return;
	};
	notifier.info(format!("Opening {} details...", project.title));
	tasks::fire_and_forget(DETAIL_DELAY_MS, move || {
		notifier.info(format!("{}: {detail}", project.title));
	});
}

/// The featured-projects grid.
#[component]
pub fn ProjectsSection() -> impl IntoView {
	let notifier = Notifier::expect();
	view! {
		<section id="projects" class="projects">
			<h2 class="section-title">"Featured Projects"</h2>
			<div class="projects-grid">
				{PROJECTS
					.iter()
					.map(|project| {
						view! {
							<div class="project-card" on:click=move |_| announce(notifier, project)>
								<div class="project-icon">
									<i class=format!("fas {}", project.icon)></i>
								</div>
								<h3>{project.title}</h3>
								<p>{project.tagline}</p>
								<div class="project-tech">
									{project
										.technologies
										.iter()
										.map(|tech| view! { <span class="tech-tag">{*tech}</span> })
										.collect_view()}
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_has_four_projects_with_unique_titles() {
		assert_eq!(PROJECTS.len(), 4);
		for (index, project) in PROJECTS.iter().enumerate() {
			assert!(
				PROJECTS[index + 1..].iter().all(|p| p.title != project.title),
				"duplicate title {}",
				project.title
			);
		}
	}

	#[test]
	fn every_project_lists_its_stack() {
		assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
	}
}
