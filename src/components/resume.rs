//! Simulated resume download.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::notification::Notifier;

const RESUME_FILENAME: &str = "Hritik_Singh_AI_Engineer_Resume.txt";

// Stand-in for a real PDF; served from memory so the demo has no assets.
const RESUME_TEXT: &str = "\
Hritik Singh - AI Engineer

EXPERIENCE:
- Senior AI Engineer at TechCorp (2022-Present)
- Machine Learning Engineer at DataSoft (2020-2022)
- Junior Data Scientist at StartupXYZ (2019-2020)

EDUCATION:
- M.S. in Computer Science, IIT Mumbai (2019)
- B.Tech in Computer Engineering, NIT Delhi (2017)

SKILLS:
- Python, TensorFlow, PyTorch, Scikit-learn
- Deep Learning, Neural Networks, Computer Vision
- AWS, Docker, Kubernetes, MLOps

PROJECTS:
- Neural Style Transfer System
- Real-time Sentiment Analyzer
- Advanced Object Detection Platform
- AI-powered Recommendation Engine
";

fn download_resume() -> Result<(), JsValue> {
	let document = web_sys::window().unwrap().document().unwrap();

	let parts = js_sys::Array::of1(&JsValue::from_str(RESUME_TEXT));
	let options = BlobPropertyBag::new();
	options.set_type("text/plain");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(RESUME_FILENAME);
	let body = document.body().ok_or("document has no body")?;
	body.append_child(&anchor)?;
	anchor.click();
	body.remove_child(&anchor)?;
	Url::revoke_object_url(&url)?;
	Ok(())
}

/// Resume card with the download button.
#[component]
pub fn ResumeCard() -> impl IntoView {
	let notifier = Notifier::expect();
	let on_click = move |_| match download_resume() {
		Ok(()) => notifier.success("Resume downloaded successfully!"),
		Err(err) => {
			log::error!("resume download failed: {err:?}");
			notifier.error("Could not generate the resume download");
		}
	};

	view! {
		<div class="resume-card">
			<div class="resume-icon">
				<i class="fas fa-file-alt"></i>
			</div>
			<h3>"My Resume"</h3>
			<p>"Experience, education and the projects behind them, in one page."</p>
			<button class="btn btn-primary" on:click=on_click>
				<i class="fas fa-download"></i>
				" Download Resume"
			</button>
		</div>
	}
}
