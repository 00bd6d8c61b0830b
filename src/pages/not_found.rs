use leptos::prelude::*;

/// 404 page linking back to the portfolio.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"404"</h1>
			<p>"This page took a wrong turn through the network."</p>
			<a href="/" class="btn btn-primary">
				"Back to the portfolio"
			</a>
		</section>
	}
}
