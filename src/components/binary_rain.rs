//! Falling-binary background effect for the hero section.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::tasks::{Interval, WindowListener};

const CELL: f64 = 20.0;
const TICK_MS: i32 = 100;
const RESET_CHANCE: f64 = 0.025;
const FLIP_CHANCE: f64 = 0.02;

struct Column {
	head: usize,
	glyphs: Vec<char>,
}

/// Grid of glyph columns; each column's head row advances one cell per tick.
struct RainField {
	columns: Vec<Column>,
	rows: usize,
}

impl RainField {
	fn new(width: f64, height: f64, random: &mut dyn FnMut() -> f64) -> Self {
		let count = (width / CELL) as usize;
		let rows = (height / CELL) as usize;
		let columns = (0..count)
			.map(|_| Column {
				head: (random() * rows as f64) as usize,
				glyphs: (0..rows).map(|_| glyph(random())).collect(),
			})
			.collect();
		RainField { columns, rows }
	}

	fn tick(&mut self, random: &mut dyn FnMut() -> f64) {
		for column in &mut self.columns {
			column.head += 1;
			// Past the bottom a column lingers, then restarts at random.
			if column.head >= self.rows && random() < RESET_CHANCE {
				column.head = 0;
			}
			for glyph_slot in &mut column.glyphs {
				if random() < FLIP_CHANCE {
					*glyph_slot = glyph(random());
				}
			}
		}
	}
}

fn glyph(sample: f64) -> char {
	if sample > 0.5 { '1' } else { '0' }
}

/// Brightness and color of a glyph by its distance behind the drop head.
fn glyph_style(row: usize, head: usize) -> &'static str {
	if row == head {
		"rgba(0, 212, 255, 1.0)"
	} else if head >= 1 && row == head - 1 {
		"rgba(0, 255, 255, 0.7)"
	} else if head >= 2 && row == head - 2 {
		"rgba(255, 255, 255, 0.4)"
	} else {
		"rgba(0, 212, 255, 0.1)"
	}
}

fn draw(field: &RainField, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_font("14px monospace");
	ctx.set_text_align("center");
	for (column_index, column) in field.columns.iter().enumerate() {
		let x = column_index as f64 * CELL + CELL / 2.0;
		for (row, glyph_char) in column.glyphs.iter().enumerate() {
			ctx.set_fill_style_str(glyph_style(row, column.head));
			let _ = ctx.fill_text(&glyph_char.to_string(), x, row as f64 * CELL + CELL * 0.75);
		}
	}
}

fn window_size() -> (f64, f64) {
	let window = web_sys::window().unwrap();
	(
		window.inner_width().unwrap().as_f64().unwrap_or(0.0),
		window.inner_height().unwrap().as_f64().unwrap_or(0.0),
	)
}

/// Full-viewport canvas drawing the falling-binary backdrop.
#[component]
pub fn BinaryRain() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
	let resize: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));
	let (ticker_init, resize_init) = (ticker.clone(), resize.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let (w, h) = window_size();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut random = || js_sys::Math::random();
		let field = Rc::new(RefCell::new(RainField::new(w, h, &mut random)));

		// A resize invalidates the column grid, so the field is rebuilt.
		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_init.borrow_mut() = Some(WindowListener::listen("resize", move |_| {
			let (nw, nh) = window_size();
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			let mut random = || js_sys::Math::random();
			*field_resize.borrow_mut() = RainField::new(nw, nh, &mut random);
		}));

		*ticker_init.borrow_mut() = Some(Interval::every(TICK_MS, move || {
			let mut random = || js_sys::Math::random();
			let mut field = field.borrow_mut();
			field.tick(&mut random);
			draw(
				&field,
				&ctx,
				canvas.width() as f64,
				canvas.height() as f64,
			);
		}));
	});

	on_cleanup(move || {
		ticker.borrow_mut().take();
		resize.borrow_mut().take();
	});

	view! { <canvas node_ref=canvas_ref class="binary-rain" aria-hidden="true"></canvas> }
}
