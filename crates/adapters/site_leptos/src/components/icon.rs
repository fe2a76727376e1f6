//! Outline icon rendered from the domain's static shape data.

use leptos::prelude::*;
use servicios_domain::icon::{Icon, STROKE_WIDTH, Shape, VIEW_BOX};

/// Inline SVG for a service icon.
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    let stroke_width = STROKE_WIDTH.to_string();
    let shapes = icon
        .shapes()
        .iter()
        .map(|shape| match *shape {
            Shape::Path { d } => view! {
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width=stroke_width.clone()
                    d=d
                ></path>
            }
            .into_any(),
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => view! {
                <rect
                    x=x.to_string()
                    y=y.to_string()
                    width=width.to_string()
                    height=height.to_string()
                    rx=rx.to_string()
                    ry=rx.to_string()
                    stroke-width=stroke_width.clone()
                ></rect>
            }
            .into_any(),
            Shape::Circle { cx, cy, r } => view! {
                <circle
                    cx=cx.to_string()
                    cy=cy.to_string()
                    r=r.to_string()
                    stroke-width=stroke_width.clone()
                ></circle>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <svg
            class="w-6 h-6"
            fill="none"
            stroke="currentColor"
            viewBox=VIEW_BOX
            data-icon=icon.key()
        >
            {shapes}
        </svg>
    }
}
