//! Side navigation rail entries
//!
//! Rendered once into `#rail-nav`. Scroll ticks afterwards only flip the
//! active/idle class sets on each dot and label (see [`crate::render`]).

use pagespy_core::Section;
use yew::prelude::*;

use crate::ids;

pub const ITEM_CLASS: &str = "flex items-center gap-3 cursor-pointer group/item";

pub const DOT_BASE: &[&str] = &[
    "w-3",
    "h-3",
    "rounded-full",
    "border-2",
    "dark:border-uber-darkborder",
    "transition-all",
    "duration-300",
];
pub const DOT_ACTIVE: &[&str] = &["bg-uber-black", "dark:bg-uber-white", "scale-125"];
pub const DOT_IDLE: &[&str] = &["bg-white", "border-uber-gray300"];

pub const LABEL_BASE: &[&str] = &[
    "text-sm",
    "font-medium",
    "group-hover/item:opacity-100",
    "transition-opacity",
    "duration-300",
];
pub const LABEL_ACTIVE: &[&str] = &["text-uber-black", "dark:text-white", "opacity-100"];
pub const LABEL_IDLE: &[&str] = &["text-uber-gray600", "opacity-0"];

fn state_classes(
    base: &[&'static str],
    active_set: &[&'static str],
    idle_set: &[&'static str],
    active: bool,
) -> Classes {
    let mut classes = Classes::new();
    for class in base
        .iter()
        .chain(if active { active_set } else { idle_set })
    {
        classes.push(*class);
    }
    classes
}

#[must_use]
pub fn dot_classes(active: bool) -> Classes {
    state_classes(DOT_BASE, DOT_ACTIVE, DOT_IDLE, active)
}

#[must_use]
pub fn label_classes(active: bool) -> Classes {
    state_classes(LABEL_BASE, LABEL_ACTIVE, LABEL_IDLE, active)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sections: Vec<Section>,
    #[prop_or_default]
    pub active: Option<usize>,
    /// Emits the section key of a clicked entry.
    #[prop_or_default]
    pub on_select: Callback<String>,
}

#[function_component(RailNav)]
pub fn rail_nav(p: &Props) -> Html {
    html! {
        <>
            { for p.sections.iter().enumerate().map(|(idx, section)| {
                let active = p.active == Some(idx);
                let onclick = {
                    let cb = p.on_select.clone();
                    let key = section.key.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(key.clone()))
                };
                html! {
                    <div class={ITEM_CLASS} data-section={section.key.clone()} {onclick}>
                        <div id={ids::rail_dot(&section.key)} class={dot_classes(active)}></div>
                        <span id={ids::rail_label(&section.key)} class={label_classes(active)}>
                            { section.label.clone() }
                        </span>
                    </div>
                }
            }) }
        </>
    }
}
