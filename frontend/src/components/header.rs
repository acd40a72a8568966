use crate::config;
use crate::utils::dom::{listen_window, scroll_to_id};
use yew::prelude::*;

const DEFAULT_STYLE: &str = "background: linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 100%); backdrop-filter: none;";
const SCROLLED_STYLE: &str = "background: rgba(26, 26, 26, 0.95); backdrop-filter: blur(10px);";

pub fn header_style(scroll_y: f64) -> &'static str {
    if scroll_y > config::HEADER_SCROLL_THRESHOLD {
        SCROLLED_STYLE
    } else {
        DEFAULT_STYLE
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let scroll_y = use_state(|| 0.0_f64);
    let menu_open = use_state(|| false);

    // Track scrolling for the header background
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let read_scroll = move || {
                    if let Some(Ok(y)) = web_sys::window().map(|w| w.scroll_y()) {
                        scroll_y.set(y);
                    }
                };
                // Initial call
                read_scroll();
                let listener = listen_window("scroll", move |_| read_scroll());
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_id("contact"));

    html! {
        <header class="header" style={header_style(*scroll_y)}>
            <nav class="nav">
                <a href="#" class="nav-logo">{"✨ Holiday Glow Lighting"}</a>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    <li><a href="#services" class="nav-link">{"Services"}</a></li>
                    <li><a href="#gallery" class="nav-link">{"Gallery"}</a></li>
                    <li><a href="#contact" class="nav-link">{"Contact"}</a></li>
                    <li><button class="nav-cta" onclick={to_contact}>{"Get a Quote"}</button></li>
                </ul>
                <button class="mobile-menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span><span></span><span></span>
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_style_past_threshold() {
        assert_eq!(header_style(0.0), DEFAULT_STYLE);
        assert_eq!(header_style(100.0), DEFAULT_STYLE);
        assert_eq!(header_style(100.5), SCROLLED_STYLE);
    }
}
