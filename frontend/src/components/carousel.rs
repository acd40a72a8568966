use crate::components::comparison_slider::{ComparisonImages, ComparisonSlider};
use crate::slider::board::{SliderBoard, SliderId};
use crate::slider::geometry::INITIAL_REVEAL;
use crate::utils::dom::{element_bounds, listen_document, pointer_client_x};
use web_sys::Element;
use yew::prelude::*;

/// Which slide is showing. Stepping wraps around at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn show(self, index: usize) -> Self {
        if index < self.len {
            Self { current: index, ..self }
        } else {
            self
        }
    }

    pub fn step(self, direction: isize) -> Self {
        if self.len == 0 {
            return self;
        }
        let len = self.len as isize;
        let next = (self.current as isize + direction).rem_euclid(len);
        Self {
            current: next as usize,
            ..self
        }
    }

    /// Indicator dots are numbered from 1.
    pub fn go_to(self, position: usize) -> Self {
        match position.checked_sub(1) {
            Some(index) => self.show(index),
            None => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
    pub images: ComparisonImages,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

/// Slide carousel whose slides each hold a comparison slider. One set of
/// document pointer listeners serves all sliders in the carousel.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let count = props.slides.len();
    let index = use_state(|| SlideIndex::new(count));
    let board = use_mut_ref(|| SliderBoard::with_instances(count));
    let image_refs = use_memo(|n| (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);
    let rerender = use_force_update();

    // Pointer moves and releases can happen anywhere on the page
    {
        let board = board.clone();
        let image_refs = image_refs.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |_| {
                let on_move = {
                    let board = board.clone();
                    move |e: Event| {
                        if !board.borrow().any_dragging() {
                            return;
                        }
                        let Some(x) = pointer_client_x(&e) else {
                            return;
                        };
                        let moved = board.borrow_mut().drag_to(x, |id| {
                            image_refs
                                .get(id)
                                .and_then(|r| r.cast::<Element>())
                                .map(|el| element_bounds(&el))
                        });
                        if !moved.is_empty() {
                            rerender.force_update();
                        }
                    }
                };
                let on_release = {
                    let board = board.clone();
                    move |_: Event| {
                        board.borrow_mut().release();
                    }
                };

                let listeners = vec![
                    listen_document("mousemove", on_move.clone()),
                    listen_document("touchmove", on_move),
                    listen_document("mouseup", on_release.clone()),
                    listen_document("touchend", on_release),
                ];
                move || drop(listeners)
            },
            (),
        );
    }

    let on_grab = {
        let board = board.clone();
        Callback::from(move |id: SliderId| board.borrow_mut().grab(id))
    };
    let on_jump = {
        let board = board.clone();
        let image_refs = image_refs.clone();
        let rerender = rerender.clone();
        Callback::from(move |(id, x): (SliderId, f64)| {
            let Some(el) = image_refs.get(id).and_then(|r| r.cast::<Element>()) else {
                return;
            };
            if board.borrow_mut().jump(id, x, element_bounds(&el)).is_some() {
                rerender.force_update();
            }
        })
    };

    let step = |direction: isize| {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(index.step(direction)))
    };

    let current = index.current();
    html! {
        <div class="carousel-container">
            <div class="carousel">
                { for props.slides.iter().enumerate().map(|(i, slide)| {
                    let reveal = board.borrow().reveal(i).unwrap_or(INITIAL_REVEAL);
                    html! {
                        <div class={classes!("carousel-slide", (i == current).then_some("active"))}>
                            <ComparisonSlider
                                id={i}
                                images={slide.images.clone()}
                                reveal={reveal}
                                image_ref={image_refs[i].clone()}
                                on_grab={on_grab.clone()}
                                on_jump={on_jump.clone()} />
                            <div class="slide-caption">
                                <h3>{slide.title}</h3>
                                <p>{slide.caption}</p>
                            </div>
                        </div>
                    }
                }) }
                <button class="carousel-btn prev" onclick={step(-1)}>{"❮"}</button>
                <button class="carousel-btn next" onclick={step(1)}>{"❯"}</button>
            </div>
            <div class="carousel-indicators">
                { for (1..=count).map(|position| {
                    let index = index.clone();
                    let onclick = Callback::from(move |_: MouseEvent| index.set(index.go_to(position)));
                    html! {
                        <span class={classes!("indicator", (position - 1 == current).then_some("active"))}
                            onclick={onclick}></span>
                    }
                }) }
            </div>
        </div>
    }
}
