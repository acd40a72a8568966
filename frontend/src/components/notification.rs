use crate::config;
use crate::utils::dom::scroll_into_view_smooth;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// Thank-you notices currently on screen. Each submit adds one and each
/// notice removes itself when its timer runs out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeList {
    next_id: u32,
    ids: Vec<u32>,
}

pub enum NoticeAction {
    Push,
    Expire(u32),
}

impl NoticeList {
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push => {
                next.ids.push(next.next_id);
                next.next_id = next.next_id.wrapping_add(1);
            }
            NoticeAction::Expire(id) => next.ids.retain(|n| *n != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessNoticeProps {
    pub id: u32,
    pub on_expire: Callback<u32>,
}

#[function_component(SuccessNotice)]
pub fn success_notice(props: &SuccessNoticeProps) -> Html {
    let node = use_node_ref();

    // Scroll into view right away, remove after the display period
    {
        let node = node.clone();
        let on_expire = props.on_expire.clone();
        let id = props.id;
        use_effect_with_deps(
            move |_| {
                if let Some(element) = node.cast::<web_sys::Element>() {
                    scroll_into_view_smooth(&element);
                }
                let timeout = Timeout::new(config::SUCCESS_NOTICE_MS, move || on_expire.emit(id));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="success-message" ref={node}>
            <div style="background: linear-gradient(45deg, #228B22, #32CD32); color: white; padding: 20px; border-radius: 10px; text-align: center; margin: 20px 0; box-shadow: 0 8px 25px rgba(34, 139, 34, 0.3);">
                <h3 style="margin-bottom: 10px;">{"🎉 Thank You!"}</h3>
                <p>{"Your quote request has been submitted successfully. We'll contact you within 24 hours to discuss your Christmas lighting project!"}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_individually() {
        let list = Rc::new(NoticeList::default());
        let list = list.reduce(NoticeAction::Push);
        let list = list.reduce(NoticeAction::Push);
        assert_eq!(list.ids(), &[0, 1]);

        let list = list.reduce(NoticeAction::Expire(0));
        assert_eq!(list.ids(), &[1]);

        // expiring twice is harmless
        let list = list.reduce(NoticeAction::Expire(0));
        assert_eq!(list.ids(), &[1]);
    }
}
