use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::media::FallbackImage;
use crate::content::{Typewriter, TEAM, TYPEWRITER_START_MS, TYPEWRITER_STEP_MS};
use crate::hooks::use_in_view;

#[function_component(Team)]
pub fn team() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);
    let lead = TEAM[0];
    let writer = use_state_eq(|| Typewriter::new(lead.name));

    {
        let writer = writer.clone();
        use_effect_with_deps(
            move |in_view| {
                writer.set(Typewriter::new(lead.name));
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let start = in_view.then(|| {
                    let ticker = ticker.clone();
                    Timeout::new(TYPEWRITER_START_MS, move || {
                        let current = Cell::new(Typewriter::new(lead.name));
                        *ticker.borrow_mut() = Some(Interval::new(TYPEWRITER_STEP_MS, move || {
                            let next = current.get().tick();
                            current.set(next);
                            writer.set(next);
                        }));
                    })
                });
                move || {
                    drop(start);
                    ticker.borrow_mut().take();
                }
            },
            in_view,
        );
    }

    html! {
        <section id="team" ref={node} class={classes!("team", in_view.then(|| "in-view"))}>
            <h2>{"Meet the team"}</h2>
            <div class="team-grid">
                {
                    for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <article key={member.name} class="team-card">
                            <FallbackImage src={member.image} alt={member.name} />
                            <h3 class="team-name">
                                { if index == 0 { writer.text() } else { member.name } }
                                if index == 0 && !writer.is_done() {
                                    <span class="typewriter-caret">{"|"}</span>
                                }
                            </h3>
                            <p class="team-role">{member.role}</p>
                            <p class="team-bio">{member.bio}</p>
                        </article>
                    })
                }
            </div>
        </section>
    }
}
