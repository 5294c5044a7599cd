use crate::ambient::{HERD_LIFETIME_MS, HerdAction, HerdList, HerdSpawner};
use crate::dom::viewport;
use crate::rng::Rng;
use crate::tasks::{TaskHandle, spawn_repeating};
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReindeerHerdsProps {
    pub image: AttrValue,
}

/// Herds of reindeer crossing the ground, one every few seconds.
#[function_component(ReindeerHerds)]
pub fn reindeer_herds(props: &ReindeerHerdsProps) -> Html {
    let herds = use_reducer(HerdList::default);
    {
        let herds = herds.clone();
        use_effect_with((), move |_| {
            let removals = Rc::new(TaskHandle::default());
            let mut spawner = HerdSpawner::new(Rng::from_entropy());
            let chain = {
                let removals = removals.clone();
                spawn_repeating(0, move || {
                    let vp = viewport();
                    let herd = spawner.spawn(vp);
                    let id = herd.id;
                    debug!("reindeer herd {} with {} deer", id, herd.deer.len());
                    herds.dispatch(HerdAction::Add(herd));
                    let herds = herds.clone();
                    removals.after(HERD_LIFETIME_MS, move || {
                        herds.dispatch(HerdAction::Remove(id))
                    });
                    spawner.next_delay_ms(vp)
                })
            };
            move || {
                chain.cancel();
                removals.cancel();
            }
        });
    }
    html! {
        <div id="reindeers">
            { for herds.herds.iter().map(|h| html! {
                <div key={h.id} class="herd right-to-left">
                    { for h.deer.iter().map(|d| html! {
                        <div
                            class="reindeer left-facing"
                            style={format!("bottom:{}px; transform:scale({});", d.bottom, d.scale)}
                        >
                            <img src={props.image.clone()} alt="Reindeer" />
                        </div>
                    }) }
                </div>
            }) }
        </div>
    }
}
