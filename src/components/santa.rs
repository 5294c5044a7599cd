use crate::ambient::{SantaPhase, SantaScheduler};
use crate::rng::Rng;
use crate::tasks::spawn_repeating;
use log::info;
use yew::prelude::*;

#[function_component(Santa)]
pub fn santa() -> Html {
    let flying = use_state(|| false);
    {
        let flying = flying.clone();
        use_effect_with((), move |_| {
            let mut scheduler = SantaScheduler::new(Rng::from_entropy());
            let first = scheduler.initial_delay_ms();
            let task = spawn_repeating(first, move || {
                let (phase, duration) = scheduler.advance();
                if phase == SantaPhase::Flying {
                    info!("santa takes off for {} ms", duration);
                }
                flying.set(phase == SantaPhase::Flying);
                duration
            });
            move || task.cancel()
        });
    }
    html! { <div id="santa" class={classes!("santa", (*flying).then_some("santa-flying"))}></div> }
}
