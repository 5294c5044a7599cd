use super::backdrop::Backdrop;
use super::calendar_grid::CalendarGrid;
use super::confetti_canvas::{BurstRequest, ConfettiCanvas};
use super::reindeer_herds::ReindeerHerds;
use super::santa::Santa;
use super::video_modal::VideoModal;
use crate::config::CalendarConfig;
use crate::dom::{ResizeListener, alert, viewport};
use crate::error::ClickRejection;
use crate::layout::layout;
use crate::model::{CalendarAction, CalendarState, ClickOutcome, OPENING_MS};
use crate::rng::Rng;
use crate::tasks::TaskHandle;
use crate::time_source::get_today;
use log::info;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<CalendarConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let calendar = use_reducer(CalendarState::default);
    let rng = use_mut_ref(Rng::from_entropy);
    let burst = use_state(|| None::<BurstRequest>);
    // Pending Opening -> Opened transitions; cancelled on unmount
    let openings = use_mut_ref(TaskHandle::default);
    {
        let openings = openings.clone();
        use_effect_with((), move |_| move || openings.borrow().cancel());
    }

    // Resolve today's date once
    {
        let calendar = calendar.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let reading = get_today(&config).await;
                info!("today is day={} month={}", reading.day(), reading.month());
                calendar.dispatch(CalendarAction::ResolveReading(reading));
            });
            || ()
        });
    }

    // Lay out the tree now and reshuffle on every resize
    {
        let calendar = calendar.clone();
        let rng = rng.clone();
        use_effect_with((), move |_| {
            let relayout = move || {
                let l = layout(viewport(), &mut rng.borrow_mut());
                calendar.dispatch(CalendarAction::Relayout(l));
            };
            relayout();
            let listener = ResizeListener::new(relayout);
            move || drop(listener)
        });
    }

    let on_box_click = {
        let calendar = calendar.clone();
        let config = config.clone();
        let burst = burst.clone();
        let openings = openings.clone();
        Callback::from(move |day: u8| match calendar.evaluate_click(day) {
            Err(rejection) => {
                info!("day {} rejected: {}", day, rejection);
                let message = match rejection {
                    ClickRejection::NotReady => &config.not_ready_message,
                    ClickRejection::NotUnlocked => &config.not_unlocked_message,
                };
                alert(message);
            }
            Ok(ClickOutcome::Replay) => calendar.dispatch(CalendarAction::OpenVideo(day)),
            Ok(ClickOutcome::InProgress) => {}
            Ok(ClickOutcome::Unlock { x, y }) => {
                info!("opening day {}", day);
                calendar.dispatch(CalendarAction::BeginOpening(day));
                let seq = (*burst).map_or(0, |b| b.seq.wrapping_add(1));
                burst.set(Some(BurstRequest { x, y, seq }));
                let calendar = calendar.clone();
                openings.borrow().after(OPENING_MS, move || {
                    calendar.dispatch(CalendarAction::FinishOpening(day))
                });
            }
        })
    };

    let on_close_video = {
        let calendar = calendar.clone();
        Callback::from(move |_| calendar.dispatch(CalendarAction::CloseVideo))
    };

    let video_src = calendar
        .video
        .map(|day| AttrValue::from(config.video_source(day)));

    html! {
        <div id="root">
            <Backdrop />
            <Santa />
            <ReindeerHerds image={AttrValue::from(config.reindeer_image.clone())} />
            <CalendarGrid
                boxes={calendar.boxes.clone()}
                star={calendar.star}
                generation={calendar.layout_generation}
                on_click={on_box_click}
            />
            <ConfettiCanvas request={*burst} />
            <VideoModal src={video_src} on_close={on_close_video} />
        </div>
    }
}
