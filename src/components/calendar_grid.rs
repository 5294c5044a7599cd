use super::day_box::DayBoxView;
use crate::model::DayBox;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalendarGridProps {
    pub boxes: Vec<DayBox>,
    pub star: Option<(f64, f64)>,
    pub generation: u32,
    pub on_click: Callback<u8>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    // Anchor is the star's bottom centre.
    let star_style = match props.star {
        Some((x, y)) => format!("left:{}px; top:{}px; transform:translate(-50%, -100%);", x, y),
        None => "display:none;".to_string(),
    };
    html! {
        <>
            <div id="top-star" style={star_style}></div>
            <div id="calendar-container">
                { for props.boxes.iter().map(|b| html! {
                    <DayBoxView
                        key={format!("{}-{}", props.generation, b.day)}
                        day_box={*b}
                        on_click={props.on_click.clone()}
                    />
                }) }
            </div>
        </>
    }
}
