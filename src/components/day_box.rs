use crate::model::{BoxState, DayBox};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DayBoxViewProps {
    pub day_box: DayBox,
    pub on_click: Callback<u8>,
}

/// A wrapped present with ribbons and the day number.
#[function_component(DayBoxView)]
pub fn day_box_view(props: &DayBoxViewProps) -> Html {
    let b = props.day_box;
    let p = b.placement;
    let onclick = {
        let cb = props.on_click.clone();
        let day = b.day;
        Callback::from(move |_: MouseEvent| cb.emit(day))
    };
    let class = classes!(
        "box",
        (b.state == BoxState::Opening).then_some("opening"),
        (b.state == BoxState::Opened).then_some("opened"),
    );
    let style = format!(
        "width:{}px; height:{}px; left:{}px; top:{}px;",
        p.size, p.size, p.left, p.top
    );
    html! {
        <div id={format!("day-box-{}", b.day)} data-day={b.day.to_string()} {class} {style} {onclick}>
            <div class="box-inner">
                <div class="box-ribbon-vertical"></div>
                <div class="box-ribbon-horizontal"></div>
                <div class="box-ribbon-knot"></div>
                <div class="box-number">{ b.day.to_string() }</div>
            </div>
        </div>
    }
}
