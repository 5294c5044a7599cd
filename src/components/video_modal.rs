use log::{info, warn};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoModalProps {
    /// Source of the video to show; `None` hides the modal.
    pub src: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let video_ref = use_node_ref();
    {
        let video_ref = video_ref.clone();
        use_effect_with(props.src.clone(), move |src| {
            if let (Some(src), Some(video)) = (src, video_ref.cast::<HtmlVideoElement>()) {
                info!("playing {}", src);
                video.set_src(src);
                let src = src.clone();
                match video.play() {
                    Ok(promise) => spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            warn!("playback of {} refused: {:?}", src, e);
                        }
                    }),
                    Err(e) => warn!("could not start playback of {}: {:?}", src, e),
                }
            }
            || ()
        });
    }
    let close = {
        let video_ref = video_ref.clone();
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let _ = video.pause();
                video.set_current_time(0.0);
            }
            cb.emit(());
        })
    };
    let class = classes!("modal", props.src.is_some().then_some("show"));
    html! {
        <div id="video-modal" {class}>
            <div class="modal-content">
                <button id="close-btn" onclick={close}>{"✕"}</button>
                <video id="video-player" ref={video_ref} controls={true} playsinline={true}></video>
            </div>
        </div>
    }
}
