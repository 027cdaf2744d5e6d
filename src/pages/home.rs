//! Admin landing page with the realtime connection readout.

use leptos::prelude::*;

use crate::net::channel::ChannelHandle;

/// Home page — operational overview. Shows the shared channel's state so
/// a lost connection is visible without being an error.
#[component]
pub fn HomePage() -> impl IntoView {
    let channel = expect_context::<RwSignal<Option<ChannelHandle>>>();

    let realtime_label = move || {
        channel
            .get()
            .map_or("not connected", |handle| handle.status().get().label())
    };

    view! {
        <div class="page page--home">
            <h1>"Home"</h1>
            <p class="page__realtime">"Realtime: " {realtime_label}</p>
        </div>
    }
}
