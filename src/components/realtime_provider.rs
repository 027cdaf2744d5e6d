//! Owning scope of the shared realtime channel.
//!
//! The provider spawns exactly one connection attempt when it mounts and
//! unconditionally requests a close when it unmounts, whatever state the
//! connection reached. Consumers get the handle through context as
//! `Option<ChannelHandle>`; `None` is the explicit not-yet-connected
//! placeholder (always the case on the server).

use leptos::prelude::*;

use crate::net::channel::ChannelHandle;

/// Provides the shared channel handle to all descendants.
#[component]
pub fn RealtimeProvider(children: Children) -> impl IntoView {
    let handle: RwSignal<Option<ChannelHandle>> = RwSignal::new(None);
    provide_context(handle);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::channel::{realtime_url, spawn_channel};

        let channel = std::sync::Arc::new(spawn_channel(&realtime_url()));
        handle.set(Some(channel.handle()));
        on_cleanup(move || channel.close());
    }

    children()
}
