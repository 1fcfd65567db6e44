//! Change-event stream.
//!
//! Server-Sent Events surface of the change bus: UI islands (navbar
//! badges, open cart/wishlist pages) subscribe here and re-fetch the
//! relevant endpoint when an event arrives. Events carry no payload.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::error::RecvError;

use crate::state::AppState;

/// Stream store-change events to a UI island.
///
/// A `sync` event is sent on connect; a client that was disconnected
/// (tab in the background, network blip) re-reads state instead of
/// assuming it missed nothing. A lagged receiver gets the same `sync`
/// nudge rather than a replay, since events are signals, not data.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.bus().subscribe();

    let stream = async_stream::stream! {
        yield Ok(Event::default().event("sync").data(""));
        loop {
            match rx.recv().await {
                Ok(ev) => yield Ok(Event::default().event(ev.name()).data("")),
                Err(RecvError::Lagged(_)) => {
                    yield Ok(Event::default().event("sync").data(""));
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
