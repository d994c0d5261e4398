//! Typed endpoint layer over the request pipeline.
//!
//! One file per resource. Each operation builds a path, query, and
//! optional body, hands them to the client, and declares the expected
//! wire shape from [`models`]. No transport or classification logic
//! lives here.

mod channels;
mod clips;
mod games;
mod moderation;
mod search;
mod streams;
mod subscriptions;
mod users;
mod videos;

pub mod models;

pub use models::{
    AutoModMessage, AutoModResult, BannedUser, Category, Channel, ChannelSearchResult, Clip,
    Commercial, CreatedClip, DataList, DateRange, Follow, Game, Marker, Moderator, Pagination,
    Stream, StreamKey, StreamMarkers, Subscription, User, Video, VideoMarkers,
};

use serde_json::Value;

use crate::query::Query;
use crate::response::Envelope;
use crate::{KrakenClient, KrakenError};

fn some_if_nonempty(query: Query) -> Option<Query> {
    (!query.is_empty()).then_some(query)
}
