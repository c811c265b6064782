//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod resources;

use axum::Router;
use axum::routing::{MethodRouter, get};

use hbnb_app::ports::Storage;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::place::Place;
use hbnb_domain::record::{Child, Creatable, Patchable, Record};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: Storage + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<S>))
        // Amenities
        .route("/amenities", top_level::<S, Amenity>())
        .route("/amenities/{id}", item::<S, Amenity>())
        // States → cities
        .route("/states", top_level::<S, State>())
        .route("/states/{id}", item::<S, State>())
        .route("/states/{id}/cities", children::<S, State, City>())
        // Cities → places
        .route("/cities", get(resources::list::<S, City>))
        .route("/cities/{id}", item::<S, City>())
        .route("/cities/{id}/places", children::<S, City, Place>())
        // Places → reviews
        .route("/places", get(resources::list::<S, Place>))
        .route("/places/{id}", item::<S, Place>())
        .route("/places/{id}/reviews", children::<S, Place, Review>())
        // Reviews
        .route("/reviews", get(resources::list::<S, Review>))
        .route("/reviews/{id}", item::<S, Review>())
        // Users
        .route("/users", top_level::<S, User>())
        .route("/users/{id}", item::<S, User>())
}

/// `GET` + `POST` on a collection with no parent.
fn top_level<S, R>() -> MethodRouter<AppState<S>>
where
    S: Storage + Send + Sync + 'static,
    R: Creatable<Scope = ()>,
{
    get(resources::list::<S, R>).post(resources::create::<S, R>)
}

/// `GET` + `PUT` + `DELETE` on a single record.
fn item<S, R>() -> MethodRouter<AppState<S>>
where
    S: Storage + Send + Sync + 'static,
    R: Patchable,
{
    get(resources::get::<S, R>)
        .put(resources::update::<S, R>)
        .delete(resources::delete::<S, R>)
}

/// `GET` + `POST` on a collection scoped under a parent record.
fn children<S, P, C>() -> MethodRouter<AppState<S>>
where
    S: Storage + Send + Sync + 'static,
    P: Record,
    C: Creatable<Scope = P::Id> + Child<P>,
{
    get(resources::list_children::<S, P, C>).post(resources::create_in::<S, P, C>)
}
