use crate::routes::ROUTES;
use crate::state::DaemonState;
use axum::Router;

pub fn get_app(state: DaemonState) -> Router {
    let mut router = Router::new();
    for (path, method_router) in ROUTES.iter() {
        router = router.route(path, method_router.clone());
    }
    router.with_state(state)
}
