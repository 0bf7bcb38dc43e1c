use crate::handlers::demo::{create_demo_data, CREATE_DEMO_DATA_ENDPOINT};
use crate::handlers::health::{health, HEALTH_ENDPOINT};
use crate::handlers::process::{process, PROCESS_ENDPOINT};
use crate::handlers::start::{start, START_ENDPOINT};
use crate::handlers::stop::{stop, STOP_ENDPOINT};
use crate::handlers::stop_id::{stop_id, STOP_ID_ENDPOINT};
use crate::state::DaemonState;
use axum::routing::{get, post, MethodRouter};
use std::sync::LazyLock;

pub(super) static ROUTES: LazyLock<Vec<(&'static str, MethodRouter<DaemonState>)>> =
    LazyLock::new(|| {
        vec![
            (START_ENDPOINT, post(start)),
            (STOP_ENDPOINT, post(stop)),
            (STOP_ID_ENDPOINT, post(stop_id)),
            (CREATE_DEMO_DATA_ENDPOINT, post(create_demo_data)),
            (PROCESS_ENDPOINT, get(process)),
            (HEALTH_ENDPOINT, get(health)),
        ]
    });
