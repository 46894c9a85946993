use std::sync::Arc;

use ginger_core::application::GingerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GingerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GingerService) -> Self {
        Self { args, service }
    }
}
