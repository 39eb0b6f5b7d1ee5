//! Home page handler

use crate::discovery::{ResourceItem, ResourceKind};
use crate::handlers::render::render_featured;
use crate::services::ServiceFactory;
use crate::state::SessionCache;
use crate::utils::errors::Result;
use crate::utils::logging::log_api_error;

pub const FEATURED_PER_KIND: usize = 3;

pub async fn handle_home(services: &ServiceFactory, session: &SessionCache) -> Result<String> {
    let resource_service = &services.resource_service;
    let query = resource_service.query(1, &[]);
    let bundle = resource_service.fetch_all(&query, session.token()).await.map_err(|e| {
        log_api_error("resources", &e.to_string(), Some("home"));
        e
    })?;

    let events: Vec<ResourceItem> = bundle.events.results.iter().map(ResourceItem::from).collect();
    let competitions: Vec<ResourceItem> = bundle.competitions.results.iter().map(ResourceItem::from).collect();
    let programs: Vec<ResourceItem> = bundle.programs.results.iter().map(ResourceItem::from).collect();

    let greeting = match session.user() {
        Some(user) if !user.first_name.is_empty() => format!("Welcome back, {}!", user.first_name),
        _ => "Accelerate your future: events, competitions and programs in one place.".to_string(),
    };

    Ok([
        greeting,
        render_featured(ResourceKind::Event, &events, FEATURED_PER_KIND),
        render_featured(ResourceKind::Competition, &competitions, FEATURED_PER_KIND),
        render_featured(ResourceKind::Program, &programs, FEATURED_PER_KIND),
    ]
    .join("\n\n"))
}
